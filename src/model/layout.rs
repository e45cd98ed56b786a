//! Document layout tree types.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier for a document known to the rendition backend.
///
/// Generated client-side (UUID v4) when uploading a source document;
/// assigned by the backend for altered documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a document id from an existing identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random document id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One node of a document layout tree as reported by the rendition backend.
///
/// A layout is heterogeneous: archives group children, references point at
/// other documents' layouts, media entries carry non-text content, and pages
/// are the searchable leaves. Traversal behavior is fully determined by the
/// variant; see [`crate::walker::LayoutWalker`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DocumentLayoutNode {
    /// A grouping node (archive, folder). Children keep backend order.
    Container { children: Vec<DocumentLayoutNode> },

    /// A pointer to another document's layout, resolved on demand.
    Reference { target: DocumentId },

    /// Non-text content (e.g. video). Never descended into.
    Media { kind: MediaKind },

    /// A paginated, text-searchable leaf document.
    Page(PageLayout),
}

/// Kind of non-text media in a layout tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
    Other,
}

/// Layout of a paginated leaf document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    /// Backend id of the document owning these pages.
    pub document_id: DocumentId,

    /// Number of searchable pages.
    pub page_count: u32,

    /// Document title, used to name redacted output.
    pub title: String,
}

impl PageLayout {
    /// Create a page layout.
    pub fn new(document_id: DocumentId, page_count: u32, title: impl Into<String>) -> Self {
        Self {
            document_id,
            page_count,
            title: title.into(),
        }
    }
}
