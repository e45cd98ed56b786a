//! Rendition backend contract and client implementations.
//!
//! The backend owns everything the redaction flow does not: document
//! storage, text extraction, search, and re-rendering with annotations
//! burned in. The library only consumes this contract; [`RestBackend`] is
//! the HTTP implementation used against a live backend, and tests provide
//! in-memory substitutes.

mod rest;

pub use rest::RestBackend;

use crate::error::Result;
use crate::model::{AlterContentRequest, DocumentId, PageSearchResult, SearchOptions};
use crate::walker::LayoutResolver;

/// Selects which rendition of a document's content to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorSelector {
    /// The initial (first produced) content stream.
    Initial,
}

impl AccessorSelector {
    /// Wire value understood by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessorSelector::Initial => "INITIAL",
        }
    }
}

/// Operations offered by the rendition backend.
///
/// Layout resolution comes in through the [`LayoutResolver`] supertrait so
/// the layout walker can depend on that single operation alone. All calls
/// block until the backend responds; the library adds no retries on top.
pub trait RenditionBackend: LayoutResolver {
    /// Upload a source document under a caller-chosen id.
    fn upload_document(
        &self,
        id: &DocumentId,
        mime_type: &str,
        filename: &str,
        content: &[u8],
    ) -> Result<()>;

    /// Search one page of a document.
    fn search_page(
        &self,
        id: &DocumentId,
        options: &SearchOptions,
        page_index: u32,
    ) -> Result<PageSearchResult>;

    /// Re-render the source documents with the request's annotations burned
    /// in; returns the id of the altered document.
    fn alter_content(
        &self,
        source_ids: &[DocumentId],
        request: &AlterContentRequest,
    ) -> Result<DocumentId>;

    /// Fetch a document's content bytes.
    fn fetch_document(&self, id: &DocumentId, selector: AccessorSelector) -> Result<Vec<u8>>;

    /// Drop a document from the backend's temporary state.
    fn evict(&self, id: &DocumentId) -> Result<()>;
}

impl<T: RenditionBackend + ?Sized> RenditionBackend for &T {
    fn upload_document(
        &self,
        id: &DocumentId,
        mime_type: &str,
        filename: &str,
        content: &[u8],
    ) -> Result<()> {
        (**self).upload_document(id, mime_type, filename, content)
    }

    fn search_page(
        &self,
        id: &DocumentId,
        options: &SearchOptions,
        page_index: u32,
    ) -> Result<PageSearchResult> {
        (**self).search_page(id, options, page_index)
    }

    fn alter_content(
        &self,
        source_ids: &[DocumentId],
        request: &AlterContentRequest,
    ) -> Result<DocumentId> {
        (**self).alter_content(source_ids, request)
    }

    fn fetch_document(&self, id: &DocumentId, selector: AccessorSelector) -> Result<Vec<u8>> {
        (**self).fetch_document(id, selector)
    }

    fn evict(&self, id: &DocumentId) -> Result<()> {
        (**self).evict(id)
    }
}
