//! Redaction annotation and alter-content request types.

use crate::geometry::PageRelativePosition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an annotation, generated with UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationId(String);

impl AnnotationId {
    /// Generate a fresh random annotation id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from its components.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
}

/// An opaque redact annotation covering one matched text span.
///
/// Created fresh per matched range, never mutated afterwards; owned by the
/// [`AlterContentRequest`] it is submitted with and discarded once the
/// request is issued.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactionAnnotation {
    /// Unique annotation id.
    pub id: AnnotationId,

    /// Zero-based page index within the owning document.
    pub page: u32,

    /// Covered regions. Always a single rectangle for a synthesized
    /// redaction; kept as a list per the backend annotation schema.
    pub coords: Vec<PageRelativePosition>,

    /// Border color.
    pub color: Color,

    /// Fill color.
    pub interior_color: Color,

    /// Opacity in `[0, 1]`; redactions are fully opaque.
    pub opacity: f32,

    /// Identity recorded as the annotation's author.
    pub creator: String,

    /// Wall-clock creation time.
    pub creation_date: DateTime<Utc>,
}

/// Operation name understood by the backend for burning annotations into
/// re-rendered output.
pub const RENDER_ANNOTATIONS: &str = "renderAnnotations";

/// Content-alteration request submitted once per source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlterContentRequest {
    /// Backend operation to apply.
    pub operation_name: String,

    /// Annotations to burn in.
    pub annotations: Vec<RedactionAnnotation>,
}

impl AlterContentRequest {
    /// Build a render-annotations request.
    pub fn render_annotations(annotations: Vec<RedactionAnnotation>) -> Self {
        Self {
            operation_name: RENDER_ANNOTATIONS.to_string(),
            annotations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_ids_are_distinct() {
        assert_ne!(AnnotationId::generate(), AnnotationId::generate());
    }

    #[test]
    fn test_render_annotations_request() {
        let request = AlterContentRequest::render_annotations(Vec::new());
        assert_eq!(request.operation_name, "renderAnnotations");
        assert!(request.annotations.is_empty());
    }

    #[test]
    fn test_color_black() {
        assert_eq!(Color::BLACK, Color::new(0, 0, 0));
    }
}
