//! Data model shared with the rendition backend.
//!
//! These types mirror the backend's wire representation: the layout tree it
//! reports for an uploaded document, the search results it returns per page,
//! and the annotation payloads it accepts for content alteration.

mod annotation;
mod layout;
mod search;

pub use annotation::{
    AlterContentRequest, AnnotationId, Color, RedactionAnnotation, RENDER_ANNOTATIONS,
};
pub use layout::{DocumentId, DocumentLayoutNode, MediaKind, PageLayout};
pub use search::{CharExtent, PageSearchResult, PositionText, SearchHit, SearchOptions, TextRange};
