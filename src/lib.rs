//! # renredact
//!
//! Pattern-based document redaction driven by a remote rendition backend.
//!
//! Given a source document (possibly a nested archive of sub-documents,
//! pages and videos), renredact uploads it to the backend, walks the
//! reported layout tree to find every searchable page, runs a regex search
//! over each page's extracted text, converts the matched offset ranges into
//! page-relative rectangles, and asks the backend to re-render each matched
//! document with opaque redact annotations burned in. The redacted output
//! is written locally and all remote state is evicted afterwards.
//!
//! ## Quick Start
//!
//! ```no_run
//! use renredact::{RedactionOptions, RestBackend};
//!
//! fn main() -> renredact::Result<()> {
//!     let backend = RestBackend::new("http://localhost:8761");
//!     let options = RedactionOptions::new(
//!         "[0-9]{3}-[0-9]{3}-[0-9]{3}",
//!         "samples/multidocs.zip",
//!     );
//!     for file in renredact::redact(backend, options)? {
//!         println!("{} ({} annotations)", file.path.display(), file.annotation_count);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Text extraction, search, and rendering all live behind the backend; this
//! crate only drives the flow and synthesizes the annotations.

pub mod annotate;
pub mod client;
pub mod error;
pub mod geometry;
pub mod model;
pub mod orchestrator;
pub mod walker;

// Re-export commonly used types
pub use annotate::AnnotationBuilder;
pub use client::{AccessorSelector, RenditionBackend, RestBackend};
pub use error::{Error, Result};
pub use geometry::PageRelativePosition;
pub use model::{
    AlterContentRequest, AnnotationId, CharExtent, Color, DocumentId, DocumentLayoutNode,
    MediaKind, PageLayout, PageSearchResult, PositionText, RedactionAnnotation, SearchHit,
    SearchOptions, TextRange,
};
pub use orchestrator::{EvictionScope, RedactedFile, RedactionOptions, RedactionOrchestrator};
pub use walker::{LayoutResolver, LayoutWalker};

/// Run the full redaction flow with the given backend and options.
///
/// Convenience wrapper over [`RedactionOrchestrator::redact`].
pub fn redact<B: RenditionBackend>(
    backend: B,
    options: RedactionOptions,
) -> Result<Vec<RedactedFile>> {
    RedactionOrchestrator::new(backend, options).redact()
}
