//! Synthesis of redaction annotations from search hits.

use crate::geometry;
use crate::model::{AnnotationId, Color, RedactionAnnotation, SearchHit};
use chrono::Utc;

/// Builds redact annotations for a page's search hits.
///
/// Each matched range becomes one independent annotation with a singleton
/// geometry list; ranges are processed in the order the backend supplied
/// them and are never merged, sorted, or deduplicated, so the output order
/// matches the search result order. Adjacent or overlapping matches produce
/// overlapping opaque rectangles, which render identically to a merged one.
#[derive(Debug, Clone)]
pub struct AnnotationBuilder {
    creator: String,
}

impl AnnotationBuilder {
    /// Create a builder recording `creator` as the annotation author.
    pub fn new(creator: impl Into<String>) -> Self {
        Self {
            creator: creator.into(),
        }
    }

    /// Convert one page's hits into redact annotations.
    ///
    /// A range whose geometry cannot be mapped (offsets outside the layout)
    /// is skipped with a warning; sibling ranges of the same hit are still
    /// processed.
    pub fn build_for_page(&self, page_index: u32, hits: &[SearchHit]) -> Vec<RedactionAnnotation> {
        let mut annotations = Vec::new();
        for hit in hits {
            for range in &hit.ranges {
                let rect = match geometry::map_range(&hit.position_text, range) {
                    Ok(rect) => rect,
                    Err(e) => {
                        log::warn!("Skipping unmappable range on page {}: {}", page_index, e);
                        continue;
                    }
                };
                annotations.push(RedactionAnnotation {
                    id: AnnotationId::generate(),
                    page: page_index,
                    coords: vec![rect],
                    color: Color::BLACK,
                    interior_color: Color::BLACK,
                    opacity: 1.0,
                    creator: self.creator.clone(),
                    creation_date: Utc::now(),
                });
            }
        }
        annotations
    }
}
