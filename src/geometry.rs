//! Mapping of text offset ranges onto page-relative geometry.
//!
//! The backend's text-layout engine defines where each character sits on the
//! page; redaction shapes must agree with that definition exactly, or the
//! burned-in rectangles drift off the text they are meant to cover. The
//! mapping here is therefore a pure function of the layout metadata and the
//! offset range, recomputed per call and never clamped.

use crate::error::{Error, Result};
use crate::model::{PositionText, TextRange};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in page-normalized coordinates.
///
/// Origin and scale are independent of pixel resolution: `(0, 0)` is the
/// top-left page corner and `(1, 1)` the bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageRelativePosition {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PageRelativePosition {
    /// Create a rectangle from its top-left corner and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Compute the page-relative rectangle covering the characters in `range`.
///
/// The result is the bounding box of the character extents in
/// `[range.start, range.end)`, matching the backend's own coordinate
/// computation for the span. Fails with [`Error::InvalidRange`] when the
/// range is empty or extends past the layout; out-of-bounds offsets are
/// rejected, never clamped.
pub fn map_range(position_text: &PositionText, range: &TextRange) -> Result<PageRelativePosition> {
    let len = position_text.len();
    if range.start >= range.end || range.end > len {
        return Err(Error::InvalidRange {
            start: range.start,
            end: range.end,
            len,
        });
    }

    let chars = &position_text.chars[range.start as usize..range.end as usize];

    let mut left = f64::INFINITY;
    let mut top = f64::INFINITY;
    let mut right = f64::NEG_INFINITY;
    let mut bottom = f64::NEG_INFINITY;
    for c in chars {
        left = left.min(c.x);
        top = top.min(c.y);
        right = right.max(c.x + c.width);
        bottom = bottom.max(c.y + c.height);
    }

    Ok(PageRelativePosition::new(
        left,
        top,
        right - left,
        bottom - top,
    ))
}
