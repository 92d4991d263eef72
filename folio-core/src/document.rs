//! The paged document target.
//!
//! A [`Page`] is an append-only display list: the document byte format is
//! produced elsewhere, this crate stops at the ordered operation stream.
//! Appends take `&self` because a composite render issues several sub-renders
//! against the same page without awaiting in between; order of appends is
//! paint order (later operations composite on top).

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::schema::{Alignment, VerticalAlignment};

/// One paint operation on a page, in point units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PageOp {
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Left edge in points.
        x: f32,
        /// Top edge in points.
        y: f32,
        /// Width in points.
        width: f32,
        /// Height in points.
        height: f32,
        /// Fill color as hex.
        color: String,
    },

    /// Stroke the outline of an axis-aligned rectangle.
    StrokeRect {
        /// Left edge in points.
        x: f32,
        /// Top edge in points.
        y: f32,
        /// Width in points.
        width: f32,
        /// Height in points.
        height: f32,
        /// Stroke width in points.
        line_width: f32,
        /// Stroke color as hex.
        color: String,
    },

    /// Lay out and paint a text block.
    Text {
        /// Left edge of the text box in points.
        x: f32,
        /// Top edge of the text box in points.
        y: f32,
        /// Text box width in points.
        width: f32,
        /// Text box height in points.
        height: f32,
        /// Text content.
        content: String,
        /// Resolved font name.
        font_name: String,
        /// Font size in points.
        font_size: f32,
        /// Text color as hex.
        color: String,
        /// Horizontal alignment.
        alignment: Alignment,
        /// Vertical alignment.
        vertical_alignment: VerticalAlignment,
        /// Character spacing in points.
        character_spacing: f32,
        /// Line height in em.
        line_height: f32,
    },
}

/// One page of the static document output.
///
/// The page is mutated only by the render call that owns it (single-writer
/// discipline); interior mutability exists so concurrently issued sub-renders
/// of that one call can all append. There is no rollback: operations appended
/// before a failure remain applied.
#[derive(Debug, Default)]
pub struct Page {
    width: f32,
    height: f32,
    ops: Mutex<Vec<PageOp>>,
}

impl Page {
    /// Create a page with the given size in millimetres.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: Mutex::new(Vec::new()),
        }
    }

    /// Page width in millimetres.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Page height in millimetres.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Append one paint operation.
    pub fn push(&self, op: PageOp) {
        if let Ok(mut ops) = self.ops.lock() {
            ops.push(op);
        }
    }

    /// Number of operations appended so far.
    #[must_use]
    pub fn op_count(&self) -> usize {
        self.ops.lock().map(|ops| ops.len()).unwrap_or(0)
    }

    /// Snapshot of the operations in paint order.
    #[must_use]
    pub fn ops(&self) -> Vec<PageOp> {
        self.ops.lock().map(|ops| ops.clone()).unwrap_or_default()
    }
}
