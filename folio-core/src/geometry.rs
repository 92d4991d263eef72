//! Box-model geometry.
//!
//! [`BoxFrame::compute`] derives the four border-line rectangles and the
//! inset content rectangle from an element's outer size plus per-edge border
//! widths and padding. The derivation is pure and recomputed on every render
//! call; nothing here outlives a single render.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
///
/// Units depend on context: schema geometry is in millimetres, surface node
/// layouts are in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge offset.
    pub x: f32,
    /// Top edge offset.
    pub y: f32,
    /// Width (may be zero or negative for degenerate content boxes).
    pub width: f32,
    /// Height (may be zero or negative for degenerate content boxes).
    pub height: f32,
}

impl Rect {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether this rectangle has no visible area.
    ///
    /// Degenerate rectangles are valid values: renderers paint nothing for
    /// them instead of failing.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Return this rectangle shifted by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    /// Whether two rectangles overlap with positive area.
    ///
    /// Degenerate rectangles never intersect anything.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Per-edge lengths for border widths and padding.
///
/// An absent edge deserializes as zero, so downstream arithmetic never deals
/// with missing values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Edges {
    /// Top edge length.
    #[serde(default)]
    pub top: f32,
    /// Right edge length.
    #[serde(default)]
    pub right: f32,
    /// Bottom edge length.
    #[serde(default)]
    pub bottom: f32,
    /// Left edge length.
    #[serde(default)]
    pub left: f32,
}

impl Edges {
    /// All four edges zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        }
    }

    /// The same length on all four edges.
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// One edge of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// Top edge.
    Top,
    /// Right edge.
    Right,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
}

impl Edge {
    /// All edges in paint order: top, right, bottom, left.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}

/// Derived box-model geometry: four border-line rectangles plus the inset
/// content rectangle, all relative to the element's own origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxFrame {
    /// Top border line: spans the full width, thickness `border.top`.
    pub top: Rect,
    /// Right border line: spans the full height, anchored at the right edge.
    pub right: Rect,
    /// Bottom border line: spans the full width, anchored at the bottom edge.
    pub bottom: Rect,
    /// Left border line: spans the full height, thickness `border.left`.
    pub left: Rect,
    /// Content rectangle inset by border and padding on each edge.
    ///
    /// May be degenerate (zero or negative size) when insets meet or exceed
    /// the outer size; that is a valid value, not an error.
    pub content: Rect,
}

impl BoxFrame {
    /// Derive the border lines and content rectangle for an element.
    ///
    /// Pure and idempotent: the same inputs always produce bit-identical
    /// output. Inputs are taken as given; non-positive content dimensions are
    /// produced as-is so renderers can emit an empty region for them.
    #[must_use]
    pub fn compute(width: f32, height: f32, border: &Edges, padding: &Edges) -> Self {
        let inner_width = width - border.left - border.right - padding.left - padding.right;
        let inner_height = height - border.top - border.bottom - padding.top - padding.bottom;

        Self {
            top: Rect::new(0.0, 0.0, width, border.top),
            right: Rect::new(width - border.right, 0.0, border.right, height),
            bottom: Rect::new(0.0, height - border.bottom, width, border.bottom),
            left: Rect::new(0.0, 0.0, border.left, height),
            content: Rect::new(
                border.left + padding.left,
                border.top + padding.top,
                inner_width,
                inner_height,
            ),
        }
    }

    /// Border-line rectangles in paint order: top, right, bottom, left.
    #[must_use]
    pub fn border_rects(&self) -> [(Edge, &Rect); 4] {
        [
            (Edge::Top, &self.top),
            (Edge::Right, &self.right),
            (Edge::Bottom, &self.bottom),
            (Edge::Left, &self.left),
        ]
    }
}
