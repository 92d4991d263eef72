//! Schemas - declarative records describing positioned, styled elements.
//!
//! A schema is owned by the caller (a document or template model) for the
//! duration of one render call; renderers read it immutably and never retain
//! it.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::geometry::Edges;

/// Default font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 13.0;

/// Default line height in em.
pub const DEFAULT_LINE_HEIGHT: f32 = 1.0;

/// Default font color.
pub const DEFAULT_FONT_COLOR: &str = "#000000";

/// Position in millimetres from the top-left corner of the page.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal offset.
    pub x: f32,
    /// Vertical offset.
    pub y: f32,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Align to the left edge.
    #[default]
    Left,
    /// Center between the edges.
    Center,
    /// Align to the right edge.
    Right,
    /// Stretch lines to both edges.
    Justify,
}

/// Vertical text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    /// Align to the top edge.
    #[default]
    Top,
    /// Center between top and bottom.
    Middle,
    /// Align to the bottom edge.
    Bottom,
}

/// Text styling attributes shared by text-bearing schemas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font name; `None` selects the fallback font of the active font map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
    /// Font size in points.
    pub font_size: f32,
    /// Horizontal alignment.
    #[serde(default)]
    pub alignment: Alignment,
    /// Vertical alignment.
    #[serde(default)]
    pub vertical_alignment: VerticalAlignment,
    /// Additional spacing between characters, in points.
    #[serde(default)]
    pub character_spacing: f32,
    /// Line height as an em multiplier.
    pub line_height: f32,
    /// Text color as hex; empty selects the default color.
    #[serde(default)]
    pub font_color: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_name: None,
            font_size: DEFAULT_FONT_SIZE,
            alignment: Alignment::default(),
            vertical_alignment: VerticalAlignment::default(),
            character_spacing: 0.0,
            line_height: DEFAULT_LINE_HEIGHT,
            font_color: DEFAULT_FONT_COLOR.to_string(),
        }
    }
}

/// A block of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSchema {
    /// Text content.
    pub content: String,
    /// Text styling.
    #[serde(flatten)]
    pub style: TextStyle,
    /// Background fill as hex; empty means transparent.
    #[serde(default)]
    pub background_color: String,
}

/// A filled rectangle with an optional uniform border.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RectSchema {
    /// Fill color as hex; empty means no fill.
    #[serde(default)]
    pub color: String,
    /// Border stroke width in millimetres; zero means no stroke.
    #[serde(default)]
    pub border_width: f32,
    /// Border stroke color as hex; empty means no stroke.
    #[serde(default)]
    pub border_color: String,
}

/// A line segment, expressed as a filled rectangle of the line's thickness.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineSchema {
    /// Line color as hex; empty means invisible.
    #[serde(default)]
    pub color: String,
}

/// A table cell: text inset by per-edge borders and padding on a filled
/// background.
///
/// Rendering is defined entirely in terms of the rectangle, line, and text
/// leaf renderers plus derived geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellSchema {
    /// Text content.
    pub content: String,
    /// Text styling for the inset content.
    #[serde(flatten)]
    pub style: TextStyle,
    /// Per-edge border widths in millimetres; an absent edge is zero.
    #[serde(default)]
    pub border_width: Edges,
    /// Per-edge padding in millimetres; an absent edge is zero.
    #[serde(default)]
    pub padding: Edges,
    /// Border color as hex; empty means invisible borders.
    #[serde(default)]
    pub border_color: String,
    /// Background fill as hex; empty means transparent.
    #[serde(default)]
    pub background_color: String,
}

impl Default for CellSchema {
    /// Default cell styling: hairline borders, generous padding, and
    /// vertically centered text.
    fn default() -> Self {
        Self {
            content: String::new(),
            style: TextStyle {
                vertical_alignment: VerticalAlignment::Middle,
                ..TextStyle::default()
            },
            border_width: Edges::uniform(0.1),
            padding: Edges::uniform(5.0),
            border_color: "#888888".to_string(),
            background_color: String::new(),
        }
    }
}

/// The type of content a schema describes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum SchemaKind {
    /// A text block.
    Text(TextSchema),
    /// A filled rectangle.
    #[serde(rename = "rectangle")]
    Rect(RectSchema),
    /// A line segment.
    Line(LineSchema),
    /// A composite table cell.
    Cell(CellSchema),
}

impl SchemaKind {
    /// The schema-type discriminator used for plugin lookup and cache keys.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Rect(_) => "rectangle",
            Self::Line(_) => "line",
            Self::Cell(_) => "cell",
        }
    }
}

/// A positioned schema record: outer geometry plus typed content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Top-left corner in millimetres.
    pub position: Position,
    /// Outer width in millimetres.
    pub width: f32,
    /// Outer height in millimetres.
    pub height: f32,
    /// Typed content.
    #[serde(flatten)]
    pub kind: SchemaKind,
}

impl Schema {
    /// Create a schema at the origin with zero size.
    #[must_use]
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            position: Position::default(),
            width: 0.0,
            height: 0.0,
            kind,
        }
    }

    /// Set the position.
    #[must_use]
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = Position::new(x, y);
        self
    }

    /// Set the outer size.
    #[must_use]
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// The schema-type discriminator.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Serialize the schema to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize a schema from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or does not match the schema
    /// model.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
