//! Primitive adapter.
//!
//! Re-expresses a composite schema's derived geometry as the input contract
//! of the leaf renderers. Two translation tables exist because the targets
//! express length and position differently - the document table produces
//! absolute millimetre schemas, the surface table produces pixel layouts
//! relative to the composite's container - but both derive from the same
//! [`BoxFrame`], which is what keeps the targets visually identical.
//!
//! Every function here is a pure mapping; no state is held anywhere.

use folio_core::units::mm_to_px;
use folio_core::{
    BoxFrame, CellSchema, LineSchema, Position, Rect, RectSchema, Schema, SchemaKind, TextSchema,
};

/// Derive the box frame for a composite schema.
#[must_use]
pub fn cell_frame(outer: &Schema, cell: &CellSchema) -> BoxFrame {
    BoxFrame::compute(outer.width, outer.height, &cell.border_width, &cell.padding)
}

/// The full-bounds background rectangle of a composite, as a rectangle-leaf
/// schema. The border is left to the dedicated line sub-renders.
#[must_use]
pub fn background_schema(outer: &Schema, cell: &CellSchema) -> Schema {
    Schema {
        position: outer.position,
        width: outer.width,
        height: outer.height,
        kind: SchemaKind::Rect(RectSchema {
            color: cell.background_color.clone(),
            border_width: 0.0,
            border_color: String::new(),
        }),
    }
}

/// One border line of a composite, as a line-leaf schema positioned on the
/// page.
#[must_use]
pub fn border_schema(outer: &Schema, cell: &CellSchema, edge_rect: &Rect) -> Schema {
    Schema {
        position: Position::new(
            outer.position.x + edge_rect.x,
            outer.position.y + edge_rect.y,
        ),
        width: edge_rect.width,
        height: edge_rect.height,
        kind: SchemaKind::Line(LineSchema {
            color: cell.border_color.clone(),
        }),
    }
}

/// The inset text region of a composite, as a text-leaf schema positioned on
/// the page.
///
/// The composite's own background is suppressed here: the base rectangle
/// already painted it, and the text leaf must not paint it a second time.
#[must_use]
pub fn content_schema(outer: &Schema, cell: &CellSchema, content_rect: &Rect) -> Schema {
    Schema {
        position: Position::new(
            outer.position.x + content_rect.x,
            outer.position.y + content_rect.y,
        ),
        width: content_rect.width,
        height: content_rect.height,
        kind: SchemaKind::Text(TextSchema {
            content: cell.content.clone(),
            style: cell.style.clone(),
            background_color: String::new(),
        }),
    }
}

/// Surface translation: a millimetre rectangle relative to the composite's
/// origin, as a pixel layout relative to the composite's container node.
#[must_use]
pub fn node_layout(rect_mm: &Rect) -> Rect {
    Rect::new(
        mm_to_px(rect_mm.x),
        mm_to_px(rect_mm.y),
        mm_to_px(rect_mm.width),
        mm_to_px(rect_mm.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::units::PX_PER_MM;
    use folio_core::Edges;

    fn sample() -> (Schema, CellSchema) {
        let cell = CellSchema {
            content: "Total".to_string(),
            border_width: Edges::uniform(1.0),
            padding: Edges::uniform(2.0),
            border_color: "#888888".to_string(),
            background_color: "#ffffee".to_string(),
            ..CellSchema::default()
        };
        let outer = Schema::new(SchemaKind::Cell(cell.clone()))
            .with_position(10.0, 20.0)
            .with_size(50.0, 15.0);
        (outer, cell)
    }

    #[test]
    fn test_background_covers_the_full_bounds() {
        let (outer, cell) = sample();
        let background = background_schema(&outer, &cell);

        assert_eq!(background.position, Position::new(10.0, 20.0));
        assert_eq!(background.width, 50.0);
        assert_eq!(background.height, 15.0);

        let SchemaKind::Rect(rect) = &background.kind else {
            panic!("Expected rectangle schema");
        };
        assert_eq!(rect.color, "#ffffee");
        assert_eq!(rect.border_width, 0.0);
    }

    #[test]
    fn test_border_schemas_are_positioned_on_the_page() {
        let (outer, cell) = sample();
        let frame = cell_frame(&outer, &cell);

        let top = border_schema(&outer, &cell, &frame.top);
        assert_eq!(top.position, Position::new(10.0, 20.0));
        assert_eq!(top.width, 50.0);
        assert_eq!(top.height, 1.0);

        let right = border_schema(&outer, &cell, &frame.right);
        assert_eq!(right.position, Position::new(59.0, 20.0));
        assert_eq!(right.width, 1.0);
        assert_eq!(right.height, 15.0);

        let bottom = border_schema(&outer, &cell, &frame.bottom);
        assert_eq!(bottom.position, Position::new(10.0, 34.0));

        let left = border_schema(&outer, &cell, &frame.left);
        assert_eq!(left.position, Position::new(10.0, 20.0));

        let SchemaKind::Line(line) = &top.kind else {
            panic!("Expected line schema");
        };
        assert_eq!(line.color, "#888888");
    }

    #[test]
    fn test_content_schema_is_inset_and_suppresses_background() {
        let (outer, cell) = sample();
        let frame = cell_frame(&outer, &cell);
        let content = content_schema(&outer, &cell, &frame.content);

        assert_eq!(content.position, Position::new(13.0, 23.0));
        assert_eq!(content.width, 44.0);
        assert_eq!(content.height, 8.0);

        let SchemaKind::Text(text) = &content.kind else {
            panic!("Expected text schema");
        };
        assert_eq!(text.content, "Total");
        assert!(
            text.background_color.is_empty(),
            "composite background must not be re-painted by the text leaf"
        );
    }

    #[test]
    fn test_node_layout_converts_to_pixels() {
        let layout = node_layout(&Rect::new(3.0, 3.0, 44.0, 8.0));

        assert!((layout.x - 3.0 * PX_PER_MM).abs() < 1e-4);
        assert!((layout.y - 3.0 * PX_PER_MM).abs() < 1e-4);
        assert!((layout.width - 44.0 * PX_PER_MM).abs() < 1e-4);
        assert!((layout.height - 8.0 * PX_PER_MM).abs() < 1e-4);
    }
}
