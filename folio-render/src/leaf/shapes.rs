//! Rectangle and line leaf renderers.

use async_trait::async_trait;

use folio_core::units::mm_to_pt;
use folio_core::{BoxFrame, Edges, PageOp, Schema, SchemaKind, SurfaceNodeKind};

use crate::adapter;
use crate::error::{RenderError, RenderResult};
use crate::panel::{PanelContext, PanelField, PanelWidget, PropPanel};
use crate::plugin::{DocumentRenderProps, SchemaPlugin, SurfaceRenderProps};

/// Leaf renderer for filled rectangles with an optional uniform stroke.
pub struct RectPlugin;

#[async_trait]
impl SchemaPlugin for RectPlugin {
    fn type_name(&self) -> &'static str {
        "rectangle"
    }

    async fn render_document(&self, props: DocumentRenderProps<'_>) -> RenderResult<()> {
        let schema = props.schema;
        let SchemaKind::Rect(rect) = &schema.kind else {
            return Err(RenderError::mismatch("rectangle", schema.type_name()));
        };

        if schema.width <= 0.0 || schema.height <= 0.0 {
            tracing::trace!("Skipping degenerate rectangle {}x{}", schema.width, schema.height);
            return Ok(());
        }

        if !rect.color.is_empty() {
            props.page.push(PageOp::FillRect {
                x: mm_to_pt(schema.position.x),
                y: mm_to_pt(schema.position.y),
                width: mm_to_pt(schema.width),
                height: mm_to_pt(schema.height),
                color: rect.color.clone(),
            });
        }

        if rect.border_width > 0.0 && !rect.border_color.is_empty() {
            props.page.push(PageOp::StrokeRect {
                x: mm_to_pt(schema.position.x),
                y: mm_to_pt(schema.position.y),
                width: mm_to_pt(schema.width),
                height: mm_to_pt(schema.height),
                line_width: mm_to_pt(rect.border_width),
                color: rect.border_color.clone(),
            });
        }

        Ok(())
    }

    async fn render_surface(&self, props: SurfaceRenderProps<'_>) -> RenderResult<()> {
        let schema = props.schema;
        let SchemaKind::Rect(rect) = &schema.kind else {
            return Err(RenderError::mismatch("rectangle", schema.type_name()));
        };

        props.container.set_fill(rect.color.clone());

        // A stroked outline on this target is four thin edge children,
        // derived with the same box-model arithmetic as everything else.
        if rect.border_width > 0.0 && !rect.border_color.is_empty() {
            let frame = BoxFrame::compute(
                schema.width,
                schema.height,
                &Edges::uniform(rect.border_width),
                &Edges::zero(),
            );
            for (_, edge_rect) in frame.border_rects() {
                props.container.attach(folio_core::SurfaceNode::filled(
                    adapter::node_layout(edge_rect),
                    rect.border_color.clone(),
                ));
            }
        }

        Ok(())
    }

    fn property_panel(&self, ctx: &PanelContext<'_>) -> PropPanel {
        PropPanel {
            fields: vec![
                PanelField::new("color", (ctx.i18n)("panel.fill_color"), PanelWidget::Color),
                PanelField::new(
                    "borderWidth",
                    (ctx.i18n)("panel.border_width"),
                    PanelWidget::Number {
                        min: Some(0.0),
                        max: None,
                        step: None,
                    },
                ),
                PanelField::new(
                    "borderColor",
                    (ctx.i18n)("panel.border_color"),
                    PanelWidget::Color,
                ),
            ],
        }
    }

    fn default_schema(&self) -> Schema {
        Schema::new(SchemaKind::Rect(folio_core::RectSchema {
            color: "#ffffff".to_string(),
            border_width: 0.1,
            border_color: "#000000".to_string(),
        }))
        .with_size(40.0, 20.0)
    }
}

/// Leaf renderer for line segments, painted as filled rectangles of the
/// line's thickness.
pub struct LinePlugin;

#[async_trait]
impl SchemaPlugin for LinePlugin {
    fn type_name(&self) -> &'static str {
        "line"
    }

    async fn render_document(&self, props: DocumentRenderProps<'_>) -> RenderResult<()> {
        let schema = props.schema;
        let SchemaKind::Line(line) = &schema.kind else {
            return Err(RenderError::mismatch("line", schema.type_name()));
        };

        // Zero-thickness lines (borders with width 0) paint nothing.
        if schema.width <= 0.0 || schema.height <= 0.0 || line.color.is_empty() {
            tracing::trace!("Skipping invisible line {}x{}", schema.width, schema.height);
            return Ok(());
        }

        props.page.push(PageOp::FillRect {
            x: mm_to_pt(schema.position.x),
            y: mm_to_pt(schema.position.y),
            width: mm_to_pt(schema.width),
            height: mm_to_pt(schema.height),
            color: line.color.clone(),
        });

        Ok(())
    }

    async fn render_surface(&self, props: SurfaceRenderProps<'_>) -> RenderResult<()> {
        let schema = props.schema;
        let SchemaKind::Line(line) = &schema.kind else {
            return Err(RenderError::mismatch("line", schema.type_name()));
        };

        props.container.set_fill(line.color.clone());
        props.container.kind = SurfaceNodeKind::Fill;
        Ok(())
    }

    fn property_panel(&self, ctx: &PanelContext<'_>) -> PropPanel {
        PropPanel {
            fields: vec![PanelField::new(
                "color",
                (ctx.i18n)("panel.line_color"),
                PanelWidget::Color,
            )],
        }
    }

    fn default_schema(&self) -> Schema {
        Schema::new(SchemaKind::Line(folio_core::LineSchema {
            color: "#000000".to_string(),
        }))
        .with_size(50.0, 0.5)
    }
}
