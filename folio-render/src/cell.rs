//! Composite cell plugin.
//!
//! A cell is text inset by per-edge borders and padding on a filled
//! background. The plugin owns no painting: it derives geometry with the
//! box-model calculator and orchestrates the rectangle, line, and text leaf
//! plugins on both targets.
//!
//! Document path: the background and the four border lines have no visual
//! dependency on one another, so they are issued together and awaited as a
//! group; the text is painted strictly afterwards so it layers on top
//! (document targets paint in order of drawing). Surface path: the container
//! carries the background as its own fill, the text-editor child attaches
//! first and the four border children after it - attachment order is paint
//! order, and borders never reach into the content box.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future;

use folio_core::{fallback_font_name, CellSchema, Schema, SchemaKind, SurfaceNode};

use crate::adapter;
use crate::error::{RenderError, RenderResult};
use crate::leaf::{LinePlugin, RectPlugin, TextPlugin};
use crate::panel::{cell_prop_panel, PanelContext, PropPanel};
use crate::plugin::{DocumentRenderProps, SchemaPlugin, SurfaceRenderProps};

/// Plugin for the `"cell"` schema type.
///
/// Delegates all painting to the text, rectangle, and line plugins it was
/// built with; tests can substitute instrumented leaves.
pub struct CellPlugin {
    text: Arc<dyn SchemaPlugin>,
    rect: Arc<dyn SchemaPlugin>,
    line: Arc<dyn SchemaPlugin>,
}

impl CellPlugin {
    /// Build a cell plugin around the given leaf plugins.
    #[must_use]
    pub fn new(
        text: Arc<dyn SchemaPlugin>,
        rect: Arc<dyn SchemaPlugin>,
        line: Arc<dyn SchemaPlugin>,
    ) -> Self {
        Self { text, rect, line }
    }

    fn cell_of<'a>(&self, schema: &'a Schema) -> RenderResult<&'a CellSchema> {
        match &schema.kind {
            SchemaKind::Cell(cell) => Ok(cell),
            _ => Err(RenderError::mismatch("cell", schema.type_name())),
        }
    }
}

impl Default for CellPlugin {
    /// A cell plugin wired to the built-in leaves.
    fn default() -> Self {
        Self::new(
            Arc::new(TextPlugin),
            Arc::new(RectPlugin),
            Arc::new(LinePlugin),
        )
    }
}

#[async_trait]
impl SchemaPlugin for CellPlugin {
    fn type_name(&self) -> &'static str {
        "cell"
    }

    async fn render_document(&self, props: DocumentRenderProps<'_>) -> RenderResult<()> {
        let cell = self.cell_of(props.schema)?;
        let frame = adapter::cell_frame(props.schema, cell);

        let background = adapter::background_schema(props.schema, cell);
        let top = adapter::border_schema(props.schema, cell, &frame.top);
        let right = adapter::border_schema(props.schema, cell, &frame.right);
        let bottom = adapter::border_schema(props.schema, cell, &frame.bottom);
        let left = adapter::border_schema(props.schema, cell, &frame.left);

        // Issue the background and the four border lines together and wait
        // for the whole group; the first failure aborts the composite.
        future::try_join_all([
            self.rect.render_document(DocumentRenderProps {
                schema: &background,
                ..props
            }),
            self.line.render_document(DocumentRenderProps {
                schema: &top,
                ..props
            }),
            self.line.render_document(DocumentRenderProps {
                schema: &right,
                ..props
            }),
            self.line.render_document(DocumentRenderProps {
                schema: &bottom,
                ..props
            }),
            self.line.render_document(DocumentRenderProps {
                schema: &left,
                ..props
            }),
        ])
        .await?;

        // The text paints strictly after the group. The derived schema is
        // issued even when the content box is degenerate; the leaf emits an
        // empty result for it.
        let content = adapter::content_schema(props.schema, cell, &frame.content);
        self.text
            .render_document(DocumentRenderProps {
                schema: &content,
                ..props
            })
            .await
    }

    async fn render_surface(&self, props: SurfaceRenderProps<'_>) -> RenderResult<()> {
        let SurfaceRenderProps {
            schema,
            container,
            mode,
            fonts,
        } = props;
        let cell = self.cell_of(schema)?;
        let frame = adapter::cell_frame(schema, cell);

        // This target's containers support a fill directly, so the
        // background needs no dedicated child node.
        container.set_fill(cell.background_color.clone());

        let content = adapter::content_schema(schema, cell, &frame.content);
        let mut text_node = SurfaceNode::container(adapter::node_layout(&frame.content));
        self.text
            .render_surface(SurfaceRenderProps {
                schema: &content,
                container: &mut text_node,
                mode,
                fonts,
            })
            .await?;
        container.attach(text_node);

        // Borders attach after the text node. They are thin: under
        // non-negative geometry a border never overlaps the content box, so
        // no z-index bookkeeping is needed.
        for (_, edge_rect) in frame.border_rects() {
            container.attach(SurfaceNode::filled(
                adapter::node_layout(edge_rect),
                cell.border_color.clone(),
            ));
        }

        Ok(())
    }

    fn property_panel(&self, ctx: &PanelContext<'_>) -> PropPanel {
        let mut font_names: Vec<String> = ctx.fonts.keys().cloned().collect();
        font_names.sort_unstable();
        if font_names.is_empty() {
            font_names.push(folio_core::DEFAULT_FONT_NAME.to_string());
        }
        let fallback = fallback_font_name(ctx.fonts)
            .unwrap_or(folio_core::DEFAULT_FONT_NAME)
            .to_string();

        cell_prop_panel(ctx.i18n, &font_names, &fallback)
    }

    fn default_schema(&self) -> Schema {
        Schema::new(SchemaKind::Cell(CellSchema {
            content: "Type Something...".to_string(),
            ..CellSchema::default()
        }))
        .with_size(50.0, 15.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{default_font, Edges, Page, SharedAssetCache};

    fn sample_cell() -> Schema {
        Schema::new(SchemaKind::Cell(CellSchema {
            content: "Quarterly".to_string(),
            border_width: Edges::uniform(1.0),
            padding: Edges::uniform(2.0),
            border_color: "#888888".to_string(),
            background_color: "#ffffee".to_string(),
            ..CellSchema::default()
        }))
        .with_position(10.0, 20.0)
        .with_size(50.0, 15.0)
    }

    #[tokio::test]
    async fn test_document_path_paints_group_then_text() {
        let schema = sample_cell();
        let page = Page::new(210.0, 297.0);
        let fonts = default_font();
        let cache = SharedAssetCache::new();

        CellPlugin::default()
            .render_document(DocumentRenderProps {
                schema: &schema,
                page: &page,
                fonts: &fonts,
                cache: &cache,
            })
            .await
            .expect("should render");

        let ops = page.ops();
        // Background + four borders + text.
        assert_eq!(ops.len(), 6);
        assert!(matches!(
            ops.last().expect("should have ops"),
            folio_core::PageOp::Text { .. }
        ));
    }

    #[tokio::test]
    async fn test_wrong_schema_kind_is_a_mismatch() {
        let schema = Schema::new(SchemaKind::Line(folio_core::LineSchema::default()));
        let page = Page::new(210.0, 297.0);
        let fonts = default_font();
        let cache = SharedAssetCache::new();

        let result = CellPlugin::default()
            .render_document(DocumentRenderProps {
                schema: &schema,
                page: &page,
                fonts: &fonts,
                cache: &cache,
            })
            .await;

        assert!(matches!(
            result,
            Err(RenderError::SchemaMismatch { expected: "cell", .. })
        ));
    }

    #[test]
    fn test_default_schema_is_a_cell() {
        let schema = CellPlugin::default().default_schema();

        assert_eq!(schema.type_name(), "cell");
        assert_eq!(schema.width, 50.0);
        assert_eq!(schema.height, 15.0);

        let SchemaKind::Cell(cell) = &schema.kind else {
            panic!("Expected cell schema");
        };
        assert_eq!(cell.content, "Type Something...");
    }

    #[test]
    fn test_property_panel_with_empty_fonts_offers_default() {
        let fonts = folio_core::FontMap::new();
        let i18n = |key: &str| key.to_string();
        let panel = CellPlugin::default().property_panel(&PanelContext {
            i18n: &i18n,
            fonts: &fonts,
        });

        let field = panel.field("fontName").expect("should have fontName");
        let crate::panel::PanelWidget::Select { options, default } = &field.widget else {
            panic!("Expected select widget");
        };
        assert_eq!(options, &vec![folio_core::DEFAULT_FONT_NAME.to_string()]);
        assert_eq!(default.as_deref(), Some(folio_core::DEFAULT_FONT_NAME));
    }
}
