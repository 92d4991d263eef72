//! Text leaf renderer.
//!
//! Shaping and line breaking belong to the document backend; this leaf
//! resolves the font, paints an optional background, and emits the text block
//! with its styling. On the surface target it turns its container into an
//! editable text region.

use async_trait::async_trait;

use folio_core::schema::DEFAULT_FONT_COLOR;
use folio_core::units::mm_to_pt;
use folio_core::{
    derive_cache_key, fallback_font_name, FontMap, PageOp, Schema, SchemaKind, SurfaceNodeKind,
    TextStyle,
};

use crate::error::{RenderError, RenderResult};
use crate::panel::{PanelContext, PanelField, PanelWidget, PropPanel};
use crate::plugin::{DocumentRenderProps, SchemaPlugin, SurfaceRenderProps};

/// Leaf renderer for text blocks.
pub struct TextPlugin;

impl TextPlugin {
    /// Resolve the font name a style should render with.
    ///
    /// A named font that is missing from the map falls back rather than
    /// failing: the schema may have been authored against a different font
    /// set than the one active at render time.
    fn resolve_font_name<'a>(style: &'a TextStyle, fonts: &'a FontMap) -> RenderResult<&'a str> {
        if let Some(name) = &style.font_name {
            if fonts.contains_key(name) {
                return Ok(name);
            }
            tracing::warn!("Font '{name}' not in font map, using fallback");
        }
        Ok(fallback_font_name(fonts)?)
    }

    fn font_color(style: &TextStyle) -> String {
        if style.font_color.is_empty() {
            DEFAULT_FONT_COLOR.to_string()
        } else {
            style.font_color.clone()
        }
    }
}

#[async_trait]
impl SchemaPlugin for TextPlugin {
    fn type_name(&self) -> &'static str {
        "text"
    }

    async fn render_document(&self, props: DocumentRenderProps<'_>) -> RenderResult<()> {
        let schema = props.schema;
        let SchemaKind::Text(text) = &schema.kind else {
            return Err(RenderError::mismatch("text", schema.type_name()));
        };

        let font_name = Self::resolve_font_name(&text.style, props.fonts)?;

        // Memoize the font program so repeated pages skip re-reading it when
        // the backend embeds fonts.
        if let Some(font) = props.fonts.get(font_name) {
            let key = derive_cache_key(self.type_name(), font_name);
            if !props.cache.contains(&key) {
                props.cache.insert(key, font.data.clone());
            }
        }

        // A degenerate text region is an empty result, not an error: the
        // box-model arithmetic may legitimately produce it.
        if schema.width <= 0.0 || schema.height <= 0.0 {
            tracing::trace!(
                "Degenerate text region {}x{}, emitting nothing",
                schema.width,
                schema.height
            );
            return Ok(());
        }

        if !text.background_color.is_empty() {
            props.page.push(PageOp::FillRect {
                x: mm_to_pt(schema.position.x),
                y: mm_to_pt(schema.position.y),
                width: mm_to_pt(schema.width),
                height: mm_to_pt(schema.height),
                color: text.background_color.clone(),
            });
        }

        props.page.push(PageOp::Text {
            x: mm_to_pt(schema.position.x),
            y: mm_to_pt(schema.position.y),
            width: mm_to_pt(schema.width),
            height: mm_to_pt(schema.height),
            content: text.content.clone(),
            font_name: font_name.to_string(),
            font_size: text.style.font_size,
            color: Self::font_color(&text.style),
            alignment: text.style.alignment,
            vertical_alignment: text.style.vertical_alignment,
            character_spacing: text.style.character_spacing,
            line_height: text.style.line_height,
        });

        Ok(())
    }

    async fn render_surface(&self, props: SurfaceRenderProps<'_>) -> RenderResult<()> {
        let schema = props.schema;
        let SchemaKind::Text(text) = &schema.kind else {
            return Err(RenderError::mismatch("text", schema.type_name()));
        };

        let font_name = Self::resolve_font_name(&text.style, props.fonts)?;

        // The container itself becomes the editing region; its layout was
        // set by the caller and stays untouched.
        props.container.set_fill(text.background_color.clone());
        props.container.kind = SurfaceNodeKind::TextEditor {
            content: text.content.clone(),
            font_name: font_name.to_string(),
            font_size: text.style.font_size,
            alignment: text.style.alignment,
            vertical_alignment: text.style.vertical_alignment,
            character_spacing: text.style.character_spacing,
            line_height: text.style.line_height,
            font_color: Self::font_color(&text.style),
            editable: props.mode.is_editable(),
        };

        Ok(())
    }

    fn property_panel(&self, ctx: &PanelContext<'_>) -> PropPanel {
        let font_names: Vec<String> = {
            let mut names: Vec<String> = ctx.fonts.keys().cloned().collect();
            names.sort_unstable();
            names
        };
        let fallback = fallback_font_name(ctx.fonts)
            .unwrap_or(folio_core::DEFAULT_FONT_NAME)
            .to_string();

        PropPanel {
            fields: vec![
                PanelField::new(
                    "fontName",
                    (ctx.i18n)("panel.font_name"),
                    PanelWidget::Select {
                        options: font_names,
                        default: Some(fallback),
                    },
                )
                .with_span(24),
                PanelField::new(
                    "fontSize",
                    (ctx.i18n)("panel.font_size"),
                    PanelWidget::Number {
                        min: Some(1.0),
                        max: None,
                        step: None,
                    },
                ),
                PanelField::new(
                    "fontColor",
                    (ctx.i18n)("panel.font_color"),
                    PanelWidget::Color,
                ),
                PanelField::new(
                    "backgroundColor",
                    (ctx.i18n)("panel.background_color"),
                    PanelWidget::Color,
                ),
            ],
        }
    }

    fn default_schema(&self) -> Schema {
        Schema::new(SchemaKind::Text(folio_core::TextSchema {
            content: "Type Something...".to_string(),
            style: TextStyle::default(),
            background_color: String::new(),
        }))
        .with_size(45.0, 10.0)
    }
}
