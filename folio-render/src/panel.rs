//! Property-panel descriptors.
//!
//! A plugin describes its editable property set as data; the widget toolkit
//! that materializes the panel lives outside this crate. Builders here are
//! pure functions of the localization context and the available fonts.

use serde::Serialize;

use folio_core::FontMap;

/// Context handed to a plugin when it describes its property panel.
pub struct PanelContext<'a> {
    /// Localization lookup from label key to display string.
    pub i18n: &'a dyn Fn(&str) -> String,
    /// Available fonts.
    pub fonts: &'a FontMap,
}

/// Widget used to edit one property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum PanelWidget {
    /// Pick one value from a fixed list.
    Select {
        /// Choices, in display order.
        options: Vec<String>,
        /// Initially selected choice.
        default: Option<String>,
    },
    /// Numeric input.
    Number {
        /// Minimum accepted value.
        min: Option<f32>,
        /// Maximum accepted value.
        max: Option<f32>,
        /// Spinner step.
        step: Option<f32>,
    },
    /// Color picker.
    Color,
    /// Free text input.
    Text,
    /// Visual separator between field groups.
    Divider,
}

/// One entry of a property panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelField {
    /// Property key on the schema record.
    pub key: String,
    /// Localized display label.
    pub label: String,
    /// Editing widget.
    pub widget: PanelWidget,
    /// Column span out of 24 (the panel renders a 24-column grid).
    pub span: u8,
}

impl PanelField {
    /// Create a field with the default half-row span.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>, widget: PanelWidget) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            widget,
            span: 12,
        }
    }

    /// Set the column span.
    #[must_use]
    pub fn with_span(mut self, span: u8) -> Self {
        self.span = span;
        self
    }
}

/// The full property panel for one schema type.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PropPanel {
    /// Fields in display order.
    pub fields: Vec<PanelField>,
}

impl PropPanel {
    /// Number of editable fields (dividers excluded).
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|field| !matches!(field.widget, PanelWidget::Divider))
            .count()
    }

    /// Look up a field by key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&PanelField> {
        self.fields.iter().find(|field| field.key == key)
    }
}

/// Build the property panel for the cell schema type.
///
/// Pure: the output depends only on the localization function, the available
/// font names, and the fallback font name.
#[must_use]
pub fn cell_prop_panel(
    i18n: &dyn Fn(&str) -> String,
    font_names: &[String],
    fallback_font: &str,
) -> PropPanel {
    let number = |min: f32| PanelWidget::Number {
        min: Some(min),
        max: None,
        step: None,
    };

    let mut fields = vec![
        PanelField::new(
            "fontName",
            i18n("panel.font_name"),
            PanelWidget::Select {
                options: font_names.to_vec(),
                default: Some(fallback_font.to_string()),
            },
        )
        .with_span(24),
        PanelField::new("fontSize", i18n("panel.font_size"), number(1.0)),
        PanelField::new(
            "characterSpacing",
            i18n("panel.character_spacing"),
            number(0.0),
        ),
        PanelField::new(
            "lineHeight",
            i18n("panel.line_height"),
            PanelWidget::Number {
                min: Some(0.0),
                max: None,
                step: Some(0.1),
            },
        ),
        PanelField::new(
            "alignment",
            i18n("panel.alignment"),
            PanelWidget::Select {
                options: ["left", "center", "right", "justify"]
                    .map(str::to_string)
                    .to_vec(),
                default: Some("left".to_string()),
            },
        ),
        PanelField::new(
            "verticalAlignment",
            i18n("panel.vertical_alignment"),
            PanelWidget::Select {
                options: ["top", "middle", "bottom"].map(str::to_string).to_vec(),
                default: Some("middle".to_string()),
            },
        ),
        PanelField::new("fontColor", i18n("panel.font_color"), PanelWidget::Color),
        PanelField::new("-border", String::new(), PanelWidget::Divider).with_span(24),
    ];

    for edge in ["top", "right", "bottom", "left"] {
        fields.push(
            PanelField::new(
                format!("borderWidth.{edge}"),
                i18n(&format!("panel.border_width_{edge}")),
                number(0.0),
            )
            .with_span(6),
        );
    }
    for edge in ["top", "right", "bottom", "left"] {
        fields.push(
            PanelField::new(
                format!("padding.{edge}"),
                i18n(&format!("panel.padding_{edge}")),
                number(0.0),
            )
            .with_span(6),
        );
    }

    fields.push(PanelField::new(
        "borderColor",
        i18n("panel.border_color"),
        PanelWidget::Color,
    ));
    fields.push(PanelField::new(
        "backgroundColor",
        i18n("panel.background_color"),
        PanelWidget::Color,
    ));

    PropPanel { fields }
}
