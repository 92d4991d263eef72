//! The uniform plugin contract and the schema-type registry.
//!
//! Every schema type is handled by one plugin that knows how to paint itself
//! on the document target, how to paint itself on the interactive surface,
//! and how to describe its editable property set. The built-in set is
//! dispatched through [`PluginRegistry`], which third-party schema types can
//! extend at runtime.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use folio_core::{FontMap, Page, Schema, SharedAssetCache, SurfaceNode};

use crate::cell::CellPlugin;
use crate::error::{RenderError, RenderResult};
use crate::leaf::{LinePlugin, RectPlugin, TextPlugin};
use crate::panel::{PanelContext, PropPanel};

/// Interaction mode of the surface target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceMode {
    /// Read-only preview.
    Viewer,
    /// Content is editable, geometry is not.
    Form,
    /// Everything is editable.
    Designer,
}

impl SurfaceMode {
    /// Whether text content may be edited in this mode.
    #[must_use]
    pub fn is_editable(self) -> bool {
        !matches!(self, Self::Viewer)
    }
}

/// Inputs for one document-target render call.
///
/// The schema is read immutably and never retained past the call; the page
/// and cache are shared so concurrently issued sub-renders can use them.
#[derive(Clone, Copy)]
pub struct DocumentRenderProps<'a> {
    /// The schema to paint.
    pub schema: &'a Schema,
    /// The page receiving paint operations.
    pub page: &'a Page,
    /// Available fonts.
    pub fonts: &'a FontMap,
    /// Shared derived-asset cache.
    pub cache: &'a SharedAssetCache,
}

/// Inputs for one surface-target render call.
pub struct SurfaceRenderProps<'a> {
    /// The schema to render.
    pub schema: &'a Schema,
    /// The container node to populate.
    pub container: &'a mut SurfaceNode,
    /// Interaction mode.
    pub mode: SurfaceMode,
    /// Available fonts.
    pub fonts: &'a FontMap,
}

/// Handler for one schema type.
#[async_trait]
pub trait SchemaPlugin: Send + Sync {
    /// The schema-type discriminator this plugin handles.
    fn type_name(&self) -> &'static str;

    /// Paint the schema onto a document page.
    ///
    /// # Errors
    ///
    /// Returns an error if a sub-render or the target fails; operations
    /// already appended to the page remain applied.
    async fn render_document(&self, props: DocumentRenderProps<'_>) -> RenderResult<()>;

    /// Populate a surface container with this schema's visual structure.
    ///
    /// # Errors
    ///
    /// Returns an error if a sub-render fails.
    async fn render_surface(&self, props: SurfaceRenderProps<'_>) -> RenderResult<()>;

    /// Describe this schema type's editable property set.
    fn property_panel(&self, ctx: &PanelContext<'_>) -> PropPanel;

    /// The initial field values for a newly created instance of this schema
    /// type.
    fn default_schema(&self) -> Schema;
}

/// Process-wide mapping from schema-type discriminators to plugins.
#[derive(Clone)]
pub struct PluginRegistry {
    plugins: HashMap<String, Arc<dyn SchemaPlugin>>,
}

impl PluginRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
        }
    }

    /// The registry of built-in plugins: text, rectangle, line, and cell.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(TextPlugin));
        registry.register(Arc::new(RectPlugin));
        registry.register(Arc::new(LinePlugin));
        registry.register(Arc::new(CellPlugin::default()));
        registry
    }

    /// Register a plugin under its own discriminator, replacing any previous
    /// registration.
    pub fn register(&mut self, plugin: Arc<dyn SchemaPlugin>) {
        self.plugins.insert(plugin.type_name().to_string(), plugin);
    }

    /// Look up the plugin for a discriminator.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnknownSchemaType`] when nothing is registered
    /// under the discriminator.
    pub fn get(&self, type_name: &str) -> RenderResult<Arc<dyn SchemaPlugin>> {
        self.plugins
            .get(type_name)
            .cloned()
            .ok_or_else(|| RenderError::UnknownSchemaType(type_name.to_string()))
    }

    /// Whether a discriminator has a registered plugin.
    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.plugins.contains_key(type_name)
    }

    /// Registered discriminators, sorted.
    #[must_use]
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.plugins.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Dispatch a document render to the schema's plugin.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown schema types or failed renders.
    pub async fn render_document(&self, props: DocumentRenderProps<'_>) -> RenderResult<()> {
        self.get(props.schema.type_name())?
            .render_document(props)
            .await
    }

    /// Dispatch a surface render to the schema's plugin.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown schema types or failed renders.
    pub async fn render_surface(&self, props: SurfaceRenderProps<'_>) -> RenderResult<()> {
        self.get(props.schema.type_name())?
            .render_surface(props)
            .await
    }
}

impl Default for PluginRegistry {
    /// The built-in plugin set.
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_contains_all_types() {
        let registry = PluginRegistry::builtin();

        assert_eq!(
            registry.type_names(),
            vec!["cell", "line", "rectangle", "text"]
        );
        assert!(registry.contains("cell"));
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let registry = PluginRegistry::builtin();
        let result = registry.get("qrcode");

        assert!(matches!(result, Err(RenderError::UnknownSchemaType(t)) if t == "qrcode"));
    }

    #[test]
    fn test_lookup_returns_matching_plugin() {
        let registry = PluginRegistry::builtin();
        let plugin = registry.get("cell").expect("should resolve");

        assert_eq!(plugin.type_name(), "cell");
        assert_eq!(plugin.default_schema().type_name(), "cell");
    }

    #[test]
    fn test_surface_mode_editability() {
        assert!(!SurfaceMode::Viewer.is_editable());
        assert!(SurfaceMode::Form.is_editable());
        assert!(SurfaceMode::Designer.is_editable());
    }
}
