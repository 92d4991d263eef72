//! # Folio Render
//!
//! Schema plugins: one handler per schema type that paints itself on the
//! paged document target and on the interactive surface, and describes its
//! editable property set. The composite cell plugin derives its geometry
//! from the box-model calculator and orchestrates the leaf plugins on both
//! targets from the one data model.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │             SchemaPlugin trait              │
//! ├──────────────┬──────────────┬───────────────┤
//! │ render       │ render       │ property      │
//! │ document     │ surface      │ panel         │
//! ├──────────────┴──────────────┴───────────────┤
//! │  text │ rectangle │ line │ cell (composite) │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Rendering is cooperatively asynchronous: a composite fans out independent
//! sub-renders, awaits the whole group, then runs its dependent step. No
//! parallelism is assumed; "concurrent" only means issued without awaiting
//! in between.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod adapter;
pub mod cell;
pub mod error;
pub mod leaf;
pub mod panel;
pub mod plugin;

pub use cell::CellPlugin;
pub use error::{RenderError, RenderResult};
pub use leaf::{LinePlugin, RectPlugin, TextPlugin};
pub use panel::{cell_prop_panel, PanelContext, PanelField, PanelWidget, PropPanel};
pub use plugin::{
    DocumentRenderProps, PluginRegistry, SchemaPlugin, SurfaceMode, SurfaceRenderProps,
};

/// Folio render version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
