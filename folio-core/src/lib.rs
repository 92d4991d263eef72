//! # Folio Core
//!
//! Core data model for schema-driven element rendering. A schema is a
//! declarative, typed record describing one positioned, styled element;
//! folio paints the same schema onto two targets from one box-model
//! derivation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                folio-core                   │
//! ├─────────────────────────────────────────────┤
//! │  Schemas         │  Geometry                │
//! │  - Text/Cell     │  - Rect / Edges          │
//! │  - Rect/Line     │  - BoxFrame derivation   │
//! ├─────────────────────────────────────────────┤
//! │  Targets         │  Support                 │
//! │  - Page (doc)    │  - Units (mm/pt/px)      │
//! │  - SurfaceNode   │  - Fonts, asset cache    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Lengths in the data model are millimetres with the origin at the top-left
//! of the page. The document target consumes points, the surface target
//! consumes pixels; both are derived from the same millimetre arithmetic.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod document;
pub mod error;
pub mod font;
pub mod geometry;
pub mod schema;
pub mod surface;
pub mod units;

pub use cache::{derive_cache_key, AssetCache, AssetCacheConfig, CacheStats, SharedAssetCache};
pub use document::{Page, PageOp};
pub use error::{CoreError, CoreResult};
pub use font::{default_font, fallback_font_name, Font, FontMap, DEFAULT_FONT_NAME};
pub use geometry::{BoxFrame, Edge, Edges, Rect};
pub use schema::{
    Alignment, CellSchema, LineSchema, Position, RectSchema, Schema, SchemaKind, TextSchema,
    TextStyle, VerticalAlignment,
};
pub use surface::{NodeId, SurfaceNode, SurfaceNodeKind};

/// Folio core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
