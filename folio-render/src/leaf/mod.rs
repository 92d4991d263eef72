//! Built-in leaf renderers: rectangle, line, and text.
//!
//! Leaves paint exactly one primitive; composites reuse them through the
//! plugin contract instead of painting anything themselves. Degenerate
//! geometry (zero or negative size) produces no visible output and never an
//! error.

mod shapes;
mod text;

pub use shapes::{LinePlugin, RectPlugin};
pub use text::TextPlugin;
