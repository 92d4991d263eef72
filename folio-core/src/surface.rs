//! The interactive surface target.
//!
//! The editable on-screen destination is modeled as a tree of absolutely
//! positioned nodes. Attachment order is paint order: later-attached siblings
//! composite on top where they geometrically intersect. Any UI toolkit with
//! layered absolutely-positioned nodes can materialize this tree.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::Rect;
use crate::schema::{Alignment, VerticalAlignment};

/// Unique identifier for a surface node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Create a new unique node ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The role a surface node plays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SurfaceNodeKind {
    /// A plain container for child nodes.
    Container,

    /// A node whose only job is its background fill (border lines, swatches).
    Fill,

    /// An editable text region.
    TextEditor {
        /// Current text content.
        content: String,
        /// Resolved font name.
        font_name: String,
        /// Font size in points.
        font_size: f32,
        /// Horizontal alignment.
        alignment: Alignment,
        /// Vertical alignment.
        vertical_alignment: VerticalAlignment,
        /// Character spacing in points.
        character_spacing: f32,
        /// Line height in em.
        line_height: f32,
        /// Text color as hex.
        font_color: String,
        /// Whether the user may edit the content.
        editable: bool,
    },
}

/// One node of the surface tree.
///
/// `layout` is relative to the parent node, in surface pixels. A non-empty
/// `fill` paints the node's full bounds beneath all of its children - exactly
/// the effect of a full-bounds opaque rectangle, which is why a container can
/// carry its own background without a dedicated background child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceNode {
    /// Unique identifier.
    pub id: NodeId,
    /// Position and size relative to the parent, in pixels.
    pub layout: Rect,
    /// Background fill as hex; empty means no fill.
    pub fill: String,
    /// Node role.
    pub kind: SurfaceNodeKind,
    children: Vec<SurfaceNode>,
}

impl SurfaceNode {
    /// Create an empty container node.
    #[must_use]
    pub fn container(layout: Rect) -> Self {
        Self {
            id: NodeId::new(),
            layout,
            fill: String::new(),
            kind: SurfaceNodeKind::Container,
            children: Vec::new(),
        }
    }

    /// Create a fill-only node.
    #[must_use]
    pub fn filled(layout: Rect, fill: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            layout,
            fill: fill.into(),
            kind: SurfaceNodeKind::Fill,
            children: Vec::new(),
        }
    }

    /// Set this node's background fill.
    pub fn set_fill(&mut self, fill: impl Into<String>) {
        self.fill = fill.into();
    }

    /// Attach a child node, returning its ID.
    ///
    /// Attachment order is paint order; the new child paints above all
    /// previously attached siblings where they intersect.
    pub fn attach(&mut self, child: SurfaceNode) -> NodeId {
        let id = child.id;
        self.children.push(child);
        id
    }

    /// Child nodes in attachment (= paint) order.
    #[must_use]
    pub fn children(&self) -> &[SurfaceNode] {
        &self.children
    }

    /// Number of attached children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Whether this node paints nothing itself and has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fill.is_empty()
            && self.children.is_empty()
            && matches!(self.kind, SurfaceNodeKind::Container | SurfaceNodeKind::Fill)
    }
}
