//! Render one cell schema onto both targets and dump the results.
//!
//! ```sh
//! cargo run --example render_cell
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::units::PX_PER_MM;
use folio_core::{
    default_font, CellSchema, Edges, Page, Rect, Schema, SchemaKind, SharedAssetCache, SurfaceNode,
};
use folio_render::{DocumentRenderProps, PluginRegistry, SurfaceMode, SurfaceRenderProps};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let registry = PluginRegistry::builtin();
    let fonts = default_font();
    let cache = SharedAssetCache::new();

    let schema = Schema::new(SchemaKind::Cell(CellSchema {
        content: "Quarterly totals".to_string(),
        border_width: Edges::uniform(1.0),
        padding: Edges::uniform(2.0),
        border_color: "#888888".to_string(),
        background_color: "#ffffee".to_string(),
        ..CellSchema::default()
    }))
    .with_position(10.0, 20.0)
    .with_size(50.0, 15.0);

    tracing::info!("Rendering schema: {}", schema.to_json()?);

    // Document target: an A4 page collecting paint operations.
    let page = Page::new(210.0, 297.0);
    registry
        .render_document(DocumentRenderProps {
            schema: &schema,
            page: &page,
            fonts: &fonts,
            cache: &cache,
        })
        .await?;

    println!("document ops ({}):", page.op_count());
    for op in page.ops() {
        println!("  {}", serde_json::to_string(&op)?);
    }

    // Surface target: a container node the host would materialize.
    let mut container = SurfaceNode::container(Rect::new(
        schema.position.x * PX_PER_MM,
        schema.position.y * PX_PER_MM,
        schema.width * PX_PER_MM,
        schema.height * PX_PER_MM,
    ));
    registry
        .render_surface(SurfaceRenderProps {
            schema: &schema,
            container: &mut container,
            mode: SurfaceMode::Designer,
            fonts: &fonts,
        })
        .await?;

    println!("surface tree:");
    println!("{}", serde_json::to_string_pretty(&container)?);

    Ok(())
}
