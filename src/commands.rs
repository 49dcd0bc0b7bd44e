//! CLI command implementations

use crate::config::AppConfig;
use topograph_core::{load, render_with, DrawableGraph};
use topograph_render::create_backend;

/// Load the configured input and build the drawable graph.
fn build_graph(config: &AppConfig) -> anyhow::Result<DrawableGraph> {
    tracing::info!("Loading graph: {}", config.input_path.display());
    let doc = load(&config.input_path)?;
    let graph = render_with(&doc, &config.render_options())?;
    tracing::info!("Built {} nodes, {} edges", graph.node_count(), graph.edge_count());
    Ok(graph)
}

/// Load, lay out, write, and (optionally) view the graph.
pub fn render(config: &AppConfig) -> anyhow::Result<()> {
    let graph = build_graph(config)?;
    if !graph.format().is_raster() {
        tracing::warn!("{} is not a raster format; the viewer may not open it", graph.format());
    }

    let backend = create_backend(&config.backend, config.backend_options())?;
    let output = backend.build(&graph, &config.output_target())?;
    tracing::info!("Wrote {}", output.primary_path().display());

    if config.view {
        backend.display(&output)?;
    }
    Ok(())
}

/// Print the DOT source to stdout without running a layout engine.
pub fn source(config: &AppConfig) -> anyhow::Result<()> {
    let graph = build_graph(config)?;
    print!("{}", graph.dot());
    Ok(())
}

/// Validate the input without writing anything.
pub fn check(config: &AppConfig) -> anyhow::Result<()> {
    build_graph(config)?;
    tracing::info!("{} is valid", config.input_path.display());
    Ok(())
}
