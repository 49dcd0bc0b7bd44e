//! Backend that only writes DOT source

use topograph_core::{DrawableGraph, RenderError};

use crate::backend::{OutputTarget, RenderBackend, RenderedOutput};

/// Writes `<stem>.gv` and never runs a layout engine.
#[derive(Debug, Default)]
pub struct SourceBackend;

impl SourceBackend {
    pub fn new() -> Self {
        SourceBackend
    }
}

impl RenderBackend for SourceBackend {
    fn name(&self) -> &'static str {
        "source"
    }

    fn build(&self, graph: &DrawableGraph, target: &OutputTarget) -> Result<RenderedOutput, RenderError> {
        let source_path = target.write_source(graph)?;
        Ok(RenderedOutput {
            source_path,
            image_path: None,
        })
    }

    fn display(&self, output: &RenderedOutput) -> Result<(), RenderError> {
        tracing::info!("DOT source available at {}", output.source_path.display());
        Ok(())
    }
}
