//! Rendering backends for Topograph
//!
//! A backend turns a [`topograph_core::DrawableGraph`] into files on disk and
//! shows the result to the user. Layout itself is delegated to Graphviz.

pub mod backend;
pub mod graphviz;
pub mod source;

pub use backend::{BackendOptions, OutputTarget, RenderBackend, RenderedOutput};
pub use graphviz::GraphvizBackend;
pub use source::SourceBackend;

use topograph_core::RenderError;

/// Names accepted by [`create_backend`].
pub const BACKENDS: [&str; 2] = ["graphviz", "source"];

/// Factory function to create render backends
pub fn create_backend(name: &str, options: BackendOptions) -> Result<Box<dyn RenderBackend>, RenderError> {
    match name {
        "graphviz" => Ok(Box::new(GraphvizBackend::new(options.graphviz_bin))),
        "source" => Ok(Box::new(SourceBackend::new())),
        _ => Err(RenderError::UnknownBackend(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_creation() {
        for name in BACKENDS {
            let backend = create_backend(name, BackendOptions::default()).unwrap();
            assert_eq!(backend.name(), name);
        }

        let unknown = create_backend("cairo", BackendOptions::default());
        assert!(matches!(unknown, Err(RenderError::UnknownBackend(ref n)) if n == "cairo"));
    }
}
