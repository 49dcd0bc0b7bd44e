//! Graphviz backend: runs the layout engine executable and opens the image

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use topograph_core::{DrawableGraph, Engine, RenderError};

use crate::backend::{OutputTarget, RenderBackend, RenderedOutput};

/// Lays out graphs with the Graphviz command-line tools.
#[derive(Debug, Default)]
pub struct GraphvizBackend {
    bin_dir: Option<PathBuf>,
}

impl GraphvizBackend {
    pub fn new(bin_dir: Option<PathBuf>) -> Self {
        GraphvizBackend { bin_dir }
    }

    /// Executable to run for `engine`.
    pub fn program(&self, engine: Engine) -> PathBuf {
        match &self.bin_dir {
            Some(dir) => dir.join(engine.program()),
            None => PathBuf::from(engine.program()),
        }
    }
}

impl RenderBackend for GraphvizBackend {
    fn name(&self) -> &'static str {
        "graphviz"
    }

    fn build(&self, graph: &DrawableGraph, target: &OutputTarget) -> Result<RenderedOutput, RenderError> {
        let source_path = target.write_source(graph)?;
        let image_path = target.image_path(graph.format());
        let program = self.program(graph.engine());

        tracing::info!(
            "Running {} -> {}",
            program.display(),
            image_path.display()
        );
        let output = Command::new(&program)
            .arg(format!("-T{}", graph.format().extension()))
            .arg("-o")
            .arg(&image_path)
            .arg(&source_path)
            .output()
            .map_err(|source| RenderError::EngineNotFound {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            if image_path.exists() {
                if let Err(e) = fs::remove_file(&image_path) {
                    tracing::warn!("Cannot remove partial image {}: {}", image_path.display(), e);
                }
            }
            return Err(RenderError::EngineFailed {
                program,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            tracing::warn!("{}: {}", program.display(), stderr.trim());
        }

        Ok(RenderedOutput {
            source_path,
            image_path: Some(image_path),
        })
    }

    fn display(&self, output: &RenderedOutput) -> Result<(), RenderError> {
        let path = output.primary_path();
        tracing::info!("Opening {}", path.display());
        open::that(path).map_err(|source| RenderError::Viewer {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topograph_core::{render, GraphDocument};

    use std::sync::{Mutex, MutexGuard};

    // Tests that spawn an engine run one at a time, so no child inherits the
    // write handle of a script another test is still creating (ETXTBSY).
    static SPAWN_LOCK: Mutex<()> = Mutex::new(());

    fn spawn_lock() -> MutexGuard<'static, ()> {
        SPAWN_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn sample_graph() -> DrawableGraph {
        let doc = GraphDocument::from_json_str(r#"{"nodes": ["A", "B"], "edges": [{"from": "A", "to": "B", "weight": 3}]}"#).unwrap();
        render(&doc).unwrap()
    }

    #[test]
    fn test_program_resolution() {
        let on_path = GraphvizBackend::new(None);
        assert_eq!(on_path.program(Engine::Neato), PathBuf::from("neato"));

        let pinned = GraphvizBackend::new(Some(PathBuf::from("/opt/graphviz/bin")));
        assert_eq!(pinned.program(Engine::Sfdp), PathBuf::from("/opt/graphviz/bin/sfdp"));
    }

    #[test]
    fn test_missing_engine() {
        let _guard = spawn_lock();
        let bin = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let backend = GraphvizBackend::new(Some(bin.path().to_path_buf()));
        let target = OutputTarget::new(out.path(), "Graph");

        let err = backend.build(&sample_graph(), &target).unwrap_err();

        assert!(matches!(err, RenderError::EngineNotFound { .. }), "got {err:?}");
        assert!(target.source_path().exists());
        assert!(!target.image_path(topograph_core::OutputFormat::Png).exists());
    }

    #[cfg(unix)]
    fn fake_engine(dir: &std::path::Path, script: &str) {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join("neato");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_engine_invocation() {
        let _guard = spawn_lock();
        let bin = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        // Receives: -Tpng -o <image> <source>
        fake_engine(bin.path(), "#!/bin/sh\necho \"$1\" > \"$3\"\ncat \"$4\" >> \"$3\"\n");
        let backend = GraphvizBackend::new(Some(bin.path().to_path_buf()));
        let target = OutputTarget::new(out.path(), "Graph");
        let graph = sample_graph();

        let output = backend.build(&graph, &target).unwrap();

        let image = output.image_path.unwrap();
        assert_eq!(image, out.path().join("Graph.gv.png"));
        let written = fs::read_to_string(&image).unwrap();
        assert_eq!(written, format!("-Tpng\n{}", graph.to_dot()));
    }

    #[cfg(unix)]
    #[test]
    fn test_engine_failure() {
        let _guard = spawn_lock();
        let bin = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fake_engine(bin.path(), "#!/bin/sh\necho 'syntax error in line 1' >&2\nexit 3\n");
        let backend = GraphvizBackend::new(Some(bin.path().to_path_buf()));
        let target = OutputTarget::new(out.path(), "Graph");

        let err = backend.build(&sample_graph(), &target).unwrap_err();

        match err {
            RenderError::EngineFailed { status, stderr, .. } => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "syntax error in line 1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
