//! Backend trait and the files it produces

use std::fs;
use std::path::{Path, PathBuf};

use topograph_core::{DrawableGraph, OutputFormat, RenderError};

/// Where a backend writes its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub directory: PathBuf,
    /// File name without extensions, e.g. `Graph` for `Graph.gv`.
    pub file_stem: String,
}

impl OutputTarget {
    pub fn new(directory: impl Into<PathBuf>, file_stem: impl Into<String>) -> Self {
        OutputTarget {
            directory: directory.into(),
            file_stem: file_stem.into(),
        }
    }

    /// `<dir>/<stem>.gv`
    pub fn source_path(&self) -> PathBuf {
        self.directory.join(format!("{}.gv", self.file_stem))
    }

    /// `<dir>/<stem>.gv.<ext>`
    pub fn image_path(&self, format: OutputFormat) -> PathBuf {
        self.directory
            .join(format!("{}.gv.{}", self.file_stem, format.extension()))
    }

    /// Create the output directory and write the DOT source into it.
    pub fn write_source(&self, graph: &DrawableGraph) -> Result<PathBuf, RenderError> {
        if !self.directory.as_os_str().is_empty() {
            fs::create_dir_all(&self.directory)?;
        }
        let path = self.source_path();
        fs::write(&path, graph.to_dot())?;
        tracing::debug!("DOT source written: {}", path.display());
        Ok(path)
    }
}

impl Default for OutputTarget {
    fn default() -> Self {
        OutputTarget::new(".", "Graph")
    }
}

/// Files produced by [`RenderBackend::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    pub source_path: PathBuf,
    /// Present when the backend ran a layout engine.
    pub image_path: Option<PathBuf>,
}

impl RenderedOutput {
    /// The file a viewer should open: the image if there is one, else the source.
    pub fn primary_path(&self) -> &Path {
        self.image_path.as_deref().unwrap_or(&self.source_path)
    }
}

/// Backend-specific settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendOptions {
    /// Directory holding the Graphviz executables. Uses `PATH` when unset.
    pub graphviz_bin: Option<PathBuf>,
}

/// Something that can lay out, write, and show a drawable graph.
pub trait RenderBackend {
    fn name(&self) -> &'static str;

    /// Write the graph to disk in the backend's output format.
    fn build(&self, graph: &DrawableGraph, target: &OutputTarget) -> Result<RenderedOutput, RenderError>;

    /// Present a previously built output to the user.
    fn display(&self, output: &RenderedOutput) -> Result<(), RenderError>;
}
