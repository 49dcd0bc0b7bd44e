//! Run configuration: TOML file, then command-line overrides

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use serde::Deserialize;
use topograph_core::{EndpointPolicy, Engine, OutputFormat, RenderOptions};
use topograph_render::{BackendOptions, OutputTarget};

/// Config file picked up from the working directory when `--config` is absent.
pub const CONFIG_FILE: &str = "topograph.toml";

/// Input file used when neither the config file nor the CLI names one.
pub const DEFAULT_INPUT: &str = "data/graph.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Graph description to load.
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub file_stem: String,
    pub engine: Engine,
    pub format: OutputFormat,
    pub backend: String,
    /// Open the result in the system viewer after building it.
    pub view: bool,
    pub endpoint_policy: EndpointPolicy,
    pub graphviz_bin: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            file_stem: "Graph".to_string(),
            engine: Engine::default(),
            format: OutputFormat::default(),
            backend: "graphviz".to_string(),
            view: true,
            endpoint_policy: EndpointPolicy::default(),
            graphviz_bin: None,
        }
    }
}

/// Per-run flags that take precedence over the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct Overrides {
    /// Graph description file (JSON)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory for the generated .gv and image files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Base name of the generated files
    #[arg(long)]
    pub stem: Option<String>,

    /// Layout engine (dot, neato, fdp, sfdp, circo, twopi)
    #[arg(short, long)]
    pub engine: Option<Engine>,

    /// Output format (png, jpg, gif, svg, pdf)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Render backend (graphviz, source)
    #[arg(short, long)]
    pub backend: Option<String>,

    /// Directory containing the Graphviz executables
    #[arg(long)]
    pub graphviz_bin: Option<PathBuf>,

    /// Do not open the result in a viewer
    #[arg(long)]
    pub no_view: bool,

    /// Create nodes for edge endpoints missing from `nodes`
    #[arg(long)]
    pub auto_register: bool,
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Load `explicit` if given, else `topograph.toml` in the working
    /// directory if present, else defaults.
    pub fn discover(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let implicit = Path::new(CONFIG_FILE);
                if implicit.is_file() {
                    tracing::debug!("Using config file {}", implicit.display());
                    Self::from_file(implicit)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(input) = &overrides.input {
            self.input_path = input.clone();
        }
        if let Some(dir) = &overrides.output_dir {
            self.output_dir = dir.clone();
        }
        if let Some(stem) = &overrides.stem {
            self.file_stem = stem.clone();
        }
        if let Some(engine) = overrides.engine {
            self.engine = engine;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if let Some(backend) = &overrides.backend {
            self.backend = backend.clone();
        }
        if let Some(bin) = &overrides.graphviz_bin {
            self.graphviz_bin = Some(bin.clone());
        }
        if overrides.no_view {
            self.view = false;
        }
        if overrides.auto_register {
            self.endpoint_policy = EndpointPolicy::AutoRegister;
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            engine: self.engine,
            format: self.format,
            endpoint_policy: self.endpoint_policy,
        }
    }

    pub fn output_target(&self) -> OutputTarget {
        OutputTarget::new(&self.output_dir, &self.file_stem)
    }

    pub fn backend_options(&self) -> BackendOptions {
        BackendOptions {
            graphviz_bin: self.graphviz_bin.clone(),
        }
    }
}
