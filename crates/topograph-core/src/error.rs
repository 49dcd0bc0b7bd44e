//! Error types for loading and rendering

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Failure to turn a file into a [`crate::GraphDocument`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file is missing or could not be opened.
    #[error("cannot read graph file {}: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The content is not well-formed JSON.
    #[error("graph file {} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Valid JSON, but `nodes`/`edges` are missing or have the wrong type.
    #[error("graph file {} has an unexpected shape: {source}", .path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure while building a drawable graph or handing it to a backend.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("node `{0}` is declared more than once")]
    DuplicateNode(String),

    #[error("edge `{from}` -- `{to}` references unknown node `{missing}`")]
    UnknownEndpoint {
        from: String,
        to: String,
        missing: String,
    },

    #[error("unknown render backend: {0}")]
    UnknownBackend(String),

    #[error("layout engine `{}` could not be started: {source}", .program.display())]
    EngineNotFound {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("layout engine `{}` exited with {status}: {stderr}", .program.display())]
    EngineFailed {
        program: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error("cannot open viewer for {}: {source}", .path.display())]
    Viewer {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
