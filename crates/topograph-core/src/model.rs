//! Input data structures for a graph description file

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// The parsed input: node identifiers plus weighted edges between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeRecord>,
}

/// A single `{from, to, weight}` entry of the `edges` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

/// Edge weight as written in the file. Only used as a label, never summed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Weight {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weight::Number(n) => write!(f, "{}", n),
            Weight::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Weight {
    fn from(value: u64) -> Self {
        Weight::Number(value.into())
    }
}

impl From<&str> for Weight {
    fn from(value: &str) -> Self {
        Weight::Text(value.to_string())
    }
}

impl EdgeRecord {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: impl Into<Weight>) -> Self {
        EdgeRecord {
            from: from.into(),
            to: to.into(),
            weight: weight.into(),
        }
    }
}

impl GraphDocument {
    /// Origin reported in errors for documents that did not come from a file.
    pub const INLINE_ORIGIN: &'static str = "<inline>";

    /// Parse a document held in memory.
    ///
    /// Syntax errors are reported as [`LoadError::Parse`], well-formed JSON of
    /// the wrong shape as [`LoadError::Schema`].
    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        let origin = PathBuf::from(Self::INLINE_ORIGIN);
        let value: serde_json::Value = serde_json::from_str(text).map_err(|source| LoadError::Parse {
            path: origin.clone(),
            source,
        })?;
        Self::from_value(value, origin)
    }

    pub(crate) fn from_value(value: serde_json::Value, origin: PathBuf) -> Result<Self, LoadError> {
        serde_json::from_value(value).map_err(|source| LoadError::Schema { path: origin, source })
    }

    /// Number of node identifiers declared in `nodes`.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of records in `edges`.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
