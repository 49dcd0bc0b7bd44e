//! Read a graph description file from disk

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use crate::error::LoadError;
use crate::model::GraphDocument;

/// Load and parse the graph description at `path`.
///
/// The file handle lives only for the duration of the parse and is dropped on
/// every return path.
pub fn load(path: impl AsRef<Path>) -> Result<GraphDocument, LoadError> {
    let path = path.as_ref();
    tracing::debug!("Loading graph description: {}", path.display());

    let file = File::open(path).map_err(|source| LoadError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let value: serde_json::Value =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            if source.is_io() {
                LoadError::NotFound {
                    path: path.to_path_buf(),
                    source: io::Error::from(source),
                }
            } else {
                LoadError::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

    let doc = GraphDocument::from_value(value, path.to_path_buf())?;
    tracing::debug!(
        "Loaded {} nodes, {} edges from {}",
        doc.node_count(),
        doc.edge_count(),
        path.display()
    );
    Ok(doc)
}
