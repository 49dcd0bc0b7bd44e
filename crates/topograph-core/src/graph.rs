//! Drawable graph wrapper using petgraph::StableUnGraph keyed by node identifier

use std::collections::HashMap;

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};

use crate::error::RenderError;
use crate::style::{EdgeStyle, Engine, GraphAttributes, NodeStyle, OutputFormat};

/// A node registered for drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledNode {
    /// Unique key, also the DOT node ID.
    pub key: String,
    pub label: String,
    pub style: NodeStyle,
}

/// An edge registered for drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledEdge {
    pub from: String,
    pub to: String,
    pub label: String,
    pub style: EdgeStyle,
}

/// Styled undirected multigraph ready to be laid out by an external engine.
pub struct DrawableGraph {
    inner: StableUnGraph<StyledNode, StyledEdge>,
    keys: HashMap<String, NodeIndex>,
    attributes: GraphAttributes,
    engine: Engine,
    format: OutputFormat,
}

impl std::fmt::Debug for DrawableGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawableGraph")
            .field("node_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .field("engine", &self.engine)
            .field("format", &self.format)
            .finish()
    }
}

impl DrawableGraph {
    pub fn new(engine: Engine, format: OutputFormat) -> Self {
        DrawableGraph {
            inner: StableUnGraph::default(),
            keys: HashMap::new(),
            attributes: GraphAttributes::default(),
            engine,
            format,
        }
    }

    /// Register a node with the given style. Fails if `key` is already present.
    pub fn add_node(&mut self, key: &str, style: NodeStyle) -> Result<NodeIndex, RenderError> {
        if self.keys.contains_key(key) {
            return Err(RenderError::DuplicateNode(key.to_string()));
        }
        let idx = self.inner.add_node(StyledNode {
            key: key.to_string(),
            label: key.to_string(),
            style,
        });
        self.keys.insert(key.to_string(), idx);
        Ok(idx)
    }

    /// Register an edge between two already registered nodes.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        label: String,
        style: EdgeStyle,
    ) -> Result<EdgeIndex, RenderError> {
        let unknown = |missing: &str| RenderError::UnknownEndpoint {
            from: from.to_string(),
            to: to.to_string(),
            missing: missing.to_string(),
        };
        let source = *self.keys.get(from).ok_or_else(|| unknown(from))?;
        let target = *self.keys.get(to).ok_or_else(|| unknown(to))?;
        let edge = StyledEdge {
            from: from.to_string(),
            to: to.to_string(),
            label,
            style,
        };
        Ok(self.inner.add_edge(source, target, edge))
    }

    pub fn contains_node(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    /// Look up a node by key.
    pub fn node(&self, key: &str) -> Option<&StyledNode> {
        self.keys
            .get(key)
            .and_then(|&idx| self.inner.node_weight(idx))
    }

    /// Iterate over nodes in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = &StyledNode> {
        self.inner
            .node_indices()
            .filter_map(move |idx| self.inner.node_weight(idx))
    }

    /// Iterate over edges in registration order.
    pub fn edges(&self) -> impl Iterator<Item = &StyledEdge> {
        self.inner
            .edge_indices()
            .filter_map(move |idx| self.inner.edge_weight(idx))
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn attributes(&self) -> &GraphAttributes {
        &self.attributes
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

impl PartialEq for DrawableGraph {
    fn eq(&self, other: &Self) -> bool {
        self.engine == other.engine
            && self.format == other.format
            && self.attributes == other.attributes
            && self.nodes().eq(other.nodes())
            && self.edges().eq(other.edges())
    }
}

impl Default for DrawableGraph {
    fn default() -> Self {
        Self::new(Engine::default(), OutputFormat::default())
    }
}
