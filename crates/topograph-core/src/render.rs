//! Turn a graph document into a styled drawable graph

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::graph::DrawableGraph;
use crate::model::GraphDocument;
use crate::style::{EdgeStyle, Engine, NodeStyle, OutputFormat};

/// What to do with an edge whose endpoint is not listed in `nodes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndpointPolicy {
    /// Fail with [`RenderError::UnknownEndpoint`].
    #[default]
    Reject,
    /// Register the missing node with the standard node style.
    AutoRegister,
}

impl fmt::Display for EndpointPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointPolicy::Reject => f.write_str("reject"),
            EndpointPolicy::AutoRegister => f.write_str("auto-register"),
        }
    }
}

impl FromStr for EndpointPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(EndpointPolicy::Reject),
            "auto-register" => Ok(EndpointPolicy::AutoRegister),
            _ => Err(format!("unknown endpoint policy `{}`", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub engine: Engine,
    pub format: OutputFormat,
    pub endpoint_policy: EndpointPolicy,
}

/// Build a drawable graph with the default engine, format and endpoint policy.
pub fn render(doc: &GraphDocument) -> Result<DrawableGraph, RenderError> {
    render_with(doc, &RenderOptions::default())
}

/// Build a drawable graph from `doc`.
///
/// Every declared node is registered once with [`NodeStyle::DEFAULT`]; every
/// edge is registered once with [`EdgeStyle::DEFAULT`] and labelled with its
/// weight. The result does not depend on anything but `doc` and `options`.
pub fn render_with(doc: &GraphDocument, options: &RenderOptions) -> Result<DrawableGraph, RenderError> {
    let mut graph = DrawableGraph::new(options.engine, options.format);

    for node in &doc.nodes {
        graph.add_node(node, NodeStyle::DEFAULT)?;
    }

    for edge in &doc.edges {
        if options.endpoint_policy == EndpointPolicy::AutoRegister {
            for endpoint in [&edge.from, &edge.to] {
                if !graph.contains_node(endpoint) {
                    tracing::debug!("Registering implicit node `{}`", endpoint);
                    graph.add_node(endpoint, NodeStyle::DEFAULT)?;
                }
            }
        }
        graph.add_edge(&edge.from, &edge.to, edge.weight.to_string(), EdgeStyle::DEFAULT)?;
    }

    tracing::debug!(
        "Built drawable graph: {} nodes, {} edges, engine {}",
        graph.node_count(),
        graph.edge_count(),
        graph.engine()
    );
    Ok(graph)
}
