//! Topograph Core — graph document model, loader, and styled drawable graph

pub mod model;
pub mod error;
pub mod loader;
pub mod style;
pub mod graph;
pub mod render;
pub mod dot;


#[cfg(test)]
pub mod test_utils;

pub use model::{GraphDocument, EdgeRecord, Weight};
pub use error::{LoadError, RenderError};
pub use loader::load;
pub use style::{Engine, OutputFormat, NodeStyle, EdgeStyle, GraphAttributes};
pub use graph::{DrawableGraph, StyledNode, StyledEdge};
pub use render::{render, render_with, RenderOptions, EndpointPolicy};
