//! Visual attributes applied to every node, edge, and graph

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Graphviz layout engine used to position nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Hierarchical layout.
    Dot,
    /// Spring model layout.
    #[default]
    Neato,
    /// Force-directed placement.
    Fdp,
    /// Multiscale force-directed placement for large graphs.
    Sfdp,
    Circo,
    Twopi,
}

impl Engine {
    pub const ALL: [Engine; 6] = [
        Engine::Dot,
        Engine::Neato,
        Engine::Fdp,
        Engine::Sfdp,
        Engine::Circo,
        Engine::Twopi,
    ];

    /// Name of the Graphviz executable implementing this engine.
    pub fn program(&self) -> &'static str {
        match self {
            Engine::Dot => "dot",
            Engine::Neato => "neato",
            Engine::Fdp => "fdp",
            Engine::Sfdp => "sfdp",
            Engine::Circo => "circo",
            Engine::Twopi => "twopi",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

impl FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Engine::ALL
            .into_iter()
            .find(|e| e.program().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown layout engine `{}`", s))
    }
}

/// Image format produced by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Jpg,
    Gif,
    Svg,
    Pdf,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Png,
        OutputFormat::Jpg,
        OutputFormat::Gif,
        OutputFormat::Svg,
        OutputFormat::Pdf,
    ];

    /// Value passed to `-T` and used as the file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpg => "jpg",
            OutputFormat::Gif => "gif",
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
        }
    }

    /// Whether the format is a raster image.
    pub fn is_raster(&self) -> bool {
        matches!(self, OutputFormat::Png | OutputFormat::Jpg | OutputFormat::Gif)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = if s.eq_ignore_ascii_case("jpeg") { "jpg" } else { s };
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown output format `{}`", s))
    }
}

/// Attribute name → value, iterated in name order.
pub type Attributes = BTreeMap<&'static str, String>;

/// Style shared by every node: a filled light-blue ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle {
    pub style: &'static str,
    pub fill_color: &'static str,
    pub shape: &'static str,
    pub font_size: u32,
}

impl NodeStyle {
    pub const DEFAULT: NodeStyle = NodeStyle {
        style: "filled",
        fill_color: "lightblue",
        shape: "ellipse",
        font_size: 12,
    };

    pub fn attributes(&self) -> Attributes {
        Attributes::from([
            ("style", self.style.to_string()),
            ("fillcolor", self.fill_color.to_string()),
            ("shape", self.shape.to_string()),
            ("fontsize", self.font_size.to_string()),
        ])
    }
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Style shared by every edge: dark-blue line with a small label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeStyle {
    pub color: &'static str,
    pub font_size: u32,
}

impl EdgeStyle {
    pub const DEFAULT: EdgeStyle = EdgeStyle {
        color: "darkblue",
        font_size: 10,
    };

    pub fn attributes(&self) -> Attributes {
        Attributes::from([
            ("color", self.color.to_string()),
            ("fontsize", self.font_size.to_string()),
        ])
    }
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Graph-wide rendering hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphAttributes {
    /// When false, the engine removes node overlaps.
    pub overlap: bool,
    /// Draw edges as curves routed around nodes.
    pub splines: bool,
}

impl GraphAttributes {
    pub fn attributes(&self) -> Attributes {
        Attributes::from([
            ("overlap", self.overlap.to_string()),
            ("splines", self.splines.to_string()),
        ])
    }
}

impl Default for GraphAttributes {
    fn default() -> Self {
        GraphAttributes {
            overlap: false,
            splines: true,
        }
    }
}
