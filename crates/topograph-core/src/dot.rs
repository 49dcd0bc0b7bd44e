//! Graphviz DOT emission for drawable graphs

use std::borrow::Cow;
use std::fmt;

use crate::graph::DrawableGraph;
use crate::style::Attributes;

const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// Borrowed view of a graph that formats as DOT source.
pub struct Dot<'a> {
    graph: &'a DrawableGraph,
}

impl DrawableGraph {
    pub fn dot(&self) -> Dot<'_> {
        Dot { graph: self }
    }

    /// Undirected DOT source for this graph.
    pub fn to_dot(&self) -> String {
        self.dot().to_string()
    }
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "graph {{")?;
        for node in self.graph.nodes() {
            writeln!(
                f,
                "\t{} [{}]",
                quote(&node.key),
                attr_list(&node.label, &node.style.attributes())
            )?;
        }
        for edge in self.graph.edges() {
            writeln!(
                f,
                "\t{} -- {} [{}]",
                quote(&edge.from),
                quote(&edge.to),
                attr_list(&edge.label, &edge.style.attributes())
            )?;
        }
        let globals: Vec<String> = self
            .graph
            .attributes()
            .attributes()
            .iter()
            .map(|(k, v)| format!("{}={}", k, quote(v)))
            .collect();
        writeln!(f, "\t{}", globals.join(" "))?;
        writeln!(f, "}}")
    }
}

/// `label=...` followed by the remaining attributes in name order.
fn attr_list(label: &str, attrs: &Attributes) -> String {
    std::iter::once(format!("label={}", quote(label)))
        .chain(attrs.iter().map(|(k, v)| format!("{}={}", k, quote(v))))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Quote `id` unless it is already a valid bare DOT ID.
pub fn quote(id: &str) -> Cow<'_, str> {
    if is_bare_id(id) || is_numeral(id) {
        Cow::Borrowed(id)
    } else {
        Cow::Owned(format!("\"{}\"", escape(id)))
    }
}

/// Escape `"` unless a backslash already escapes it, and double an odd
/// trailing backslash so the closing quote stays unescaped. Other backslash
/// sequences are kept for Graphviz (`\n`, `\l`, ...).
fn escape(id: &str) -> String {
    let mut out = String::with_capacity(id.len() + 2);
    let mut backslashes = 0usize;
    for c in id.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' if backslashes % 2 == 0 => {
                out.push('\\');
                backslashes = 0;
            }
            _ => backslashes = 0,
        }
        out.push(c);
    }
    if backslashes % 2 == 1 {
        out.push('\\');
    }
    out
}

fn is_bare_id(id: &str) -> bool {
    let ident_char = |c: char| c == '_' || c.is_ascii_alphanumeric() || !c.is_ascii();
    let mut chars = id.chars();
    match chars.next() {
        Some(first) if ident_char(first) && !first.is_ascii_digit() => {}
        _ => return false,
    }
    chars.all(ident_char) && !KEYWORDS.iter().any(|kw| kw.eq_ignore_ascii_case(id))
}

fn is_numeral(id: &str) -> bool {
    let digits = id.strip_prefix('-').unwrap_or(id);
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    match frac {
        None => !int.is_empty() && all_digits(int),
        Some(frac) => all_digits(int) && all_digits(frac) && !(int.is_empty() && frac.is_empty()),
    }
}
