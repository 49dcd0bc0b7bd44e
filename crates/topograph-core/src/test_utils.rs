//! Shared fixtures for core tests

use crate::model::{EdgeRecord, GraphDocument};

/// Build a document from node names and `(from, to, weight)` triples.
pub fn doc(nodes: &[&str], edges: &[(&str, &str, u64)]) -> GraphDocument {
    GraphDocument {
        nodes: nodes.iter().map(|n| n.to_string()).collect(),
        edges: edges
            .iter()
            .map(|&(from, to, weight)| EdgeRecord::new(from, to, weight))
            .collect(),
    }
}

/// The two-node example graph: A -- B with weight 3.
pub fn two_node_doc() -> GraphDocument {
    doc(&["A", "B"], &[("A", "B", 3)])
}

/// A small network topology with mixed weight kinds.
pub fn topology_doc() -> GraphDocument {
    GraphDocument::from_json_str(
        r#"{
            "nodes": ["A", "B", "C", "D", "E"],
            "edges": [
                {"from": "A", "to": "B", "weight": 7},
                {"from": "A", "to": "C", "weight": 9},
                {"from": "B", "to": "C", "weight": 10},
                {"from": "C", "to": "D", "weight": 2.5},
                {"from": "D", "to": "E", "weight": "slow"},
                {"from": "B", "to": "E", "weight": 15}
            ]
        }"#,
    )
    .expect("fixture is valid")
}
