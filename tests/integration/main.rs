//! Integration tests for Topograph
//!
//! These tests run the loader, renderer, and backends together against files
//! on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use topograph_core::{load, render, render_with, EndpointPolicy, LoadError, RenderError, RenderOptions};
use topograph_render::{create_backend, BackendOptions, OutputTarget};

fn write_input(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("graph.json");
    fs::write(&path, contents).unwrap();
    path
}

fn bundled_input() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join("graph.json")
}

/// The bundled sample loads and every declared node and edge survives rendering
#[test]
fn test_bundled_sample() {
    let doc = load(bundled_input()).unwrap();
    let graph = render(&doc).unwrap();

    assert_eq!(graph.node_count(), doc.nodes.len());
    assert_eq!(graph.edge_count(), doc.edges.len());
    for key in &doc.nodes {
        assert!(graph.contains_node(key), "missing node {key}");
    }
}

/// Loading a file and writing it through the source backend yields the DOT text
#[test]
fn test_load_render_write_source() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        r#"{"nodes": ["A", "B"], "edges": [{"from": "A", "to": "B", "weight": 3}]}"#,
    );

    let graph = render(&load(&input).unwrap()).unwrap();
    let backend = create_backend("source", BackendOptions::default()).unwrap();
    let output = backend
        .build(&graph, &OutputTarget::new(dir.path().join("out"), "Graph"))
        .unwrap();

    let dot = fs::read_to_string(&output.source_path).unwrap();
    assert!(dot.starts_with("graph {\n"));
    assert!(dot.contains("\tA [label=A fillcolor=lightblue fontsize=12 shape=ellipse style=filled]\n"));
    assert!(dot.contains("\tA -- B [label=3 color=darkblue fontsize=10]\n"));
    assert!(dot.contains("\toverlap=false splines=true\n"));
}

/// A missing input fails before any output is produced
#[test]
fn test_missing_input_produces_nothing() {
    let dir = TempDir::new().unwrap();
    let err = load(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, LoadError::NotFound { .. }));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

/// Truncated JSON is a parse error, not a schema error
#[test]
fn test_truncated_input() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, r#"{"nodes": ["A", "B"], "edges": [{"from": "A", "to": "#);
    assert!(matches!(load(&input), Err(LoadError::Parse { .. })));
}

/// Edge endpoints missing from `nodes` follow the configured policy
#[test]
fn test_endpoint_policies() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        r#"{"nodes": ["A"], "edges": [{"from": "A", "to": "B", "weight": "x"}]}"#,
    );
    let doc = load(&input).unwrap();

    assert!(matches!(render(&doc), Err(RenderError::UnknownEndpoint { .. })));

    let options = RenderOptions {
        endpoint_policy: EndpointPolicy::AutoRegister,
        ..RenderOptions::default()
    };
    let graph = render_with(&doc, &options).unwrap();
    assert_eq!(graph.node_count(), 2);
    assert!(graph.to_dot().contains("\tB [label=B fillcolor=lightblue"));
}

/// A Graphviz backend pointed at a directory without engines reports the missing engine
#[test]
fn test_graphviz_without_engine() {
    let bin = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let graph = render(&load(bundled_input()).unwrap()).unwrap();
    let backend = create_backend(
        "graphviz",
        BackendOptions {
            graphviz_bin: Some(bin.path().to_path_buf()),
        },
    )
    .unwrap();

    let err = backend
        .build(&graph, &OutputTarget::new(out.path(), "Graph"))
        .unwrap_err();
    assert!(matches!(err, RenderError::EngineNotFound { .. }));
    assert!(!out.path().join("Graph.gv.png").exists());
}
