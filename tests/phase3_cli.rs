//! Phase 3 tests: CLI command rendering.

use std::io::Write;

use tempfile::NamedTempFile;

use undirected_graph::cli::commands::{load_graph, write_info, write_lists, write_matrix};
use undirected_graph::graph::UndirectedGraph;

fn render<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>),
{
    let mut out = Vec::new();
    f(&mut out);
    String::from_utf8(out).unwrap()
}

fn path_graph() -> UndirectedGraph {
    "3 2\n1 2\n1 3".parse().unwrap()
}

#[test]
fn test_load_graph_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "3 2").unwrap();
    writeln!(file, "1 2").unwrap();
    writeln!(file, "1 3").unwrap();
    file.flush().unwrap();

    let graph = load_graph(Some(file.path())).unwrap();
    assert_eq!(graph, path_graph());
}

#[test]
fn test_load_graph_malformed_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "3 2\n1 2").unwrap();
    file.flush().unwrap();

    let err = load_graph(Some(file.path())).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn test_matrix_text() {
    let graph = path_graph();
    let text = render(|out| write_matrix(&graph, false, out).unwrap());
    assert_eq!(text, "0 1 1 \n1 0 0 \n1 0 0 \n");
}

#[test]
fn test_matrix_json() {
    let graph = path_graph();
    let text = render(|out| write_matrix(&graph, true, out).unwrap());
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["nodes"], 3);
    assert_eq!(value["matrix"], serde_json::json!([[0, 1, 1], [1, 0, 0], [1, 0, 0]]));
}

#[test]
fn test_lists_text() {
    let graph: UndirectedGraph = "3 1\n1 2".parse().unwrap();
    let text = render(|out| write_lists(&graph, false, out).unwrap());
    assert_eq!(text, "0: 1\n1: 0\n2:\n");
}

#[test]
fn test_lists_json() {
    let graph = path_graph();
    let text = render(|out| write_lists(&graph, true, out).unwrap());
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["adjacencies"], serde_json::json!([[1, 2], [0], [0]]));
}

#[test]
fn test_info_text() {
    let graph: UndirectedGraph = "4 2\n1 2\n1 1".parse().unwrap();
    let text = render(|out| write_info(&graph, false, out).unwrap());
    assert_eq!(
        text,
        "Nodes: 4\nEntries: 4\nSymmetric: yes\nIsolated nodes: 2\n"
    );
}

#[test]
fn test_info_json_asymmetric() {
    let graph = UndirectedGraph::from_adjacencies(&[vec![1], vec![]]);
    let text = render(|out| write_info(&graph, true, out).unwrap());
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["symmetric"], false);
    assert_eq!(value["entries"], 1);
    assert_eq!(value["isolated"], 1);
}
