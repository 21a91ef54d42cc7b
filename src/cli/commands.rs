//! CLI command implementations.

use std::io::{self, Write};
use std::path::Path;

use crate::format::{EdgeListReader, EdgeListWriter, MatrixWriter};
use crate::graph::UndirectedGraph;
use crate::types::GraphResult;

/// Load an edge list from a file, or from stdin when the path is absent or `-`.
pub fn load_graph(path: Option<&Path>) -> GraphResult<UndirectedGraph> {
    match path {
        Some(p) if p != Path::new("-") => {
            log::debug!("reading edge list from {}", p.display());
            EdgeListReader::read_from_file(p)
        }
        _ => {
            log::debug!("reading edge list from stdin");
            EdgeListReader::read_from(&mut io::stdin().lock())
        }
    }
}

/// Print the adjacency matrix of an edge-list graph.
pub fn cmd_matrix(path: Option<&Path>, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let mut out = io::stdout().lock();
    write_matrix(&graph, json, &mut out)
}

/// Print each node's 0-indexed neighbor list.
pub fn cmd_lists(path: Option<&Path>, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let mut out = io::stdout().lock();
    write_lists(&graph, json, &mut out)
}

/// Print a summary of an edge-list graph.
pub fn cmd_info(path: Option<&Path>, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let mut out = io::stdout().lock();
    write_info(&graph, json, &mut out)
}

/// Print the graph back as normalized edge-list text.
pub fn cmd_edges(path: Option<&Path>) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let mut out = io::stdout().lock();
    EdgeListWriter::write_to(&graph, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Render the matrix as text or as `{"nodes", "matrix"}` JSON.
pub fn write_matrix(graph: &UndirectedGraph, json: bool, out: &mut impl Write) -> GraphResult<()> {
    if json {
        let matrix: Vec<Vec<u8>> = graph
            .adjacency_matrix()?
            .into_iter()
            .map(|row| row.into_iter().map(u8::from).collect())
            .collect();
        let value = serde_json::json!({
            "nodes": graph.node_count(),
            "matrix": matrix,
        });
        writeln!(out, "{}", value)?;
    } else {
        MatrixWriter::write_to(graph, out)?;
    }
    Ok(())
}

/// Render the neighbor lists as `node: n1 n2` lines or as JSON.
pub fn write_lists(graph: &UndirectedGraph, json: bool, out: &mut impl Write) -> GraphResult<()> {
    if json {
        let value = serde_json::json!({
            "nodes": graph.node_count(),
            "adjacencies": graph.adjacencies(),
        });
        writeln!(out, "{}", value)?;
    } else {
        for (node, adjacency) in graph.adjacencies().iter().enumerate() {
            let neighbors: Vec<String> = adjacency.iter().map(|n| n.to_string()).collect();
            if neighbors.is_empty() {
                writeln!(out, "{}:", node)?;
            } else {
                writeln!(out, "{}: {}", node, neighbors.join(" "))?;
            }
        }
    }
    Ok(())
}

/// Render node count, entry count, symmetry and isolated nodes.
pub fn write_info(graph: &UndirectedGraph, json: bool, out: &mut impl Write) -> GraphResult<()> {
    let symmetric = graph.is_symmetric();
    if json {
        let value = serde_json::json!({
            "nodes": graph.node_count(),
            "entries": graph.entry_count(),
            "symmetric": symmetric,
            "isolated": graph.isolated_count(),
        });
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&value).unwrap_or_default()
        )?;
    } else {
        writeln!(out, "Nodes: {}", graph.node_count())?;
        writeln!(out, "Entries: {}", graph.entry_count())?;
        writeln!(out, "Symmetric: {}", if symmetric { "yes" } else { "no" })?;
        writeln!(out, "Isolated nodes: {}", graph.isolated_count())?;
    }
    Ok(())
}
