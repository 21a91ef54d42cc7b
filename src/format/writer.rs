//! Writes graphs as matrix text or edge-list text.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::graph::UndirectedGraph;
use crate::types::{matrix_cell, GraphError, GraphResult, NodeId, TEXT_INDEX_BASE};

/// Writer for the adjacency-matrix text format.
///
/// Output for the 3-node path graph `1-2, 1-3`:
///
/// ```text
/// 0 1 1
/// 1 0 0
/// 1 0 0
/// ```
///
/// Every cell is followed by a single space, including the last one on a line.
pub struct MatrixWriter;

impl MatrixWriter {
    /// Write the matrix text to a file.
    pub fn write_to_file(graph: &UndirectedGraph, path: &Path) -> GraphResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write the matrix text to any writer.
    pub fn write_to(graph: &UndirectedGraph, writer: &mut impl Write) -> GraphResult<()> {
        let matrix = graph.adjacency_matrix()?;
        let mut line = String::with_capacity(matrix.len() * 2 + 1);
        for row in &matrix {
            line.clear();
            for &cell in row {
                line.push(matrix_cell(cell));
                line.push(' ');
            }
            line.push('\n');
            writer.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    /// Render the matrix text as a string.
    pub fn to_string(graph: &UndirectedGraph) -> GraphResult<String> {
        let mut buf = Vec::new();
        Self::write_to(graph, &mut buf)?;
        into_text(buf)
    }
}

/// Writer for the edge-list text format read by
/// [`EdgeListReader`](super::EdgeListReader).
///
/// Emits `n m` and then one 1-indexed `a b` line per undirected edge, taking
/// each pair from the lower-numbered endpoint's list. Reading the output back
/// gives the same neighbor multisets; neighbor order may differ.
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Write the edge list to a file.
    pub fn write_to_file(graph: &UndirectedGraph, path: &Path) -> GraphResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write the edge list to any writer.
    pub fn write_to(graph: &UndirectedGraph, writer: &mut impl Write) -> GraphResult<()> {
        let edges = Self::edges(graph)?;
        writeln!(writer, "{} {}", graph.node_count(), edges.len())?;
        for (a, b) in edges {
            writeln!(
                writer,
                "{} {}",
                a as i64 + TEXT_INDEX_BASE,
                b as i64 + TEXT_INDEX_BASE
            )?;
        }
        Ok(())
    }

    /// Render the edge list as a string.
    pub fn to_string(graph: &UndirectedGraph) -> GraphResult<String> {
        let mut buf = Vec::new();
        Self::write_to(graph, &mut buf)?;
        into_text(buf)
    }

    /// Collect the undirected edges of a symmetric graph as 0-indexed pairs.
    pub fn edges(graph: &UndirectedGraph) -> GraphResult<Vec<(NodeId, NodeId)>> {
        let nodes = graph.node_count();
        let mut edges = Vec::new();
        for (u, adjacency) in graph.adjacencies().iter().enumerate() {
            let mut self_loops = 0usize;
            for &v in adjacency {
                if v >= nodes {
                    return Err(GraphError::NodeOutOfRange {
                        node: v as i64,
                        node_count: nodes,
                    });
                }
                if v == u {
                    self_loops += 1;
                    if self_loops % 2 == 0 {
                        edges.push((u, u));
                    }
                } else if u < v {
                    edges.push((u, v));
                }
            }
            if self_loops % 2 != 0 {
                return Err(GraphError::Asymmetric { from: u, to: u });
            }
        }

        if !graph.is_symmetric() {
            let (from, to) = first_unmatched(graph);
            return Err(GraphError::Asymmetric { from, to });
        }
        Ok(edges)
    }
}

fn into_text(buf: Vec<u8>) -> GraphResult<String> {
    String::from_utf8(buf)
        .map_err(|e| GraphError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Locate an entry whose reverse count differs. Only called on asymmetric,
/// in-range graphs.
fn first_unmatched(graph: &UndirectedGraph) -> (NodeId, NodeId) {
    let lists = graph.adjacencies();
    for (u, adjacency) in lists.iter().enumerate() {
        for &v in adjacency {
            let forward = adjacency.iter().filter(|&&x| x == v).count();
            let backward = lists[v].iter().filter(|&&x| x == u).count();
            if forward != backward {
                return (u, v);
            }
        }
    }
    (0, 0)
}
