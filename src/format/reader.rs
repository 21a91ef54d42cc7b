//! Reads edge-list text into an in-memory graph.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::graph::{GraphBuilder, UndirectedGraph};
use crate::types::{GraphError, GraphResult, NodeId, MAX_TEXT_COUNT, TEXT_INDEX_BASE};

use super::tokenizer::TokenReader;

/// Reader for the edge-list text format.
///
/// The input is `n m` followed by `m` pairs of 1-indexed node ids, all
/// separated by arbitrary whitespace:
///
/// ```text
/// 3 2
/// 1 2
/// 1 3
/// ```
///
/// Each pair is stored in both endpoints' neighbor lists. Anything after the
/// last declared pair is left unread. Counts must lie in `0..=i32::MAX`.
pub struct EdgeListReader;

impl EdgeListReader {
    /// Read an edge-list file into an UndirectedGraph.
    pub fn read_from_file(path: &Path) -> GraphResult<UndirectedGraph> {
        let file = File::open(path)?;
        Self::read_from(&mut BufReader::new(file))
    }

    /// Parse an in-memory edge list.
    pub fn parse_str(input: &str) -> GraphResult<UndirectedGraph> {
        Self::read_from(&mut input.as_bytes())
    }

    /// Read from any buffered reader into an UndirectedGraph.
    pub fn read_from(reader: &mut impl BufRead) -> GraphResult<UndirectedGraph> {
        Self::read_tokens(&mut TokenReader::new(reader))
    }

    /// Read a graph from an existing token stream, consuming exactly the
    /// tokens the header declares.
    pub fn read_tokens<R: BufRead>(tokens: &mut TokenReader<R>) -> GraphResult<UndirectedGraph> {
        let nodes = read_count(tokens, "node", "node count")?;
        let edges = read_count(tokens, "edge", "edge count")?;
        log::debug!("edge list header: {} nodes, {} edges", nodes, edges);

        let mut builder = GraphBuilder::try_new(nodes)?;
        for _ in 0..edges {
            let from = read_node(tokens, "edge source", nodes)?;
            let to = read_node(tokens, "edge target", nodes)?;
            builder.add_edge(from, to)?;
        }

        Ok(builder.build())
    }
}

impl FromStr for UndirectedGraph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EdgeListReader::parse_str(s)
    }
}

fn read_count<R: BufRead>(
    tokens: &mut TokenReader<R>,
    what: &'static str,
    expected: &'static str,
) -> GraphResult<usize> {
    let value = tokens.next_int(expected)?;
    if value > MAX_TEXT_COUNT {
        return Err(GraphError::InvalidCount { what, value });
    }
    usize::try_from(value).map_err(|_| GraphError::InvalidCount { what, value })
}

/// Read a 1-indexed id and convert it to a node id.
fn read_node<R: BufRead>(
    tokens: &mut TokenReader<R>,
    expected: &'static str,
    node_count: usize,
) -> GraphResult<NodeId> {
    let id = tokens.next_int(expected)?;
    let node = id
        .checked_sub(TEXT_INDEX_BASE)
        .and_then(|n| usize::try_from(n).ok());
    match node {
        Some(node) if node < node_count => Ok(node),
        _ => Err(GraphError::NodeOutOfRange {
            node: id,
            node_count,
        }),
    }
}
