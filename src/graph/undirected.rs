//! Core graph structure — per-node neighbor lists.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{matrix_cell, AdjacencyMatrix, GraphError, GraphResult, NodeId};

/// An undirected graph stored as one neighbor list per node.
///
/// An edge `(u, v)` is represented by `v` appearing in `u`'s list and `u`
/// appearing in `v`'s list. Neighbor order is insertion order and duplicates
/// are kept as given. The graph is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UndirectedGraph {
    /// Neighbor lists, indexed by node id.
    adjacencies: Vec<Vec<NodeId>>,
}

impl UndirectedGraph {
    /// Create a graph from a list of adjacency lists.
    ///
    /// Isolated nodes are given as empty lists. The lists are copied; neither
    /// the neighbor ranges nor the symmetry of the input are checked.
    pub fn from_adjacencies(adjacencies: &[Vec<NodeId>]) -> Self {
        let adjacencies = adjacencies.to_vec();
        log::debug!("graph from adjacency lists: {} nodes", adjacencies.len());
        Self { adjacencies }
    }

    /// Create a graph from an adjacency matrix.
    ///
    /// Row `i` becomes node `i`'s neighbor list, in ascending column order.
    /// The matrix is taken exactly as given: an asymmetric matrix yields
    /// asymmetric lists. Only the leading `nodes × nodes` block is read.
    pub fn from_matrix<R>(nodes: usize, matrix: &[R]) -> GraphResult<Self>
    where
        R: AsRef<[bool]>,
    {
        if matrix.len() < nodes {
            return Err(GraphError::MatrixDimension {
                row: matrix.len(),
                expected: nodes,
                got: 0,
            });
        }

        let mut adjacencies = Vec::with_capacity(nodes);
        for (i, row) in matrix.iter().take(nodes).enumerate() {
            let row = row.as_ref();
            if row.len() < nodes {
                return Err(GraphError::MatrixDimension {
                    row: i,
                    expected: nodes,
                    got: row.len(),
                });
            }
            let adjacency: Vec<NodeId> = row[..nodes]
                .iter()
                .enumerate()
                .filter_map(|(j, &present)| present.then_some(j))
                .collect();
            adjacencies.push(adjacency);
        }

        let graph = Self { adjacencies };
        log::debug!("graph from {}x{} adjacency matrix", nodes, nodes);
        if !graph.is_symmetric() {
            log::warn!("adjacency matrix is not symmetric; lists kept as given");
        }
        Ok(graph)
    }

    /// Wrap already-owned lists (used by the builder).
    pub(crate) fn from_owned(adjacencies: Vec<Vec<NodeId>>) -> Self {
        Self { adjacencies }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacencies.len()
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacencies.is_empty()
    }

    /// Get the graph as its list of adjacency lists (read-only).
    pub fn adjacencies(&self) -> &[Vec<NodeId>] {
        &self.adjacencies
    }

    /// Neighbor list of a single node.
    pub fn neighbors(&self, node: NodeId) -> Option<&[NodeId]> {
        self.adjacencies.get(node).map(Vec::as_slice)
    }

    /// Stored neighbor entries for a node, duplicates counted.
    pub fn degree(&self, node: NodeId) -> Option<usize> {
        self.adjacencies.get(node).map(Vec::len)
    }

    /// Total number of stored neighbor entries across all nodes.
    pub fn entry_count(&self) -> usize {
        self.adjacencies.iter().map(Vec::len).sum()
    }

    /// Number of nodes with an empty neighbor list.
    pub fn isolated_count(&self) -> usize {
        self.adjacencies.iter().filter(|a| a.is_empty()).count()
    }

    /// Get the graph as a freshly allocated `n × n` adjacency matrix.
    ///
    /// Entry `(i, j)` is true iff `j` appears at least once in node `i`'s
    /// list, so duplicate entries collapse to a single `true`.
    pub fn adjacency_matrix(&self) -> GraphResult<AdjacencyMatrix> {
        let nodes = self.node_count();
        let mut matrix = vec![vec![false; nodes]; nodes];
        for (row, adjacency) in matrix.iter_mut().zip(&self.adjacencies) {
            for &j in adjacency {
                let cell = row.get_mut(j).ok_or(GraphError::NodeOutOfRange {
                    node: j as i64,
                    node_count: nodes,
                })?;
                *cell = true;
            }
        }
        Ok(matrix)
    }

    /// True if every entry is in range and each `u != v` pair is stored the
    /// same number of times in both directions.
    pub fn is_symmetric(&self) -> bool {
        let nodes = self.node_count();
        let mut balance: HashMap<(NodeId, NodeId), i64> = HashMap::new();
        for (u, adjacency) in self.adjacencies.iter().enumerate() {
            for &v in adjacency {
                if v >= nodes {
                    return false;
                }
                match u.cmp(&v) {
                    std::cmp::Ordering::Less => *balance.entry((u, v)).or_insert(0) += 1,
                    std::cmp::Ordering::Greater => *balance.entry((v, u)).or_insert(0) -= 1,
                    std::cmp::Ordering::Equal => {}
                }
            }
        }
        balance.values().all(|&b| b == 0)
    }
}

impl fmt::Display for UndirectedGraph {
    /// Renders the adjacency matrix text form: one line per node, every
    /// cell followed by a space. Out-of-range neighbor ids have no cell and
    /// are left out; use `MatrixWriter` to have them reported.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = self.node_count();
        let mut row = vec![false; nodes];
        for adjacency in &self.adjacencies {
            row.fill(false);
            for &j in adjacency.iter().filter(|&&j| j < nodes) {
                row[j] = true;
            }
            for &cell in &row {
                write!(f, "{} ", matrix_cell(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
