//! Fluent API for building UndirectedGraph instances edge by edge.

use crate::types::{GraphError, GraphResult, NodeId};

use super::UndirectedGraph;

/// Fluent builder for constructing an UndirectedGraph with a fixed node count.
#[derive(Debug)]
pub struct GraphBuilder {
    adjacencies: Vec<Vec<NodeId>>,
    edge_count: usize,
}

impl GraphBuilder {
    /// Create a builder for `nodes` isolated nodes.
    pub fn new(nodes: usize) -> Self {
        Self {
            adjacencies: vec![Vec::new(); nodes],
            edge_count: 0,
        }
    }

    /// Create a builder for `nodes` isolated nodes, failing instead of
    /// aborting when the node table cannot be allocated.
    pub fn try_new(nodes: usize) -> GraphResult<Self> {
        let mut adjacencies = Vec::new();
        adjacencies
            .try_reserve_exact(nodes)
            .map_err(|_| GraphError::CapacityExceeded { nodes })?;
        adjacencies.resize_with(nodes, Vec::new);
        Ok(Self {
            adjacencies,
            edge_count: 0,
        })
    }

    /// Number of nodes the graph will have.
    pub fn node_count(&self) -> usize {
        self.adjacencies.len()
    }

    /// Number of edges added so far.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Add an undirected edge between two 0-indexed nodes.
    ///
    /// `b` is appended to `a`'s list and `a` to `b`'s list. A self-loop
    /// appends the node to its own list twice.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> GraphResult<&mut Self> {
        let nodes = self.node_count();
        for node in [a, b] {
            if node >= nodes {
                return Err(GraphError::NodeOutOfRange {
                    node: node as i64,
                    node_count: nodes,
                });
            }
        }
        self.adjacencies[a].push(b);
        self.adjacencies[b].push(a);
        self.edge_count += 1;
        Ok(self)
    }

    /// Add several edges in order.
    pub fn add_edges<I>(&mut self, edges: I) -> GraphResult<&mut Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        for (a, b) in edges {
            self.add_edge(a, b)?;
        }
        Ok(self)
    }

    /// Build the final graph.
    pub fn build(self) -> UndirectedGraph {
        log::debug!(
            "built graph: {} nodes, {} edges",
            self.adjacencies.len(),
            self.edge_count
        );
        UndirectedGraph::from_owned(self.adjacencies)
    }
}
