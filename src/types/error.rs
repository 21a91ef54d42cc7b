//! Error types for the undirected-graph library.

use thiserror::Error;

/// All errors that can occur while building, converting or (de)serializing a graph.
#[derive(Error, Debug)]
pub enum GraphError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before all declared tokens were read.
    #[error("Unexpected end of input at token {position}: expected {expected}")]
    UnexpectedEof {
        expected: &'static str,
        position: usize,
    },

    /// A token could not be parsed as an integer.
    #[error("Invalid integer token {token:?} at token {position}")]
    InvalidToken { token: String, position: usize },

    /// A node or edge count was negative.
    #[error("Invalid {what} count: {value}")]
    InvalidCount { what: &'static str, value: i64 },

    /// A node id does not fall inside the graph.
    #[error("Node {node} out of range for graph with {node_count} nodes")]
    NodeOutOfRange { node: i64, node_count: usize },

    /// Adjacency matrix is smaller than the declared node count.
    #[error("Adjacency matrix row {row} has length {got}, expected at least {expected}")]
    MatrixDimension {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Storage for the requested node count could not be allocated.
    #[error("Cannot allocate storage for {nodes} nodes")]
    CapacityExceeded { nodes: usize },

    /// Graph cannot be written as undirected edges because an entry has no mirror.
    #[error("Edge {from} -> {to} has no matching reverse entry")]
    Asymmetric { from: usize, to: usize },
}

impl GraphError {
    /// True for errors caused by malformed text input.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            GraphError::UnexpectedEof { .. }
                | GraphError::InvalidToken { .. }
                | GraphError::InvalidCount { .. }
        )
    }

    /// True for errors caused by an index outside the graph.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            GraphError::NodeOutOfRange { .. } | GraphError::MatrixDimension { .. }
        )
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
