//! Shared types for the undirected-graph library.

pub mod error;

pub use error::{GraphError, GraphResult};

/// A node id, 0-indexed.
pub type NodeId = usize;

/// Square boolean adjacency matrix; `matrix[i][j]` marks an edge from `i` to `j`.
pub type AdjacencyMatrix = Vec<Vec<bool>>;

/// Largest node or edge count accepted in text input.
pub const MAX_TEXT_COUNT: i64 = i32::MAX as i64;

/// Offset between the 1-indexed ids of the text format and internal node ids.
pub const TEXT_INDEX_BASE: i64 = 1;

/// Matrix cell rendering for the text output format.
pub const fn matrix_cell(present: bool) -> char {
    if present {
        '1'
    } else {
        '0'
    }
}
