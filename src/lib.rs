//! Undirected graphs stored as adjacency lists.
//!
//! Converts between adjacency-list and adjacency-matrix form and reads/writes a
//! whitespace-separated edge-list text format with 1-indexed node ids.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{EdgeListReader, EdgeListWriter, MatrixWriter, TokenReader};
pub use graph::{GraphBuilder, UndirectedGraph};
pub use types::{AdjacencyMatrix, GraphError, GraphResult, NodeId};
