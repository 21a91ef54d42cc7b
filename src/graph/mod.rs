//! In-memory graph representation — the core data structure.

pub mod builder;
pub mod undirected;

pub use builder::GraphBuilder;
pub use undirected::UndirectedGraph;
