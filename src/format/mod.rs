//! Text I/O: edge-list input, matrix and edge-list output.

pub mod reader;
pub mod tokenizer;
pub mod writer;

pub use reader::EdgeListReader;
pub use tokenizer::TokenReader;
pub use writer::{EdgeListWriter, MatrixWriter};
