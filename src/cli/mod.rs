//! Command implementations behind the `ugraph` binary.

pub mod commands;
