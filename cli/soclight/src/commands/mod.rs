//! CLI subcommand implementations.

pub mod board;
pub mod plan;
