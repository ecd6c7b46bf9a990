//! CLI command implementations.

pub mod demo;
pub mod emit;
pub mod stress;
