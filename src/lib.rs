#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # copybench
//!
//! Micro-benchmarks for copying versus aliasing a large in-memory integer
//! workload.
//!
//! This library re-exports the workspace crates and the CLI definition.

pub use copybench_core;
pub use copybench_harness;

pub mod cli;
