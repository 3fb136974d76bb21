#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # copybench-harness
//!
//! Times fixed menus of copy, alias and move operations over a large integer
//! workload, plus two companion programs: const-generic versus runtime dispatch,
//! and nested versus flattened matrix layout.
//!
//! ```
//! use copybench_harness::{BenchConfig, BenchRunner, Menu, OutputFormat};
//!
//! let config = BenchConfig::new(1, 64).unwrap();
//! let runner = BenchRunner::new(config, OutputFormat::Text);
//! let samples = runner.run(Menu::Semantics, std::io::sink()).unwrap();
//! assert_eq!(samples.len(), 6);
//! ```

pub mod config;
pub mod dispatch;
pub mod layout;
pub mod output;
pub mod runner;
pub mod timing;
pub mod variant;

pub use config::{BenchConfig, DEFAULT_ITERATIONS, DispatchConfig, LayoutConfig};
pub use dispatch::DispatchReport;
pub use layout::{LayoutRun, run_layout};
pub use output::{OutputFormat, SampleWriter};
pub use runner::{BenchRunner, build_line};
pub use timing::{TimingSample, improvement, time_iterations};
pub use variant::{Menu, Section, Variant};
