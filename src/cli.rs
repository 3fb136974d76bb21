//! CLI command definitions using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use clap::{Parser, Subcommand, ValueEnum};
use copybench_harness::OutputFormat;

/// copybench - copy versus alias micro-benchmarks
#[derive(Parser, Debug)]
#[command(name = "copybench")]
#[command(version)]
#[command(about = "Time copying versus aliasing a large in-memory integer workload")]
#[command(
    long_about = "Runs fixed benchmark programs over a one-million-element workload and prints the wall-clock time of each operation. With no subcommand, runs the shared-handle/deep-copy/borrowed-view menu."
)]
pub struct Cli {
    /// How timing samples are printed
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    pub format: Format,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The program to run; the semantics menu when none was given
    #[must_use]
    pub fn program(&self) -> Commands {
        self.command.unwrap_or_default()
    }
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Commands {
    /// Shared handle, deep copy, simulated move, return value, borrowed views
    #[default]
    Semantics,

    /// Clone, move and return of an owned workload
    Moves,

    /// Const generic versus runtime flags, and loop unroll factors
    Dispatch,

    /// Nested versus flattened matrix layout
    Layout,
}

/// Rendering of timing samples
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// `<label>: <seconds> seconds`
    #[default]
    Text,
    /// One JSON object per sample
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => Self::Text,
            Format::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_runs_semantics() {
        let cli = Cli::try_parse_from(["copybench"]).unwrap();
        assert_eq!(cli.program(), Commands::Semantics);
        assert_eq!(cli.format, Format::Text);
    }

    #[test]
    fn test_moves_with_json() {
        let cli = Cli::try_parse_from(["copybench", "moves", "--format", "json"]).unwrap();
        assert_eq!(cli.program(), Commands::Moves);
        assert_eq!(OutputFormat::from(cli.format), OutputFormat::Json);
    }

    #[test]
    fn test_companion_programs_parse() {
        let dispatch = Cli::try_parse_from(["copybench", "dispatch"]).unwrap();
        let layout = Cli::try_parse_from(["copybench", "layout"]).unwrap();
        assert_eq!(dispatch.program(), Commands::Dispatch);
        assert_eq!(layout.program(), Commands::Layout);
    }

    #[test]
    fn test_rejects_workload_flags() {
        assert!(Cli::try_parse_from(["copybench", "--iterations", "5"]).is_err());
    }
}
