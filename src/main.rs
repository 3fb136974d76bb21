//! # copybench
//!
//! Runs one of the fixed benchmark programs and prints its timings.
//!
//! ## Programs
//!
//! - `semantics` (default): shared handle, deep copy, simulated move, return
//!   value, borrowed view, and deep copy through a borrowed view
//! - `moves`: clone, move and return of an owned workload
//! - `dispatch`: const generic versus runtime flags, and unroll factors
//! - `layout`: nested versus flattened matrix layout
//!
//! Iteration counts and workload sizes are fixed. Diagnostics go to stderr and
//! are controlled by `RUST_LOG`.

#![forbid(unsafe_code)]
#![forbid(clippy::unwrap_used)]
#![forbid(clippy::panic)]
#![deny(clippy::expect_used)]

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use copybench::cli::{Cli, Commands, Format};
use copybench_harness::{
    BenchConfig, BenchRunner, DispatchConfig, DispatchReport, LayoutConfig, Menu, run_layout,
};

fn main() {
    let cli = Cli::parse();

    init_tracing();

    match run(&cli) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.program() {
        Commands::Semantics => run_menu(Menu::Semantics, cli.format, &mut out)?,
        Commands::Moves => run_menu(Menu::Moves, cli.format, &mut out)?,
        Commands::Dispatch => {
            warn_unused_format(cli.format);
            let config = DispatchConfig::fixed();
            DispatchReport::measure(&config)
                .write_to(&config, &mut out)
                .context("dispatch benchmark failed")?;
        }
        Commands::Layout => {
            warn_unused_format(cli.format);
            run_layout(&LayoutConfig::fixed(), &mut out).context("layout benchmark failed")?;
        }
    }

    out.flush().context("failed to flush stdout")?;
    info!("benchmark finished");
    Ok(())
}

fn run_menu(menu: Menu, format: Format, out: impl Write) -> Result<()> {
    BenchRunner::new(BenchConfig::fixed(), format.into())
        .run(menu, out)
        .with_context(|| format!("{} benchmark failed", menu.name()))?;
    Ok(())
}

fn warn_unused_format(format: Format) {
    if format == Format::Json {
        warn!("--format json only applies to the semantics and moves programs");
    }
}

/// Initialize tracing subscriber with environment filter, writing to stderr.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
