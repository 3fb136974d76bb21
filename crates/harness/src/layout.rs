//! Nested `Vec<Vec<u32>>` versus a flattened `Vec<u32>` for strided increments.

use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use copybench_core::Result;
use tracing::{debug, info};

use crate::config::LayoutConfig;
use crate::timing::improvement;

/// Cell coordinates visited on step `iter`
const fn cell(iter: usize, width: usize, depth: usize) -> Option<(usize, usize)> {
    match (iter.checked_rem(width), iter.checked_rem(depth)) {
        (Some(i), Some(j)) => Some((i, j)),
        _ => None,
    }
}

/// Time `iterations` increments on a row-per-allocation matrix
#[must_use]
pub fn nested_pass(width: usize, depth: usize, iterations: usize) -> Duration {
    let mut matrix = vec![vec![0_u32; depth]; width];

    let start = Instant::now();
    for iter in 0..iterations {
        let Some((i, j)) = cell(iter, width, depth) else {
            break;
        };
        if let Some(value) = matrix.get_mut(i).and_then(|row| row.get_mut(j)) {
            *value = value.wrapping_add(1);
            black_box(*value);
        }
    }
    start.elapsed()
}

/// Time `iterations` increments on a single contiguous matrix
#[must_use]
pub fn flat_pass(width: usize, depth: usize, iterations: usize) -> Duration {
    let mut matrix = vec![0_u32; width.saturating_mul(depth)];

    let start = Instant::now();
    for iter in 0..iterations {
        let Some((i, j)) = cell(iter, width, depth) else {
            break;
        };
        let Some(index) = i.checked_mul(depth).and_then(|row| row.checked_add(j)) else {
            break;
        };
        if let Some(value) = matrix.get_mut(index) {
            *value = value.wrapping_add(1);
            black_box(*value);
        }
    }
    start.elapsed()
}

/// One nested pass followed by one flat pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRun {
    nested: Duration,
    flat: Duration,
}

impl LayoutRun {
    #[must_use]
    pub const fn nested(&self) -> Duration {
        self.nested
    }

    #[must_use]
    pub const fn flat(&self) -> Duration {
        self.flat
    }

    /// Percentage by which the flat layout beat the nested one
    #[must_use]
    pub fn improvement(&self) -> f64 {
        improvement(self.nested, self.flat)
    }
}

/// Run every configured pass pair, writing each run's result as it finishes
///
/// # Errors
///
/// Returns error if writing to `out` fails
pub fn run_layout<W: Write>(config: &LayoutConfig, mut out: W) -> Result<Vec<LayoutRun>> {
    let (width, depth, iterations) = (config.width(), config.depth(), config.iterations());
    info!(width, depth, iterations, runs = config.runs(), "starting layout benchmark");

    writeln!(
        out,
        "Running benchmarks with dimensions {width}x{depth} and {iterations} iterations"
    )?;
    writeln!(out)?;

    let mut runs = Vec::new();
    for number in 1..=config.runs() {
        let run = LayoutRun {
            nested: nested_pass(width, depth, iterations),
            flat: flat_pass(width, depth, iterations),
        };
        debug!(number, ?run, "layout run finished");

        writeln!(out, "Run {number}:")?;
        writeln!(
            out,
            "  Nested Vec time:    {:.2} ms",
            run.nested.as_secs_f64() * 1_000.0
        )?;
        writeln!(
            out,
            "  Flattened time:     {:.2} ms",
            run.flat.as_secs_f64() * 1_000.0
        )?;
        writeln!(out, "  Improvement:        {:.2}% faster", run.improvement())?;
        writeln!(out)?;
        runs.push(run);
    }

    out.flush()?;
    Ok(runs)
}
