//! Driver that runs a menu of variants and reports each timing.

use std::io::Write;

use copybench_core::{Result, ResultExt, workload};
use tracing::{debug, info, warn};

use crate::config::BenchConfig;
use crate::output::{OutputFormat, SampleWriter};
use crate::timing::TimingSample;
use crate::variant::Menu;

/// Runs the copy/alias variant menus
pub struct BenchRunner {
    config: BenchConfig,
    format: OutputFormat,
}

impl BenchRunner {
    /// Create a new runner
    #[must_use]
    pub const fn new(config: BenchConfig, format: OutputFormat) -> Self {
        Self { config, format }
    }

    /// Run every variant of `menu` in order, writing to `out`
    ///
    /// This will:
    /// 1. Print the header block
    /// 2. Warm the allocator with one discarded workload
    /// 3. Run each section's variants, printing one line per variant
    ///
    /// Returns the samples in run order.
    ///
    /// # Errors
    ///
    /// Returns error if writing to `out` fails
    ///
    /// # Examples
    ///
    /// ```
    /// # use copybench_harness::{BenchConfig, BenchRunner, Menu, OutputFormat};
    /// let config = BenchConfig::new(2, 128).unwrap();
    /// let runner = BenchRunner::new(config, OutputFormat::Text);
    ///
    /// let mut out = Vec::new();
    /// let samples = runner.run(Menu::Moves, &mut out).unwrap();
    /// assert_eq!(samples.len(), 3);
    /// ```
    pub fn run<W: Write>(&self, menu: Menu, out: W) -> Result<Vec<TimingSample>> {
        let mut writer = SampleWriter::new(out, self.format);
        let iterations = self.config.iterations();
        let len = self.config.workload_len();

        info!(menu = menu.name(), iterations, len, "starting benchmark menu");

        writer.line(&format!(
            "Running benchmarks with {iterations} iterations each..."
        ))?;
        writer.line(&format!(
            "Each operation handles a sequence of {len} integers"
        ))?;
        writer.line(&build_line())?;

        warm_up(len);

        let mut samples = Vec::new();
        for section in menu.sections() {
            if let Some(heading) = section.heading() {
                writer.blank()?;
                writer.line(heading)?;
            }

            for &variant in section.variants() {
                let sample = variant.run(iterations, len);
                debug!(
                    label = sample.label(),
                    seconds = sample.seconds(),
                    "variant finished"
                );
                writer
                    .sample(&sample)
                    .inspect_error(|e| warn!("failed to report {}: {e}", sample.label()))?;
                samples.push(sample);
            }
        }

        writer.flush()?;
        info!(menu = menu.name(), variants = samples.len(), "benchmark menu complete");
        Ok(samples)
    }
}

/// Describe the build the numbers came from
#[must_use]
pub fn build_line() -> String {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    format!("Build: copybench {} ({profile})", env!("CARGO_PKG_VERSION"))
}

/// Allocate and drop one workload so the first variant does not pay for
/// faulting in fresh pages.
fn warm_up(len: usize) {
    let data = workload::generate(len);
    debug!(len = data.len(), "allocator warmed");
    drop(std::hint::black_box(data));
}
