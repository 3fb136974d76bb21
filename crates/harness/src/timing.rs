//! Wall-clock timing of a repeated operation.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};

/// One labeled measurement, rendered as `<label>: <seconds> seconds`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimingSample {
    label: String,

    #[serde(rename = "seconds", serialize_with = "serialize_seconds")]
    elapsed: Duration,
}

impl TimingSample {
    /// Create a timing sample
    #[must_use]
    pub fn new(label: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            label: label.into(),
            elapsed,
        }
    }

    /// Get the label
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the elapsed wall-clock time
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Get the elapsed time in fractional seconds
    #[must_use]
    pub const fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl fmt::Display for TimingSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} seconds", self.label, self.seconds())
    }
}

fn serialize_seconds<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// Run `operation` `iterations` times and measure the whole loop.
///
/// The clock starts just before the first iteration and stops just after the
/// last. Every result goes through [`black_box`] before it is dropped, so the
/// loop body survives optimization. Zero iterations yields a near-zero sample.
///
/// # Examples
///
/// ```
/// # use copybench_harness::time_iterations;
/// let sample = time_iterations("Sum time", 3, || (0..100_u64).sum::<u64>());
/// assert_eq!(sample.to_string().split(": ").next(), Some("Sum time"));
/// ```
pub fn time_iterations<T>(
    label: impl Into<String>,
    iterations: u32,
    mut operation: impl FnMut() -> T,
) -> TimingSample {
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(operation());
    }
    TimingSample::new(label, start.elapsed())
}

/// Percentage by which `candidate` beats `baseline`; 0 when the baseline is zero
#[must_use]
pub fn improvement(baseline: Duration, candidate: Duration) -> f64 {
    if baseline.is_zero() {
        return 0.0;
    }
    let base = baseline.as_secs_f64();
    (base - candidate.as_secs_f64()) / base * 100.0
}
