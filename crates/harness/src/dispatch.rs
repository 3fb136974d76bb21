//! Const-generic versus runtime flags, and unroll factors, for a doubling kernel.
//!
//! Every kernel doubles each element (wrapping). The "checked" kernels also test
//! the index against the length before writing, once with the flag known at
//! compile time and once passed at runtime.

use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use copybench_core::Result;
use tracing::info;

use crate::config::DispatchConfig;
use crate::timing::improvement;

/// Value every element of the processed array starts at
const INITIAL_VALUE: i32 = 1;

/// Double every element, with the bounds check selected at compile time
pub fn double_const<const CHECK: bool>(data: &mut [i32]) {
    let len = data.len();
    for (i, value) in data.iter_mut().enumerate() {
        if CHECK {
            if i < len {
                *value = value.wrapping_mul(2);
            }
        } else {
            *value = value.wrapping_mul(2);
        }
    }
}

/// Double every element, with the bounds check selected at runtime
pub fn double_runtime(data: &mut [i32], check: bool) {
    let len = data.len();
    for (i, value) in data.iter_mut().enumerate() {
        if check {
            if i < len {
                *value = value.wrapping_mul(2);
            }
        } else {
            *value = value.wrapping_mul(2);
        }
    }
}

fn double_each(values: &mut [i32]) {
    for value in values {
        *value = value.wrapping_mul(2);
    }
}

/// Double every element, `FACTOR` elements per loop step
///
/// A `FACTOR` of 0 behaves like 1.
pub fn double_unrolled<const FACTOR: usize>(data: &mut [i32]) {
    let mut blocks = data.chunks_exact_mut(FACTOR.max(1));
    for block in &mut blocks {
        match <&mut [i32; FACTOR]>::try_from(&mut *block) {
            Ok(unrolled) => {
                for value in unrolled.iter_mut() {
                    *value = value.wrapping_mul(2);
                }
            }
            Err(_) => double_each(block),
        }
    }
    double_each(blocks.into_remainder());
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}

fn time_kernel(repetitions: u32, data: &mut [i32], kernel: impl Fn(&mut [i32])) -> Duration {
    let start = Instant::now();
    for _ in 0..repetitions {
        kernel(black_box(&mut *data));
    }
    start.elapsed()
}

/// Timings of every kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReport {
    const_checked: Duration,
    runtime_checked: Duration,
    const_unchecked: Duration,
    runtime_unchecked: Duration,
    unroll_1: Duration,
    unroll_2: Duration,
    unroll_4: Duration,
}

impl DispatchReport {
    /// Run every kernel over a fresh copy of the array
    #[must_use]
    pub fn measure(config: &DispatchConfig) -> Self {
        let pristine = vec![INITIAL_VALUE; config.len()];
        let mut data = pristine.clone();
        let reps = config.repetitions();

        info!(len = config.len(), reps, "starting dispatch benchmark");

        let mut timed = |kernel: &dyn Fn(&mut [i32])| {
            data.clone_from(&pristine);
            time_kernel(reps, &mut data, kernel)
        };

        Self {
            const_checked: timed(&double_const::<true>),
            const_unchecked: timed(&double_const::<false>),
            runtime_checked: timed(&|d| double_runtime(d, black_box(true))),
            runtime_unchecked: timed(&|d| double_runtime(d, black_box(false))),
            unroll_1: timed(&double_unrolled::<1>),
            unroll_2: timed(&double_unrolled::<2>),
            unroll_4: timed(&double_unrolled::<4>),
        }
    }

    /// Write the comparison in milliseconds
    ///
    /// # Errors
    ///
    /// Returns error if writing to `out` fails
    pub fn write_to<W: Write>(&self, config: &DispatchConfig, mut out: W) -> Result<()> {
        writeln!(
            out,
            "Boolean parameter benchmarks ({} iterations on array of {} elements):",
            config.repetitions(),
            config.len()
        )?;
        writeln!(
            out,
            "Const generic with check=true: {:.3} ms",
            millis(self.const_checked)
        )?;
        writeln!(
            out,
            "Runtime with check=true: {:.3} ms",
            millis(self.runtime_checked)
        )?;
        writeln!(
            out,
            "  Improvement: {:.2}% faster with const generic",
            improvement(self.runtime_checked, self.const_checked)
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "Const generic with check=false: {:.3} ms",
            millis(self.const_unchecked)
        )?;
        writeln!(
            out,
            "Runtime with check=false: {:.3} ms",
            millis(self.runtime_unchecked)
        )?;
        writeln!(
            out,
            "  Improvement: {:.2}% faster with const generic",
            improvement(self.runtime_unchecked, self.const_unchecked)
        )?;
        writeln!(
            out,
            "Unroll factor 1: {:.3} ms (baseline)",
            millis(self.unroll_1)
        )?;
        writeln!(
            out,
            "Unroll factor 2: {:.3} ms ({:.2}% improvement)",
            millis(self.unroll_2),
            improvement(self.unroll_1, self.unroll_2)
        )?;
        writeln!(
            out,
            "Unroll factor 4: {:.3} ms ({:.2}% improvement)",
            millis(self.unroll_4),
            improvement(self.unroll_1, self.unroll_4)
        )?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_kernels_agree() {
        let expected = vec![2; 11];
        let kernels: [&dyn Fn(&mut [i32]); 7] = [
            &double_const::<true>,
            &double_const::<false>,
            &|d| double_runtime(d, true),
            &|d| double_runtime(d, false),
            &double_unrolled::<1>,
            &double_unrolled::<2>,
            &double_unrolled::<4>,
        ];

        for kernel in kernels {
            let mut data = vec![1; 11];
            kernel(data.as_mut_slice());
            assert_eq!(data, expected);
        }
    }

    #[test]
    fn test_unrolled_handles_remainder() {
        let mut data = vec![3; 7];
        double_unrolled::<4>(&mut data);
        assert_eq!(data, vec![6; 7]);
    }

    #[test]
    fn test_zero_unroll_factor_still_doubles() {
        let mut data = vec![1; 5];
        double_unrolled::<0>(&mut data);
        assert_eq!(data, vec![2; 5]);
    }

    #[test]
    fn test_doubling_wraps() {
        let mut data = vec![i32::MAX];
        double_const::<false>(&mut data);
        assert_eq!(data, vec![-2]);
    }

    #[test]
    fn test_report_output() {
        let config = DispatchConfig::new(256, 3).unwrap();
        let report = DispatchReport::measure(&config);
        let mut out = Vec::new();
        report.write_to(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with(
            "Boolean parameter benchmarks (3 iterations on array of 256 elements):\n"
        ));
        assert_eq!(text.lines().filter(|l| l.ends_with(" ms")).count(), 5);
        assert!(text.contains("Unroll factor 1: "));
        assert!(text.contains("(baseline)"));
    }
}
