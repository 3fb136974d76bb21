//! Configuration for the benchmark programs.
//!
//! Every program has a fixed configuration compiled in; the constructors with
//! validation exist so tests can drive the same code with small workloads.

use copybench_core::{DEFAULT_WORKLOAD_LEN, Error, Result};

/// Iterations each copy variant runs in the fixed configuration
pub const DEFAULT_ITERATIONS: u32 = 100;

/// Upper bound on iterations per variant
const MAX_ITERATIONS: u32 = 1_000_000;

/// Upper bound on elements in a single allocation (2 GiB of `i64`)
const MAX_ELEMENTS: usize = 268_435_456;

/// Configuration for the copy/alias variant menus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Times each variant is repeated inside one measurement
    iterations: u32,

    /// Elements in each freshly generated workload
    workload_len: usize,
}

impl BenchConfig {
    /// Create a configuration with validation
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `iterations` exceeds the maximum (1 000 000)
    /// - `workload_len` is 0 or exceeds the maximum (2^28 elements)
    ///
    /// # Examples
    ///
    /// ```
    /// # use copybench_harness::BenchConfig;
    /// let config = BenchConfig::new(10, 1_000);
    /// assert!(config.is_ok());
    /// assert!(BenchConfig::new(10, 0).is_err());
    /// ```
    pub fn new(iterations: u32, workload_len: usize) -> Result<Self> {
        validate_iterations(iterations)?;
        validate_len("workload length", workload_len)?;

        Ok(Self {
            iterations,
            workload_len,
        })
    }

    /// The compiled-in configuration: 100 iterations over one million elements
    #[must_use]
    pub const fn fixed() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            workload_len: DEFAULT_WORKLOAD_LEN,
        }
    }

    /// Get the iteration count
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Get the workload length
    #[must_use]
    pub const fn workload_len(&self) -> usize {
        self.workload_len
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::fixed()
    }
}

/// Configuration for the const-generic versus runtime dispatch benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Elements in the processed array
    len: usize,

    /// Times each kernel runs over the array
    repetitions: u32,
}

impl DispatchConfig {
    /// Create a configuration with validation
    ///
    /// # Errors
    ///
    /// Returns error if `len` is 0 or too large, or `repetitions` exceeds the maximum
    pub fn new(len: usize, repetitions: u32) -> Result<Self> {
        validate_len("array length", len)?;
        validate_iterations(repetitions)?;

        Ok(Self { len, repetitions })
    }

    /// The compiled-in configuration: 1000 passes over 100 000 elements
    #[must_use]
    pub const fn fixed() -> Self {
        Self {
            len: 100_000,
            repetitions: 1_000,
        }
    }

    /// Get the array length
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Get the repetition count
    #[must_use]
    pub const fn repetitions(&self) -> u32 {
        self.repetitions
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::fixed()
    }
}

/// Configuration for the nested versus flattened matrix benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    width: usize,
    depth: usize,

    /// Increments performed per pass
    iterations: usize,

    /// Number of nested/flat pass pairs
    runs: u32,
}

impl LayoutConfig {
    /// Create a configuration with validation
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `width`, `depth` or `runs` is 0
    /// - `width * depth` exceeds the allocation limit
    pub fn new(width: usize, depth: usize, iterations: usize, runs: u32) -> Result<Self> {
        if width == 0 || depth == 0 {
            return Err(Error::invalid_config(
                "matrix dimensions must be greater than 0",
            ));
        }
        let cells = width
            .checked_mul(depth)
            .ok_or_else(|| Error::invalid_config("matrix dimensions overflow"))?;
        validate_len("matrix size", cells)?;
        if runs == 0 {
            return Err(Error::invalid_config("runs must be greater than 0"));
        }

        Ok(Self {
            width,
            depth,
            iterations,
            runs,
        })
    }

    /// The compiled-in configuration: 1000x1000, ten million increments, five runs
    #[must_use]
    pub const fn fixed() -> Self {
        Self {
            width: 1_000,
            depth: 1_000,
            iterations: 10_000_000,
            runs: 5,
        }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    #[must_use]
    pub const fn runs(&self) -> u32 {
        self.runs
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::fixed()
    }
}

fn validate_iterations(iterations: u32) -> Result<()> {
    if iterations > MAX_ITERATIONS {
        Err(Error::invalid_config(format!(
            "iterations {iterations} exceeds maximum {MAX_ITERATIONS}"
        )))
    } else {
        Ok(())
    }
}

fn validate_len(what: &str, len: usize) -> Result<()> {
    if len == 0 {
        Err(Error::invalid_config(format!("{what} must be greater than 0")))
    } else if len > MAX_ELEMENTS {
        Err(Error::invalid_config(format!(
            "{what} {len} exceeds maximum {MAX_ELEMENTS}"
        )))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_bench_config() {
        let config = BenchConfig::fixed();
        assert_eq!(config.iterations(), 100);
        assert_eq!(config.workload_len(), 1_000_000);
        assert_eq!(config, BenchConfig::default());
    }

    #[test]
    fn test_zero_iterations_allowed() {
        let config = BenchConfig::new(0, 16);
        assert!(config.is_ok());
    }

    #[test]
    fn test_zero_workload_rejected() {
        let config = BenchConfig::new(10, 0);
        assert!(matches!(config, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_oversized_workload_rejected() {
        let config = BenchConfig::new(10, MAX_ELEMENTS + 1);
        assert!(matches!(config, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_too_many_iterations_rejected() {
        let config = BenchConfig::new(MAX_ITERATIONS + 1, 16);
        assert!(matches!(config, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_dispatch_config() {
        assert!(DispatchConfig::new(0, 10).is_err());
        let config = DispatchConfig::new(64, 3);
        assert!(config.is_ok());
        assert_eq!(DispatchConfig::fixed().len(), 100_000);
    }

    #[test]
    fn test_layout_config_rejects_empty_matrix() {
        assert!(LayoutConfig::new(0, 10, 100, 1).is_err());
        assert!(LayoutConfig::new(10, 0, 100, 1).is_err());
    }

    #[test]
    fn test_layout_config_rejects_zero_runs() {
        assert!(LayoutConfig::new(10, 10, 100, 0).is_err());
    }

    #[test]
    fn test_layout_config_rejects_overflow() {
        assert!(LayoutConfig::new(usize::MAX, 2, 100, 1).is_err());
    }

    #[test]
    fn test_layout_fixed() {
        let config = LayoutConfig::fixed();
        assert_eq!(config.width(), 1_000);
        assert_eq!(config.depth(), 1_000);
        assert_eq!(config.iterations(), 10_000_000);
        assert_eq!(config.runs(), 5);
    }
}
