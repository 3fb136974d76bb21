//! Workload generation.

/// Element type of every workload.
pub type Element = i64;

/// Value every freshly generated element holds.
pub const SENTINEL: Element = 42;

/// Number of elements in the fixed benchmark workload.
pub const DEFAULT_WORKLOAD_LEN: usize = 1_000_000;

/// Allocate a workload of `len` elements, all set to [`SENTINEL`].
///
/// One heap allocation proportional to `len`. Allocation failure aborts.
///
/// # Examples
///
/// ```
/// use copybench_core::workload::{generate, SENTINEL};
///
/// let data = generate(4);
/// assert_eq!(data, vec![SENTINEL; 4]);
/// ```
#[must_use]
#[inline(never)]
pub fn generate(len: usize) -> Vec<Element> {
    vec![SENTINEL; len]
}
