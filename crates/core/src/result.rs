//! Result type definition and an error inspection extension trait.

use crate::error::Error;

/// The standard Result type for copybench operations.
///
/// # Examples
///
/// ```
/// use copybench_core::{Result, SharedObject};
///
/// fn first_element(object: &SharedObject) -> Result<i64> {
///     object.get(0)
/// }
///
/// let object = SharedObject::new(3);
/// assert_eq!(first_element(&object).ok(), Some(42));
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for observing errors before they are propagated.
pub trait ResultExt<T> {
    /// Inspect the error without consuming the Result.
    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self;
}

impl<T> ResultExt<T> for Result<T> {
    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_error_sees_error() {
        let mut seen = false;
        let result: Result<i32> = Err(Error::AliasBorrowed);
        let result = result.inspect_error(|_| seen = true);
        assert!(seen);
        assert!(result.is_err());
    }

    #[test]
    fn test_inspect_error_skips_ok() {
        let mut seen = false;
        let result: Result<i32> = Ok(1);
        let _ = result.inspect_error(|_| seen = true);
        assert!(!seen);
    }
}
