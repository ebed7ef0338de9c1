//! Error types for fallible ring operations.

use core::fmt;

/// Error value indicating insufficient capacity.
///
/// Returned by the `try_push_*` family. The rejected element rides back to
/// the caller in the `element` field, so nothing is lost on failure.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub struct CapacityError<T = ()> {
    /// The element that could not be pushed.
    pub element: T,
}

const CAPERROR: &str = "insufficient capacity";

#[cfg(feature = "std")]
impl<T> std::error::Error for CapacityError<T> {}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", CAPERROR)
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", "CapacityError", CAPERROR)
    }
}
