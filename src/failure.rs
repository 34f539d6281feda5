//! The Failure and Result types of this library.
//!
//! The `Vector` supports faillible allocations. Any method which attempts to allocate memory may fail. The cause of
//! the error is then represented as a `Failure`.
//!
//! All faillible methods come in two versions:
//!
//! -   A faillible `try_xxx` version, which returns a `Result` with `Failure` as the error type.
//! -   A convenience `xxx` version, which invokes the `try_xxx` version and panics in case of error.
//!
//! Whichever version is used, a failed call leaves the `Vector` exactly as it was before the call.
//!
//! A `Failure` only ever describes a failure to obtain memory. A panic raised by an element, for example from its
//! `Clone` implementation, is not converted: it unwinds through the `Vector` unchanged.

use super::root::{fmt, result};

#[cfg(feature = "with-std")]
use super::root::error;

/// Universal Failure type of this library.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Failure {
    /// The number of bytes to allocate cannot be calculated due to overflowing, or exceeds what the allocator can
    /// describe.
    BytesOverflow,
    /// The number of elements cannot be calculated due to overflowing.
    ElementsOverflow,
    /// The allocator could not allocate memory.
    OutOfMemory,
}

#[cfg(feature = "with-std")]
impl error::Error for Failure {}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Universal Result type of this library.
pub type Result<T> = result::Result<T, Failure>;
