//! Re-export core/std facilities under a unified name.

#[cfg(not(feature = "with-std"))]
pub use core::{
    cmp, fmt, hash, hint, iter, marker, mem, ops, ptr, result, slice,
};

#[cfg(not(feature = "with-std"))]
pub use ::alloc::alloc;

#[cfg(feature = "with-std")]
pub use std::{
    alloc, cmp, fmt, hash, hint, iter, marker, mem, ops, ptr, result, slice,
};

#[cfg(feature = "with-std")]
pub use std::error;

//  Only needed by the testing utilities.
#[cfg(all(test, not(feature = "with-std")))]
pub use core::{cell, sync};

#[cfg(all(test, feature = "with-std"))]
pub use std::{cell, sync};
