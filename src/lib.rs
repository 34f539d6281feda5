#![cfg_attr(not(feature = "with-std"), no_std)]
//  Lints
#![allow(clippy::module_inception)]

//! #   The Contiguous Library
//!
//! A contiguous, growable, `Vec`-like container built directly on raw memory.
//!
//! -   The `Vector`: a contiguous sequence with amortized O(1) append.
//!
//! Every operation which relocates elements does so by cloning them into fresh storage, and only releases the former
//! storage once the new one is fully populated; as a result a failure (allocation failure, or a panicking `Clone`)
//! leaves the `Vector` as it was before the call.

#[cfg(not(feature = "with-std"))]
extern crate alloc;

pub mod failure;
pub mod vector;

mod allocator;
mod utils;

use self::utils::raw;
use self::utils::root;
