//! The Vector capacity.
//!
//! Holds the growth policy of the Vector: the first growth yields `INITIAL_CAPACITY` slots, and each subsequent growth
//! multiplies the capacity by 3/2, rounded down.

use super::failure::{Failure, Result};

//  The capacity of the first buffer of a Vector grown from nothing.
pub const INITIAL_CAPACITY: usize = 4;

/// The number of slots of a Buffer, initialized or not.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Capacity(pub usize);

impl Capacity {
    //  Returns whether `length` elements fit.
    pub fn holds(self, length: usize) -> bool { length <= self.0 }

    //  Returns the capacity to grow to, from this one.
    //
    //  The capacity 1 grows to 2, as rounding down 3/2 would not grow it.
    //
    //  #   Errors
    //
    //  Returns `ElementsOverflow` if the grown capacity overflows `usize`.
    pub fn grow(self) -> Result<Capacity> {
        if self.0 == 0 {
            return Ok(Capacity(INITIAL_CAPACITY));
        }

        match self.0.checked_add(self.0 / 2) {
            Some(grown) if grown > self.0 => Ok(Capacity(grown)),
            Some(_) => Ok(Capacity(self.0 + 1)),
            None => Err(Failure::ElementsOverflow),
        }
    }
}
