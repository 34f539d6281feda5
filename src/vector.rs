//! #   The Vector.
//!
//! The `Vector` is a contiguous, growable, sequence of elements, built directly on raw memory.
//!
//! ##  Under the covers.
//!
//! Under the covers the `Vector` is a single buffer of `capacity` slots, of which the first `len` hold live elements.
//!
//! The main consequences are:
//!
//! -   Elements are stored contiguously, and can be viewed as a slice.
//! -   A `Vector` with a capacity of 0 holds no memory at all, and its pointer is null.
//! -   Whenever a new buffer is required, the elements are cloned into it, never moved bitwise.
//!
//! ##  Exception safety.
//!
//! Cloning an element may panic, and so may allocating memory through the infaillible methods. Unless documented
//! otherwise, operations offer the strong guarantee: should they fail, the `Vector` is left exactly as it was, with no
//! element leaked nor dropped twice.
//!
//! The exceptions are:
//!
//! -   `insert` without reallocation: if dropping the element it overwrites panics, the `Vector` is left valid, with
//!     one more element, in unspecified order.
//! -   `erase` and `erase_range`: if dropping a removed element panics, the `Vector` is left valid, shortened.
//! -   `clear` and `pop_back`: if dropping an element panics, the `Vector` forgets it regardless.
//!
//! #   Example: basic
//!
//! General usage of `Vector` involve pushing elements, either using `push`, to push one element at a time, or
//! `extend`, to push multiple elements at once.
//!
//! The faillible equivalents exist too: `try_push`, `try_insert`, or `try_reserve` will return a `Result` indicating
//! whether the operation succeeded, and the cause of its failure if it did not.
//!
//! ```
//! use contiguous::vector::Vector;
//!
//! let mut vec: Vector<_> = Vector::new();
//! vec.push(1);
//! vec.push(2);
//!
//! assert_eq!(2, vec.len());
//! assert_eq!(1, vec[0]);
//!
//! vec.extend([3, 4, 5].iter().copied());
//!
//! assert_eq!(5, vec.len());
//! assert_eq!(4, vec[3]);
//!
//! for x in &vec {
//!     println!("{}", x);
//! }
//! ```
//!
//! #   Example: accessing elements
//!
//! `Vector` dereferences to a slice, hence all the slice methods are available:
//!
//! ```
//! use contiguous::vector::Vector;
//!
//! let mut vec: Vector<_> = Vector::new();
//! vec.extend([1, 2, 3, 4, 5].iter().copied());
//!
//! assert_eq!(Some(1), vec.get(0).copied());
//! assert_eq!(None, vec.get(5));
//!
//! assert_eq!(1, *vec.front());
//! assert_eq!(5, *vec.back());
//!
//! vec[2] = 9;
//! assert_eq!(&[1, 2, 9, 4, 5], vec.as_slice());
//!
//! assert_eq!(0, vec.insert(0, 0));
//! assert_eq!(3, vec.erase(3));
//! assert_eq!(&[0, 1, 2, 4, 5], &vec[..]);
//! ```
//!
//! #   Example: managing capacity
//!
//! `Vector` provides multiple ways to manage the capacity available:
//!
//! -   The constructors `with_capacity` and `try_with_capacity` allocate exactly the capacity requested.
//! -   The `reserve` and `try_reserve` calls allow growing the capacity to exactly the total requested, in advance.
//! -   The `shrink_to_fit` calls allow de-allocating excess capacity.
//!
//! Otherwise, the capacity grows on demand: to 4 from nothing, then by half each time.
//!
//! ```
//! use contiguous::failure::Failure;
//! use contiguous::vector::Vector;
//!
//! let mut vec: Vector<u64> = Vector::new();
//!
//! //  No memory is allocated by the constructor.
//! assert_eq!(0, vec.capacity());
//!
//! //  Reserving more than can be addressed fails.
//! assert_eq!(Err(Failure::BytesOverflow), vec.try_reserve(usize::MAX));
//! assert_eq!(0, vec.capacity());
//!
//! vec.extend([1, 2, 3, 4, 5].iter().copied());
//! assert_eq!(6, vec.capacity());
//!
//! //  Shrinking sheds excess capacity.
//! vec.shrink_to_fit();
//! assert_eq!(5, vec.capacity());
//! ```

mod buffer;
mod capacity;
mod lifecycle;
mod vector;

pub use self::vector::Vector;

use super::allocator;
use super::failure;
use super::raw;
use super::root;
