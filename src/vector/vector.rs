//! The Vector

use super::root::{cmp, fmt, hash, iter, mem, ops, slice};

use super::allocator::{Allocator, DefaultAllocator};
use super::buffer::Buffer;
use super::capacity::Capacity;
use super::failure::{Failure, Result};
use super::lifecycle::{copy_construct_all, copy_construct_all_trivial, destroy_all};

/// `Vector`
///
/// A contiguous, growable sequence of elements.
///
/// See the [module documentation](crate::vector) for an overview, and the exception-safety guarantees of each
/// operation.
pub struct Vector<T, A: Allocator = DefaultAllocator> {
    //  Storage of the Vector, allocated if and only if its capacity is non-zero.
    buffer: Buffer<T>,
    //  The number of elements in the vector:
    //
    //  -   The first `length` slots of `buffer` are initialized.
    //  -   The slots past `length` are not.
    length: usize,
    //  The allocator `buffer` was obtained from.
    allocator: A,
}

impl<T> Vector<T> {
    /// Creates a new, empty, instance.
    ///
    /// No memory is allocated.
    ///
    /// #   Panics
    ///
    /// Panics if `T` is zero-sized.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contiguous::vector::Vector;
    /// let vec: Vector<i32> = Vector::new();
    ///
    /// assert_eq!(0, vec.len());
    /// assert_eq!(0, vec.capacity());
    /// assert!(vec.as_ptr().is_null());
    /// ```
    pub fn new() -> Self { Self::new_in(DefaultAllocator) }

    /// Creates a new, empty, instance with a capacity of exactly `capacity`.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contiguous::failure::Failure;
    /// #   use contiguous::vector::Vector;
    /// let vec: Vector<i32> = Vector::try_with_capacity(10).unwrap();
    /// assert_eq!(10, vec.capacity());
    ///
    /// let vec = Vector::<u64>::try_with_capacity(usize::MAX / 4);
    /// assert_eq!(Some(Failure::BytesOverflow), vec.err());
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        Self::try_with_capacity_in(capacity, DefaultAllocator)
    }

    /// Creates a new, empty, instance with a capacity of exactly `capacity`.
    ///
    /// Calling this method is equivalent to calling `try_with_capacity` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|failure| panic_from_failure(failure))
    }
}

impl<T, A: Allocator> Vector<T, A> {
    //  Creates a new, empty, instance drawing its memory from `allocator`.
    //
    //  #   Panics
    //
    //  Panics if `T` is zero-sized.
    fn new_in(allocator: A) -> Self {
        if mem::size_of::<T>() == 0 {
            panic_zero_sized_element();
        }

        Self { buffer: Buffer::empty(), length: 0, allocator }
    }

    //  Creates a new, empty, instance with a capacity of exactly `capacity`, drawn from `allocator`.
    //
    //  #   Errors
    //
    //  Returns an error if the memory cannot be allocated.
    fn try_with_capacity_in(capacity: usize, allocator: A) -> Result<Self> {
        let mut result = Self::new_in(allocator);
        result.buffer = Buffer::allocate(Capacity(capacity), &result.allocator)?;
        Ok(result)
    }

    /// Returns whether the instance contains any element, or not.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contiguous::vector::Vector;
    /// let mut vec = Vector::new();
    /// assert!(vec.is_empty());
    ///
    /// vec.push(1);
    /// assert!(!vec.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.length == 0 }

    /// Returns the number of elements contained in the instance.
    pub fn len(&self) -> usize { self.length }

    /// Returns the number of elements the instance can hold without reallocating.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contiguous::vector::Vector;
    /// let mut vec = Vector::new();
    /// assert_eq!(0, vec.capacity());
    ///
    /// vec.push(1);
    /// assert_eq!(4, vec.capacity());
    ///
    /// vec.extend([2, 3, 4, 5]);
    /// assert_eq!(6, vec.capacity());
    /// ```
    pub fn capacity(&self) -> usize { self.buffer.capacity().0 }

    /// Returns a pointer to the first element.
    ///
    /// The pointer is null if, and only if, the capacity is 0. It is invalidated by any operation which reallocates.
    pub fn as_ptr(&self) -> *const T { self.buffer.as_ptr() }

    /// Returns a mutable pointer to the first element.
    ///
    /// The pointer is null if, and only if, the capacity is 0. It is invalidated by any operation which reallocates.
    pub fn as_mut_ptr(&mut self) -> *mut T { self.buffer.as_mut_ptr() }

    /// Returns a slice of all the elements.
    pub fn as_slice(&self) -> &[T] {
        //  Safety:
        //  -   The first `length` slots are initialized.
        unsafe { self.buffer.initialized(self.length) }
    }

    /// Returns a mutable slice of all the elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        //  Safety:
        //  -   The first `length` slots are initialized.
        unsafe { self.buffer.initialized_mut(self.length) }
    }

    /// Returns a reference to the first element.
    ///
    /// #   Panics
    ///
    /// Panics if the instance is empty.
    pub fn front(&self) -> &T {
        assert!(!self.is_empty(), "front on an empty Vector");
        &self.as_slice()[0]
    }

    /// Returns a mutable reference to the first element.
    ///
    /// #   Panics
    ///
    /// Panics if the instance is empty.
    pub fn front_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "front_mut on an empty Vector");
        &mut self.as_mut_slice()[0]
    }

    /// Returns a reference to the last element.
    ///
    /// #   Panics
    ///
    /// Panics if the instance is empty.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contiguous::vector::Vector;
    /// let vec: Vector<_> = [5, 6, 7].into_iter().collect();
    ///
    /// assert_eq!(5, *vec.front());
    /// assert_eq!(7, *vec.back());
    /// ```
    pub fn back(&self) -> &T {
        assert!(!self.is_empty(), "back on an empty Vector");
        &self.as_slice()[self.length - 1]
    }

    /// Returns a mutable reference to the last element.
    ///
    /// #   Panics
    ///
    /// Panics if the instance is empty.
    pub fn back_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "back_mut on an empty Vector");
        let last = self.length - 1;
        &mut self.as_mut_slice()[last]
    }

    /// Drops the last element.
    ///
    /// #   Panics
    ///
    /// Panics if the instance is empty.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contiguous::vector::Vector;
    /// let mut vec: Vector<_> = [1, 2].into_iter().collect();
    ///
    /// vec.pop_back();
    /// assert_eq!(&[1], vec.as_slice());
    /// ```
    pub fn pop_back(&mut self) {
        assert!(!self.is_empty(), "pop_back on an empty Vector");

        self.length -= 1;

        //  Safety:
        //  -   The slot at `length` was initialized, and is no longer considered so.
        unsafe { self.buffer.slot_mut(self.length).drop() };
    }

    /// Removes the last element and returns it, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contiguous::vector::Vector;
    /// let mut vec: Vector<_> = [1, 2].into_iter().collect();
    ///
    /// assert_eq!(Some(2), vec.pop());
    /// assert_eq!(Some(1), vec.pop());
    /// assert_eq!(None, vec.pop());
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.length -= 1;

        //  Safety:
        //  -   The slot at `length` was initialized, and is no longer considered so.
        Some(unsafe { self.buffer.slot_mut(self.length).take() })
    }

    /// Clears the instance.
    ///
    /// The instance is then empty, although it retains previously allocated memory.
    ///
    /// Use `shrink_to_fit` to release excess memory.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contiguous::vector::Vector;
    /// let mut vec: Vector<_> = [1, 2, 3].into_iter().collect();
    ///
    /// vec.clear();
    /// assert_eq!(0, vec.len());
    /// assert_eq!(4, vec.capacity());
    /// ```
    pub fn clear(&mut self) {
        let length = self.length;

        //  Forget the elements first, should a Drop panic.
        self.length = 0;

        //  Safety:
        //  -   The first `length` slots were initialized, and no longer are considered so.
        unsafe { destroy_all(self.buffer.as_mut_ptr(), length) };
    }

    /// Swaps the elements, and storage, of two instances.
    ///
    /// No element is moved, cloned, or dropped.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contiguous::vector::Vector;
    /// let mut a: Vector<_> = [1, 2, 3].into_iter().collect();
    /// let mut b: Vector<_> = [4].into_iter().collect();
    ///
    /// let pointer = a.as_ptr();
    ///
    /// a.swap(&mut b);
    ///
    /// assert_eq!(&[4], a.as_slice());
    /// assert_eq!(&[1, 2, 3], b.as_slice());
    /// assert_eq!(pointer, b.as_ptr());
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.buffer, &mut other.buffer);
        mem::swap(&mut self.length, &mut other.length);
        mem::swap(&mut self.allocator, &mut other.allocator);
    }

    /// Removes the element at `index`, shifting all elements after it to the left.
    ///
    /// Returns `index`, the index of the element which followed the removed one, if any.
    ///
    /// The capacity is left unchanged.
    ///
    /// #   Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contiguous::vector::Vector;
    /// let mut vec: Vector<_> = [4, 5, 6, 7].into_iter().collect();
    ///
    /// assert_eq!(2, vec.erase(2));
    /// assert_eq!(&[4, 5, 7], vec.as_slice());
    /// ```
    pub fn erase(&mut self, index: usize) -> usize {
        assert!(index < self.length, "erase index (is {}) should be < len (is {})", index, self.length);

        self.erase_range(index..index + 1)
    }

    /// Removes the elements within `range`, shifting all elements after it to the left.
    ///
    /// Returns the start of `range`, the index of the element which followed the removed ones, if any.
    ///
    /// The capacity is left unchanged.
    ///
    /// The remaining elements are shifted by swapping, hence should dropping a removed element panic the instance is
    /// left with the elements prior to the removed range, and in unspecified order after it.
    ///
    /// #   Panics
    ///
    /// Panics if `range` is inverted, or out of bounds.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contiguous::vector::Vector;
    /// let mut vec: Vector<_> = (0..6).collect();
    ///
    /// assert_eq!(1, vec.erase_range(1..4));
    /// assert_eq!(&[0, 4, 5], vec.as_slice());
    ///
    /// assert_eq!(0, vec.erase_range(..));
    /// assert!(vec.is_empty());
    /// assert_eq!(6, vec.capacity());
    /// ```
    pub fn erase_range<R>(&mut self, range: R) -> usize
    where
        R: ops::RangeBounds<usize>,
    {
        let (first, last) = self.resolve(range);

        let mut hole = first;
        let mut survivor = last;

        {
            let elements = self.as_mut_slice();

            while survivor != elements.len() {
                elements.swap(hole, survivor);
                hole += 1;
                survivor += 1;
            }
        }

        let length = self.length;

        if hole == length {
            return first;
        }

        //  Forget the removed elements first, should a Drop panic.
        self.length = hole;

        //  Safety:
        //  -   The slots in `hole..length` were initialized, and no longer are considered so.
        unsafe { destroy_all(self.buffer.as_mut_ptr().add(hole), length - hole) };

        first
    }

    //  Resolves `range` into `first..last`.
    //
    //  #   Panics
    //
    //  Panics if the resolved range is inverted, or out of bounds.
    fn resolve<R>(&self, range: R) -> (usize, usize)
    where
        R: ops::RangeBounds<usize>,
    {
        use ops::Bound::*;

        let first = match range.start_bound() {
            Included(&first) => first,
            Excluded(&first) => first.saturating_add(1),
            Unbounded => 0,
        };

        let last = match range.end_bound() {
            Included(&last) => last.saturating_add(1),
            Excluded(&last) => last,
            Unbounded => self.length,
        };

        assert!(first <= last, "range start (is {}) should be <= range end (is {})", first, last);
        assert!(last <= self.length, "range end (is {}) should be <= len (is {})", last, self.length);

        (first, last)
    }

    //  Appends an element, within capacity.
    //
    //  #   Safety
    //
    //  -   Assumes that the length is less than the capacity.
    unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.length < self.capacity());

        //  Safety:
        //  -   `length` is less than the capacity, as per pre-condition.
        unsafe { self.buffer.slot_mut(self.length) }.write(value);

        self.length += 1;
    }
}

impl<T: Clone, A: Allocator + Clone> Vector<T, A> {
    /// Reserves capacity for a total of `capacity` elements.
    ///
    /// Calling this method has no effect if the capacity is already at least `capacity`; the capacity never shrinks
    /// through this method.
    ///
    /// Otherwise, the elements are cloned into a new buffer of exactly `capacity` slots, and the former elements
    /// dropped along with their buffer.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving the instance unmodified.
    ///
    /// Should cloning an element panic, the instance is left unmodified.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contiguous::failure::Failure;
    /// #   use contiguous::vector::Vector;
    /// //  BytesOverflow signals that the size of the buffer to allocate, in bytes, overflows.
    /// let mut vec: Vector<u64> = Vector::new();
    /// assert_eq!(Err(Failure::BytesOverflow), vec.try_reserve(usize::MAX / 4));
    ///
    /// //  OutOfMemory signals that the allocator failed to provide the requested memory; here because the amount
    /// //  requested is too large.
    /// let mut vec: Vector<u64> = Vector::new();
    /// assert_eq!(Err(Failure::OutOfMemory), vec.try_reserve(usize::MAX / 16));
    /// assert_eq!(0, vec.capacity());
    ///
    /// //  Fortunately, in general, `try_reserve` should succeed.
    /// let mut vec: Vector<u64> = Vector::new();
    /// assert_eq!(Ok(()), vec.try_reserve(6));
    /// assert_eq!(6, vec.capacity());
    /// ```
    pub fn try_reserve(&mut self, capacity: usize) -> Result<()> {
        if capacity <= self.capacity() {
            return Ok(());
        }

        self.try_replace_buffer(Capacity(capacity))
    }

    /// Reserves capacity for a total of `capacity` elements.
    ///
    /// Calling this method is equivalent to calling `try_reserve` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contiguous::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.reserve(10);
    /// assert_eq!(10, vec.capacity());
    ///
    /// vec.reserve(5);
    /// assert_eq!(10, vec.capacity());
    /// ```
    pub fn reserve(&mut self, capacity: usize) {
        self.try_reserve(capacity).unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Shrinks the capacity down to the number of elements.
    ///
    /// Calling this method has no effect if the capacity already matches the number of elements.
    ///
    /// Otherwise, the elements are cloned into a new buffer of exactly `len` slots, and the former elements dropped
    /// along with their buffer. Shrinking an empty instance releases its memory altogether.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving the instance unmodified.
    ///
    /// Should cloning an element panic, the instance is left unmodified.
    pub fn try_shrink_to_fit(&mut self) -> Result<()> {
        if self.capacity() == self.length {
            return Ok(());
        }

        self.try_replace_buffer(Capacity(self.length))
    }

    /// Shrinks the capacity down to the number of elements.
    ///
    /// Calling this method is equivalent to calling `try_shrink_to_fit` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contiguous::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::with_capacity(10);
    /// vec.extend([5, 6, 7]);
    ///
    /// vec.shrink_to_fit();
    /// assert_eq!(3, vec.capacity());
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.try_shrink_to_fit().unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Appends an element to the back.
    ///
    /// If the instance is full, the capacity grows: to 4 from nothing, and otherwise by half, in which case the
    /// elements are cloned into the new buffer, and the former elements dropped along with their buffer.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving the instance unmodified.
    ///
    /// Should cloning an element panic, the instance is left unmodified.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contiguous::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// assert_eq!(Ok(()), vec.try_push(3));
    /// assert_eq!(3, vec[0]);
    /// ```
    pub fn try_push(&mut self, value: T) -> Result<()> {
        if self.length < self.capacity() {
            //  Safety:
            //  -   `length` is less than the capacity.
            unsafe { self.push_unchecked(value) };
            return Ok(());
        }

        let capacity = self.buffer.capacity().grow()?;

        let mut grown = self.try_copy_with_capacity(capacity)?;

        //  Safety:
        //  -   `grown` has a greater capacity than length.
        unsafe { grown.push_unchecked(value) };

        self.swap(&mut grown);

        Ok(())
    }

    /// Appends an element to the back.
    ///
    /// Calling this method is equivalent to calling `try_push` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contiguous::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.push(3);
    /// assert_eq!(3, vec[0]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Inserts an element at `index`, shifting all elements after it to the right.
    ///
    /// Returns `index`, the index of the inserted element.
    ///
    /// If the instance is full, a new buffer is built from clones of the elements before `index`, then `value`, then
    /// clones of the elements after `index`; the former elements are dropped along with their buffer. Should this fail,
    /// the instance is left unmodified.
    ///
    /// Otherwise, the elements are shifted in place, by swapping, and `value` is assigned over the element at `index`.
    /// Should dropping the element it replaces panic, the instance is left with one more element, in unspecified
    /// order.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving the instance unmodified.
    ///
    /// #   Panics
    ///
    /// Panics if `index` is strictly greater than `len`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contiguous::vector::Vector;
    /// let mut vec: Vector<_> = [1, 3].into_iter().collect();
    ///
    /// assert_eq!(Ok(1), vec.try_insert(1, 2));
    /// assert_eq!(&[1, 2, 3], vec.as_slice());
    /// ```
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize> {
        assert!(index <= self.length, "insertion index (is {}) should be <= len (is {})", index, self.length);

        if self.length == self.capacity() {
            return self.try_insert_grow(index, value);
        }

        if index == self.length {
            //  Safety:
            //  -   `length` is less than the capacity.
            unsafe { self.push_unchecked(value) };
            return Ok(index);
        }

        let duplicate = self.back().clone();

        //  Safety:
        //  -   `length` is less than the capacity.
        unsafe { self.push_unchecked(duplicate) };

        let elements = self.as_mut_slice();

        for hole in (index + 1..elements.len()).rev() {
            elements.swap(hole, hole - 1);
        }

        elements[index] = value;

        Ok(index)
    }

    /// Inserts an element at `index`, shifting all elements after it to the right.
    ///
    /// Calling this method is equivalent to calling `try_insert` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `index` is strictly greater than `len`, or if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contiguous::vector::Vector;
    /// let mut vec = Vector::new();
    ///
    /// for i in 0..5 {
    ///     vec.insert(0, i);
    /// }
    ///
    /// assert_eq!(&[4, 3, 2, 1, 0], vec.as_slice());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        self.try_insert(index, value).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Creates an independent copy of the instance, with a capacity of exactly `len`.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    ///
    /// Should cloning an element panic, the partial copy is dropped before the panic resumes.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contiguous::vector::Vector;
    /// let mut vec: Vector<_> = (0..5).collect();
    /// vec.reserve(10);
    ///
    /// let copy = vec.try_clone().unwrap();
    /// assert_eq!(vec, copy);
    /// assert_eq!(5, copy.capacity());
    /// ```
    pub fn try_clone(&self) -> Result<Self> {
        self.try_copy_with_capacity(Capacity(self.length))
    }

    /// Replaces the elements of the instance by clones of the elements of `other`.
    ///
    /// The copy is built on the side, then swapped in; the former elements are dropped along with their buffer.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving the instance unmodified.
    ///
    /// Should cloning an element panic, the instance is left unmodified.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contiguous::vector::Vector;
    /// let source: Vector<_> = (0..5).collect();
    /// let mut vec: Vector<_> = [42].into_iter().collect();
    ///
    /// assert_eq!(Ok(()), vec.try_assign(&source));
    /// assert_eq!(source, vec);
    /// ```
    pub fn try_assign(&mut self, other: &Self) -> Result<()> {
        let mut copy = other.try_copy_in(Capacity(other.length), self.allocator.clone())?;

        self.swap(&mut copy);

        Ok(())
    }

    //  Replaces the buffer by one of `capacity`, holding clones of the elements.
    //
    //  #   Errors
    //
    //  Returns an error if the memory cannot be allocated, leaving the instance unmodified.
    fn try_replace_buffer(&mut self, capacity: Capacity) -> Result<()> {
        let mut replacement = self.try_copy_with_capacity(capacity)?;

        self.swap(&mut replacement);

        Ok(())
    }

    //  Creates a copy of the instance, of the given capacity.
    //
    //  #   Errors
    //
    //  Returns an error if the memory cannot be allocated.
    fn try_copy_with_capacity(&self, capacity: Capacity) -> Result<Self> {
        self.try_copy_in(capacity, self.allocator.clone())
    }

    //  Creates a copy of the instance, of the given capacity, drawn from `allocator`.
    //
    //  #   Errors
    //
    //  Returns an error if the memory cannot be allocated.
    fn try_copy_in(&self, capacity: Capacity, allocator: A) -> Result<Self> {
        debug_assert!(capacity.holds(self.length));

        let mut copy = Self::try_with_capacity_in(capacity.0, allocator)?;

        //  Safety:
        //  -   `copy` has room for `length` elements, none initialized.
        //  -   `copy` does not overlap `self`.
        unsafe { copy_construct_all(copy.as_mut_ptr(), self.as_slice()) };

        copy.length = self.length;

        Ok(copy)
    }

    //  Inserts an element at `index` in a full instance, by building a new buffer.
    //
    //  #   Errors
    //
    //  Returns an error if the memory cannot be allocated, leaving the instance unmodified.
    fn try_insert_grow(&mut self, index: usize, value: T) -> Result<usize> {
        debug_assert!(self.length == self.capacity());

        let capacity = self.buffer.capacity().grow()?;

        let mut grown = Self::try_with_capacity_in(capacity.0, self.allocator.clone())?;

        let (prefix, suffix) = self.as_slice().split_at(index);

        //  Safety:
        //  -   `grown` has room for `length + 1` elements, none initialized.
        //  -   `grown.length` always accounts for the elements constructed so far, which are dropped along with
        //      `grown` should a clone panic.
        unsafe {
            copy_construct_all(grown.as_mut_ptr(), prefix);
            grown.length = prefix.len();

            grown.push_unchecked(value);

            copy_construct_all(grown.as_mut_ptr().add(grown.length), suffix);
            grown.length += suffix.len();
        }

        self.swap(&mut grown);

        Ok(index)
    }
}

impl<T: Copy> Vector<T> {
    /// Creates a new instance holding a copy of `slice`, with a capacity of exactly `slice.len()`.
    ///
    /// The elements are copied bitwise, in bulk.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contiguous::vector::Vector;
    /// let vec = Vector::try_from_slice(&[4, 8, 15, 16, 23, 42]).unwrap();
    ///
    /// assert_eq!(6, vec.len());
    /// assert_eq!(6, vec.capacity());
    /// assert_eq!(42, vec[5]);
    /// ```
    pub fn try_from_slice(slice: &[T]) -> Result<Self> {
        let mut result = Self::try_with_capacity(slice.len())?;

        //  Safety:
        //  -   `result` has room for `slice.len()` elements, none initialized.
        //  -   `result` does not overlap `slice`.
        unsafe { copy_construct_all_trivial(result.as_mut_ptr(), slice) };

        result.length = slice.len();

        Ok(result)
    }

    /// Creates a new instance holding a copy of `slice`, with a capacity of exactly `slice.len()`.
    ///
    /// Calling this method is equivalent to calling `try_from_slice` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn from_slice(slice: &[T]) -> Self {
        Self::try_from_slice(slice).unwrap_or_else(|failure| panic_from_failure(failure))
    }
}

/// A `Vector<T>` can be `Send` across threads whenever `T` can.
///
/// #   Example of Send.
///
/// With most types, it is possible to send a `Vector` across threads.
///
/// ```
/// # use contiguous::vector::Vector;
/// fn ensure_send<T: Send>(_: T) {}
///
/// let mut vec: Vector<_> = Vector::new();
/// vec.push("Hello".to_string());
///
/// ensure_send(vec);
/// ```
///
/// #   Example of not Send.
///
/// Types that are not Send, however, prevent from sending `Vector` across threads.
///
/// ```compile_fail
/// # use std::rc::Rc;
/// # use contiguous::vector::Vector;
/// fn ensure_send<T: Send>(_: T) {}
///
/// let mut vec: Vector<_> = Vector::new();
/// vec.push(Rc::new(3));
///
/// ensure_send(vec);
/// ```
unsafe impl<T: Send, A: Allocator + Send> Send for Vector<T, A> {}

/// A `Vector<T>` can be shared across threads whenever `T` can; it cannot be modified through a shared reference.
///
/// #   Example of Sync.
///
/// ```
/// # use contiguous::vector::Vector;
/// fn ensure_sync<T: Sync>(_: T) {}
///
/// let mut vec: Vector<_> = Vector::new();
/// vec.push(1);
///
/// ensure_sync(vec);
/// ```
///
/// #   Example of not Sync.
///
/// ```compile_fail
/// # use std::cell::Cell;
/// # use contiguous::vector::Vector;
/// fn ensure_sync<T: Sync>(_: T) {}
///
/// let mut vec: Vector<_> = Vector::new();
/// vec.push(Cell::new(1));
///
/// ensure_sync(vec);
/// ```
unsafe impl<T: Sync, A: Allocator + Sync> Sync for Vector<T, A> {}

impl<T, A: Allocator> Drop for Vector<T, A> {
    fn drop(&mut self) {
        let length = mem::replace(&mut self.length, 0);
        let data = self.buffer.as_mut_ptr();

        //  Releases the memory even if dropping an element panics.
        let _release = Release { buffer: &mut self.buffer, allocator: &self.allocator };

        //  Safety:
        //  -   The first `length` slots were initialized, and no longer are considered so.
        unsafe { destroy_all(data, length) };
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for Vector<T, A> {
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|failure| panic_from_failure(failure))
    }

    fn clone_from(&mut self, source: &Self) {
        self.try_assign(source).unwrap_or_else(|failure| panic_from_failure(failure));
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Vector<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Vector {{ capacity: {}, length: {}, elements: {:?} }}",
            self.capacity(),
            self.len(),
            self.as_slice()
        )
    }
}

impl<T: hash::Hash, A: Allocator> hash::Hash for Vector<T, A> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Eq, A: Allocator> Eq for Vector<T, A> {}

impl<T: PartialEq, A: Allocator> PartialEq for Vector<T, A> {
    fn eq(&self, other: &Self) -> bool { self.as_slice() == other.as_slice() }
}

impl<T: Ord, A: Allocator> Ord for Vector<T, A> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: PartialOrd, A: Allocator> PartialOrd for Vector<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T, A: Allocator> ops::Deref for Vector<T, A> {
    type Target = [T];

    fn deref(&self) -> &[T] { self.as_slice() }
}

impl<T, A: Allocator> ops::DerefMut for Vector<T, A> {
    fn deref_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

impl<T: Copy> From<&[T]> for Vector<T> {
    fn from(slice: &[T]) -> Self {
        Self::from_slice(slice)
    }
}

impl<T: Clone> iter::FromIterator<T> for Vector<T> {
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T>,
    {
        let mut result = Vector::new();
        result.extend(collection);
        result
    }
}

impl<T: Clone, A: Allocator + Clone> iter::Extend<T> for Vector<T, A> {
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>,
    {
        for e in collection {
            self.push(e);
        }
    }
}

impl<'a, T, A: Allocator> iter::IntoIterator for &'a Vector<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.as_slice().iter() }
}

impl<'a, T, A: Allocator> iter::IntoIterator for &'a mut Vector<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.as_mut_slice().iter_mut() }
}

//
//  Implementation Details
//

//  Deallocates the buffer when dropped.
struct Release<'a, T, A: Allocator> {
    buffer: &'a mut Buffer<T>,
    allocator: &'a A,
}

impl<'a, T, A: Allocator> Drop for Release<'a, T, A> {
    fn drop(&mut self) {
        //  Safety:
        //  -   The buffer was allocated by `allocator`.
        //  -   No slot holds a live element any longer, or ever will.
        unsafe { self.buffer.deallocate(self.allocator) };
    }
}

#[cold]
#[inline(never)]
fn panic_from_failure(failure: Failure) -> ! {
    panic!("{}", failure);
}

#[cold]
#[inline(never)]
fn panic_zero_sized_element() -> ! {
    panic!("Zero-sized elements are not supported");
}

//  mod tests
