//! The raw storage of the Vector.

use super::root::{hint, marker, mem, ptr, slice};

use super::allocator::{Allocator, Layout};
use super::capacity::Capacity;
use super::failure::{Failure, Result};
use super::raw::Raw;

//  A Buffer: raw storage for `capacity` elements.
//
//  The Buffer does not know which of its slots are initialized, its owner does. As a result, it never drops any
//  element, and never releases its memory on its own: its owner must call `deallocate`.
//
//  A Buffer of capacity 0 holds no memory, and its pointer is null.
pub struct Buffer<T> {
    pointer: *mut Raw<T>,
    capacity: Capacity,
    _marker: marker::PhantomData<T>,
}

impl<T> Buffer<T> {
    //  Creates an empty buffer.
    pub const fn empty() -> Self {
        Self { pointer: ptr::null_mut(), capacity: Capacity(0), _marker: marker::PhantomData }
    }

    //  Allocates a buffer of the given capacity, without initializing any slot.
    //
    //  No memory is allocated for a capacity of 0.
    //
    //  #   Errors
    //
    //  Returns an error if the size of the buffer overflows, or the allocator fails to provide the memory.
    pub fn allocate<A: Allocator>(capacity: Capacity, allocator: &A) -> Result<Self> {
        if capacity.0 == 0 {
            return Ok(Self::empty());
        }

        let layout = Self::allocation_layout(capacity)?;
        debug_assert!(layout.size() > 0);

        //  Safety:
        //  -   The layout is of non-zero size, as neither capacity nor the size of T is zero.
        let pointer = unsafe { allocator.allocate(layout) };

        if pointer.is_null() { return Err(Failure::OutOfMemory) }

        //  The allocator honored the alignment of Raw<T>.
        let pointer = pointer as *mut Raw<T>;

        Ok(Self { pointer, capacity, _marker: marker::PhantomData })
    }

    //  Deallocates the buffer, if allocated, leaving it empty.
    //
    //  #   Safety
    //
    //  -   Assumes that the buffer was allocated by `allocator`.
    //  -   Assumes that no slot holds a live element any longer.
    pub unsafe fn deallocate<A: Allocator>(&mut self, allocator: &A) {
        if !self.is_allocated() {
            return;
        }

        let layout = match Self::allocation_layout(self.capacity) {
            Ok(layout) => layout,
            Err(_) => {
                //  Safety:
                //  -   Cannot error, it succeeded during the allocation.
                debug_assert!(false, "{:?} succeeded in allocation!", self.capacity);
                unsafe { hint::unreachable_unchecked() }
            },
        };

        //  Safety:
        //  -   The pointer matches the pointer of the allocation.
        //  -   The layout matches the layout of the allocation.
        unsafe { allocator.deallocate(self.pointer as *mut u8, layout) };

        *self = Self::empty();
    }

    //  Returns whether the buffer holds memory, or not.
    pub fn is_allocated(&self) -> bool { !self.pointer.is_null() }

    //  Returns the capacity of the buffer.
    pub fn capacity(&self) -> Capacity { self.capacity }

    //  Returns a pointer to the first slot; null if not allocated.
    pub fn as_ptr(&self) -> *const T { self.pointer as *const T }

    //  Returns a mutable pointer to the first slot; null if not allocated.
    pub fn as_mut_ptr(&mut self) -> *mut T { self.pointer as *mut T }

    //  Returns the slot at `index`.
    //
    //  #   Safety
    //
    //  -   Assumes that `index` is less than the capacity.
    pub unsafe fn slot_mut(&mut self, index: usize) -> &mut Raw<T> {
        debug_assert!(index < self.capacity.0);

        //  Safety:
        //  -   `index` is within the allocation, and access is exclusive per `&mut self`.
        unsafe { &mut *self.pointer.add(index) }
    }

    //  Returns a slice over the first `length` elements.
    //
    //  #   Safety
    //
    //  -   Assumes that the first `length` slots are initialized.
    pub unsafe fn initialized(&self, length: usize) -> &[T] {
        debug_assert!(self.capacity.holds(length));

        if length == 0 {
            return &[];
        }

        //  Safety:
        //  -   The first `length` slots are assumed to be initialized.
        unsafe { slice::from_raw_parts(self.as_ptr(), length) }
    }

    //  Returns a mutable slice over the first `length` elements.
    //
    //  #   Safety
    //
    //  -   Assumes that the first `length` slots are initialized.
    pub unsafe fn initialized_mut(&mut self, length: usize) -> &mut [T] {
        debug_assert!(self.capacity.holds(length));

        if length == 0 {
            return &mut [];
        }

        //  Safety:
        //  -   The first `length` slots are assumed to be initialized.
        //  -   Access is exclusive per `&mut self`.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), length) }
    }

    //  Computes the layout for a given capacity.
    //
    //  #   Fails
    //
    //  -   If the necessary size overflows, or exceeds `isize::MAX`.
    fn allocation_layout(capacity: Capacity) -> Result<Layout> {
        let size = mem::size_of::<Raw<T>>();
        let alignment = mem::align_of::<Raw<T>>();

        let bytes = capacity.0.checked_mul(size).ok_or(Failure::BytesOverflow)?;

        Layout::from_size_align(bytes, alignment).map_err(|_| Failure::BytesOverflow)
    }
}
