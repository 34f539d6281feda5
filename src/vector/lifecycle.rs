//! Lifecycle of the elements of the Vector.
//!
//! Bulk construction and destruction of contiguous runs of elements living in raw storage.
//!
//! Construction by cloning is transactional: should cloning any element panic, the elements constructed so far by the
//! call are dropped, in reverse order, before the panic resumes. The destination is thus either fully constructed, or
//! left without any live element.

use super::root::{mem, ptr};

//  Drops the `length` elements starting at `data`, front to back.
//
//  Elements without drop glue are simply abandoned.
//
//  Should an element panic when dropped, the remaining elements are still dropped before the panic resumes.
//
//  #   Safety
//
//  -   Assumes that the `length` elements starting at `data` are initialized.
//  -   Assumes that those elements are considered uninitialized afterwards.
pub unsafe fn destroy_all<T>(data: *mut T, length: usize) {
    if !mem::needs_drop::<T>() || length == 0 {
        return;
    }

    debug_assert!(!data.is_null());

    //  Safety:
    //  -   The `length` elements starting at `data` are assumed to be initialized.
    unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(data, length)) };
}

//  Clones the elements of `source` into the uninitialized storage starting at `destination`.
//
//  If cloning an element panics, the clones already constructed are dropped, last to first, and the panic resumes.
//
//  #   Safety
//
//  -   Assumes that `destination` points to storage for at least `source.len()` elements, none initialized.
//  -   Assumes that `destination` does not overlap `source`.
pub unsafe fn copy_construct_all<T: Clone>(destination: *mut T, source: &[T]) {
    let mut rollback = Rollback { data: destination, constructed: 0 };

    for element in source {
        let value = element.clone();

        //  Safety:
        //  -   `constructed` is less than `source.len()`, hence within the storage.
        unsafe { ptr::write(destination.add(rollback.constructed), value) };

        rollback.constructed += 1;
    }

    mem::forget(rollback);
}

//  Copies the elements of `source` into the uninitialized storage starting at `destination`, bitwise.
//
//  `destination` may be null if `source` is empty.
//
//  #   Safety
//
//  -   Assumes that `destination` points to storage for at least `source.len()` elements, none initialized.
//  -   Assumes that `destination` does not overlap `source`.
pub unsafe fn copy_construct_all_trivial<T: Copy>(destination: *mut T, source: &[T]) {
    if source.is_empty() {
        return;
    }

    debug_assert!(!destination.is_null());

    //  Safety:
    //  -   `destination` is assumed to have room for `source.len()` elements.
    //  -   The ranges are assumed not to overlap.
    unsafe { ptr::copy_nonoverlapping(source.as_ptr(), destination, source.len()) };
}

//
//  Implementation Details
//

//  Drops the `constructed` first elements of `data`, last to first, unless forgotten.
struct Rollback<T> {
    data: *mut T,
    constructed: usize,
}

impl<T> Drop for Rollback<T> {
    fn drop(&mut self) {
        while self.constructed != 0 {
            self.constructed -= 1;

            //  Safety:
            //  -   The first `constructed` elements were initialized by `copy_construct_all`, and are not used any
            //      longer.
            unsafe { ptr::drop_in_place(self.data.add(self.constructed)) };
        }
    }
}
