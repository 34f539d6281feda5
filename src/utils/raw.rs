//! Raw memory, maybe uninitialized.

use super::root::{mem, ptr};

//  Raw memory, suitably sized for T.
//
//  A building block for the Vector buffer, a slot which may or may not hold a
//  value. Whether it does is tracked by its owner, never by the slot itself.
#[repr(transparent)]
pub struct Raw<T>(mem::MaybeUninit<T>);

impl<T> Raw<T> {
    //  Gets a pointer to the value.
    //
    //  The value may not be initialized.
    pub fn as_ptr(&self) -> *const T { self.0.as_ptr() }

    //  Gets a mutable pointer to the value.
    //
    //  The value may not be initialized.
    pub fn as_mut_ptr(&mut self) -> *mut T { self.0.as_mut_ptr() }

    //  Initializes the value.
    //
    //  #   Warning
    //
    //  Does not drop the former value, if any.
    pub fn write(&mut self, value: T) {
        self.0.write(value);
    }

    //  Moves the value out, leaving the slot logically uninitialized.
    //
    //  #   Safety
    //
    //  -   Assumes that the value is initialized.
    //  -   Assumes that the slot is considered uninitialized afterwards.
    pub unsafe fn take(&mut self) -> T {
        //  Safety:
        //  -   The value is assumed to be initialized, and not used again.
        unsafe { ptr::read(self.as_ptr()) }
    }

    //  Drops the value within.
    //
    //  #   Safety
    //
    //  -   Assumes that the value is initialized.
    //  -   Assumes that the slot is considered uninitialized afterwards.
    pub unsafe fn drop(&mut self) {
        //  Safety:
        //  -   The value is assumed to be initialized.
        unsafe { ptr::drop_in_place(self.as_mut_ptr()) };
    }
}
