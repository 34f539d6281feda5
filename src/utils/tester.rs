//! Internal testing utilities

use crate::root::{cell, fmt, ptr};
use crate::root::sync::atomic::{AtomicUsize, Ordering};

use crate::allocator::{Allocator, DefaultAllocator, Layout};

//  Allocation
//
//  Description of an allocation.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Allocation {
    //  The size of the allocation, in bytes.
    pub size: usize,
    //  The alignment of the allocation, in bytes.
    pub alignment: usize,
    //  The pointer allocated.
    pub pointer: *mut u8,
}

impl Allocation {
    pub fn new(pointer: *mut u8, layout: Layout) -> Self {
        Allocation {
            size: layout.size(),
            alignment: layout.align(),
            pointer,
        }
    }

    pub fn layout(&self) -> Layout {
        Layout::from_size_align(self.size, self.alignment).unwrap()
    }
}

//  Test Allocator
//
//  An allocator specifically for testing:
//  -   Allows injecting allocation failures.
//  -   Checks that allocations and deallocations match.
#[derive(Default)]
pub struct TestAllocator {
    //  The actual allocator.
    pub allocator: DefaultAllocator,
    //  The number of allocations allowed.
    pub allowed: cell::Cell<usize>,
    //  The allocations performed; to check deallocation requests.
    pub allocations: cell::RefCell<Vec<Allocation>>,
}

impl TestAllocator {
    //  Creates an instance allowing `allowed` allocations.
    pub fn allowing(allowed: usize) -> Self {
        let result = Self::default();
        result.allowed.set(allowed);
        result
    }

    pub fn allocations(&self) -> Vec<Allocation> {
        self.allocations.borrow().clone()
    }

    pub fn allocation_sizes(&self) -> Vec<usize> {
        self.allocations.borrow().iter()
            .map(|&a| a.size)
            .collect()
    }

    pub fn clear(&self) {
        for a in self.allocations.borrow_mut().drain(..) {
            //  Safety:
            //  -   Were allocated, and not deallocated.
            unsafe { self.allocator.deallocate(a.pointer, a.layout()) };
        }
    }

    fn locate(&self, allocation: Allocation) -> Option<usize> {
        self.allocations.borrow().iter().position(|a| *a == allocation)
    }
}

impl Allocator for TestAllocator {
    unsafe fn allocate(&self, layout: Layout) -> *mut u8 {
        if self.allowed.get() == 0 {
            return ptr::null_mut();
        }

        self.allowed.set(self.allowed.get() - 1);

        let result = self.allocator.allocate(layout);
        assert_ne!(ptr::null_mut(), result);

        let allocation = Allocation::new(result, layout);
        self.allocations.borrow_mut().push(allocation);

        result
    }

    unsafe fn deallocate(&self, ptr: *mut u8, layout: Layout) {
        let allocation = Allocation::new(ptr, layout);

        if let Some(index) = self.locate(allocation) {
            self.allocations.borrow_mut().remove(index);
        } else {
            panic!("Could not find {:?} in {:?}",
                allocation, &*self.allocations.borrow());
        }

        self.allocator.deallocate(ptr, layout);
    }
}

impl Drop for TestAllocator {
    fn drop(&mut self) { self.clear() }
}

//  SpyCount
//
//  A counter of the number of instances of elements.
pub struct SpyCount(AtomicUsize);

impl SpyCount {
    pub fn zero() -> Self { SpyCount(AtomicUsize::new(0)) }

    pub fn get(&self) -> usize { self.0.load(Ordering::Relaxed) }

    fn decrement(&self) { self.0.fetch_sub(1, Ordering::Relaxed); }

    fn increment(&self) { self.0.fetch_add(1, Ordering::Relaxed); }
}

//  Spy Element
//
//  An element tracking the number of instances, helpful to ensure proper drop.
pub struct SpyElement<'a> {
    count: &'a SpyCount,
}

impl<'a> SpyElement<'a> {
    pub fn new(count: &'a SpyCount) -> Self {
        count.increment();
        SpyElement { count }
    }
}

impl<'a> Clone for SpyElement<'a> {
    fn clone(&self) -> Self { Self::new(self.count) }
}

impl<'a> Drop for SpyElement<'a> {
    fn drop(&mut self) {
        self.count.decrement();
    }
}

//  Countdown
//
//  The number of clones allowed before a `PanickyClone` panics, shared by all
//  instances created from it.
//
//  When armed with `n`, the nth clone panics; a disarmed countdown never does.
pub struct Countdown(cell::Cell<usize>);

impl Countdown {
    //  Creates an instance which never panics.
    pub fn disarmed() -> Self { Countdown(cell::Cell::new(0)) }

    //  Arms the countdown, so that the `clones`th clone from now panics.
    pub fn arm(&self, clones: usize) { self.0.set(clones); }

    //  Disarms the countdown.
    pub fn disarm(&self) { self.0.set(0); }

    fn tick(&self) {
        let remaining = self.0.get();

        if remaining == 0 {
            return;
        }

        self.0.set(remaining - 1);

        if remaining == 1 {
            panic!("Clone failed");
        }
    }
}

//  A value which may panic on clone, tracking the number of instances.
pub struct PanickyClone<'a> {
    value: usize,
    count: &'a SpyCount,
    countdown: &'a Countdown,
}

impl<'a> PanickyClone<'a> {
    pub fn new(value: usize, count: &'a SpyCount, countdown: &'a Countdown) -> Self {
        count.increment();
        Self { value, count, countdown }
    }

    pub fn value(&self) -> usize { self.value }
}

impl<'a> Clone for PanickyClone<'a> {
    fn clone(&self) -> Self {
        self.countdown.tick();
        Self::new(self.value, self.count, self.countdown)
    }
}

impl<'a> Drop for PanickyClone<'a> {
    fn drop(&mut self) {
        self.count.decrement();
    }
}

impl<'a> fmt::Debug for PanickyClone<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<'a> PartialEq for PanickyClone<'a> {
    fn eq(&self, other: &Self) -> bool { self.value == other.value }
}

//  A value which may panic on drop.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct PanickyDrop<T>(T, bool);

impl<T> PanickyDrop<T> {
    //  Creates a normal instance.
    pub fn new(value: T) -> Self { Self(value, false) }

    //  Creates a panicky instance.
    pub fn panicky(value: T) -> Self { Self(value, true) }

    //  Returns the value.
    pub fn value(&self) -> &T { &self.0 }
}

impl<T> Drop for PanickyDrop<T> {
    fn drop(&mut self) { if self.1 { panic!("Oh No!") } }
}

//  Returns the values of a sequence of PanickyClone.
pub fn values_of(elements: &[PanickyClone<'_>]) -> Vec<usize> {
    elements.iter().map(PanickyClone::value).collect()
}
