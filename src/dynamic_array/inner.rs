use core::alloc::Layout;
use core::ptr::NonNull;

use crate::alloc::AltAllocator;
use crate::types::ArrayErr;
use crate::types::ArrayResult;
use crate::types::Element;
use crate::types::ErrorReason;

fn layout_array(capacity: usize) -> ArrayResult<Layout> {
    let Some(size) = capacity.checked_mul(size_of::<Element>()) else {
        return Err(ArrayErr::new(ErrorReason::UsizeOverflow));
    };
    // Fails when the size rounded up to the alignment exceeds isize::MAX.
    let Ok(lay) = Layout::from_size_align(size, align_of::<Element>()) else {
        return Err(ArrayErr::new(ErrorReason::LayoutFailure));
    };
    return Ok(lay);
}

/// The owned buffer behind a `DynamicArray`.
///
/// `Inner` is the only place memory is allocated or released. When `capacity`
/// is zero nothing is allocated and `ptr` is dangling.
pub(crate) struct Inner<A: AltAllocator> {
    ptr:      NonNull<Element>,
    capacity: usize,
    alloc:    A,
}

impl<A: AltAllocator> Inner<A> {
    pub(crate) const fn new_in(alloc: A) -> Self {
        return Self {
            ptr:      NonNull::dangling(),
            capacity: 0,
            alloc:    alloc,
        };
    }

    pub(crate) fn with_capacity_in(alloc: A, capacity: usize) -> ArrayResult<Self> {
        let mut inner = Self::new_in(alloc);
        if capacity > 0 {
            let ptr = inner.allocate(capacity)?;
            // Nothing to release yet.
            unsafe { inner.replace(ptr, capacity) };
        }
        return Ok(inner);
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        return self.capacity;
    }

    #[inline]
    pub(crate) const fn get_ptr(&self) -> *mut Element {
        return self.ptr.as_ptr();
    }

    #[inline]
    pub(crate) const fn allocator(&self) -> &A {
        return &self.alloc;
    }

    /// Allocates a fresh buffer of `capacity` slots without touching `self`.
    ///
    /// The returned buffer is uninitialized and must be installed with `replace`.
    pub(crate) fn allocate(&self, capacity: usize) -> ArrayResult<NonNull<Element>> {
        debug_assert!(capacity > 0);
        let layout = layout_array(capacity)?;
        let Ok(mem) = self.alloc.allocate(layout) else {
            return Err(ArrayErr::new(ErrorReason::AllocFailure));
        };
        return Ok(mem.cast());
    }

    /// Installs `ptr` as the buffer and releases the previous one.
    ///
    /// # Safety
    /// `ptr` must come from `self.allocate(capacity)` and must not be owned
    /// by anything else.
    pub(crate) unsafe fn replace(&mut self, ptr: NonNull<Element>, capacity: usize) {
        self.release();
        log::trace!("installing buffer with capacity {capacity}");
        self.ptr = ptr;
        self.capacity = capacity;
    }

    /// Frees the buffer and returns to the unallocated state.
    pub(crate) fn release(&mut self) {
        if self.capacity == 0 {
            return;
        }
        log::trace!("releasing buffer with capacity {}", self.capacity);
        // The layout was valid when the buffer was allocated.
        if let Ok(layout) = layout_array(self.capacity) {
            unsafe { self.alloc.deallocate(self.ptr.cast(), layout) };
        }
        self.ptr = NonNull::dangling();
        self.capacity = 0;
    }

    /// Shrinks the buffer in place through the allocator to `capacity` slots.
    /// On failure the buffer is left untouched.
    pub(crate) fn shrink_to(&mut self, capacity: usize) -> ArrayResult<()> {
        if capacity >= self.capacity {
            return Ok(());
        }
        if capacity == 0 {
            self.release();
            return Ok(());
        }
        let old_layout = layout_array(self.capacity)?;
        let new_layout = layout_array(capacity)?;
        let ret = unsafe { self.alloc.shrink(self.ptr.cast(), old_layout, new_layout) };
        let Ok(mem) = ret else {
            return Err(ArrayErr::new(ErrorReason::AllocFailure));
        };
        log::trace!("shrunk buffer from {} to {capacity}", self.capacity);
        self.ptr = mem.cast();
        self.capacity = capacity;
        return Ok(());
    }
}

impl<A: AltAllocator> Drop for Inner<A> {
    fn drop(&mut self) {
        self.release();
    }
}
