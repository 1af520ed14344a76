pub use alloc_def::Global;

#[cfg(feature = "alloc_api2")]
mod alloc_def {
    /// Re-export the `allocator-api2` global allocator, which already
    /// implements `AltAllocator` through the `Allocator` bridge.
    pub use allocator_api2::alloc::Global;
}

#[cfg(not(feature = "alloc_api2"))]
mod alloc_def {
    use core::alloc::Layout;
    use core::ptr::NonNull;

    use alloc_crate::alloc as heap;

    use crate::alloc::AllocError;
    use crate::alloc::AltAllocator;

    /// This is basically a wrapper around the global heap allocation functions.
    ///
    /// See:
    /// <https://doc.rust-lang.org/std/alloc/struct.Global.html>
    ///
    /// It has the same name as `Global` since the allocator APIs are
    /// not stabilized yet.
    #[derive(Debug, Default, Copy, Clone)]
    pub struct Global;

    unsafe impl AltAllocator for Global {
        fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
            // heap::alloc() requires that the layout size be non-zero,
            // but the allocator API does not require this.
            if layout.size() == 0 {
                return Err(AllocError);
            };
            let ptr = unsafe { heap::alloc(layout) };
            let Some(ptr) = NonNull::new(ptr) else {
                return Err(AllocError);
            };
            return Ok(NonNull::slice_from_raw_parts(ptr, layout.size()));
        }

        unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
            unsafe { heap::dealloc(ptr.as_ptr(), layout) };
        }

        unsafe fn shrink(
            &self,
            old_ptr: NonNull<u8>,
            old_layout: Layout,
            new_layout: Layout,
        ) -> Result<NonNull<[u8]>, AllocError> {
            if new_layout.size() == 0 {
                return Err(AllocError);
            }
            let new = unsafe { heap::realloc(old_ptr.as_ptr(), old_layout, new_layout.size()) };
            let Some(new) = NonNull::new(new) else {
                return Err(AllocError);
            };
            return Ok(NonNull::slice_from_raw_parts(new, new_layout.size()));
        }
    }
}
