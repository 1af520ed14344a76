//! Contains the allocator types and traits used by `DynamicArray`. The most important being
//! the `AltAllocator` trait, and the `AllocError` type.
//!
//! A `Global` allocator backed by the global heap is always provided. If the `alloc_api2`
//! feature is enabled, `AltAllocator` is implemented for every `allocator-api2` `Allocator`,
//! and `Global` is re-exported from `allocator-api2` instead.

#[cfg(feature = "alloc_api2")]
mod alloc_api2;
mod alt_alloc;
mod global;

pub use alloc_error::AllocError;
pub use alt_alloc::AltAllocator;
pub use global::Global;

mod alloc_error {
    use core::error::Error;
    use core::fmt;

    /// This indicates some sort of memory allocation error from an `AltAllocator`.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct AllocError;

    impl Error for AllocError {}

    impl fmt::Display for AllocError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("A memory allocation error occurred.")
        }
    }
}
