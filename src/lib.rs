//! # Dynamic Array
//!
//! The `dynamic_array` crate provides a `#[no_std]` growable array of `i32` elements.
//! It behaves a lot like `std::Vec<i32>`, but the storage management is written out
//! explicitly: how the buffer grows, when it is copied, and who releases it.
//!
//! `DynamicArray` uses fallible allocations, meaning that instead of panicking on allocation
//! failure, it returns an error and leaves the array exactly as it was before the call.
//!
//! Growth doubles the capacity, or jumps straight to the requested size when that is larger,
//! so appends are amortized O(1) and a single large `resize` only allocates once.
//!
//! Indexing is checked. Out of range `Index` panics, and `at()` returns an error.
//!
//! The allocator API is not stable yet, so the crate uses its own `AltAllocator` trait
//! for the buffer. `Global` wraps the process global heap and is the default.
//!
//! # Feature Flags
//! * `alloc_api2` - Any type implementing the `allocator-api2` `Allocator` trait can be used
//! as an `AltAllocator`. `Global` becomes a re-export of the `allocator-api2` `Global`.

#![no_std]

extern crate alloc as alloc_crate;

#[cfg(test)]
extern crate std;

pub mod alloc;
mod dynamic_array;
pub mod types;

pub use dynamic_array::DynamicArray;
pub use types::Element;
