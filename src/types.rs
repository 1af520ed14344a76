mod errors;

pub use errors::*;

/// The element type stored by `DynamicArray`.
pub type Element = i32;
