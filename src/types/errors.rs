use core::error::Error;
use core::fmt;

/// This enum lets one figure out what kind of error occurred during
/// a `DynamicArray` operation.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorReason {
    /// The requested element count does not fit in a `usize`.
    CapacityOverflow = 1,
    /// The byte size of the buffer does not fit in a `usize`.
    UsizeOverflow,
    /// The byte size of the buffer is not a valid `Layout`.
    LayoutFailure,
    /// The allocator failed to provide memory.
    AllocFailure,
    /// An index was outside of the valid range for the operation.
    IndexOutOfRange,
}

/// A type alias for `Result<T, ArrayErr>`
pub type ArrayResult<T> = Result<T, ArrayErr>;

/// This is used to indicate an error during a `DynamicArray` operation.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ArrayErr(ErrorReason);

impl ArrayErr {
    pub(crate) const fn new(reason: ErrorReason) -> Self {
        return Self(reason);
    }

    pub const fn reason(self) -> ErrorReason {
        return self.0;
    }
}

impl From<ErrorReason> for ArrayErr {
    fn from(reason: ErrorReason) -> Self {
        return Self::new(reason);
    }
}

impl Error for ArrayErr {}

impl fmt::Display for ArrayErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ErrorReason::CapacityOverflow => f.write_str("Capacity overflowed."),
            ErrorReason::UsizeOverflow => f.write_str("usize overflowed."),
            ErrorReason::LayoutFailure => f.write_str("Failed to create layout."),
            ErrorReason::AllocFailure => f.write_str("An allocation failure occurred."),
            ErrorReason::IndexOutOfRange => f.write_str("Index out of range."),
        }
    }
}
