use core::cmp;
use core::mem;
use core::ptr;
use core::ptr::NonNull;
use core::slice;

use super::inner::Inner;
use crate::alloc::AltAllocator;
use crate::alloc::Global;
use crate::types::ArrayErr;
use crate::types::ArrayResult;
use crate::types::Element;
use crate::types::ErrorReason;

/// Writes `value` into `count` consecutive slots starting at `dst`.
///
/// # Safety
/// `dst..dst + count` must be inside one allocation owned by the caller.
unsafe fn fill(dst: *mut Element, count: usize, value: Element) {
    for i in 0..count {
        unsafe { dst.add(i).write(value) };
    }
}

/// A growable, contiguous array of `Element`s that owns its buffer.
///
/// Exactly one `DynamicArray` owns a given buffer. Moving the contents out with
/// [`take`](Self::take) or [`move_from`](Self::move_from) leaves the source empty,
/// with no allocation behind it.
///
/// Any operation that can allocate returns an [`ArrayResult`]. If the allocation fails
/// the array keeps its previous length, capacity and contents.
pub struct DynamicArray<A: AltAllocator = Global> {
    inner: Inner<A>,
    len:   usize,
}

// The buffer is uniquely owned, so the array is as thread safe as its allocator.
unsafe impl<A: AltAllocator + Send> Send for DynamicArray<A> {}
unsafe impl<A: AltAllocator + Sync> Sync for DynamicArray<A> {}

impl DynamicArray {
    /// Creates an empty array using the global allocator. Nothing is allocated.
    pub const fn new() -> Self {
        return Self::new_in(Global);
    }

    /// Creates an empty array with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> ArrayResult<Self> {
        return Self::with_capacity_in(Global, capacity);
    }

    /// Creates an array of `size` copies of `value`, with a capacity of exactly `size`.
    pub fn from_elem(size: usize, value: Element) -> ArrayResult<Self> {
        return Self::from_elem_in(Global, size, value);
    }

    /// Creates an array holding a copy of `items`, with a capacity of exactly `items.len()`.
    pub fn from_slice(items: &[Element]) -> ArrayResult<Self> {
        return Self::from_slice_in(Global, items);
    }
}

impl<A: AltAllocator> DynamicArray<A> {
    pub const fn new_in(alloc: A) -> Self {
        return Self {
            inner: Inner::new_in(alloc),
            len:   0,
        };
    }

    pub fn with_capacity_in(alloc: A, capacity: usize) -> ArrayResult<Self> {
        return Ok(Self {
            inner: Inner::with_capacity_in(alloc, capacity)?,
            len:   0,
        });
    }

    pub fn from_elem_in(alloc: A, size: usize, value: Element) -> ArrayResult<Self> {
        let mut arr = Self::with_capacity_in(alloc, size)?;
        unsafe { fill(arr.as_mut_ptr(), size, value) };
        arr.len = size;
        return Ok(arr);
    }

    pub fn from_slice_in(alloc: A, items: &[Element]) -> ArrayResult<Self> {
        let mut arr = Self::with_capacity_in(alloc, items.len())?;
        unsafe { ptr::copy_nonoverlapping(items.as_ptr(), arr.as_mut_ptr(), items.len()) };
        arr.len = items.len();
        return Ok(arr);
    }

    /// Deep copies the array into a new buffer sized to exactly `self.len()`.
    pub fn try_clone(&self) -> ArrayResult<Self>
    where
        A: Clone,
    {
        return Self::from_slice_in(self.inner.allocator().clone(), self.as_slice());
    }

    /// Moves the contents out in constant time, leaving `self` empty and unallocated.
    pub fn take(&mut self) -> Self
    where
        A: Clone,
    {
        let mut out = Self::new_in(self.inner.allocator().clone());
        out.swap(self);
        return out;
    }

    /// Releases the current buffer, then steals the buffer, length and capacity of
    /// `other`. `other` is left empty and unallocated.
    pub fn move_from(&mut self, other: &mut Self) {
        self.clear();
        self.swap(other);
    }

    /// Replaces the contents with a copy of `other`.
    ///
    /// The current buffer is reused when it can hold `other.len()` elements,
    /// otherwise a buffer of exactly `other.len()` is allocated and the old one released.
    pub fn assign_from<B: AltAllocator>(&mut self, other: &DynamicArray<B>) -> ArrayResult<()> {
        return self.assign_from_slice(other.as_slice());
    }

    /// Same as [`assign_from`](Self::assign_from), but copies from a slice.
    pub fn assign_from_slice(&mut self, items: &[Element]) -> ArrayResult<()> {
        let count = items.len();
        if count > self.capacity() {
            let new = self.inner.allocate(count)?;
            self.len = 0;
            unsafe { self.inner.replace(new, count) };
        }
        unsafe { ptr::copy_nonoverlapping(items.as_ptr(), self.as_mut_ptr(), count) };
        self.len = count;
        return Ok(());
    }

    /// Exchanges buffers, lengths and capacities with `other`. Nothing is copied or allocated.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    pub fn push(&mut self, value: Element) -> ArrayResult<()> {
        if self.len == self.capacity() {
            let required = self.required_len(1)?;
            self.grow_for(required)?;
        }
        unsafe { self.as_mut_ptr().add(self.len).write(value) };
        self.len += 1;
        return Ok(());
    }

    /// Removes the last element and returns it, or `None` if the array is empty.
    pub fn pop(&mut self) -> Option<Element> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        return Some(unsafe { self.as_ptr().add(self.len).read() });
    }

    /// Sets the length to `count`, filling any new slots with `value`.
    ///
    /// Shrinking, or growing within the current capacity, never reallocates.
    /// Growing past the capacity reallocates once, to `max(count, 2 * capacity)`.
    pub fn resize(&mut self, count: usize, value: Element) -> ArrayResult<()> {
        if count > self.capacity() {
            let capacity = self.grown_capacity(count);
            self.reallocate(capacity)?;
        }
        if count > self.len {
            let start = unsafe { self.as_mut_ptr().add(self.len) };
            unsafe { fill(start, count - self.len, value) };
        }
        self.len = count;
        return Ok(());
    }

    /// Same as `resize(count, 0)`.
    pub fn resize_default(&mut self, count: usize) -> ArrayResult<()> {
        return self.resize(count, Element::default());
    }

    /// Shortens the array to `count` elements. Does nothing if `count >= len`.
    pub fn truncate(&mut self, count: usize) {
        if count < self.len {
            self.len = count;
        }
    }

    /// Empties the array and releases its buffer, so the capacity drops to zero.
    pub fn clear(&mut self) {
        self.len = 0;
        self.inner.release();
    }

    /// Inserts `value` at `index`, shifting everything after it one slot toward the end.
    ///
    /// `index` may be equal to `len()`. When the buffer is full the prefix, the new
    /// value, and the suffix are written into a single new buffer in one pass.
    ///
    /// Returns the index of the inserted element.
    pub fn insert(&mut self, index: usize, value: Element) -> ArrayResult<usize> {
        if index > self.len {
            return Err(ArrayErr::new(ErrorReason::IndexOutOfRange));
        }
        let tail = self.len - index;

        if self.len == self.capacity() {
            let required = self.required_len(1)?;
            let capacity = self.grown_capacity(required);
            let new = self.inner.allocate(capacity)?;
            log::trace!("insert at {index} moves {} elements into capacity {capacity}", self.len);

            let src = self.as_ptr();
            let dst = new.as_ptr();
            unsafe {
                ptr::copy_nonoverlapping(src, dst, index);
                dst.add(index).write(value);
                ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), tail);
                self.inner.replace(new, capacity);
            }
        } else {
            unsafe {
                let at = self.as_mut_ptr().add(index);
                ptr::copy(at, at.add(1), tail);
                at.write(value);
            }
        }

        self.len += 1;
        return Ok(index);
    }

    /// Removes the element at `index`, shifting everything after it one slot toward the start.
    ///
    /// Returns `index`, which now holds the element that followed the erased one.
    /// If the last element was erased the returned value equals `len()`.
    pub fn erase(&mut self, index: usize) -> ArrayResult<usize> {
        if index >= self.len {
            return Err(ArrayErr::new(ErrorReason::IndexOutOfRange));
        }
        let tail = self.len - index - 1;
        unsafe {
            let at = self.as_mut_ptr().add(index);
            ptr::copy(at.add(1), at, tail);
        }
        self.len -= 1;
        return Ok(index);
    }

    /// Appends every element of `items`, reallocating at most once.
    pub fn extend_from_slice(&mut self, items: &[Element]) -> ArrayResult<()> {
        let required = self.required_len(items.len())?;
        self.grow_for(required)?;
        unsafe {
            let end = self.as_mut_ptr().add(self.len);
            ptr::copy_nonoverlapping(items.as_ptr(), end, items.len());
        }
        self.len = required;
        return Ok(());
    }

    /// Makes room for at least `additional` more elements using the doubling policy.
    pub fn reserve(&mut self, additional: usize) -> ArrayResult<()> {
        let required = self.required_len(additional)?;
        return self.grow_for(required);
    }

    /// Makes room for exactly `additional` more elements if there is not enough room already.
    pub fn reserve_exact(&mut self, additional: usize) -> ArrayResult<()> {
        let required = self.required_len(additional)?;
        if required <= self.capacity() {
            return Ok(());
        }
        return self.reallocate(required);
    }

    /// Shrinks the capacity to the length. An empty array releases its buffer.
    pub fn shrink_to_fit(&mut self) -> ArrayResult<()> {
        return self.inner.shrink_to(self.len);
    }

    #[inline]
    pub const fn len(&self) -> usize {
        return self.len;
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        return self.inner.capacity();
    }

    #[inline]
    pub const fn allocator(&self) -> &A {
        return self.inner.allocator();
    }

    /// Returns the first slot of the buffer, or `None` when nothing is allocated.
    ///
    /// The pointer is only valid until the next call that can reallocate or release
    /// the buffer (`push`, `insert`, `resize`, `reserve`, `clear`, ...). Using it
    /// afterwards is undefined behaviour.
    pub fn data(&self) -> Option<NonNull<Element>> {
        if self.capacity() == 0 {
            return None;
        }
        return NonNull::new(self.inner.get_ptr());
    }

    /// Raw pointer to the buffer. Dangling when nothing is allocated.
    ///
    /// Same validity rules as [`data`](Self::data).
    #[inline]
    pub const fn as_ptr(&self) -> *const Element {
        return self.inner.get_ptr();
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut Element {
        return self.inner.get_ptr();
    }

    #[inline]
    pub fn as_slice(&self) -> &[Element] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Element] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Element> {
        return self.as_slice().get(index);
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Element> {
        return self.as_mut_slice().get_mut(index);
    }

    /// Checked access, failing with `ErrorReason::IndexOutOfRange`.
    pub fn at(&self, index: usize) -> ArrayResult<&Element> {
        let Some(item) = self.get(index) else {
            return Err(ArrayErr::new(ErrorReason::IndexOutOfRange));
        };
        return Ok(item);
    }

    pub fn at_mut(&mut self, index: usize) -> ArrayResult<&mut Element> {
        let Some(item) = self.get_mut(index) else {
            return Err(ArrayErr::new(ErrorReason::IndexOutOfRange));
        };
        return Ok(item);
    }

    /// Iterates over the elements in index order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Element> {
        return self.as_slice().iter();
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Element> {
        return self.as_mut_slice().iter_mut();
    }

    fn required_len(&self, additional: usize) -> ArrayResult<usize> {
        let Some(required) = self.len.checked_add(additional) else {
            return Err(ArrayErr::new(ErrorReason::CapacityOverflow));
        };
        return Ok(required);
    }

    /// `max(required, 2 * capacity)`, and never zero.
    fn grown_capacity(&self, required: usize) -> usize {
        let doubled = self.capacity().checked_mul(2).unwrap_or(required);
        return cmp::max(cmp::max(required, doubled), 1);
    }

    fn grow_for(&mut self, required: usize) -> ArrayResult<()> {
        if required <= self.capacity() {
            return Ok(());
        }
        let capacity = self.grown_capacity(required);
        return self.reallocate(capacity);
    }

    /// Moves the live elements into a new buffer of `capacity` slots and
    /// releases the old one. On failure nothing changes.
    fn reallocate(&mut self, capacity: usize) -> ArrayResult<()> {
        let new = self.inner.allocate(capacity)?;
        log::trace!(
            "reallocating {} elements from capacity {} to {capacity}",
            self.len,
            self.capacity()
        );
        unsafe {
            ptr::copy_nonoverlapping(self.as_ptr(), new.as_ptr(), self.len);
            self.inner.replace(new, capacity);
        }
        return Ok(());
    }
}
