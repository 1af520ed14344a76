use core::fmt;
use core::ops::Index;
use core::ops::IndexMut;
use core::slice;

use super::DynamicArray;
use crate::alloc::AltAllocator;
use crate::types::Element;

#[cold]
#[track_caller]
fn index_out_of_range(index: usize, len: usize) -> ! {
    panic!("index {index} out of range for length {len}");
}

impl<A: AltAllocator + Default> Default for DynamicArray<A> {
    fn default() -> Self {
        return Self::new_in(A::default());
    }
}

/// Panics if the allocation fails, like `Vec`. Use `try_clone` and `assign_from`
/// to handle allocation failure.
impl<A: AltAllocator + Clone> Clone for DynamicArray<A> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(arr) => return arr,
            Err(e) => panic!("{e}"),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(e) = self.assign_from(source) {
            panic!("{e}");
        }
    }
}

impl<A: AltAllocator> Index<usize> for DynamicArray<A> {
    type Output = Element;

    #[track_caller]
    fn index(&self, index: usize) -> &Element {
        let len = self.len();
        let Some(item) = self.get(index) else {
            index_out_of_range(index, len);
        };
        return item;
    }
}

impl<A: AltAllocator> IndexMut<usize> for DynamicArray<A> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Element {
        let len = self.len();
        let Some(item) = self.get_mut(index) else {
            index_out_of_range(index, len);
        };
        return item;
    }
}

impl<A: AltAllocator, B: AltAllocator> PartialEq<DynamicArray<B>> for DynamicArray<A> {
    fn eq(&self, other: &DynamicArray<B>) -> bool {
        return self.as_slice() == other.as_slice();
    }
}

impl<A: AltAllocator> Eq for DynamicArray<A> {}

impl<A: AltAllocator> PartialEq<[Element]> for DynamicArray<A> {
    fn eq(&self, other: &[Element]) -> bool {
        return self.as_slice() == other;
    }
}

impl<A: AltAllocator> PartialEq<&[Element]> for DynamicArray<A> {
    fn eq(&self, other: &&[Element]) -> bool {
        return self.as_slice() == *other;
    }
}

impl<A: AltAllocator, const N: usize> PartialEq<[Element; N]> for DynamicArray<A> {
    fn eq(&self, other: &[Element; N]) -> bool {
        return self.as_slice() == other.as_slice();
    }
}

/// Writes every element followed by a single space, so `[1, 2, 3]` renders as `"1 2 3 "`.
impl<A: AltAllocator> fmt::Display for DynamicArray<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.iter() {
            write!(f, "{item} ")?;
        }
        return Ok(());
    }
}

impl<A: AltAllocator> fmt::Debug for DynamicArray<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}

impl<A: AltAllocator> AsRef<[Element]> for DynamicArray<A> {
    fn as_ref(&self) -> &[Element] {
        return self.as_slice();
    }
}

impl<'a, A: AltAllocator> IntoIterator for &'a DynamicArray<A> {
    type Item = &'a Element;
    type IntoIter = slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}

impl<'a, A: AltAllocator> IntoIterator for &'a mut DynamicArray<A> {
    type Item = &'a mut Element;
    type IntoIter = slice::IterMut<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter_mut();
    }
}
