//! msgcore array handle and iteration.

use crate::sys::{self, RawArray};
use std::{
    fmt::{self, Debug, Formatter},
    ptr::NonNull,
};

/// An owned native array handle.
///
/// The native library reports the element count and the element id at each
/// index; the elements themselves stay owned by the native side and are
/// materialized into host objects through a constructor passed to [`iter`].
/// The handle is released exactly once, when this wrapper is dropped.
///
/// [`iter`]: NativeArray::iter
pub struct NativeArray {
    ptr: NonNull<RawArray>,
}

impl NativeArray {
    /// Adopts an array handle returned by the native library.
    ///
    /// # Safety
    ///
    /// `ptr` must be a valid handle returned by the native library, and
    /// ownership of it moves to the returned wrapper: the caller must not
    /// release it or use it again.
    pub unsafe fn from_raw(ptr: *mut RawArray) -> Self {
        NativeArray {
            ptr: NonNull::new(ptr).expect("native array handles are never null"),
        }
    }

    /// Returns the element count reported by the native library.
    pub fn len(&self) -> usize {
        unsafe { sys::array::get_cnt(self.ptr.as_ptr()) }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element id at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds of the reported count.
    pub fn id_at(&self, index: usize) -> u32 {
        let len = self.len();
        assert!(
            index < len,
            "index {} out of bounds of native array of length {}",
            index,
            len,
        );
        unsafe { sys::array::get_id(self.ptr.as_ptr(), index) }
    }

    /// Lazily maps every element id through `constructor`, in native array
    /// order starting at index 0.
    ///
    /// The count is queried from the native library on each step rather than
    /// cached, and the iterator borrows the handle so it cannot outlive it.
    /// Calling `iter` again restarts from the first element.
    pub fn iter<T, F>(&self, constructor: F) -> Iter<'_, F>
    where
        F: FnMut(u32) -> T,
    {
        Iter {
            array: self,
            index: 0,
            constructor,
        }
    }
}

impl Drop for NativeArray {
    fn drop(&mut self) {
        unsafe { sys::array::unref(self.ptr.as_ptr()) }
    }
}

impl Debug for NativeArray {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("NativeArray").field("len", &self.len()).finish()
    }
}

/// Lazy iterator over a native array, yielding one constructed host object
/// per element id.
pub struct Iter<'a, F> {
    array: &'a NativeArray,
    index: usize,
    constructor: F,
}

impl<'a, T, F> Iterator for Iter<'a, F>
where
    F: FnMut(u32) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.array.len() {
            return None;
        }

        let id = self.array.id_at(self.index);
        self.index += 1;
        Some((self.constructor)(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adopt(ids: &[u32]) -> NativeArray {
        unsafe { NativeArray::from_raw(sys::array::new(ids)) }
    }

    #[test]
    fn identity_constructor_yields_ids_in_order() {
        let array = adopt(&[7, 42, 9]);
        let ids = array.iter(|id| id).collect::<Vec<_>>();
        assert_eq!(ids, [7, 42, 9]);
    }

    #[test]
    fn empty_array_yields_nothing() {
        let array = adopt(&[]);
        assert!(array.is_empty());
        assert_eq!(array.iter(|id| id).next(), None);
    }

    #[test]
    fn constructor_maps_each_id() {
        let array = adopt(&[1, 2, 3]);
        let doubled = array.iter(|id| id * 2).collect::<Vec<_>>();
        assert_eq!(doubled, [2, 4, 6]);
    }

    #[test]
    fn iteration_is_restartable() {
        let array = adopt(&[5, 6]);
        assert_eq!(array.iter(|id| id).collect::<Vec<_>>(), [5, 6]);
        assert_eq!(array.iter(|id| id).collect::<Vec<_>>(), [5, 6]);
    }

    #[test]
    fn size_hint_tracks_remaining_elements() {
        let array = adopt(&[1, 2, 3]);
        let mut iter = array.iter(|id| id);
        assert_eq!(iter.size_hint(), (3, Some(3)));
        iter.next();
        assert_eq!(iter.size_hint(), (2, Some(2)));
    }

    #[test]
    fn handle_is_released_on_drop() {
        let ptr = sys::array::new(&[1][..]);
        {
            let array = unsafe { NativeArray::from_raw(ptr) };
            assert_eq!(array.len(), 1);
            assert!(sys::array::live(ptr));
        }
        assert!(!sys::array::live(ptr));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn out_of_bounds_id_access_panics() {
        let array = adopt(&[1]);
        array.id_at(1);
    }
}
