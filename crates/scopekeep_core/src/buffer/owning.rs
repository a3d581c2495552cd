//! # Owning Buffer
//!
//! Fixed-size, heap-backed storage with exactly one owner.
//!
//! The buffer is a thin shell around a `Box<[T]>`. A zero-length boxed slice
//! never allocates, so the empty state owns nothing and dropping it touches
//! no allocation.

use std::mem;
use std::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};

use crate::error::{BufferError, BufferResult};

/// A fixed-size, exclusively-owned contiguous buffer.
///
/// The allocation is released exactly once: when the buffer is dropped, when
/// [`release`](Self::release) is called, or when a
/// [`transfer_from`](Self::transfer_from) replaces it. Ownership moves between
/// buffers with [`take`](Self::take) and `transfer_from`, and the source is
/// always left empty.
///
/// # Example
///
/// ```
/// use scopekeep_core::OwningBuffer;
///
/// let mut buf: OwningBuffer<i32> = OwningBuffer::new(10);
/// buf[0] = 42;
/// *buf.get_mut(9)? = 99;
///
/// assert_eq!(buf.len(), 10);
/// assert_eq!(*buf.get(0)?, 42);
/// assert!(buf.get(100).is_err());
/// # Ok::<(), scopekeep_core::BufferError>(())
/// ```
///
/// Duplication is not available. The only way to get a second buffer with
/// the same storage is to move it:
///
/// ```compile_fail
/// use scopekeep_core::OwningBuffer;
///
/// let a: OwningBuffer<i32> = OwningBuffer::new(4);
/// let b: OwningBuffer<i32> = a.clone();
/// ```
///
/// Transferring a buffer into itself cannot be expressed, since it would need
/// two live mutable borrows of the same value:
///
/// ```compile_fail
/// use scopekeep_core::OwningBuffer;
///
/// let mut a: OwningBuffer<i32> = OwningBuffer::new(4);
/// a.transfer_from(&mut a);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct OwningBuffer<T> {
    /// The owned elements. Its length is the element count.
    data: Box<[T]>,
}

impl<T> OwningBuffer<T> {
    /// Creates a buffer of `count` default-valued elements.
    ///
    /// `count` may be zero. Allocation failure aborts the process; use
    /// [`try_new`](Self::try_new) to observe it instead.
    ///
    /// # Arguments
    ///
    /// * `count` - Number of elements
    #[must_use]
    pub fn new(count: usize) -> Self
    where
        T: Default,
    {
        Self::from_fn(count, |_| T::default())
    }

    /// Creates a buffer of `count` default-valued elements, reporting
    /// allocation failure as an error.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailed`] when the storage cannot be
    /// reserved, including when the byte size overflows.
    pub fn try_new(count: usize) -> BufferResult<Self>
    where
        T: Default,
    {
        let mut storage = Vec::new();
        storage
            .try_reserve_exact(count)
            .map_err(|_| BufferError::AllocationFailed {
                count,
                bytes: count.saturating_mul(mem::size_of::<T>()),
            })?;
        storage.extend((0..count).map(|_| T::default()));

        Ok(Self {
            data: storage.into_boxed_slice(),
        })
    }

    /// Creates a buffer where element `i` is `f(i)`.
    #[must_use]
    pub fn from_fn<F>(count: usize, f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self {
            data: (0..count).map(f).collect(),
        }
    }

    /// Creates a buffer holding a copy of each element of `items`, in order.
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        Self { data: items.into() }
    }

    /// Creates a buffer of `count` all-zero elements.
    #[must_use]
    pub fn zeroed(count: usize) -> Self
    where
        T: Zeroable,
    {
        Self::from_fn(count, |_| T::zeroed())
    }

    /// Creates an empty buffer. Nothing is allocated.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            data: Box::default(),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfRange`] when `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> BufferResult<&T> {
        let len = self.data.len();
        self.data
            .get(index)
            .ok_or(BufferError::OutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfRange`] when `index >= len()`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> BufferResult<&mut T> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(BufferError::OutOfRange { index, len })
    }

    /// Stores `value` at `index` and returns the previous element.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfRange`] when `index >= len()`; the buffer
    /// is left untouched.
    pub fn set(&mut self, index: usize, value: T) -> BufferResult<T> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }

    /// Moves the allocation out into a new buffer, leaving `self` empty.
    ///
    /// This is an **O(1)** operation: no element is copied or allocated.
    #[must_use = "dropping the returned buffer releases the storage"]
    pub fn take(&mut self) -> Self {
        Self {
            data: mem::take(&mut self.data),
        }
    }

    /// Releases this buffer's allocation, then takes over `source`'s.
    ///
    /// `source` is left empty. This is an **O(1)** operation.
    pub fn transfer_from(&mut self, source: &mut Self) {
        self.release();
        self.data = mem::take(&mut source.data);
    }

    /// Releases the allocation now and leaves the buffer empty.
    ///
    /// Releasing an empty buffer does nothing.
    pub fn release(&mut self) {
        self.data = Box::default();
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterates mutably over the elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Consumes the buffer, returning its storage as a `Vec` without copying.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }

    /// Consumes the buffer, returning its storage.
    #[must_use]
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.data
    }
}

impl<T: Pod> OwningBuffer<T> {
    /// Views the elements as raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data[..])
    }

    /// Views the elements as mutable raw bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.data[..])
    }
}

impl<T> Default for OwningBuffer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Index<usize> for OwningBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for OwningBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> AsRef<[T]> for OwningBuffer<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> AsMut<[T]> for OwningBuffer<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T, const N: usize> From<[T; N]> for OwningBuffer<T> {
    fn from(items: [T; N]) -> Self {
        let data: Box<[T]> = Box::new(items);
        Self { data }
    }
}

impl<T> From<Vec<T>> for OwningBuffer<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            data: items.into_boxed_slice(),
        }
    }
}

impl<T> From<Box<[T]>> for OwningBuffer<T> {
    fn from(data: Box<[T]>) -> Self {
        Self { data }
    }
}

impl<T> From<OwningBuffer<T>> for Vec<T> {
    fn from(buffer: OwningBuffer<T>) -> Self {
        buffer.into_vec()
    }
}

impl<T> FromIterator<T> for OwningBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for OwningBuffer<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OwningBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut OwningBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_new_default_initialized() {
        let buf: OwningBuffer<u32> = OwningBuffer::new(10);
        assert_eq!(buf.len(), 10);
        assert!(buf.iter().all(|&x| x == 0));
    }

    #[test]
    fn test_zero_count_is_empty() {
        let buf: OwningBuffer<u32> = OwningBuffer::new(0);
        assert_eq!(buf.len(), 0);
        assert!(buf.is_empty());
        assert_eq!(buf.get(0), Err(BufferError::OutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn test_out_of_range_reports_index() {
        let buf: OwningBuffer<u8> = OwningBuffer::new(3);
        let err = buf.get(3).unwrap_err();
        assert_eq!(err, BufferError::OutOfRange { index: 3, len: 3 });
        assert_eq!(err.to_string(), "index out of range: index 3, len 3");
    }

    #[test]
    fn test_set_out_of_range_leaves_buffer() {
        let mut buf = OwningBuffer::from([1, 2, 3]);
        assert!(buf.set(7, 99).is_err());
        assert_eq!(buf.as_slice(), &[1, 2, 3]);

        assert_eq!(buf.set(1, 20), Ok(2));
        assert_eq!(buf.as_slice(), &[1, 20, 3]);
    }

    #[test]
    fn test_take_leaves_source_empty() {
        let mut src = OwningBuffer::from([7u16, 8, 9]);
        let ptr = src.as_slice().as_ptr();

        let dst = src.take();
        assert_eq!(dst.as_slice().as_ptr(), ptr); // same allocation, no copy
        assert_eq!(dst.len(), 3);
        assert!(src.is_empty());
    }

    #[test]
    fn test_transfer_releases_destination_once() {
        let tracker = Rc::new(());
        let mut dst = OwningBuffer::from(vec![Rc::clone(&tracker), Rc::clone(&tracker)]);
        let mut src = OwningBuffer::from(vec![Rc::clone(&tracker)]);
        assert_eq!(Rc::strong_count(&tracker), 4);

        dst.transfer_from(&mut src);
        assert_eq!(Rc::strong_count(&tracker), 2);
        assert_eq!(dst.len(), 1);
        assert!(src.is_empty());

        drop(src);
        assert_eq!(Rc::strong_count(&tracker), 2);
        drop(dst);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_release_is_idempotent() {
        let tracker = Rc::new(());
        let mut buf = OwningBuffer::from_fn(4, |_| Rc::clone(&tracker));
        assert_eq!(Rc::strong_count(&tracker), 5);

        buf.release();
        assert_eq!(Rc::strong_count(&tracker), 1);
        buf.release();
        assert!(buf.is_empty());
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_try_new_overflow_is_error() {
        let result = OwningBuffer::<u64>::try_new(usize::MAX);
        assert_eq!(
            result.unwrap_err(),
            BufferError::AllocationFailed {
                count: usize::MAX,
                bytes: usize::MAX,
            }
        );
    }

    #[test]
    fn test_bytes_view() {
        let mut buf: OwningBuffer<u32> = OwningBuffer::zeroed(2);
        buf.as_bytes_mut()[0] = 0xff;
        assert_eq!(buf.as_bytes().len(), 8);
        assert_eq!(buf[0], u32::from_ne_bytes([0xff, 0, 0, 0]));
        assert_eq!(buf[1], 0);
    }
}
