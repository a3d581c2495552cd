//! # Buffer Factory
//!
//! Generic construction of [`OwningBuffer`]s from whatever argument the caller
//! holds. Arguments are moved into the matching constructor, never copied on
//! the way through.

use super::owning::OwningBuffer;

/// An argument shape that can build an [`OwningBuffer<T>`].
///
/// | Argument | Result |
/// |---|---|
/// | `usize` | that many default-valued elements |
/// | `[T; N]` | the literal elements, in order |
/// | `Vec<T>` | the vector's elements, adopting its storage |
/// | `&[T]` | a copy of each element |
/// | `(usize, T)` | `count` copies of the value |
/// | `OwningBuffer<T>` | the buffer itself |
pub trait BufferSource<T> {
    /// Builds the buffer, consuming the argument.
    fn into_buffer(self) -> OwningBuffer<T>;
}

impl<T: Default> BufferSource<T> for usize {
    fn into_buffer(self) -> OwningBuffer<T> {
        OwningBuffer::new(self)
    }
}

impl<T, const N: usize> BufferSource<T> for [T; N] {
    fn into_buffer(self) -> OwningBuffer<T> {
        OwningBuffer::from(self)
    }
}

impl<T> BufferSource<T> for Vec<T> {
    fn into_buffer(self) -> OwningBuffer<T> {
        OwningBuffer::from(self)
    }
}

impl<T: Clone> BufferSource<T> for &[T] {
    fn into_buffer(self) -> OwningBuffer<T> {
        OwningBuffer::from_slice(self)
    }
}

impl<T: Clone> BufferSource<T> for (usize, T) {
    fn into_buffer(self) -> OwningBuffer<T> {
        let (count, value) = self;
        OwningBuffer::from(vec![value; count])
    }
}

impl<T> BufferSource<T> for OwningBuffer<T> {
    fn into_buffer(self) -> OwningBuffer<T> {
        self
    }
}

/// Builds an [`OwningBuffer<T>`] from any [`BufferSource`].
///
/// # Example
///
/// ```
/// use scopekeep_core::{make_buffer, OwningBuffer};
///
/// let size: usize = 3;
/// let zeros: OwningBuffer<f64> = make_buffer(size);
/// let literal = make_buffer([1, 2, 3, 4, 5]);
/// let filled = make_buffer((4, 'x'));
///
/// assert_eq!(zeros.len(), 3);
/// assert_eq!(literal[2], 3);
/// assert_eq!(filled.as_slice(), &['x'; 4]);
/// ```
#[inline]
pub fn make_buffer<T, A>(args: A) -> OwningBuffer<T>
where
    A: BufferSource<T>,
{
    args.into_buffer()
}
