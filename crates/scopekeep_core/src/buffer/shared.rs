//! # Shared Buffer
//!
//! An [`OwningBuffer`] behind a lock, for the cases where several threads need
//! the same storage. The buffer keeps a single owner; handles only share access
//! to it.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use super::owning::OwningBuffer;

/// A cloneable, lock-protected handle to one [`OwningBuffer`].
///
/// Cloning the handle never copies the elements. The storage is released
/// when the last handle is dropped.
///
/// # Example
///
/// ```
/// use scopekeep_core::{OwningBuffer, SharedBuffer};
///
/// let shared = SharedBuffer::new(OwningBuffer::<u32>::new(4));
/// let worker = shared.clone();
///
/// std::thread::spawn(move || worker.with(|buf| buf[0] = 7))
///     .join()
///     .unwrap();
///
/// assert_eq!(shared.lock()[0], 7);
/// ```
#[derive(Debug)]
pub struct SharedBuffer<T> {
    inner: Arc<Mutex<OwningBuffer<T>>>,
}

impl<T> SharedBuffer<T> {
    /// Wraps `buffer` for shared access.
    #[must_use]
    pub fn new(buffer: OwningBuffer<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(buffer)),
        }
    }

    /// Locks the buffer for exclusive access until the guard is dropped.
    pub fn lock(&self) -> MutexGuard<'_, OwningBuffer<T>> {
        self.inner.lock()
    }

    /// Runs `f` with the buffer locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut OwningBuffer<T>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Returns the element count of the buffer.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns the number of live handles to this buffer.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Takes the buffer back out when this is the last handle.
    ///
    /// # Errors
    ///
    /// Gives the handle back unchanged while other handles are still alive.
    pub fn try_into_inner(self) -> Result<OwningBuffer<T>, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<T> Clone for SharedBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> From<OwningBuffer<T>> for SharedBuffer<T> {
    fn from(buffer: OwningBuffer<T>) -> Self {
        Self::new(buffer)
    }
}
