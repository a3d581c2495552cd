//! # File Handle
//!
//! A read-only file that is closed exactly once: either explicitly through
//! [`FileHandle::close`] or when the handle goes out of scope.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use scopekeep_core::OwningBuffer;

use crate::config::FileConfig;
use crate::error::{GuardError, GuardResult};

/// An open, read-only file.
///
/// # Example
///
/// ```rust,ignore
/// let mut file = FileHandle::open("data.txt")?;
/// let contents = file.read_to_buffer()?;
/// // closed here
/// ```
#[derive(Debug)]
pub struct FileHandle {
    file: File,
    path: PathBuf,
    max_read_bytes: Option<u64>,
}

impl FileHandle {
    /// Opens `path` for reading with no read limit.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::Open`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> GuardResult<Self> {
        Self::open_with(path, &FileConfig::default())
    }

    /// Opens `path` for reading with the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::Open`] if the file cannot be opened.
    pub fn open_with(path: impl AsRef<Path>, config: &FileConfig) -> GuardResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| GuardError::Open {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("File opened: {}", path.display());

        Ok(Self {
            file,
            path,
            max_read_bytes: config.max_read_bytes,
        })
    }

    /// The path this handle was opened with.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the remaining contents into an owned byte buffer.
    ///
    /// With a read limit set, at most `limit + 1` bytes are ever pulled from
    /// the file, whatever its metadata reports.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::TooLarge`] if the file exceeds the read limit and
    /// [`GuardError::Read`] on I/O failure.
    pub fn read_to_buffer(&mut self) -> GuardResult<OwningBuffer<u8>> {
        let path = &self.path;
        let read_err = |source| GuardError::Read {
            path: path.clone(),
            source,
        };

        // Metadata length is a hint only: procfs and devices report 0.
        let size = self.file.metadata().map_err(read_err)?.len();
        let mut bytes = Vec::new();

        match self.max_read_bytes {
            Some(limit) => {
                if size > limit {
                    return Err(GuardError::TooLarge {
                        path: path.clone(),
                        size,
                        limit,
                    });
                }
                bytes.reserve(usize::try_from(size).unwrap_or(0));
                self.file
                    .by_ref()
                    .take(limit.saturating_add(1))
                    .read_to_end(&mut bytes)
                    .map_err(read_err)?;

                let read = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
                if read > limit {
                    return Err(GuardError::TooLarge {
                        path: path.clone(),
                        size: read,
                        limit,
                    });
                }
            }
            None => {
                bytes.reserve(usize::try_from(size).unwrap_or(0));
                self.file.read_to_end(&mut bytes).map_err(read_err)?;
            }
        }

        Ok(OwningBuffer::from(bytes))
    }

    /// Reads the remaining contents as UTF-8 text.
    ///
    /// # Errors
    ///
    /// As [`read_to_buffer`](Self::read_to_buffer), plus [`GuardError::Utf8`]
    /// for invalid text.
    pub fn read_to_string(&mut self) -> GuardResult<String> {
        let bytes = self.read_to_buffer()?.into_vec();
        String::from_utf8(bytes).map_err(|source| GuardError::Utf8 {
            path: self.path.clone(),
            source,
        })
    }

    /// Closes the file now instead of at the end of the scope.
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for FileHandle {
    fn drop(&mut self) {
        tracing::debug!("File closed: {}", self.path.display());
    }
}
