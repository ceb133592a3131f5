//! Payload ceilings and the chunk split they imply.

use std::slice::Chunks;

use hiero_sdk::{FILE_CREATE_MAX_SIZE, FILE_MAX_SIZE};

use crate::FileError;

/// Size ceilings applied by [`crate::FileClient`].
///
/// `create_max_size` bounds every single transaction payload (create, update
/// and append alike); `max_size` bounds the whole file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileLimits {
    create_max_size: usize,
    max_size: usize,
}

impl FileLimits {
    pub fn new(create_max_size: usize, max_size: usize) -> Result<Self, FileError> {
        if create_max_size == 0 {
            return Err(FileError::invalid_argument(
                "per-transaction size limit must be greater than zero",
            ));
        }
        if create_max_size > max_size {
            return Err(FileError::invalid_argument(format!(
                "per-transaction size limit {create_max_size} exceeds file size limit {max_size}"
            )));
        }
        Ok(Self {
            create_max_size,
            max_size,
        })
    }

    pub fn create_max_size(&self) -> usize {
        self.create_max_size
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub(crate) fn check_size(&self, size: usize) -> Result<(), FileError> {
        if size > self.max_size {
            return Err(FileError::ContentTooLarge {
                size,
                max: self.max_size,
            });
        }
        Ok(())
    }

    /// Split `contents` into the chunk carried by the first transaction and
    /// the ordered remainder carried by appends.
    pub fn split<'a>(&self, contents: &'a [u8]) -> (&'a [u8], Chunks<'a, u8>) {
        let first_len = contents.len().min(self.create_max_size);
        let (first, rest) = contents.split_at(first_len);
        (first, rest.chunks(self.create_max_size))
    }

    /// Number of append transactions needed after the first one.
    pub fn append_count(&self, len: usize) -> usize {
        len.saturating_sub(self.create_max_size)
            .div_ceil(self.create_max_size)
    }
}

impl Default for FileLimits {
    fn default() -> Self {
        Self {
            create_max_size: FILE_CREATE_MAX_SIZE,
            max_size: FILE_MAX_SIZE,
        }
    }
}
