//! Request and result types for the file service transactions and queries.

use chrono::{DateTime, Utc};
use hiero_types::FileId;

/// Maximum payload, in bytes, a single create, update or append transaction may carry.
pub const FILE_CREATE_MAX_SIZE: usize = 2048;

/// Maximum total size, in bytes, of a file stored on the network.
pub const FILE_MAX_SIZE: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCreateRequest {
    pub contents: Vec<u8>,
    pub expiration_time: Option<DateTime<Utc>>,
}

impl FileCreateRequest {
    pub fn new(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: contents.into(),
            expiration_time: None,
        }
    }

    pub fn with_expiration(mut self, expiration_time: impl Into<Option<DateTime<Utc>>>) -> Self {
        self.expiration_time = expiration_time.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCreateResult {
    pub transaction_id: String,
    pub file_id: FileId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAppendRequest {
    pub file_id: FileId,
    pub contents: Vec<u8>,
}

impl FileAppendRequest {
    pub fn new(file_id: FileId, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            file_id,
            contents: contents.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAppendResult {
    pub transaction_id: String,
    pub file_id: FileId,
}

/// Replaces the contents and/or the expiration time of an existing file.
///
/// Built through [`FileUpdateRequest::contents`] or
/// [`FileUpdateRequest::expiration`], so every request changes something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpdateRequest {
    pub file_id: FileId,
    pub contents: Option<Vec<u8>>,
    pub expiration_time: Option<DateTime<Utc>>,
}

impl FileUpdateRequest {
    pub fn contents(file_id: FileId, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            file_id,
            contents: Some(contents.into()),
            expiration_time: None,
        }
    }

    pub fn expiration(file_id: FileId, expiration_time: DateTime<Utc>) -> Self {
        Self {
            file_id,
            contents: None,
            expiration_time: Some(expiration_time),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpdateResult {
    pub transaction_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileDeleteRequest {
    pub file_id: FileId,
}

impl FileDeleteRequest {
    pub fn new(file_id: FileId) -> Self {
        Self { file_id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDeleteResult {
    pub transaction_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileInfoRequest {
    pub file_id: FileId,
}

impl FileInfoRequest {
    pub fn new(file_id: FileId) -> Self {
        Self { file_id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfoResponse {
    pub file_id: FileId,
    pub size: u64,
    pub expiration_time: Option<DateTime<Utc>>,
    pub deleted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileContentsRequest {
    pub file_id: FileId,
}

impl FileContentsRequest {
    pub fn new(file_id: FileId) -> Self {
        Self { file_id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContentsResponse {
    pub file_id: FileId,
    pub contents: Vec<u8>,
}
