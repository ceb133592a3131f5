//! File operations on top of a [`ProtocolLayerClient`].
//!
//! Network transactions carry at most [`FileLimits::create_max_size`] bytes,
//! so larger contents are sent as one create (or update) transaction followed
//! by ordered append transactions. Appends are awaited one at a time: the
//! network appends to the end of the current contents, so order matters.

use std::slice::Chunks;

use chrono::{DateTime, Utc};
use hiero_sdk::{
    FileAppendRequest, FileContentsRequest, FileCreateRequest, FileDeleteRequest,
    FileInfoRequest, FileInfoResponse, FileUpdateRequest, ProtocolLayerClient,
};
use hiero_types::FileId;
use tracing::debug;

use crate::{FileError, FileLimits};

const EXPIRATION_IN_PAST: &str = "Expiration time must be in the future";

/// Client for storing and inspecting files on a Hiero network.
#[derive(Debug, Clone)]
pub struct FileClient<P> {
    protocol: P,
    limits: FileLimits,
}

impl<P: ProtocolLayerClient> FileClient<P> {
    pub fn new(protocol: P) -> Self {
        Self::with_limits(protocol, FileLimits::default())
    }

    pub fn with_limits(protocol: P, limits: FileLimits) -> Self {
        Self { protocol, limits }
    }

    pub fn protocol(&self) -> &P {
        &self.protocol
    }

    pub fn limits(&self) -> FileLimits {
        self.limits
    }

    /// Store `contents` as a new file and return its id.
    pub async fn create_file(&self, contents: &[u8]) -> Result<FileId, FileError> {
        self.create(contents, None).await
    }

    /// Store `contents` as a new file that expires at `expiration`.
    pub async fn create_file_with_expiration(
        &self,
        contents: &[u8],
        expiration: DateTime<Utc>,
    ) -> Result<FileId, FileError> {
        self.create(contents, Some(expiration)).await
    }

    async fn create(
        &self,
        contents: &[u8],
        expiration: Option<DateTime<Utc>>,
    ) -> Result<FileId, FileError> {
        self.limits.check_size(contents.len())?;
        if let Some(expiration) = expiration {
            ensure_future(expiration)?;
        }

        let (first, rest) = self.limits.split(contents);
        let request = FileCreateRequest::new(first).with_expiration(expiration);
        let result = self
            .protocol
            .execute_file_create_transaction(request)
            .await
            .map_err(FileError::protocol("file create transaction"))?;
        let file_id = result.file_id;
        debug!(
            %file_id,
            size = contents.len(),
            appends = self.limits.append_count(contents.len()),
            "file created"
        );

        self.append_chunks(file_id, rest).await?;
        Ok(file_id)
    }

    /// Append `contents` to the end of an existing file.
    pub async fn append_file(&self, file_id: &FileId, contents: &[u8]) -> Result<(), FileError> {
        self.limits.check_size(contents.len())?;
        self.append_chunks(*file_id, contents.chunks(self.limits.create_max_size()))
            .await
    }

    /// Replace the contents of an existing file.
    pub async fn update_file(&self, file_id: &FileId, contents: &[u8]) -> Result<(), FileError> {
        self.limits.check_size(contents.len())?;

        let (first, rest) = self.limits.split(contents);
        self.protocol
            .execute_file_update_transaction(FileUpdateRequest::contents(*file_id, first))
            .await
            .map_err(FileError::protocol("file update transaction"))?;
        debug!(%file_id, size = contents.len(), "file contents replaced");

        self.append_chunks(*file_id, rest).await
    }

    pub async fn update_expiration_time(
        &self,
        file_id: &FileId,
        expiration: DateTime<Utc>,
    ) -> Result<(), FileError> {
        ensure_future(expiration)?;
        self.protocol
            .execute_file_update_transaction(FileUpdateRequest::expiration(*file_id, expiration))
            .await
            .map_err(FileError::protocol("file update transaction"))?;
        Ok(())
    }

    pub async fn read_file(&self, file_id: &FileId) -> Result<Vec<u8>, FileError> {
        let response = self
            .protocol
            .execute_file_contents_query(FileContentsRequest::new(*file_id))
            .await
            .map_err(FileError::protocol("file contents query"))?;
        Ok(response.contents)
    }

    pub async fn delete_file(&self, file_id: &FileId) -> Result<(), FileError> {
        self.protocol
            .execute_file_delete_transaction(FileDeleteRequest::new(*file_id))
            .await
            .map_err(FileError::protocol("file delete transaction"))?;
        debug!(%file_id, "file deleted");
        Ok(())
    }

    pub async fn get_info(&self, file_id: &FileId) -> Result<FileInfoResponse, FileError> {
        self.protocol
            .execute_file_info_query(FileInfoRequest::new(*file_id))
            .await
            .map_err(FileError::protocol("file info query"))
    }

    /// Current size, in bytes, of the stored file.
    pub async fn get_size(&self, file_id: &FileId) -> Result<u64, FileError> {
        Ok(self.get_info(file_id).await?.size)
    }

    pub async fn get_expiration_time(
        &self,
        file_id: &FileId,
    ) -> Result<Option<DateTime<Utc>>, FileError> {
        Ok(self.get_info(file_id).await?.expiration_time)
    }

    pub async fn is_deleted(&self, file_id: &FileId) -> Result<bool, FileError> {
        Ok(self.get_info(file_id).await?.deleted)
    }

    async fn append_chunks(
        &self,
        file_id: FileId,
        chunks: Chunks<'_, u8>,
    ) -> Result<(), FileError> {
        for (index, chunk) in chunks.enumerate() {
            self.protocol
                .execute_file_append_transaction(FileAppendRequest::new(file_id, chunk))
                .await
                .map_err(FileError::protocol("file append transaction"))?;
            debug!(%file_id, chunk = index, len = chunk.len(), "chunk appended");
        }
        Ok(())
    }
}

fn ensure_future(expiration: DateTime<Utc>) -> Result<(), FileError> {
    if expiration <= Utc::now() {
        return Err(FileError::invalid_argument(EXPIRATION_IN_PAST));
    }
    Ok(())
}
