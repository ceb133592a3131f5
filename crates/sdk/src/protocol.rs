use async_trait::async_trait;

use crate::file::{
    FileAppendRequest, FileAppendResult, FileContentsRequest, FileContentsResponse,
    FileCreateRequest, FileCreateResult, FileDeleteRequest, FileDeleteResult, FileInfoRequest,
    FileInfoResponse, FileUpdateRequest, FileUpdateResult,
};
use crate::SdkError;

/// Executes file transactions and queries against a Hiero network.
///
/// Signing, submission, consensus and receipt handling all live behind this
/// trait. Callers only see typed requests and results.
#[async_trait]
pub trait ProtocolLayerClient: Send + Sync {
    async fn execute_file_create_transaction(
        &self,
        request: FileCreateRequest,
    ) -> Result<FileCreateResult, SdkError>;

    async fn execute_file_append_transaction(
        &self,
        request: FileAppendRequest,
    ) -> Result<FileAppendResult, SdkError>;

    async fn execute_file_update_transaction(
        &self,
        request: FileUpdateRequest,
    ) -> Result<FileUpdateResult, SdkError>;

    async fn execute_file_delete_transaction(
        &self,
        request: FileDeleteRequest,
    ) -> Result<FileDeleteResult, SdkError>;

    async fn execute_file_info_query(
        &self,
        request: FileInfoRequest,
    ) -> Result<FileInfoResponse, SdkError>;

    async fn execute_file_contents_query(
        &self,
        request: FileContentsRequest,
    ) -> Result<FileContentsResponse, SdkError>;
}
