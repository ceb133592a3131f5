use hiero_sdk::SdkError;
use thiserror::Error;

/// Errors returned by [`crate::FileClient`].
#[derive(Debug, Error)]
pub enum FileError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("File contents must be less than {max} bytes (got {size})")]
    ContentTooLarge { size: usize, max: usize },
    #[error("failed to execute {operation}: {source}")]
    Protocol {
        operation: &'static str,
        #[source]
        source: SdkError,
    },
}

impl FileError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        FileError::InvalidArgument(msg.into())
    }

    /// Adapter for `map_err` that tags a collaborator failure with the operation it came from.
    pub(crate) fn protocol(operation: &'static str) -> impl FnOnce(SdkError) -> Self {
        move |source| FileError::Protocol { operation, source }
    }

    /// The collaborator error, if this failure came from the protocol layer.
    pub fn protocol_error(&self) -> Option<&SdkError> {
        match self {
            FileError::Protocol { source, .. } => Some(source),
            _ => None,
        }
    }
}
