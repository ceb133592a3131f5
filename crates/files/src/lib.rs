//! Hiero file client
//!
//! Stores arbitrary byte contents as ledger files. The network caps the
//! payload of a single file transaction, so contents are split into a
//! create transaction followed by ordered append transactions. All network
//! work is delegated to a [`hiero_sdk::ProtocolLayerClient`].

pub mod client;
pub mod error;
pub mod limits;

pub use client::FileClient;
pub use error::FileError;
pub use hiero_sdk::{FileInfoResponse, FILE_CREATE_MAX_SIZE, FILE_MAX_SIZE};
pub use hiero_types::FileId;
pub use limits::FileLimits;
