//! Ledger entity identifiers shared by the Hiero file crates.

pub mod entity_id;

pub use entity_id::*;
