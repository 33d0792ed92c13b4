//! dc-store: durable channel-value state.
//!
//! Owns the committed channel map and its on-disk copy, plus the pending
//! diff that has not yet been flushed to hardware. Persistence is
//! write-through: every mutation rewrites the state file. Only the hardware
//! write is batched, never the durable one.

pub mod store;

pub use store::ChannelStore;

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the durable state layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("State file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("State file JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
