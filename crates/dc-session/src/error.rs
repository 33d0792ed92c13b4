//! Error types for the session layer.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Unified error for session operations, wrapping the backend crates.
///
/// Nothing here is fatal to the host process: a store error leaves the
/// in-memory state serving reads, and a transport error leaves the frame
/// pending for the next throttled tick.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Store error: {0}")]
    Store(#[from] dc_store::StoreError),

    #[error("Transport error: {0}")]
    Transport(#[from] dc_transport::TransportError),
}
