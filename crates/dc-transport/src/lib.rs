//! dc-transport: the hardware output seam.
//!
//! A [`Frame`] is one batch of slot assignments transmitted atomically on the
//! serial control bus. [`Transport`] is the seam the session flushes through;
//! the physical DMX-style widget lives behind it. [`RecordingTransport`] is
//! the fallback for benches without hardware attached: it logs each frame and
//! keeps a history so tests and the CLI can inspect what would have gone out.

pub mod frame;
pub mod recording;

pub use frame::Frame;
pub use recording::RecordingTransport;

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors raised while transmitting a frame.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The device rejected or failed to render a frame.
    #[error("Frame render failed: {what}")]
    Render { what: String },

    /// I/O failure talking to the serial device.
    #[error("Transport I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Output device accepting whole frames.
///
/// `render` transmits the frame and must leave the device ready for the next
/// one (any internal latch is cleared after transmission). Slots within one
/// frame are independent, so no ordering is implied between entries.
pub trait Transport {
    fn render(&mut self, frame: &Frame) -> TransportResult<()>;
}
