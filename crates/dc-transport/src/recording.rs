//! Recording fallback for benches without hardware attached.

use crate::{Frame, Transport, TransportResult};

/// Transport that logs frames instead of transmitting them.
///
/// Every rendered frame is appended to an in-memory history, so tests can
/// assert on exactly what would have reached the bus.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    frames: Vec<Frame>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames rendered so far, oldest first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The most recently rendered frame.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl Transport for RecordingTransport {
    fn render(&mut self, frame: &Frame) -> TransportResult<()> {
        for (slot, value) in frame.iter() {
            tracing::info!(slot, value, "frame slot");
        }
        self.frames.push(frame.clone());
        Ok(())
    }
}
