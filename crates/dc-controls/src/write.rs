//! Channel write commands.

use dc_core::Channel;

/// One channel assignment produced by a mapper.
///
/// Command object: the mapper says what should change, the session decides
/// when it reaches hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelWrite {
    pub channel: Channel,
    pub value: u8,
}

impl ChannelWrite {
    pub fn new(channel: Channel, value: u8) -> Self {
        Self { channel, value }
    }
}
