//! The fixed actuator channel set.
//!
//! Each physical actuator is addressed by one slot on the serial control
//! frame. The set is closed: four actuators, wired once. Modeling them as an
//! enum (instead of loose integer keys) makes the frame slot, the persistence
//! key, and the power-on default a total function of the channel.

use core::fmt;

/// One addressable actuator control line.
///
/// Declaration order matches the hardware frame slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    /// Lower manifold damper motor.
    LowerDamper,
    /// Upper manifold damper motor.
    UpperDamper,
    /// Variable-frequency drive for the blower motor.
    BlowerVfd,
    /// Exhaust/recirculation damper motor.
    ExhaustDamper,
}

impl Channel {
    /// Every channel, in frame slot order.
    pub const ALL: [Channel; 4] = [
        Channel::LowerDamper,
        Channel::UpperDamper,
        Channel::BlowerVfd,
        Channel::ExhaustDamper,
    ];

    /// Slot index on the hardware frame.
    pub fn index(self) -> u16 {
        match self {
            Channel::LowerDamper => 0,
            Channel::UpperDamper => 1,
            Channel::BlowerVfd => 2,
            Channel::ExhaustDamper => 3,
        }
    }

    /// Stable key used in the persisted state file.
    pub fn key(self) -> &'static str {
        match self {
            Channel::LowerDamper => "lowerDamper",
            Channel::UpperDamper => "upperDamper",
            Channel::BlowerVfd => "blowerVfd",
            Channel::ExhaustDamper => "exhaustDamper",
        }
    }

    /// Look up a channel by its persistence key.
    pub fn from_key(key: &str) -> Option<Channel> {
        Channel::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Power-on default: dampers fully open, motors off.
    pub fn default_value(self) -> u8 {
        match self {
            Channel::LowerDamper => 255,
            Channel::UpperDamper => 255,
            Channel::BlowerVfd => 0,
            Channel::ExhaustDamper => 0,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trip() {
        for c in Channel::ALL {
            assert_eq!(Channel::from_key(c.key()), Some(c));
        }
        assert_eq!(Channel::from_key("blower"), None);
    }

    #[test]
    fn frame_slots_are_distinct_and_dense() {
        let mut slots: Vec<u16> = Channel::ALL.iter().map(|c| c.index()).collect();
        slots.sort_unstable();
        assert_eq!(slots, vec![0, 1, 2, 3]);
    }

    #[test]
    fn defaults_open_dampers_and_stop_motors() {
        assert_eq!(Channel::LowerDamper.default_value(), 255);
        assert_eq!(Channel::UpperDamper.default_value(), 255);
        assert_eq!(Channel::BlowerVfd.default_value(), 0);
        assert_eq!(Channel::ExhaustDamper.default_value(), 0);
    }
}
