//! Single-channel rotary controls (blower VFD, exhaust damper).

use dc_core::{scale, Channel};

use crate::ChannelWrite;

/// Dial sweep in radians for value 0.
pub const DIAL_ANGLE_MIN: f64 = 3.6;
/// Dial sweep in radians for value 255.
pub const DIAL_ANGLE_MAX: f64 = 4.9;

/// Value change per up/down press.
pub const DEFAULT_STEP: u8 = 13;

/// Stepped adjustment of one channel, with the angular mappings the dial
/// rendering uses.
#[derive(Debug, Clone, Copy)]
pub struct RotaryControl {
    channel: Channel,
    step: u8,
}

impl RotaryControl {
    pub fn new(channel: Channel) -> Self {
        Self::with_step(channel, DEFAULT_STEP)
    }

    pub fn with_step(channel: Channel, step: u8) -> Self {
        Self { channel, step }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Write for one step up from `current`, saturating at 255.
    pub fn step_up(&self, current: u8) -> ChannelWrite {
        ChannelWrite::new(self.channel, current.saturating_add(self.step))
    }

    /// Write for one step down from `current`, saturating at 0.
    pub fn step_down(&self, current: u8) -> ChannelWrite {
        ChannelWrite::new(self.channel, current.saturating_sub(self.step))
    }

    /// Needle angle in radians for a channel value.
    ///
    /// Bijective over [0, 255]; rendering aid only.
    pub fn dial_angle(value: u8) -> f64 {
        scale(value as f64, 0.0, 255.0, DIAL_ANGLE_MIN, DIAL_ANGLE_MAX)
    }

    /// Sweep of the recirculation wedge display in degrees.
    ///
    /// Fully open (255) collapses the wedge to 0 degrees.
    pub fn wedge_sweep_degrees(value: u8) -> f64 {
        scale((255 - value) as f64, 0.0, 255.0, 0.0, 180.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_by_default_increment() {
        let rotary = RotaryControl::new(Channel::BlowerVfd);
        assert_eq!(rotary.step_up(0).value, 13);
        assert_eq!(rotary.step_down(26).value, 13);
        assert_eq!(rotary.step_up(100).channel, Channel::BlowerVfd);
    }

    #[test]
    fn saturates_at_both_ends() {
        let rotary = RotaryControl::new(Channel::ExhaustDamper);
        assert_eq!(rotary.step_up(250).value, 255);
        assert_eq!(rotary.step_up(255).value, 255);
        assert_eq!(rotary.step_down(5).value, 0);
        assert_eq!(rotary.step_down(0).value, 0);
    }

    #[test]
    fn dial_angle_covers_limits() {
        assert!((RotaryControl::dial_angle(0) - DIAL_ANGLE_MIN).abs() < 1e-12);
        assert!((RotaryControl::dial_angle(255) - DIAL_ANGLE_MAX).abs() < 1e-12);

        // Monotonic between the limits.
        assert!(RotaryControl::dial_angle(100) < RotaryControl::dial_angle(200));
    }

    #[test]
    fn wedge_sweep_inverts_value() {
        assert_eq!(RotaryControl::wedge_sweep_degrees(255), 0.0);
        assert_eq!(RotaryControl::wedge_sweep_degrees(0), 180.0);
    }
}
