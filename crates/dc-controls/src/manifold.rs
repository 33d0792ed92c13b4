//! Dual-channel manifold damper mapping.
//!
//! The manifold slider runs 0 (fully down) to 100 (fully up). The midpoint
//! is the only position where both dampers are fully open; moving away from
//! it closes one damper linearly while the other stays at 255:
//!
//! - p == 50: upper = 255, lower = 255
//! - p > 50:  upper = 255, lower closes as p approaches 100
//! - p < 50:  lower = 255, upper closes as p approaches 0

use dc_core::{scale, Channel};

use crate::ChannelWrite;

/// Slider position at which both dampers are fully open.
pub const MIDPOINT: f64 = 50.0;

/// Maps one slider position onto the two manifold damper channels.
#[derive(Debug, Clone, Copy)]
pub struct ManifoldMapper {
    upper: Channel,
    lower: Channel,
}

impl ManifoldMapper {
    pub fn new(upper: Channel, lower: Channel) -> Self {
        Self { upper, lower }
    }

    /// Channel writes for slider position `p` in [0, 100].
    ///
    /// Out-of-range positions are clamped before mapping.
    pub fn writes_for_position(&self, p: f64) -> [ChannelWrite; 2] {
        let p = p.clamp(0.0, 100.0);
        if p > MIDPOINT {
            let closed_by = scale(p, 50.0, 100.0, 0.0, 255.0) as u8;
            [
                ChannelWrite::new(self.upper, 255),
                ChannelWrite::new(self.lower, 255 - closed_by),
            ]
        } else if p < MIDPOINT {
            let opened_to = scale(p, 0.0, 50.0, 0.0, 255.0) as u8;
            [
                ChannelWrite::new(self.lower, 255),
                ChannelWrite::new(self.upper, opened_to),
            ]
        } else {
            [
                ChannelWrite::new(self.upper, 255),
                ChannelWrite::new(self.lower, 255),
            ]
        }
    }

    /// Slider position implied by the committed damper values.
    ///
    /// Under normal operation at least one damper is fully open. Any other
    /// combination is outside the modeled state space; it is reported and
    /// the midpoint is returned so the control stays usable.
    pub fn position_for(&self, upper_value: u8, lower_value: u8) -> f64 {
        if upper_value == 255 && lower_value == 255 {
            MIDPOINT
        } else if upper_value == 255 {
            // Slider is above the midpoint.
            100.0 - scale(lower_value as f64, 0.0, 255.0, 0.0, 50.0)
        } else if lower_value == 255 {
            // Slider is below the midpoint.
            scale(upper_value as f64, 0.0, 255.0, 0.0, 50.0)
        } else {
            tracing::error!(
                upper = upper_value,
                lower = lower_value,
                "unknown manifold damper positions, falling back to midpoint"
            );
            MIDPOINT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> ManifoldMapper {
        ManifoldMapper::new(Channel::UpperDamper, Channel::LowerDamper)
    }

    fn values(writes: [ChannelWrite; 2]) -> (u8, u8) {
        let mut upper = 0;
        let mut lower = 0;
        for w in writes {
            match w.channel {
                Channel::UpperDamper => upper = w.value,
                Channel::LowerDamper => lower = w.value,
                other => panic!("unexpected channel {other}"),
            }
        }
        (upper, lower)
    }

    #[test]
    fn midpoint_opens_both_dampers() {
        assert_eq!(values(mapper().writes_for_position(50.0)), (255, 255));
    }

    #[test]
    fn upper_half_closes_lower_damper() {
        // scale(75, 50, 100, 0, 255) = 127.5, truncated to 127.
        assert_eq!(values(mapper().writes_for_position(75.0)), (255, 128));
        assert_eq!(values(mapper().writes_for_position(100.0)), (255, 0));
    }

    #[test]
    fn lower_half_closes_upper_damper() {
        assert_eq!(values(mapper().writes_for_position(25.0)), (127, 255));
        assert_eq!(values(mapper().writes_for_position(0.0)), (0, 255));
    }

    #[test]
    fn out_of_range_positions_clamp() {
        assert_eq!(
            values(mapper().writes_for_position(140.0)),
            values(mapper().writes_for_position(100.0))
        );
        assert_eq!(
            values(mapper().writes_for_position(-3.0)),
            values(mapper().writes_for_position(0.0))
        );
    }

    #[test]
    fn inverse_of_spot_positions() {
        let m = mapper();
        assert_eq!(m.position_for(255, 255), 50.0);
        assert!((m.position_for(255, 128) - 75.0).abs() <= 1.0);
        assert!((m.position_for(127, 255) - 25.0).abs() <= 1.0);
        assert_eq!(m.position_for(255, 0), 100.0);
        assert_eq!(m.position_for(0, 255), 0.0);
    }

    #[test]
    fn inconsistent_pair_falls_back_to_midpoint() {
        assert_eq!(mapper().position_for(100, 100), MIDPOINT);
        assert_eq!(mapper().position_for(0, 0), MIDPOINT);
    }
}
