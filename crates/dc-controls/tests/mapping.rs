//! Round-trip properties for the manifold slider mapping.

use dc_controls::ManifoldMapper;
use dc_core::Channel;
use proptest::prelude::*;

fn mapper() -> ManifoldMapper {
    ManifoldMapper::new(Channel::UpperDamper, Channel::LowerDamper)
}

fn apply(m: &ManifoldMapper, p: f64) -> (u8, u8) {
    let mut upper = 0;
    let mut lower = 0;
    for w in m.writes_for_position(p) {
        match w.channel {
            Channel::UpperDamper => upper = w.value,
            Channel::LowerDamper => lower = w.value,
            _ => unreachable!(),
        }
    }
    (upper, lower)
}

proptest! {
    #[test]
    fn forward_then_inverse_round_trips(p in 0.0f64..=100.0) {
        let m = mapper();
        let (upper, lower) = apply(&m, p);
        let recovered = m.position_for(upper, lower);
        prop_assert!(
            (recovered - p).abs() <= 1.0,
            "p={p} -> (upper={upper}, lower={lower}) -> {recovered}"
        );
    }

    #[test]
    fn forward_mapping_keeps_one_damper_open(p in 0.0f64..=100.0) {
        let (upper, lower) = apply(&mapper(), p);
        prop_assert!(upper == 255 || lower == 255);
    }
}

#[test]
fn spot_checks_match_the_slider_scale() {
    let m = mapper();
    assert_eq!(apply(&m, 50.0), (255, 255));
    assert_eq!(apply(&m, 75.0), (255, 128));
    assert!((m.position_for(255, 128) - 75.0).abs() <= 1.0);
}
