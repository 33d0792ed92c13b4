//! dc-core: stable foundation for dryerctl.
//!
//! Contains:
//! - channel (the fixed actuator channel set and per-channel metadata)
//! - scale (linear interpolation shared by every position mapping)

pub mod channel;
pub mod scale;

// Re-exports: nice ergonomics for downstream crates
pub use channel::Channel;
pub use scale::scale;
