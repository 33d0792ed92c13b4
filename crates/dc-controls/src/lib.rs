//! dc-controls: position mappers for the operator-facing controls.
//!
//! Translates a single control gesture into explicit channel writes:
//!
//! - [`ManifoldMapper`] — one slider position drives the two manifold damper
//!   channels (dual-channel linear mapping, with the inverse used to restore
//!   the slider from committed state).
//! - [`RotaryControl`] — stepped up/down adjustment of one channel (blower
//!   VFD, exhaust damper), plus the angular mappings the dial rendering uses.
//!
//! Mappers are stateless: they return [`ChannelWrite`] commands and never
//! touch the store or the hardware themselves. The session applies the
//! writes and decides when hardware is notified, keeping "what changed"
//! separate from "when it is flushed".

pub mod manifold;
pub mod rotary;
pub mod write;

pub use manifold::ManifoldMapper;
pub use rotary::RotaryControl;
pub use write::ChannelWrite;
