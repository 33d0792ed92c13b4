//! dc-session: actuator session lifecycle and write scheduling.
//!
//! [`ActuatorSession`] owns the channel store and the hardware transport,
//! and is the single place that decides when accumulated pending writes
//! reach the bus. Durable writes are immediate; hardware writes are batched
//! behind a minimum-interval throttle while the session is running.

pub mod error;
pub mod session;
pub mod throttle;

pub use error::{SessionError, SessionResult};
pub use session::{ActuatorSession, UPDATE_DELAY_S};
pub use throttle::ThrottleClock;
