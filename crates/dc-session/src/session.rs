//! Actuator session state machine.

use dc_controls::ChannelWrite;
use dc_core::Channel;
use dc_store::ChannelStore;
use dc_transport::{Frame, Transport};

use crate::throttle::ThrottleClock;
use crate::SessionResult;

/// Minimum seconds between hardware flushes while running.
pub const UPDATE_DELAY_S: f64 = 5.0;

/// Orchestrates the store, the mappers' writes, and the hardware transport.
///
/// Two states: stopped (initial) and running. While stopped no flush
/// happens, pending or not, except the forced writes of the start/stop
/// transitions themselves.
pub struct ActuatorSession<T: Transport> {
    store: ChannelStore,
    transport: T,
    running: bool,
    throttle: ThrottleClock,
}

impl<T: Transport> ActuatorSession<T> {
    pub fn new(store: ChannelStore, transport: T) -> Self {
        Self {
            store,
            transport,
            running: false,
            throttle: ThrottleClock::new(UPDATE_DELAY_S),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Committed value for `channel`.
    pub fn get_value(&self, channel: Channel) -> u8 {
        self.store.get_value(channel)
    }

    pub fn store(&self) -> &ChannelStore {
        &self.store
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Enter the running state.
    ///
    /// Marks every committed value pending and flushes unconditionally, so
    /// the hardware reflects the full persisted configuration on entry.
    pub fn start(&mut self, now_s: f64) -> SessionResult<()> {
        tracing::info!("starting controls");
        self.running = true;
        self.store.mark_all_pending();
        self.flush()?;
        self.throttle.mark(now_s);
        Ok(())
    }

    /// Leave the running state and shut the blower down.
    ///
    /// The blower write goes out as a single-slot frame immediately,
    /// bypassing pending/committed bookkeeping: the persisted config keeps
    /// the operator's last blower setting so the next start restores it.
    pub fn stop(&mut self) -> SessionResult<()> {
        tracing::info!("stopping controls");
        self.running = false;

        let mut frame = Frame::new();
        frame.set(Channel::BlowerVfd.index(), 0);
        if let Err(err) = self.transport.render(&frame) {
            tracing::error!(error = %err, "blower shutdown frame failed");
            return Err(err.into());
        }
        Ok(())
    }

    /// Apply mapper output: persist each write, then schedule a flush.
    pub fn apply(&mut self, writes: &[ChannelWrite], now_s: f64) -> SessionResult<()> {
        for write in writes {
            self.store.set_value(write.channel, write.value)?;
        }
        self.notify_change(now_s)
    }

    /// Flush pending writes if running and the throttle interval elapsed.
    ///
    /// Otherwise a no-op: the writes stay pending and persisted.
    pub fn notify_change(&mut self, now_s: f64) -> SessionResult<()> {
        if self.running && self.throttle.should_flush(now_s) {
            self.flush()?;
            self.throttle.mark(now_s);
        }
        Ok(())
    }

    /// Forced flush before the control view is hidden.
    ///
    /// Ignores the throttle so no operator adjustment is lost on exit; does
    /// not reset the throttle window.
    pub fn on_exit_to_control_panel(&mut self) -> SessionResult<()> {
        if self.running {
            self.flush()?;
        }
        Ok(())
    }

    /// Send every pending write to hardware as one frame.
    ///
    /// On transport failure the frame's entries go back into pending (newer
    /// writes win), so the next throttled tick retries automatically.
    fn flush(&mut self) -> SessionResult<()> {
        if !self.store.has_pending() {
            return Ok(());
        }

        let pending = self.store.take_pending();
        let mut frame = Frame::new();
        for (&channel, &value) in &pending {
            tracing::info!(channel = %channel, value, "setting channel");
            frame.set(channel.index(), value);
        }

        if let Err(err) = self.transport.render(&frame) {
            tracing::error!(error = %err, "flush failed, keeping writes pending");
            self.store.restore_pending(pending);
            return Err(err.into());
        }
        Ok(())
    }
}
