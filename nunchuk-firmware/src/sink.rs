//! Input sink backed by an embassy signal
//!
//! Key reports are staged until `sync`, which publishes them as one
//! [`ButtonFrame`]. Consumers always see both keys from the same poll.

use core::convert::Infallible;

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use nunchuk_hal::{InputSink, Key};
use nunchuk_protocol::ButtonState;

/// Both key states from one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct ButtonFrame {
    /// Key states as reported
    pub state: ButtonState,
    /// Frame sequence number, incremented on every sync
    pub seq: u32,
}

/// Sink publishing to a static signal
pub struct SignalSink {
    signal: &'static Signal<CriticalSectionRawMutex, ButtonFrame>,
    staged: ButtonFrame,
}

impl SignalSink {
    /// Create a sink publishing to `signal`
    pub fn new(signal: &'static Signal<CriticalSectionRawMutex, ButtonFrame>) -> Self {
        Self {
            signal,
            staged: ButtonFrame {
                state: ButtonState::RELEASED,
                seq: 0,
            },
        }
    }
}

impl InputSink for SignalSink {
    type Error = Infallible;

    fn declare_key(&mut self, key: Key) -> Result<(), Self::Error> {
        debug!("Declared key {} (code {:#x})", key, key.code());
        Ok(())
    }

    fn report_key(&mut self, key: Key, pressed: bool) {
        match key {
            Key::C => self.staged.state.c = pressed,
            Key::Z => self.staged.state.z = pressed,
        }
    }

    fn sync(&mut self) {
        self.staged.seq = self.staged.seq.wrapping_add(1);
        self.signal.signal(self.staged);
    }

    fn unregister(&mut self) {
        info!("Input sink unregistered");
        self.signal.reset();
    }
}
