//! Poll tick handling
//!
//! Each tick runs one read cycle. A successful read is reported as two key
//! states followed by a sync; a failed read is dropped silently and the
//! next tick simply tries again.

use embedded_hal::delay::DelayNs;
use nunchuk_hal::{BusTransport, InputSink, Key};
use nunchuk_protocol::ButtonState;

use crate::config::Timing;
use crate::registers::read_registers;

/// Poll counters for diagnostics
///
/// Counters wrap on overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollStats {
    /// Ticks run
    pub ticks: u32,
    /// Ticks that produced a report
    pub reported: u32,
    /// Ticks dropped because of a transfer failure
    pub missed: u32,
}

impl PollStats {
    /// Record the outcome of one tick
    pub fn record(&mut self, reported: bool) {
        self.ticks = self.ticks.wrapping_add(1);
        if reported {
            self.reported = self.reported.wrapping_add(1);
        } else {
            self.missed = self.missed.wrapping_add(1);
        }
    }
}

/// Report one decoded state as a single input frame
pub fn report<S: InputSink>(sink: &mut S, state: ButtonState) {
    sink.report_key(Key::C, state.c);
    sink.report_key(Key::Z, state.z);
    sink.sync();
}

/// Run one poll tick
///
/// Returns the reported state, or None if the read failed.
pub fn poll_once<T, D, S>(
    transport: &mut T,
    delay: &mut D,
    timing: &Timing,
    sink: &mut S,
) -> Option<ButtonState>
where
    T: BusTransport,
    D: DelayNs,
    S: InputSink,
{
    let state = read_registers(transport, delay, timing).ok()?;
    report(sink, state);
    Some(state)
}
