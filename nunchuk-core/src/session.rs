//! Device session lifecycle
//!
//! A [`Session`] exists only for an accessory that completed the handshake
//! and whose keys were accepted by the input sink. It owns the transport
//! for its whole lifetime, so two protocol exchanges can never interleave
//! on the same bus binding.
//!
//! # Ownership
//!
//! `attach` takes its resources by value. Hosts that need them back after a
//! failed attach can pass `&mut` references instead, since the bus, delay
//! and sink traits are all implemented for mutable references.

use embedded_hal::delay::DelayNs;
use nunchuk_hal::{BusTransport, InputSink, Key};

use crate::config::DriverConfig;
use crate::error::AttachError;
use crate::handshake;
use crate::poller::{self, PollStats};

/// Attached accessory
pub struct Session<T, D, S> {
    transport: T,
    delay: D,
    sink: S,
    config: DriverConfig,
    stats: PollStats,
}

impl<T, D, S> Session<T, D, S>
where
    T: BusTransport,
    D: DelayNs,
    S: InputSink,
{
    /// Run the handshake and declare the accessory's keys
    ///
    /// Blocks for both settle delays plus one read cycle. Nothing is
    /// declared on the sink unless the handshake succeeds.
    pub fn attach(
        mut transport: T,
        mut delay: D,
        mut sink: S,
        config: DriverConfig,
    ) -> Result<Self, AttachError<T::Error, S::Error>> {
        handshake::initialize(&mut transport, &mut delay, &config.timing)?;

        for key in Key::ALL {
            sink.declare_key(key).map_err(AttachError::Registration)?;
        }

        Ok(Self {
            transport,
            delay,
            sink,
            config,
            stats: PollStats::default(),
        })
    }

    /// Run one poll tick
    ///
    /// Transfer failures are absorbed here; the tick then reports nothing.
    pub fn tick(&mut self) {
        let state = poller::poll_once(
            &mut self.transport,
            &mut self.delay,
            &self.config.timing,
            &mut self.sink,
        );
        self.stats.record(state.is_some());
    }

    /// Period the timer host should tick at, in milliseconds
    pub fn poll_interval_ms(&self) -> u32 {
        self.config.poll_interval_ms
    }

    /// Configuration the session was attached with
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Poll counters since attach
    pub fn stats(&self) -> PollStats {
        self.stats
    }

    /// Unregister from the sink and hand back the owned resources
    ///
    /// Consuming the session guarantees no further transport calls.
    pub fn detach(mut self) -> (T, D, S) {
        self.sink.unregister();
        (self.transport, self.delay, self.sink)
    }
}
