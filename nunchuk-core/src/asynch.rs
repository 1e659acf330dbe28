//! Async flavour of the driver
//!
//! Same protocol, same errors, same failure policy as the blocking
//! modules. The settle delays and both transfers become await points, so
//! an executor can run other tasks while the accessory latches data.

use embedded_hal_async::delay::DelayNs;
use nunchuk_hal::{AsyncBusTransport, InputSink, Key};
use nunchuk_protocol::{
    ButtonState, RawFrame, FRAME_LEN, HANDSHAKE_CONFIRM, HANDSHAKE_UNLOCK, READ_TRIGGER,
};

use crate::config::{DriverConfig, Timing};
use crate::error::{AttachError, HandshakeError, HandshakeStep, TransportError};
use crate::poller::{report, PollStats};
use crate::registers::{check_received, check_sent};

/// Send a complete command
pub async fn send_command<T: AsyncBusTransport>(
    transport: &mut T,
    command: &[u8],
) -> Result<(), TransportError<T::Error>> {
    let sent = transport.send(command).await.map_err(TransportError::Bus)?;
    check_sent(command.len(), sent)
}

/// Run one read cycle and return the raw frame
pub async fn read_frame<T, D>(
    transport: &mut T,
    delay: &mut D,
    timing: &Timing,
) -> Result<RawFrame, TransportError<T::Error>>
where
    T: AsyncBusTransport,
    D: DelayNs,
{
    send_command(transport, &READ_TRIGGER).await?;
    delay.delay_us(timing.read_settle_us).await;

    let mut buf = [0u8; FRAME_LEN];
    let received = transport
        .receive(&mut buf)
        .await
        .map_err(TransportError::Bus)?;
    check_received(FRAME_LEN, received)?;

    Ok(RawFrame::new(buf))
}

/// Run one read cycle and decode the button state
pub async fn read_registers<T, D>(
    transport: &mut T,
    delay: &mut D,
    timing: &Timing,
) -> Result<ButtonState, TransportError<T::Error>>
where
    T: AsyncBusTransport,
    D: DelayNs,
{
    read_frame(transport, delay, timing)
        .await
        .map(|frame| frame.decode())
}

/// Run one poll tick
///
/// Returns the reported state, or None if the read failed.
pub async fn poll_once<T, D, S>(
    transport: &mut T,
    delay: &mut D,
    timing: &Timing,
    sink: &mut S,
) -> Option<ButtonState>
where
    T: AsyncBusTransport,
    D: DelayNs,
    S: InputSink,
{
    let state = read_registers(transport, delay, timing).await.ok()?;
    report(sink, state);
    Some(state)
}

/// Unlock the accessory and validate the link
pub async fn initialize<T, D>(
    transport: &mut T,
    delay: &mut D,
    timing: &Timing,
) -> Result<(), HandshakeError<T::Error>>
where
    T: AsyncBusTransport,
    D: DelayNs,
{
    send_command(transport, &HANDSHAKE_UNLOCK)
        .await
        .map_err(|e| HandshakeError::new(HandshakeStep::Unlock, e))?;

    delay.delay_us(timing.handshake_settle_us).await;

    send_command(transport, &HANDSHAKE_CONFIRM)
        .await
        .map_err(|e| HandshakeError::new(HandshakeStep::Confirm, e))?;

    read_frame(transport, delay, timing)
        .await
        .map_err(|e| HandshakeError::new(HandshakeStep::ValidationRead, e))?;

    Ok(())
}

/// Attached accessory driven from an async executor
///
/// See [`crate::session::Session`] for the lifecycle contract.
pub struct AsyncSession<T, D, S> {
    transport: T,
    delay: D,
    sink: S,
    config: DriverConfig,
    stats: PollStats,
}

impl<T, D, S> AsyncSession<T, D, S>
where
    T: AsyncBusTransport,
    D: DelayNs,
    S: InputSink,
{
    /// Run the handshake and declare the accessory's keys
    pub async fn attach(
        mut transport: T,
        mut delay: D,
        mut sink: S,
        config: DriverConfig,
    ) -> Result<Self, AttachError<T::Error, S::Error>> {
        initialize(&mut transport, &mut delay, &config.timing).await?;

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
    pub async fn tick(&mut self) {
        let state = poll_once(
            &mut self.transport,
            &mut self.delay,
            &self.config.timing,
            &mut self.sink,
        )
        .await;
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
    pub fn detach(mut self) -> (T, D, S) {
        self.sink.unregister();
        (self.transport, self.delay, self.sink)
    }
}
