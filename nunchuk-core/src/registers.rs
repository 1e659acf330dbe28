//! Register read cycle
//!
//! The accessory only advances its data latch on this exact sequence:
//!
//! 1. send the one-byte read trigger
//! 2. wait the read settle delay
//! 3. receive exactly one frame
//!
//! Either the whole frame arrives and is decoded, or the call fails.

use embedded_hal::delay::DelayNs;
use nunchuk_hal::BusTransport;
use nunchuk_protocol::{ButtonState, RawFrame, FRAME_LEN, READ_TRIGGER};

use crate::config::Timing;
use crate::error::TransportError;

/// Check a send count against the command length
pub(crate) fn check_sent<E>(expected: usize, actual: usize) -> Result<(), TransportError<E>> {
    if actual < expected {
        return Err(TransportError::ShortWrite { expected, actual });
    }
    Ok(())
}

/// Check a receive count against the requested length
pub(crate) fn check_received<E>(expected: usize, actual: usize) -> Result<(), TransportError<E>> {
    if actual < expected {
        return Err(TransportError::ShortRead { expected, actual });
    }
    Ok(())
}

/// Send a complete command
pub fn send_command<T: BusTransport>(
    transport: &mut T,
    command: &[u8],
) -> Result<(), TransportError<T::Error>> {
    let sent = transport.send(command).map_err(TransportError::Bus)?;
    check_sent(command.len(), sent)
}

/// Run one read cycle and return the raw frame
pub fn read_frame<T, D>(
    transport: &mut T,
    delay: &mut D,
    timing: &Timing,
) -> Result<RawFrame, TransportError<T::Error>>
where
    T: BusTransport,
    D: DelayNs,
{
    send_command(transport, &READ_TRIGGER)?;
    delay.delay_us(timing.read_settle_us);

    let mut buf = [0u8; FRAME_LEN];
    let received = transport.receive(&mut buf).map_err(TransportError::Bus)?;
    check_received(FRAME_LEN, received)?;

    Ok(RawFrame::new(buf))
}

/// Run one read cycle and decode the button state
pub fn read_registers<T, D>(
    transport: &mut T,
    delay: &mut D,
    timing: &Timing,
) -> Result<ButtonState, TransportError<T::Error>>
where
    T: BusTransport,
    D: DelayNs,
{
    read_frame(transport, delay, timing).map(|frame| frame.decode())
}
