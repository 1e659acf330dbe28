//! Attach-time handshake
//!
//! The accessory returns meaningful data only after two fixed commands,
//! separated by a short settle delay. One read cycle then validates the
//! link; its decoded value is thrown away. Any failure aborts the
//! handshake at the step it happened, with no retries.

use embedded_hal::delay::DelayNs;
use nunchuk_hal::BusTransport;
use nunchuk_protocol::{HANDSHAKE_CONFIRM, HANDSHAKE_UNLOCK};

use crate::config::Timing;
use crate::error::{HandshakeError, HandshakeStep};
use crate::registers::{read_frame, send_command};

/// Unlock the accessory and validate the link
pub fn initialize<T, D>(
    transport: &mut T,
    delay: &mut D,
    timing: &Timing,
) -> Result<(), HandshakeError<T::Error>>
where
    T: BusTransport,
    D: DelayNs,
{
    send_command(transport, &HANDSHAKE_UNLOCK)
        .map_err(|e| HandshakeError::new(HandshakeStep::Unlock, e))?;

    delay.delay_us(timing.handshake_settle_us);

    send_command(transport, &HANDSHAKE_CONFIRM)
        .map_err(|e| HandshakeError::new(HandshakeStep::Confirm, e))?;

    read_frame(transport, delay, timing)
        .map_err(|e| HandshakeError::new(HandshakeStep::ValidationRead, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::mock::*;

    #[test]
    fn test_command_sequence() {
        let log = new_log();
        let mut bus = MockTransport::new(&log);
        let mut delay = MockDelay::new(&log);

        initialize(&mut bus, &mut delay, &Timing::default()).unwrap();

        let ops = take(&log);
        assert_eq!(ops[0], send(&[0xF0, 0x55]));
        assert_eq!(ops[1], Op::DelayUs(1000));
        assert_eq!(ops[2], send(&[0xFB, 0x00]));
        assert_eq!(&ops[3..], &read_cycle());
    }

    #[test]
    fn test_gaps_respect_lower_bounds() {
        let log = new_log();
        let mut bus = MockTransport::new(&log);
        let mut delay = MockDelay::new(&log);
        let timing = Timing {
            handshake_settle_us: 900,
            read_settle_us: 1900,
        };

        initialize(&mut bus, &mut delay, &timing).unwrap();

        let delays: heapless::Vec<u32, 4> = take(&log)
            .iter()
            .filter_map(|op| match op {
                Op::DelayUs(us) => Some(*us),
                _ => None,
            })
            .collect();
        assert_eq!(delays.as_slice(), &[900, 1900]);
    }

    #[test]
    fn test_short_unlock_aborts() {
        let log = new_log();
        let mut bus = MockTransport::new(&log);
        let mut delay = MockDelay::new(&log);
        bus.script_send(Ok(1));

        let err = initialize(&mut bus, &mut delay, &Timing::default()).unwrap_err();

        assert_eq!(err.step, HandshakeStep::Unlock);
        assert_eq!(
            err.error,
            TransportError::ShortWrite {
                expected: 2,
                actual: 1
            }
        );
        // No further bus calls after the failed unlock
        assert_eq!(take(&log).as_slice(), &[send(&[0xF0, 0x55])]);
    }

    #[test]
    fn test_short_confirm_skips_read() {
        let log = new_log();
        let mut bus = MockTransport::new(&log);
        let mut delay = MockDelay::new(&log);
        bus.script_send(Ok(2));
        bus.script_send(Ok(0));

        let err = initialize(&mut bus, &mut delay, &Timing::default()).unwrap_err();

        assert_eq!(err.step, HandshakeStep::Confirm);
        assert!(err.error.is_short_write());
        assert_eq!(take(&log).len(), 3);
    }

    #[test]
    fn test_validation_read_failure() {
        let log = new_log();
        let mut bus = MockTransport::new(&log);
        let mut delay = MockDelay::new(&log);
        bus.script_reply(Reply::Short(3));

        let err = initialize(&mut bus, &mut delay, &Timing::default()).unwrap_err();

        assert_eq!(
            err,
            HandshakeError::new(
                HandshakeStep::ValidationRead,
                TransportError::ShortRead {
                    expected: 6,
                    actual: 3
                }
            )
        );
    }
}
