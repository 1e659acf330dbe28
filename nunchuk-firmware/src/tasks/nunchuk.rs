//! Accessory attach and poll task
//!
//! Waits for the accessory to power up, runs the handshake, then polls it
//! at the configured cadence. Read failures only cost a sample; they are
//! summarised periodically rather than logged per tick.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Delay, Duration, Ticker, Timer};

use nunchuk_core::{AsyncSession, AttachError, DriverConfig};
use nunchuk_drivers::I2cTransport;

use crate::channels::BUTTON_FRAME;
use crate::sink::SignalSink;

/// Transport type used on this board
pub type NunchukTransport = I2cTransport<I2c<'static, I2C0, Async>>;

/// Ticks between poll statistics summaries
const STATS_EVERY_TICKS: u32 = 500;

/// Nunchuk task
///
/// Attaches the accessory once. A failed handshake is fatal: the task logs
/// the failing step and exits.
#[embassy_executor::task]
pub async fn nunchuk_task(transport: NunchukTransport, config: DriverConfig, power_up_ms: u32) {
    info!("Nunchuk task started");

    // Wait for the accessory to power up
    Timer::after(Duration::from_millis(power_up_ms as u64)).await;

    let sink = SignalSink::new(&BUTTON_FRAME);
    let mut session = match AsyncSession::attach(transport, Delay, sink, config).await {
        Ok(session) => session,
        Err(AttachError::Handshake(e)) => {
            error!(
                "Nunchuk handshake failed at {} step: {:?}",
                e.step.as_str(),
                e.error
            );
            return;
        }
        Err(AttachError::Registration(never)) => match never {},
    };

    info!(
        "Nunchuk attached, polling every {}ms",
        session.poll_interval_ms()
    );

    let mut ticker = Ticker::every(Duration::from_millis(session.poll_interval_ms() as u64));

    loop {
        ticker.next().await;
        session.tick().await;

        let stats = session.stats();
        if stats.ticks % STATS_EVERY_TICKS == 0 {
            debug!(
                "Poll stats: {} ticks, {} reported, {} missed",
                stats.ticks, stats.reported, stats.missed
            );
            if stats.missed > 0 {
                warn!("{} samples missed since attach", stats.missed);
            }
        }
    }
}
