//! Button report task
//!
//! Consumes button frames and logs press/release transitions.

use defmt::*;

use nunchuk_protocol::ButtonState;

use crate::channels::BUTTON_FRAME;

/// Report task - logs key transitions from the latest frames
#[embassy_executor::task]
pub async fn report_task() {
    info!("Report task started");

    let mut last = ButtonState::RELEASED;

    loop {
        let frame = BUTTON_FRAME.wait().await;
        let state = frame.state;

        if state.c != last.c {
            info!("C {}", if state.c { "pressed" } else { "released" });
        }
        if state.z != last.z {
            info!("Z {}", if state.z { "pressed" } else { "released" });
        }
        if state.any_pressed() != last.any_pressed() {
            debug!("Buttons {}", if state.any_pressed() { "active" } else { "idle" });
        }
        trace!("Frame {}: c={} z={}", frame.seq, state.c, state.z);

        last = state;
    }
}
