//! Build-time configuration
//!
//! Constants are generated by build.rs from nunchuk.toml, which is
//! validated there. The driver re-validates the assembled config at boot.

use nunchuk_core::{DriverConfig, Timing};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/nunchuk_config.rs"));
}

pub use generated::{I2C_FREQUENCY_HZ, POWER_UP_DELAY_MS};

/// Assemble the driver configuration from the generated constants
pub fn driver_config() -> DriverConfig {
    DriverConfig {
        address: generated::I2C_ADDRESS,
        poll_interval_ms: generated::POLL_INTERVAL_MS,
        timing: Timing {
            handshake_settle_us: generated::HANDSHAKE_SETTLE_US,
            read_settle_us: generated::READ_SETTLE_US,
        },
    }
}
