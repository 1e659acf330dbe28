//! Nunchuk - Host firmware for the two-button motion accessory
//!
//! Main firmware binary for RP2040-based boards. Brings up the I2C bus,
//! attaches the accessory and polls it at a fixed cadence, publishing
//! decoded button frames to the rest of the firmware.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{self, I2c, InterruptHandler as I2cInterruptHandler};
use embassy_rp::peripherals::I2C0;
use {defmt_rtt as _, panic_probe as _};

use nunchuk_core::ids::DRIVER_NAME;
use nunchuk_drivers::I2cTransport;

mod channels;
mod config;
mod sink;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => I2cInterruptHandler<I2C0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Nunchuk firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let driver_config = config::driver_config();
    if let Err(e) = driver_config.validate() {
        error!("Invalid driver configuration: {:?}", e);
        return;
    }

    // Setup I2C0 for the accessory
    // Pin assignments are board-specific (Pico: SDA=GPIO4, SCL=GPIO5)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = config::I2C_FREQUENCY_HZ;

    let bus = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c_config);
    let transport = I2cTransport::new(bus, driver_config.address);

    info!(
        "I2C initialized for {} at {:#x}, {} Hz",
        DRIVER_NAME,
        driver_config.address,
        config::I2C_FREQUENCY_HZ
    );

    // Spawn tasks
    spawner.spawn(tasks::report_task()).unwrap();
    spawner
        .spawn(tasks::nunchuk_task(
            transport,
            driver_config,
            config::POWER_UP_DELAY_MS,
        ))
        .unwrap();

    info!("All tasks spawned, firmware running");
}
