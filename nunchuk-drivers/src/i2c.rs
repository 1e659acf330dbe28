//! I2C bus transport
//!
//! Binds an I2C master to the accessory's 7-bit address. Each `send` is one
//! write transaction and each `receive` one read transaction, with a STOP
//! in between: the accessory needs the settle delay between the trigger and
//! the fetch, so a repeated-start `write_read` must not be used.
//!
//! `embedded-hal` transfers are all-or-error, so a successful transfer
//! always reports the full length.

use embedded_hal::i2c::I2c;
use nunchuk_hal::{AsyncBusTransport, BusTransport};

/// I2C master bound to one device address
pub struct I2cTransport<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cTransport<I2C> {
    /// Bind `i2c` to `address`
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Bound device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> BusTransport for I2cTransport<I2C> {
    type Error = I2C::Error;

    fn send(&mut self, bytes: &[u8]) -> Result<usize, Self::Error> {
        self.i2c.write(self.address, bytes)?;
        Ok(bytes.len())
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.i2c.read(self.address, buf)?;
        Ok(buf.len())
    }
}

impl<I2C: embedded_hal_async::i2c::I2c> AsyncBusTransport for I2cTransport<I2C> {
    type Error = I2C::Error;

    async fn send(&mut self, bytes: &[u8]) -> Result<usize, Self::Error> {
        self.i2c.write(self.address, bytes).await?;
        Ok(bytes.len())
    }

    async fn receive(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.i2c.read(self.address, buf).await?;
        Ok(buf.len())
    }
}
