//! Bus transport implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in nunchuk-hal:
//!
//! - I2C transport over any `embedded-hal` / `embedded-hal-async` bus master

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;

pub use i2c::I2cTransport;
