//! Board-agnostic driver logic for the nunchuk accessory
//!
//! This crate contains everything between the bus and the input layer
//! that does not depend on a specific chip:
//!
//! - Handshake that unlocks the accessory at attach time
//! - Register read cycle (trigger, settle, fetch, decode)
//! - Poller that turns each tick into key events
//! - Device session lifecycle (attach, tick, detach)
//! - Driver configuration and identification tables
//!
//! Blocking and async flavours share the same error types and decoding;
//! see [`session::Session`] and [`asynch::AsyncSession`].

#![no_std]
#![deny(unsafe_code)]

pub mod asynch;
pub mod config;
pub mod error;
pub mod handshake;
pub mod ids;
pub mod poller;
pub mod registers;
pub mod session;

#[cfg(test)]
mod mock;

pub use asynch::AsyncSession;
pub use config::{ConfigError, DriverConfig, Timing};
pub use error::{AttachError, HandshakeError, HandshakeStep, TransportError};
pub use poller::PollStats;
pub use session::Session;
