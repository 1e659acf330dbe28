//! Nunchuk Hardware Abstraction Layer
//!
//! This crate defines the capabilities the driver borrows from its host.
//! The driver core is written against these traits only, so the same
//! protocol code runs over any bus master and reports into any input
//! subsystem.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Host (nunchuk-firmware, tests, ...)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  nunchuk-core (handshake, poller)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ BusTransport  │       │  InputSink    │
//! │ (this crate)  │       │ (this crate)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`bus::BusTransport`], [`bus::AsyncBusTransport`] - Send/receive over one peripheral address
//! - [`input::InputSink`] - Key capability declaration and event reporting

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod input;

// Re-export key traits at crate root for convenience
pub use bus::{AsyncBusTransport, BusTransport};
pub use input::{InputSink, Key};
