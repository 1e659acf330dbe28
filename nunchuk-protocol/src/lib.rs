//! Nunchuk Register Protocol
//!
//! This crate defines the bus-level contract of the nunchuk accessory:
//! the command bytes, the settle delays the accessory needs between them,
//! and the layout of the register frame it returns.
//!
//! # Protocol Overview
//!
//! ```text
//! Handshake (once):
//!   send [F0 55] ── ~1 ms ── send [FB 00] ── read cycle
//!
//! Read cycle (every poll):
//!   send [00] ── ~2 ms ── receive 6 bytes
//!
//! Frame:
//! ┌────┬────┬────┬────┬────┬──────────────────────┐
//! │ B0 │ B1 │ B2 │ B3 │ B4 │ B5                   │
//! └────┴────┴────┴────┴────┴──────────────────────┘
//!                            bit1 = !Z, bit0 = !C
//! ```
//!
//! The buttons are active-low. Bytes 0-4 carry data whose layout is not
//! relied upon here.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod frame;
pub mod timing;

pub use command::{DEFAULT_ADDRESS, HANDSHAKE_CONFIRM, HANDSHAKE_UNLOCK, READ_TRIGGER};
pub use frame::{ButtonState, RawFrame, FRAME_LEN};
pub use timing::{SettleWindow, HANDSHAKE_SETTLE, POLL_INTERVAL_MS, READ_SETTLE};
