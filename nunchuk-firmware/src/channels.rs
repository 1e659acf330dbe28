//! Inter-task communication channels
//!
//! Defines the static signals used between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::sink::ButtonFrame;

/// Latest complete button frame (updated by the nunchuk task)
pub static BUTTON_FRAME: Signal<CriticalSectionRawMutex, ButtonFrame> = Signal::new();
