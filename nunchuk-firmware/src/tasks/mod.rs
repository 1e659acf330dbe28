//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod nunchuk;
pub mod report;

pub use nunchuk::nunchuk_task;
pub use report::report_task;
