//! Settle delays between protocol steps
//!
//! The accessory is undocumented; these values come from observation and
//! may need tuning per part. Each one is therefore a window, not a single
//! number. Anything inside the window works; going below `min_us` risks
//! stale or garbage data.

/// Acceptable range for one settle delay, in microseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SettleWindow {
    /// Shortest delay the accessory tolerates
    pub min_us: u32,
    /// Longest delay worth waiting
    pub max_us: u32,
}

impl SettleWindow {
    /// Create a new window
    pub const fn new(min_us: u32, max_us: u32) -> Self {
        Self { min_us, max_us }
    }

    /// Centre of the window
    pub const fn midpoint(&self) -> u32 {
        self.min_us + (self.max_us - self.min_us) / 2
    }

    /// Check whether `us` falls inside the window (inclusive)
    pub const fn contains(&self, us: u32) -> bool {
        us >= self.min_us && us <= self.max_us
    }
}

/// Delay between the two handshake commands
pub const HANDSHAKE_SETTLE: SettleWindow = SettleWindow::new(900, 1100);

/// Delay between the read trigger and the receive
///
/// This is the time the accessory needs to latch new sensor data.
pub const READ_SETTLE: SettleWindow = SettleWindow::new(1900, 2100);

/// Period between poll ticks in milliseconds
pub const POLL_INTERVAL_MS: u32 = 20;
