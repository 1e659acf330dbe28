//! Driver configuration
//!
//! Defaults match the accessory as observed; the host may tune the settle
//! delays within their windows and pick a different poll period.

use nunchuk_protocol::{DEFAULT_ADDRESS, HANDSHAKE_SETTLE, POLL_INTERVAL_MS, READ_SETTLE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest valid 7-bit bus address
pub const MAX_ADDRESS: u8 = 0x7F;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Address does not fit in 7 bits
    AddressOutOfRange(u8),
    /// Poll interval must be non-zero
    ZeroPollInterval,
    /// Handshake settle delay outside its window
    HandshakeSettleOutOfRange(u32),
    /// Read settle delay outside its window
    ReadSettleOutOfRange(u32),
}

/// Settle delays used by the protocol, in microseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timing {
    /// Delay between the two handshake commands
    pub handshake_settle_us: u32,
    /// Delay between the read trigger and the receive
    pub read_settle_us: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            handshake_settle_us: HANDSHAKE_SETTLE.midpoint(),
            read_settle_us: READ_SETTLE.midpoint(),
        }
    }
}

impl Timing {
    /// Check both delays against their windows
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !HANDSHAKE_SETTLE.contains(self.handshake_settle_us) {
            return Err(ConfigError::HandshakeSettleOutOfRange(
                self.handshake_settle_us,
            ));
        }
        if !READ_SETTLE.contains(self.read_settle_us) {
            return Err(ConfigError::ReadSettleOutOfRange(self.read_settle_us));
        }
        Ok(())
    }
}

/// Complete driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriverConfig {
    /// 7-bit bus address the transport binds to
    pub address: u8,
    /// Period between poll ticks in milliseconds
    pub poll_interval_ms: u32,
    /// Protocol settle delays
    pub timing: Timing,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            poll_interval_ms: POLL_INTERVAL_MS,
            timing: Timing::default(),
        }
    }
}

impl DriverConfig {
    /// Validate all fields
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.address > MAX_ADDRESS {
            return Err(ConfigError::AddressOutOfRange(self.address));
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        self.timing.validate()
    }
}
