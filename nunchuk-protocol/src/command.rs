//! Command bytes sent to the accessory

/// Default 7-bit bus address of the accessory
pub const DEFAULT_ADDRESS: u8 = 0x52;

/// First handshake command
pub const HANDSHAKE_UNLOCK: [u8; 2] = [0xF0, 0x55];

/// Second handshake command, sent after the unlock settle delay
pub const HANDSHAKE_CONFIRM: [u8; 2] = [0xFB, 0x00];

/// Latches fresh sensor data for the next receive
pub const READ_TRIGGER: [u8; 1] = [0x00];
