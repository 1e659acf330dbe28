//! Register frame decoding
//!
//! A successful read returns exactly [`FRAME_LEN`] bytes. Only the last
//! byte is decoded: bit 0 is the C button and bit 1 is the Z button, both
//! active-low.

/// Number of bytes in one register frame
pub const FRAME_LEN: usize = 6;

/// Index of the byte carrying the button bits
const BUTTON_BYTE: usize = 5;

/// C button bit (active-low)
const C_BIT: u8 = 1 << 0;
/// Z button bit (active-low)
const Z_BIT: u8 = 1 << 1;

/// One complete register frame as received from the accessory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawFrame([u8; FRAME_LEN]);

impl RawFrame {
    /// Wrap a full frame
    pub const fn new(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }

    /// The byte carrying the button bits
    pub const fn button_byte(&self) -> u8 {
        self.0[BUTTON_BYTE]
    }

    /// Decode the button state carried by this frame
    pub const fn decode(&self) -> ButtonState {
        ButtonState::from_button_byte(self.button_byte())
    }
}

/// Decoded button state from one frame
///
/// `true` means pressed. No state carries over between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonState {
    /// C button pressed
    pub c: bool,
    /// Z button pressed
    pub z: bool,
}

impl ButtonState {
    /// Both buttons released
    pub const RELEASED: Self = Self { c: false, z: false };

    /// Decode from byte 5 of a frame
    pub const fn from_button_byte(byte: u8) -> Self {
        Self {
            c: byte & C_BIT == 0,
            z: byte & Z_BIT == 0,
        }
    }

    /// Check if any button is pressed
    pub const fn any_pressed(&self) -> bool {
        self.c || self.z
    }
}
