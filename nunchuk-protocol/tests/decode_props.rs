//! Property tests for frame decoding

use nunchuk_protocol::{ButtonState, RawFrame};
use proptest::prelude::*;

proptest! {
    #[test]
    fn decode_follows_active_low_bits(bytes in prop::array::uniform6(any::<u8>())) {
        let state = RawFrame::new(bytes).decode();
        prop_assert_eq!(state.c, bytes[5] & 0b01 == 0);
        prop_assert_eq!(state.z, bytes[5] & 0b10 == 0);
    }

    #[test]
    fn decode_ignores_leading_bytes(
        a in prop::array::uniform6(any::<u8>()),
        b in prop::array::uniform6(any::<u8>()),
    ) {
        let mut b = b;
        b[5] = a[5];
        prop_assert_eq!(RawFrame::new(a).decode(), RawFrame::new(b).decode());
    }

    #[test]
    fn decode_is_deterministic(bytes in prop::array::uniform6(any::<u8>())) {
        let frame = RawFrame::new(bytes);
        prop_assert_eq!(frame.decode(), frame.decode());
        prop_assert_eq!(frame.decode(), ButtonState::from_button_byte(bytes[5]));
    }
}
