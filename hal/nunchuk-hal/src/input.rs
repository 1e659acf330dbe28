//! Input subsystem abstractions
//!
//! The host's input layer is modelled as a sink. The driver declares the
//! keys it can produce once at attach time, then pushes key states and a
//! frame-complete marker on every successful poll.

/// Logical keys exposed by the accessory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// The small round button
    C,
    /// The large trigger button
    Z,
}

/// Linux `BTN_C` event code
pub const BTN_C: u16 = 0x132;
/// Linux `BTN_Z` event code
pub const BTN_Z: u16 = 0x135;

impl Key {
    /// All keys, in declaration order
    pub const ALL: [Key; 2] = [Key::C, Key::Z];

    /// Conventional input event code for this key
    pub const fn code(self) -> u16 {
        match self {
            Key::C => BTN_C,
            Key::Z => BTN_Z,
        }
    }
}

/// Consumer of decoded key events
pub trait InputSink {
    /// Error returned when the sink refuses a capability
    type Error;

    /// Declare that `key` may be reported
    ///
    /// Called once per key during attach, before any report.
    fn declare_key(&mut self, key: Key) -> Result<(), Self::Error>;

    /// Report the current state of `key`
    fn report_key(&mut self, key: Key, pressed: bool);

    /// Mark the reports since the last sync as one input frame
    fn sync(&mut self);

    /// Withdraw the declared capabilities
    ///
    /// Called once on detach. Sinks that need no teardown keep the default.
    fn unregister(&mut self) {}
}

impl<S: InputSink + ?Sized> InputSink for &mut S {
    type Error = S::Error;

    fn declare_key(&mut self, key: Key) -> Result<(), Self::Error> {
        S::declare_key(self, key)
    }

    fn report_key(&mut self, key: Key, pressed: bool) {
        S::report_key(self, key, pressed)
    }

    fn sync(&mut self) {
        S::sync(self)
    }

    fn unregister(&mut self) {
        S::unregister(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes() {
        assert_eq!(Key::C.code(), 0x132);
        assert_eq!(Key::Z.code(), 0x135);
    }

    #[test]
    fn test_declaration_order() {
        assert_eq!(Key::ALL, [Key::C, Key::Z]);
    }
}
