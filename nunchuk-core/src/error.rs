//! Driver error types

/// Failure of a single protocol transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError<E> {
    /// The bus accepted fewer bytes than the command length
    ShortWrite {
        /// Command length
        expected: usize,
        /// Bytes the bus accepted
        actual: usize,
    },
    /// The bus returned fewer bytes than requested
    ShortRead {
        /// Requested length
        expected: usize,
        /// Bytes actually received
        actual: usize,
    },
    /// The bus reported an error of its own
    Bus(E),
}

impl<E> TransportError<E> {
    /// Returns true for a short write
    pub fn is_short_write(&self) -> bool {
        matches!(self, TransportError::ShortWrite { .. })
    }

    /// Returns true for a short read
    pub fn is_short_read(&self) -> bool {
        matches!(self, TransportError::ShortRead { .. })
    }
}

/// Handshake step that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HandshakeStep {
    /// Sending the unlock command
    Unlock,
    /// Sending the confirm command
    Confirm,
    /// The read cycle that validates the link
    ValidationRead,
}

impl HandshakeStep {
    /// Short human-readable name for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            HandshakeStep::Unlock => "unlock",
            HandshakeStep::Confirm => "confirm",
            HandshakeStep::ValidationRead => "validation read",
        }
    }
}

/// Handshake failure with the step it happened at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandshakeError<E> {
    /// Step that failed
    pub step: HandshakeStep,
    /// Underlying transfer failure
    pub error: TransportError<E>,
}

impl<E> HandshakeError<E> {
    /// Create a new handshake error
    pub fn new(step: HandshakeStep, error: TransportError<E>) -> Self {
        Self { step, error }
    }
}

/// Failure to attach a device session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AttachError<E, S> {
    /// The accessory did not complete the handshake
    Handshake(HandshakeError<E>),
    /// The input sink refused a key declaration
    Registration(S),
}

impl<E, S> From<HandshakeError<E>> for AttachError<E, S> {
    fn from(e: HandshakeError<E>) -> Self {
        AttachError::Handshake(e)
    }
}
