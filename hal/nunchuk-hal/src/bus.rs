//! Bus transport abstractions
//!
//! A transport is already bound to one peripheral address. Both calls
//! block (or suspend, for the async flavour) until the transfer is done
//! and report how many bytes actually moved. There is no partial-transfer
//! recovery: callers treat a short count as a failed transfer.

/// Blocking send/receive channel to a single peripheral
pub trait BusTransport {
    /// Error reported by the underlying bus
    type Error;

    /// Send `bytes` to the peripheral
    ///
    /// Returns the number of bytes the bus accepted.
    fn send(&mut self, bytes: &[u8]) -> Result<usize, Self::Error>;

    /// Receive into `buf` from the peripheral
    ///
    /// Returns the number of bytes written into `buf`.
    fn receive(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Async send/receive channel to a single peripheral
///
/// Same contract as [`BusTransport`], for hosts built on cooperative
/// scheduling where each transfer is an await point.
#[allow(async_fn_in_trait)]
pub trait AsyncBusTransport {
    /// Error reported by the underlying bus
    type Error;

    /// Send `bytes` to the peripheral
    async fn send(&mut self, bytes: &[u8]) -> Result<usize, Self::Error>;

    /// Receive into `buf` from the peripheral
    async fn receive(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

impl<T: BusTransport + ?Sized> BusTransport for &mut T {
    type Error = T::Error;

    fn send(&mut self, bytes: &[u8]) -> Result<usize, Self::Error> {
        T::send(self, bytes)
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        T::receive(self, buf)
    }
}

impl<T: AsyncBusTransport + ?Sized> AsyncBusTransport for &mut T {
    type Error = T::Error;

    async fn send(&mut self, bytes: &[u8]) -> Result<usize, Self::Error> {
        T::send(self, bytes).await
    }

    async fn receive(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        T::receive(self, buf).await
    }
}
