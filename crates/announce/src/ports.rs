//! Outbound port: the broadcast socket the announcer sends through.

use crate::errors::AnnounceError;

/// Socket abstraction for announcement broadcasts.
///
/// Sends are synchronous and fire-and-forget: UDP gives no delivery
/// guarantee and the announcer wants none.
pub trait BroadcastSocket: Send + 'static {
    /// Send one announcement frame to the broadcast destination.
    ///
    /// # Errors
    ///
    /// Returns [`AnnounceError::Send`] when the underlying send fails.
    fn send_frame(&self, frame: &[u8]) -> Result<(), AnnounceError>;
}
