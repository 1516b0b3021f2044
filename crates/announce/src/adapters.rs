//! Broadcast socket adapters.

use crate::errors::AnnounceError;
use crate::ports::BroadcastSocket;

// ============================================================================
// NoOpBroadcastSocket - Stub for testing without network
// ============================================================================

/// No-operation broadcast socket for testing.
///
/// All sends succeed without touching the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpBroadcastSocket;

impl NoOpBroadcastSocket {
    /// Create a new no-op socket.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl BroadcastSocket for NoOpBroadcastSocket {
    fn send_frame(&self, _frame: &[u8]) -> Result<(), AnnounceError> {
        Ok(())
    }
}

// ============================================================================
// UdpBroadcastSocket - Production UDP socket (requires "network" feature)
// ============================================================================

#[cfg(feature = "network")]
mod udp_socket {
    use super::*;
    use std::net::{Ipv4Addr, SocketAddrV4, UdpSocket as StdUdpSocket};
    use std::sync::Arc;

    /// UDP broadcast socket.
    ///
    /// Wraps a `std::net::UdpSocket` bound to an ephemeral local port with
    /// `SO_BROADCAST` enabled, sending every frame to the limited
    /// broadcast address `255.255.255.255` on the announcement port.
    pub struct UdpBroadcastSocket {
        socket: Arc<StdUdpSocket>,
        dest: SocketAddrV4,
    }

    impl UdpBroadcastSocket {
        /// Bind a broadcast-capable socket sending to `port`.
        ///
        /// # Errors
        ///
        /// Returns [`AnnounceError::Setup`] if binding fails or the
        /// broadcast option cannot be set.
        pub fn bind(port: u16) -> Result<Self, AnnounceError> {
            let socket = StdUdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))
                .map_err(AnnounceError::Setup)?;
            socket.set_broadcast(true).map_err(AnnounceError::Setup)?;
            Ok(Self {
                socket: Arc::new(socket),
                dest: SocketAddrV4::new(Ipv4Addr::BROADCAST, port),
            })
        }
    }

    impl BroadcastSocket for UdpBroadcastSocket {
        fn send_frame(&self, frame: &[u8]) -> Result<(), AnnounceError> {
            self.socket
                .send_to(frame, self.dest)
                .map(|_| ())
                .map_err(AnnounceError::Send)
        }
    }

    impl Clone for UdpBroadcastSocket {
        fn clone(&self) -> Self {
            Self {
                socket: Arc::clone(&self.socket),
                dest: self.dest,
            }
        }
    }
}

#[cfg(feature = "network")]
pub use udp_socket::UdpBroadcastSocket;
