//! Announcer error types.

/// Errors surfaced by a broadcast socket.
#[derive(Debug, thiserror::Error)]
pub enum AnnounceError {
    /// Binding or configuring the socket failed.
    #[error("socket setup failed: {0}")]
    Setup(#[source] std::io::Error),

    /// A broadcast send failed.
    #[error("broadcast send failed: {0}")]
    Send(#[source] std::io::Error),
}
