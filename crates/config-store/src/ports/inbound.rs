//! # Inbound Ports (API)
//!
//! The four-operation contract a passive file-transfer service expects
//! from its storage side. The transfer protocol itself (framing, retries,
//! block numbering) lives entirely in the external service; this port only
//! covers storage access.

use crate::domain::errors::ConfigError;

/// Storage-side contract for an external file-transfer service.
///
/// ## Locking discipline
///
/// `open` acquires the file-store mutex with a blocking, unbounded wait
/// and *retains it* for the lifetime of the returned handle; `close` is
/// the only release point. The transfer service must therefore pair every
/// successful `open` with exactly one `close` - a handle that is never
/// closed blocks all configuration and transfer access forever. There is
/// no timeout and no forced release.
pub trait TransferContext {
    /// Handle to one in-progress transfer. Owns the store mutex.
    type Handle;

    /// Open `name`, acquiring the store mutex first. `for_write` creates
    /// or truncates the file; read mode requires it to exist.
    ///
    /// # Errors
    ///
    /// On open failure the mutex is released before the error is
    /// returned, so the caller never holds the lock without a handle.
    fn open(&self, name: &str, for_write: bool) -> Result<Self::Handle, ConfigError>;

    /// Read up to `buf.len()` bytes. The mutex is already held.
    fn read(&self, handle: &mut Self::Handle, buf: &mut [u8]) -> Result<usize, ConfigError>;

    /// Write `payload`. The mutex is already held.
    fn write(&self, handle: &mut Self::Handle, payload: &[u8]) -> Result<usize, ConfigError>;

    /// Close the file and release the mutex unconditionally.
    fn close(&self, handle: Self::Handle) -> Result<(), ConfigError>;
}
