//! # File-Access Bridge
//!
//! Adapter implementing the [`TransferContext`] contract for the external
//! file-transfer service over the shared file store.
//!
//! The bridge owns no file state of its own: each successful `open`
//! produces a [`TransferHandle`] that carries both the open file handle
//! and the store mutex guard. Read and write pass straight through; the
//! guard is released when the handle is closed (or dropped), and nowhere
//! else. A transfer service that never closes its handle therefore blocks
//! every future configuration and transfer operation - the contract the
//! service must uphold.

use crate::adapters::shared::SharedFileStore;
use crate::domain::errors::ConfigError;
use crate::ports::inbound::TransferContext;
use crate::ports::outbound::{FileHandle, FileStore, OpenMode};
use tokio::sync::OwnedMutexGuard;

/// Storage-side adapter handed to the external file-transfer service.
pub struct FileAccessBridge<F: FileStore> {
    files: SharedFileStore<F>,
}

impl<F: FileStore> FileAccessBridge<F> {
    /// Create a bridge over the shared store.
    pub fn new(files: SharedFileStore<F>) -> Self {
        Self { files }
    }
}

/// One in-progress transfer. Holds the store mutex until closed or
/// dropped.
pub struct TransferHandle<F: FileStore> {
    guard: OwnedMutexGuard<F>,
    file: FileHandle,
    closed: bool,
}

impl<F: FileStore> TransferHandle<F> {
    fn close_inner(&mut self) -> Result<(), ConfigError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.guard.close(self.file).map_err(ConfigError::from)
    }
}

impl<F: FileStore> Drop for TransferHandle<F> {
    fn drop(&mut self) {
        // The mutex guard is released right after, whatever close said.
        let _ = self.close_inner();
    }
}

impl<F: FileStore> TransferContext for FileAccessBridge<F> {
    type Handle = TransferHandle<F>;

    fn open(&self, name: &str, for_write: bool) -> Result<Self::Handle, ConfigError> {
        let mut guard = self.files.blocking_lock_owned();
        let mode = if for_write {
            OpenMode::WriteTruncate
        } else {
            OpenMode::Read
        };

        match guard.open(name, mode) {
            Ok(file) => {
                #[cfg(feature = "tracing-log")]
                tracing::debug!("[cfg] transfer opened '{}' (write: {})", name, for_write);
                Ok(TransferHandle {
                    guard,
                    file,
                    closed: false,
                })
            }
            Err(e) => {
                #[cfg(feature = "tracing-log")]
                tracing::warn!("[cfg] transfer open of '{}' failed: {}", name, e);
                // `guard` drops here: never hand the caller an error while
                // still holding the mutex.
                Err(e.into())
            }
        }
    }

    fn read(&self, handle: &mut Self::Handle, buf: &mut [u8]) -> Result<usize, ConfigError> {
        let file = handle.file;
        handle.guard.read(file, buf).map_err(ConfigError::from)
    }

    fn write(&self, handle: &mut Self::Handle, payload: &[u8]) -> Result<usize, ConfigError> {
        let file = handle.file;
        handle.guard.write(file, payload).map_err(ConfigError::from)
    }

    fn close(&self, mut handle: Self::Handle) -> Result<(), ConfigError> {
        handle.close_inner()
    }
}
