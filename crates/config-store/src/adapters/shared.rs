//! # Shared File Store
//!
//! The single mutex guarding the flash file store. Both the config-store
//! service and the file-access bridge receive a clone of the same
//! [`SharedFileStore`] at construction, making the coupling between the
//! two subsystems explicit instead of an ambient global handle.
//!
//! Acquisition is blocking with an unbounded wait: an operation that needs
//! the store parks its task (or thread) until the mutex is free. Waiters
//! are served in acquisition order; there is no timeout, no deadlock
//! detection, and no cancellation once blocked.

use crate::ports::outbound::FileStore;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard, OwnedMutexGuard};

/// Handle to the mutex-guarded file store.
///
/// Clones share the same underlying store and the same lock.
pub struct SharedFileStore<F> {
    inner: Arc<Mutex<F>>,
}

impl<F> Clone for SharedFileStore<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: FileStore> SharedFileStore<F> {
    /// Wrap `store` in the shared mutex.
    pub fn new(store: F) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Acquire the store from async context (config-store operations).
    pub async fn lock(&self) -> MutexGuard<'_, F> {
        self.inner.lock().await
    }

    /// Acquire the store from a blocking context, returning an owned
    /// guard that can travel inside a transfer handle.
    ///
    /// Must not be called from inside the async runtime - the transfer
    /// service drives the bridge from its own threads.
    pub fn blocking_lock_owned(&self) -> OwnedMutexGuard<F> {
        Arc::clone(&self.inner).blocking_lock_owned()
    }
}
