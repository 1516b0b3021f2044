//! # Config Store Service
//!
//! The lifecycle service orchestrating load-or-default-and-persist for the
//! identity and network documents.
//!
//! ## Architecture
//!
//! The service:
//! 1. Owns the single in-memory [`DeviceIdentity`] and [`NetworkConfig`]
//!    for the process lifetime
//! 2. Runs one independent `Uninitialized -> Loaded | DefaultedAndPersisted`
//!    state machine per document
//! 3. Performs every file operation under the shared store mutex, the same
//!    one the file-access bridge uses
//!
//! All load failures are local and non-fatal: the device keeps operating
//! on compiled-in defaults, and the only user-visible behavior is the log.

mod helpers;
mod lifecycle;

use crate::adapters::shared::SharedFileStore;
use crate::domain::identity::DeviceIdentity;
use crate::domain::network::NetworkConfig;
use crate::domain::value_objects::{DocumentState, StoreConfig};
use crate::ports::outbound::FileStore;

/// The configuration persistence service.
///
/// Generic over the [`FileStore`] so tests drive it against the in-memory
/// adapter and production against the disk adapter.
pub struct ConfigStoreService<F: FileStore> {
    pub(crate) files: SharedFileStore<F>,
    pub(crate) config: StoreConfig,
    pub(crate) identity: DeviceIdentity,
    pub(crate) network: NetworkConfig,
    pub(crate) identity_state: DocumentState,
    pub(crate) network_state: DocumentState,
}

impl<F: FileStore> ConfigStoreService<F> {
    /// Create the service with compiled-in defaults in memory. Nothing is
    /// read until `init_identity` / `init_network` run.
    pub fn new(files: SharedFileStore<F>, config: StoreConfig) -> Self {
        Self {
            files,
            config,
            identity: DeviceIdentity::default(),
            network: NetworkConfig::default(),
            identity_state: DocumentState::Uninitialized,
            network_state: DocumentState::Uninitialized,
        }
    }

    /// The current serial number.
    ///
    /// Settled once during startup, before the announcer task spawns;
    /// runtime re-provisioning would need synchronization this service
    /// deliberately does not provide.
    pub fn serial_number(&self) -> &str {
        self.identity.serial()
    }

    /// The current device identity record.
    pub fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    /// The current network configuration.
    pub fn network_config(&self) -> &NetworkConfig {
        &self.network
    }

    /// Replace the in-memory network configuration. Call
    /// [`save_network`](Self::save_network) to persist it.
    pub fn set_network_config(&mut self, network: NetworkConfig) {
        self.network = network;
    }

    /// Lifecycle state of the identity document.
    pub fn identity_state(&self) -> DocumentState {
        self.identity_state
    }

    /// Lifecycle state of the network document.
    pub fn network_state(&self) -> DocumentState {
        self.network_state
    }
}
