//! # Configuration Store
//!
//! Persistence layer for the remote I/O module's device-identity and
//! network-configuration records, plus the mutex-guarded bridge that lets
//! the external file-transfer service share the same flash file store.
//!
//! ## Architecture
//!
//! ```text
//! ConfigStoreService ──render/parse──→ ConfigDocument ──encode/decode──→ ByteArrayCodec
//!         │
//!         ├──open/read/write/close──→ SharedFileStore ←──open/read/write/close── FileAccessBridge
//!         │                             [one mutex]                                    ↑
//!         ↓                                                                            │
//!   DeviceIdentity / NetworkConfig                                     external file-transfer service
//! ```
//!
//! The flash file store is a single exclusively-locked resource. The config
//! store and the bridge both receive the same [`SharedFileStore`] at
//! construction; every file operation from either side serializes through
//! its mutex.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Exclusive store access | One mutex serializes every file operation |
//! | 2 | Paired release | Each successful bridge `open` is released by exactly one `close` |
//! | 3 | No partial loads | A document either fully validates or leaves memory untouched |
//! | 4 | Validate before truncate | Saves serialize the full document before opening the file |
//! | 5 | Bounded reads | Loads never read past the fixed buffer capacities |
//! | 6 | Defaults persisted | First boot writes the compiled-in defaults back to the store |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Pure domain logic (identity/network records, codec, documents, errors)
//! - `ports/` - Port traits (file-store SPI, transfer contract)
//! - `adapters/` - Disk and in-memory file stores, shared mutex, transfer bridge
//! - `service/` - The config store lifecycle service
//!
//! ## Usage
//!
//! ```ignore
//! use rio_config_store::{
//!     ConfigStoreService, DiskFileStore, FileAccessBridge, SharedFileStore, StoreConfig,
//! };
//!
//! let files = SharedFileStore::new(DiskFileStore::new("./data")?);
//! let mut config = ConfigStoreService::new(files.clone(), StoreConfig::default());
//!
//! config.init_identity().await?;
//! config.init_network().await?;
//!
//! // Handed to the external file-transfer service.
//! let bridge = FileAccessBridge::new(files);
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use adapters::bridge::{FileAccessBridge, TransferHandle};
pub use adapters::filesystem::{DiskFileStore, InMemoryFileStore};
pub use adapters::shared::SharedFileStore;
pub use domain::document::{
    FieldPolicy, DEVICE_SN_TAG, GW_ADDR_TAG, IDENTITY_FILE_NAME, IP_ADDR_TAG, MAC_ADDR_TAG,
    NETMASK_TAG, NETWORK_CONF_FILE_NAME, STATIC_IP_TAG,
};
pub use domain::errors::{ConfigError, FileStoreError};
pub use domain::identity::{DeviceIdentity, DEFAULT_SERIAL, SERIAL_LEN};
pub use domain::network::{NetworkConfig, DEFAULT_MAC_ADDR, IP_ADDR_LEN, MAC_ADDR_LEN};
pub use domain::value_objects::{DocumentState, LoadOutcome, StoreConfig};
pub use ports::inbound::TransferContext;
pub use ports::outbound::{FileHandle, FileStore, OpenMode};
pub use service::ConfigStoreService;
