//! # Adapters
//!
//! Concrete implementations of the ports:
//!
//! - `filesystem` - disk-backed and in-memory file stores
//! - `shared` - the single mutex wrapper both subsystems receive
//! - `bridge` - the transfer-contract adapter for the external
//!   file-transfer service

pub mod bridge;
pub mod filesystem;
pub mod shared;

pub use bridge::{FileAccessBridge, TransferHandle};
pub use filesystem::{DiskFileStore, InMemoryFileStore};
pub use shared::SharedFileStore;
