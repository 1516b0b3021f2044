//! # File-Store Adapters
//!
//! Two implementations of the [`FileStore`](crate::ports::outbound::FileStore)
//! port: an in-memory store for tests and light use, and a disk-backed
//! store rooted at a data directory for production hosts.

mod disk;
mod memory;

pub use disk::DiskFileStore;
pub use memory::InMemoryFileStore;
