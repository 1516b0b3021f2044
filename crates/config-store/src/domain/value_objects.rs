//! # Value Objects
//!
//! Immutable configuration and state types for the config-store service.

use crate::domain::document::{FieldPolicy, IDENTITY_FILE_NAME, NETWORK_CONF_FILE_NAME};

/// Configuration for the config-store service.
///
/// Defaults reproduce the on-device behavior: the identity document is
/// read with a single bounded read, the network document with chunked
/// reads into a larger buffer.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Name of the identity document in the file store.
    pub identity_file: String,

    /// Name of the network document in the file store.
    pub network_file: String,

    /// Identity read buffer capacity. A read that exactly fills it (or
    /// returns nothing) fails the load: the file is presumed truncated
    /// or unexpectedly large.
    pub identity_read_capacity: usize,

    /// Network read buffer capacity, accumulated across chunked reads.
    pub network_read_capacity: usize,

    /// Chunk size for the network document read loop.
    pub read_chunk_size: usize,

    /// Policy applied to missing or wrongly-typed document fields.
    pub field_policy: FieldPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            identity_file: IDENTITY_FILE_NAME.to_string(),
            network_file: NETWORK_CONF_FILE_NAME.to_string(),
            identity_read_capacity: 256,
            network_read_capacity: 1024,
            read_chunk_size: 256,
            field_policy: FieldPolicy::KeepPrevious,
        }
    }
}

impl StoreConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field policy.
    pub fn with_field_policy(mut self, policy: FieldPolicy) -> Self {
        self.field_policy = policy;
        self
    }

    /// Set the identity file name.
    pub fn with_identity_file(mut self, name: impl Into<String>) -> Self {
        self.identity_file = name.into();
        self
    }

    /// Set the network file name.
    pub fn with_network_file(mut self, name: impl Into<String>) -> Self {
        self.network_file = name.into();
        self
    }
}

/// Result of an `init_*` call on the config-store service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The document existed and parsed; in-memory state was overwritten.
    Loaded,
    /// No document existed; compiled-in defaults were persisted.
    DefaultedAndPersisted,
    /// The document existed but could not be used (read, parse, or field
    /// failure); in-memory defaults were kept and the file left as-is.
    KeptDefaults,
}

/// Lifecycle state of one persisted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentState {
    /// `init` has not run yet.
    #[default]
    Uninitialized,
    /// Loaded from the store.
    Loaded,
    /// Defaults written on first boot.
    DefaultedAndPersisted,
    /// Load failed; running on defaults.
    KeptDefaults,
}

impl From<LoadOutcome> for DocumentState {
    fn from(outcome: LoadOutcome) -> Self {
        match outcome {
            LoadOutcome::Loaded => DocumentState::Loaded,
            LoadOutcome::DefaultedAndPersisted => DocumentState::DefaultedAndPersisted,
            LoadOutcome::KeptDefaults => DocumentState::KeptDefaults,
        }
    }
}
