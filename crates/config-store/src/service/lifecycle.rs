//! Load-or-default-and-persist lifecycle for both documents.

use super::helpers;
use super::ConfigStoreService;
use crate::domain::document;
use crate::domain::errors::ConfigError;
use crate::domain::value_objects::LoadOutcome;
use crate::ports::outbound::{FileStore, OpenMode};

impl<F: FileStore> ConfigStoreService<F> {
    /// Initialize the identity document.
    ///
    /// - File absent: persist the compiled-in default serial so the next
    ///   boot finds it, returning [`LoadOutcome::DefaultedAndPersisted`].
    /// - File present: one bounded read, parse, overwrite the serial on
    ///   success ([`LoadOutcome::Loaded`]). Any read or parse failure
    ///   keeps the default and leaves the file as-is
    ///   ([`LoadOutcome::KeptDefaults`]).
    ///
    /// # Errors
    ///
    /// Only the default-persist path propagates errors; load failures are
    /// non-fatal by design and surface as `KeptDefaults`.
    pub async fn init_identity(&mut self) -> Result<LoadOutcome, ConfigError> {
        let file = self.config.identity_file.clone();
        let capacity = self.config.identity_read_capacity;

        let read = {
            let mut store = self.files.lock().await;
            match store.open(&file, OpenMode::Read) {
                Ok(handle) => {
                    let result = helpers::read_once(&mut *store, handle, &file, capacity);
                    let _ = store.close(handle);
                    Some(result)
                }
                // Open failure means first boot: no document yet.
                Err(_) => None,
            }
        };

        let outcome = match read {
            None => {
                #[cfg(feature = "tracing-log")]
                tracing::info!(
                    "[cfg] 📁 no identity document; persisting compiled-in defaults"
                );
                self.save_identity().await?;
                LoadOutcome::DefaultedAndPersisted
            }
            Some(result) => {
                let parsed = result.and_then(|bytes| {
                    let text = helpers::as_text(&file, &bytes)?;
                    document::parse_identity_document(
                        &text,
                        &mut self.identity,
                        self.config.field_policy,
                    )
                });
                match parsed {
                    Ok(()) => {
                        #[cfg(feature = "tracing-log")]
                        tracing::info!(
                            "[cfg] ✓ identity loaded, serial: {}",
                            self.identity.serial()
                        );
                        LoadOutcome::Loaded
                    }
                    Err(_e) => {
                        #[cfg(feature = "tracing-log")]
                        tracing::warn!("[cfg] identity load failed: {}; keeping defaults", _e);
                        LoadOutcome::KeptDefaults
                    }
                }
            }
        };

        self.identity_state = outcome.into();
        Ok(outcome)
    }

    /// Initialize the network document.
    ///
    /// Same lifecycle as [`init_identity`](Self::init_identity), with the
    /// chunked bounded read and the network document parser. On success,
    /// only the fields that validate overwrite memory, per the configured
    /// field policy.
    pub async fn init_network(&mut self) -> Result<LoadOutcome, ConfigError> {
        let file = self.config.network_file.clone();
        let capacity = self.config.network_read_capacity;
        let chunk = self.config.read_chunk_size;

        let read = {
            let mut store = self.files.lock().await;
            match store.open(&file, OpenMode::Read) {
                Ok(handle) => {
                    let result = helpers::read_to_capacity(&mut *store, handle, capacity, chunk);
                    let _ = store.close(handle);
                    Some(result)
                }
                Err(_) => None,
            }
        };

        let outcome = match read {
            None => {
                #[cfg(feature = "tracing-log")]
                tracing::info!(
                    "[cfg] 📁 no network document; persisting compiled-in defaults"
                );
                self.save_network().await?;
                LoadOutcome::DefaultedAndPersisted
            }
            Some(result) => {
                let parsed = result.and_then(|bytes| {
                    let text = helpers::as_text(&file, &bytes)?;
                    document::parse_network_document(
                        &text,
                        &mut self.network,
                        self.config.field_policy,
                    )
                });
                match parsed {
                    Ok(()) => {
                        #[cfg(feature = "tracing-log")]
                        tracing::info!(
                            "[cfg] ✓ network config loaded: static_ip={}, ip={}, mac={}",
                            self.network.static_ip_enabled,
                            self.network.ip_display(),
                            self.network.mac_display()
                        );
                        LoadOutcome::Loaded
                    }
                    Err(_e) => {
                        #[cfg(feature = "tracing-log")]
                        tracing::warn!(
                            "[cfg] network config load failed: {}; keeping defaults",
                            _e
                        );
                        LoadOutcome::KeptDefaults
                    }
                }
            }
        };

        self.network_state = outcome.into();
        Ok(outcome)
    }

    /// Persist the identity document.
    ///
    /// # Errors
    ///
    /// Serialization or I/O failures abort the save; in-memory state is
    /// never touched by a save.
    pub async fn save_identity(&mut self) -> Result<(), ConfigError> {
        // Serialize before opening so a build failure cannot truncate a
        // previously valid document.
        let text = document::render_identity_document(&self.identity)?;
        self.write_document(&self.config.identity_file, text.as_bytes())
            .await?;
        #[cfg(feature = "tracing-log")]
        tracing::info!("[cfg] 💾 identity document saved");
        Ok(())
    }

    /// Persist the network document.
    pub async fn save_network(&mut self) -> Result<(), ConfigError> {
        let text = document::render_network_document(&self.network)?;
        self.write_document(&self.config.network_file, text.as_bytes())
            .await?;
        #[cfg(feature = "tracing-log")]
        tracing::info!("[cfg] 💾 network document saved");
        Ok(())
    }

    async fn write_document(&self, name: &str, data: &[u8]) -> Result<(), ConfigError> {
        let mut store = self.files.lock().await;
        let handle = store.open(name, OpenMode::WriteTruncate)?;
        let result = helpers::write_all(&mut *store, handle, data);
        let close = store.close(handle).map_err(ConfigError::from);
        result.and(close)
    }
}
