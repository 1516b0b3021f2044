//! # Disk-Backed Lifecycle Tests
//!
//! Drive the config store over the real disk adapter across simulated
//! reboots: each new service instance over the same directory is one boot.

#[cfg(test)]
mod tests {
    use rio_config_store::{
        ConfigStoreService, DiskFileStore, LoadOutcome, NetworkConfig, SharedFileStore,
        StoreConfig, DEFAULT_SERIAL, NETWORK_CONF_FILE_NAME,
    };

    fn boot(dir: &std::path::Path) -> ConfigStoreService<DiskFileStore> {
        let store = DiskFileStore::new(dir).unwrap();
        ConfigStoreService::new(SharedFileStore::new(store), StoreConfig::default())
    }

    #[tokio::test]
    async fn test_first_boot_persists_defaults_second_boot_loads_them() {
        let dir = tempfile::tempdir().unwrap();

        let mut first = boot(dir.path());
        assert_eq!(
            first.init_identity().await.unwrap(),
            LoadOutcome::DefaultedAndPersisted
        );
        assert_eq!(
            first.init_network().await.unwrap(),
            LoadOutcome::DefaultedAndPersisted
        );
        drop(first);

        let mut second = boot(dir.path());
        assert_eq!(second.init_identity().await.unwrap(), LoadOutcome::Loaded);
        assert_eq!(second.init_network().await.unwrap(), LoadOutcome::Loaded);
        assert_eq!(second.serial_number(), DEFAULT_SERIAL);
        assert_eq!(*second.network_config(), NetworkConfig::default());
    }

    #[tokio::test]
    async fn test_saved_changes_survive_reboot() {
        let dir = tempfile::tempdir().unwrap();

        let mut first = boot(dir.path());
        first.init_network().await.unwrap();
        let mut updated = *first.network_config();
        updated.static_ip_enabled = true;
        updated.ip_addr = [10, 0, 0, 42];
        updated.netmask = [255, 0, 0, 0];
        first.set_network_config(updated);
        first.save_network().await.unwrap();
        drop(first);

        let mut second = boot(dir.path());
        assert_eq!(second.init_network().await.unwrap(), LoadOutcome::Loaded);
        assert_eq!(*second.network_config(), updated);
    }

    #[tokio::test]
    async fn test_corrupt_document_on_disk_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(NETWORK_CONF_FILE_NAME), b"{\"static_ip\":").unwrap();

        let mut service = boot(dir.path());
        assert_eq!(
            service.init_network().await.unwrap(),
            LoadOutcome::KeptDefaults
        );
        assert_eq!(*service.network_config(), NetworkConfig::default());

        // The corrupt file was not rewritten.
        let on_disk = std::fs::read(dir.path().join(NETWORK_CONF_FILE_NAME)).unwrap();
        assert_eq!(on_disk, b"{\"static_ip\":");
    }
}
