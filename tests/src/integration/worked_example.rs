//! # On-Disk Format and Frame Layout
//!
//! Pin the exact document shapes and the announcement frame so a
//! firmware-side reader of the same files stays compatible.

#[cfg(test)]
mod tests {
    use rio_announce::identity_frame;
    use rio_config_store::{
        ConfigStoreService, InMemoryFileStore, SharedFileStore, StoreConfig, DEFAULT_MAC_ADDR,
        DEFAULT_SERIAL, DEVICE_SN_TAG, GW_ADDR_TAG, IDENTITY_FILE_NAME, IP_ADDR_TAG, MAC_ADDR_TAG,
        NETMASK_TAG, NETWORK_CONF_FILE_NAME, STATIC_IP_TAG,
    };
    use serde_json::Value;

    async fn persisted_document(name: &str) -> Value {
        let files = SharedFileStore::new(InMemoryFileStore::new());
        let mut service = ConfigStoreService::new(files.clone(), StoreConfig::default());
        service.init_identity().await.unwrap();
        service.init_network().await.unwrap();

        let store = files.lock().await;
        let bytes = store.contents(name).expect("document was persisted");
        serde_json::from_slice(bytes).expect("document is valid JSON")
    }

    #[tokio::test]
    async fn test_identity_document_shape() {
        let doc = persisted_document(IDENTITY_FILE_NAME).await;
        assert_eq!(doc[DEVICE_SN_TAG], Value::String(DEFAULT_SERIAL.to_string()));
    }

    #[tokio::test]
    async fn test_network_document_shape() {
        let doc = persisted_document(NETWORK_CONF_FILE_NAME).await;

        assert_eq!(doc[STATIC_IP_TAG], Value::Bool(false));

        for tag in [IP_ADDR_TAG, NETMASK_TAG, GW_ADDR_TAG] {
            let entries = doc[tag].as_array().expect("address field is an array");
            assert_eq!(entries.len(), 4);
            for (i, entry) in entries.iter().enumerate() {
                assert_eq!(entry["index"], Value::from(i as u64));
                assert_eq!(entry["value"], Value::from(0u64));
            }
        }

        let mac = doc[MAC_ADDR_TAG].as_array().expect("mac field is an array");
        assert_eq!(mac.len(), 6);
        for (i, entry) in mac.iter().enumerate() {
            assert_eq!(entry["index"], Value::from(i as u64));
            assert_eq!(entry["value"], Value::from(DEFAULT_MAC_ADDR[i] as u64));
        }
    }

    #[tokio::test]
    async fn test_announcement_frame_for_default_serial() {
        assert_eq!(
            identity_frame(DEFAULT_SERIAL),
            "sh-z-0040100123456789ABCDEFG"
        );
    }
}
