//! # Transfer / Config Mutual Exclusion
//!
//! The shared store mutex must serialize bridge transfers against config
//! store operations: once either side opens a file, no operation from the
//! other side may appear until the matching close.
//!
//! A recording store wrapper logs every successful store operation; the
//! test interleaves transfers (driven from a plain thread, the way the
//! transfer service drives the bridge) with config saves, then checks the
//! log is well-nested.

#[cfg(test)]
mod tests {
    use rio_config_store::{
        ConfigStoreService, FileAccessBridge, FileHandle, FileStore, FileStoreError,
        InMemoryFileStore, OpenMode, SharedFileStore, StoreConfig, TransferContext,
    };
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Open(FileHandle),
        Read(FileHandle),
        Write(FileHandle),
        Close(FileHandle),
    }

    struct RecordingStore {
        inner: InMemoryFileStore,
        log: Arc<Mutex<Vec<Event>>>,
    }

    impl RecordingStore {
        fn new() -> Self {
            Self {
                inner: InMemoryFileStore::new(),
                log: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn log(&self) -> Arc<Mutex<Vec<Event>>> {
            Arc::clone(&self.log)
        }

        fn record(&self, event: Event) {
            self.log.lock().unwrap().push(event);
        }
    }

    impl FileStore for RecordingStore {
        fn open(&mut self, name: &str, mode: OpenMode) -> Result<FileHandle, FileStoreError> {
            let handle = self.inner.open(name, mode)?;
            self.record(Event::Open(handle));
            Ok(handle)
        }

        fn read(&mut self, handle: FileHandle, buf: &mut [u8]) -> Result<usize, FileStoreError> {
            let n = self.inner.read(handle, buf)?;
            self.record(Event::Read(handle));
            Ok(n)
        }

        fn write(&mut self, handle: FileHandle, data: &[u8]) -> Result<usize, FileStoreError> {
            let n = self.inner.write(handle, data)?;
            self.record(Event::Write(handle));
            Ok(n)
        }

        fn close(&mut self, handle: FileHandle) -> Result<(), FileStoreError> {
            self.inner.close(handle)?;
            self.record(Event::Close(handle));
            Ok(())
        }
    }

    fn assert_well_nested(log: &[Event]) {
        let mut current: Option<FileHandle> = None;
        for event in log {
            match *event {
                Event::Open(h) => {
                    assert!(
                        current.is_none(),
                        "open of {h} while {current:?} still open"
                    );
                    current = Some(h);
                }
                Event::Read(h) | Event::Write(h) => {
                    assert_eq!(current, Some(h), "operation on {h} outside its session");
                }
                Event::Close(h) => {
                    assert_eq!(current, Some(h), "close of {h} outside its session");
                    current = None;
                }
            }
        }
        assert!(current.is_none(), "log ends with {current:?} still open");
    }

    #[test]
    fn test_transfers_and_saves_never_interleave() {
        const ROUNDS: usize = 50;

        let store = RecordingStore::new();
        let log = store.log();
        let files = SharedFileStore::new(store);
        let bridge = FileAccessBridge::new(files.clone());
        let mut service = ConfigStoreService::new(files, StoreConfig::default());

        // The transfer service drives the bridge from its own thread.
        let transfers = std::thread::spawn(move || {
            for round in 0..ROUNDS {
                let mut handle = bridge.open("fw.bin", true).unwrap();
                bridge.write(&mut handle, &vec![round as u8; 64]).unwrap();
                bridge.write(&mut handle, &vec![round as u8; 64]).unwrap();
                bridge.close(handle).unwrap();
            }
        });

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        for _ in 0..ROUNDS {
            rt.block_on(service.save_network()).unwrap();
        }

        transfers.join().unwrap();

        let log = log.lock().unwrap();
        assert_well_nested(&log);
        // One open/close pair per transfer and per save.
        let opens = log.iter().filter(|e| matches!(e, Event::Open(_))).count();
        assert_eq!(opens, ROUNDS * 2);
    }

    #[test]
    fn test_abandoned_transfer_handle_unblocks_saves() {
        let store = RecordingStore::new();
        let files = SharedFileStore::new(store);
        let bridge = FileAccessBridge::new(files.clone());
        let mut service = ConfigStoreService::new(files, StoreConfig::default());

        {
            let mut handle = bridge.open("fw.bin", true).unwrap();
            bridge.write(&mut handle, b"partial").unwrap();
            // Dropped without close: the transfer died mid-flight.
        }

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(service.save_identity()).unwrap();
    }
}
