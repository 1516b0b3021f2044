//! In-memory file store for unit tests and diskless operation.

use crate::domain::errors::FileStoreError;
use crate::ports::outbound::{FileHandle, FileStore, OpenMode};
use std::collections::HashMap;

struct OpenFile {
    name: String,
    cursor: usize,
    writable: bool,
}

/// In-memory [`FileStore`] implementation.
///
/// Files live in a name -> bytes map. Open handles carry a cursor, so
/// chunked reads and writes behave like the flash store: reads advance to
/// end-of-file and then return `0`, write-mode opens truncate.
///
/// # Example
///
/// ```
/// use rio_config_store::{FileStore, InMemoryFileStore, OpenMode};
///
/// let mut store = InMemoryFileStore::new();
/// let handle = store.open("conf.json", OpenMode::WriteTruncate).unwrap();
/// store.write(handle, b"{}").unwrap();
/// store.close(handle).unwrap();
///
/// assert_eq!(store.contents("conf.json"), Some(&b"{}"[..]));
/// ```
#[derive(Default)]
pub struct InMemoryFileStore {
    files: HashMap<String, Vec<u8>>,
    open: HashMap<FileHandle, OpenFile>,
    next_handle: FileHandle,
}

impl InMemoryFileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a file, bypassing the handle interface. Intended for
    /// test setup (corrupt or legacy documents).
    pub fn insert_file(&mut self, name: &str, bytes: &[u8]) {
        self.files.insert(name.to_string(), bytes.to_vec());
    }

    /// Current contents of a file, if it exists.
    pub fn contents(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name).map(Vec::as_slice)
    }

    /// Remove a file. Returns whether it existed.
    pub fn remove_file(&mut self, name: &str) -> bool {
        self.files.remove(name).is_some()
    }

    fn next_handle(&mut self) -> FileHandle {
        self.next_handle = self.next_handle.wrapping_add(1);
        self.next_handle
    }

    fn open_file(&mut self, handle: FileHandle) -> Result<&mut OpenFile, FileStoreError> {
        self.open
            .get_mut(&handle)
            .ok_or(FileStoreError::InvalidHandle { handle })
    }
}

impl FileStore for InMemoryFileStore {
    fn open(&mut self, name: &str, mode: OpenMode) -> Result<FileHandle, FileStoreError> {
        let writable = match mode {
            OpenMode::Read => {
                if !self.files.contains_key(name) {
                    return Err(FileStoreError::NotFound {
                        name: name.to_string(),
                    });
                }
                false
            }
            OpenMode::WriteTruncate => {
                self.files.insert(name.to_string(), Vec::new());
                true
            }
        };

        let handle = self.next_handle();
        self.open.insert(
            handle,
            OpenFile {
                name: name.to_string(),
                cursor: 0,
                writable,
            },
        );
        Ok(handle)
    }

    fn read(&mut self, handle: FileHandle, buf: &mut [u8]) -> Result<usize, FileStoreError> {
        let file = self
            .open
            .get_mut(&handle)
            .ok_or(FileStoreError::InvalidHandle { handle })?;
        let data = self.files.get(&file.name).ok_or(FileStoreError::Io {
            message: format!("backing file {} vanished", file.name),
        })?;

        let remaining = data.len().saturating_sub(file.cursor);
        let n = remaining.min(buf.len());
        buf[..n].copy_from_slice(&data[file.cursor..file.cursor + n]);
        file.cursor += n;
        Ok(n)
    }

    fn write(&mut self, handle: FileHandle, data: &[u8]) -> Result<usize, FileStoreError> {
        let file = self.open_file(handle)?;
        if !file.writable {
            return Err(FileStoreError::NotWritable {
                name: file.name.clone(),
            });
        }
        let name = file.name.clone();
        file.cursor += data.len();

        self.files
            .get_mut(&name)
            .ok_or(FileStoreError::Io {
                message: format!("backing file {} vanished", name),
            })?
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn close(&mut self, handle: FileHandle) -> Result<(), FileStoreError> {
        self.open
            .remove(&handle)
            .map(|_| ())
            .ok_or(FileStoreError::InvalidHandle { handle })
    }
}
