//! Disk-backed file store rooted at a data directory.

use crate::domain::errors::FileStoreError;
use crate::ports::outbound::{FileHandle, FileStore, OpenMode};
use std::collections::HashMap;
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

/// [`FileStore`] implementation over a host filesystem directory.
///
/// All files live directly under the root directory; names containing
/// path separators or parent references are rejected, so the transfer
/// bridge cannot be steered outside the data directory.
pub struct DiskFileStore {
    root: PathBuf,
    open: HashMap<FileHandle, File>,
    next_handle: FileHandle,
}

impl DiskFileStore {
    /// Create a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// [`FileStoreError::Io`] if the directory cannot be created.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, FileStoreError> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root).map_err(|e| FileStoreError::Io {
            message: format!("creating {}: {}", root.display(), e),
        })?;
        Ok(Self {
            root,
            open: HashMap::new(),
            next_handle: 0,
        })
    }

    /// The root directory this store serves.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> Result<PathBuf, FileStoreError> {
        let flat = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains('/')
            && !name.contains('\\');
        if !flat {
            return Err(FileStoreError::InvalidName {
                name: name.to_string(),
            });
        }
        Ok(self.root.join(name))
    }

    fn next_handle(&mut self) -> FileHandle {
        self.next_handle = self.next_handle.wrapping_add(1);
        self.next_handle
    }
}

impl FileStore for DiskFileStore {
    fn open(&mut self, name: &str, mode: OpenMode) -> Result<FileHandle, FileStoreError> {
        let path = self.resolve(name)?;
        let file = match mode {
            OpenMode::Read => File::open(&path).map_err(|e| match e.kind() {
                ErrorKind::NotFound => FileStoreError::NotFound {
                    name: name.to_string(),
                },
                _ => FileStoreError::Io {
                    message: format!("opening {}: {}", path.display(), e),
                },
            })?,
            OpenMode::WriteTruncate => File::create(&path).map_err(|e| FileStoreError::Io {
                message: format!("creating {}: {}", path.display(), e),
            })?,
        };

        let handle = self.next_handle();
        self.open.insert(handle, file);
        Ok(handle)
    }

    fn read(&mut self, handle: FileHandle, buf: &mut [u8]) -> Result<usize, FileStoreError> {
        let file = self
            .open
            .get_mut(&handle)
            .ok_or(FileStoreError::InvalidHandle { handle })?;
        file.read(buf).map_err(|e| FileStoreError::Io {
            message: e.to_string(),
        })
    }

    fn write(&mut self, handle: FileHandle, data: &[u8]) -> Result<usize, FileStoreError> {
        let file = self
            .open
            .get_mut(&handle)
            .ok_or(FileStoreError::InvalidHandle { handle })?;
        file.write(data).map_err(|e| FileStoreError::Io {
            message: e.to_string(),
        })
    }

    fn close(&mut self, handle: FileHandle) -> Result<(), FileStoreError> {
        // Dropping the File closes the descriptor.
        self.open
            .remove(&handle)
            .map(|_| ())
            .ok_or(FileStoreError::InvalidHandle { handle })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DiskFileStore::new(dir.path()).unwrap();

        let handle = store.open("conf.json", OpenMode::WriteTruncate).unwrap();
        assert_eq!(store.write(handle, b"{\"a\":1}").unwrap(), 7);
        store.close(handle).unwrap();

        let handle = store.open("conf.json", OpenMode::Read).unwrap();
        let mut buf = [0u8; 32];
        let n = store.read(handle, &mut buf).unwrap();
        store.close(handle).unwrap();
        assert_eq!(&buf[..n], b"{\"a\":1}");
    }

    #[test]
    fn test_missing_file_maps_to_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DiskFileStore::new(dir.path()).unwrap();
        assert!(matches!(
            store.open("absent.json", OpenMode::Read),
            Err(FileStoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_path_traversal_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DiskFileStore::new(dir.path()).unwrap();
        for name in ["../escape", "a/b", "..", "", "c\\d"] {
            assert!(
                matches!(
                    store.open(name, OpenMode::Read),
                    Err(FileStoreError::InvalidName { .. })
                ),
                "name {:?} should be rejected",
                name
            );
        }
    }
}
