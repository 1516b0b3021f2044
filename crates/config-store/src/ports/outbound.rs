//! # Outbound Ports (SPI)
//!
//! The file-store interface the configuration subsystem drives. The
//! surface is deliberately handle-based - open, read, write, close over
//! named files - matching the block-oriented flash file systems the
//! production adapter wraps. Erase semantics, wear leveling, and block
//! layout all stay behind the adapter.

use crate::domain::errors::FileStoreError;

/// Opaque handle to an open file within a [`FileStore`].
pub type FileHandle = u32;

/// How to open a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Open an existing file for reading; fails if it does not exist.
    Read,
    /// Create the file if absent, truncate it otherwise, open writable.
    WriteTruncate,
}

/// Abstract interface over the flash-resident file store.
///
/// Implementations are not required to be thread-safe: all access is
/// serialized through
/// [`SharedFileStore`](crate::adapters::shared::SharedFileStore), the one
/// mutex guarding the store.
pub trait FileStore: Send + 'static {
    /// Open `name` in the given mode.
    ///
    /// # Errors
    ///
    /// [`FileStoreError::NotFound`] for a read of a missing file;
    /// [`FileStoreError::InvalidName`] for names the store rejects.
    fn open(&mut self, name: &str, mode: OpenMode) -> Result<FileHandle, FileStoreError>;

    /// Read up to `buf.len()` bytes at the handle's cursor.
    ///
    /// Returns the number of bytes read; `0` means end of file.
    fn read(&mut self, handle: FileHandle, buf: &mut [u8]) -> Result<usize, FileStoreError>;

    /// Write `data` at the handle's cursor, returning the bytes written.
    fn write(&mut self, handle: FileHandle, data: &[u8]) -> Result<usize, FileStoreError>;

    /// Close the handle. Further use of it is an error.
    fn close(&mut self, handle: FileHandle) -> Result<(), FileStoreError>;
}
