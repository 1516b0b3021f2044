//! Bounded-read and full-write helpers over an open file handle.

use crate::domain::errors::ConfigError;
use crate::ports::outbound::{FileHandle, FileStore};

/// Single bounded read for the identity document.
///
/// A read that exactly fills `capacity` means the file is either truncated
/// mid-document or unexpectedly large; a read of zero bytes means the file
/// is empty. Both fail the load.
pub(super) fn read_once<F: FileStore>(
    store: &mut F,
    handle: FileHandle,
    file: &str,
    capacity: usize,
) -> Result<Vec<u8>, ConfigError> {
    let mut buf = vec![0u8; capacity];
    let n = store.read(handle, &mut buf)?;
    if n == 0 {
        return Err(ConfigError::EmptyFile {
            file: file.to_string(),
        });
    }
    if n >= capacity {
        return Err(ConfigError::FileTooLarge {
            file: file.to_string(),
            capacity,
        });
    }
    buf.truncate(n);
    Ok(buf)
}

/// Chunked read loop for the network document: accumulate until the store
/// reports end-of-file or the buffer is full. A full buffer is not an
/// error here; the truncated text simply fails the JSON parse downstream.
pub(super) fn read_to_capacity<F: FileStore>(
    store: &mut F,
    handle: FileHandle,
    capacity: usize,
    chunk_size: usize,
) -> Result<Vec<u8>, ConfigError> {
    let mut buf = vec![0u8; capacity];
    let mut total = 0;
    while total < capacity {
        let end = capacity.min(total + chunk_size);
        let n = store.read(handle, &mut buf[total..end])?;
        if n == 0 {
            break;
        }
        total += n;
    }
    buf.truncate(total);
    Ok(buf)
}

/// Write the whole document, looping on short writes.
pub(super) fn write_all<F: FileStore>(
    store: &mut F,
    handle: FileHandle,
    mut data: &[u8],
) -> Result<(), ConfigError> {
    while !data.is_empty() {
        let n = store.write(handle, data)?;
        if n == 0 {
            return Err(ConfigError::Io {
                op: "write",
                message: "file store accepted no bytes".to_string(),
            });
        }
        data = &data[n..];
    }
    Ok(())
}

/// Decode a document body as UTF-8 text.
pub(super) fn as_text(file: &str, bytes: &[u8]) -> Result<String, ConfigError> {
    String::from_utf8(bytes.to_vec()).map_err(|e| ConfigError::Parse {
        message: format!("'{}' is not valid UTF-8: {}", file, e),
    })
}
