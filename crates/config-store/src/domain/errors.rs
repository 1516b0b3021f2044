//! # Domain Errors
//!
//! Error types for the configuration subsystem.
//!
//! ## Design Principles
//!
//! - Every failure is local and non-fatal: the device keeps running on
//!   compiled-in defaults rather than halting
//! - Errors are descriptive enough to be actionable from a log line
//! - No panics in domain logic (use Result instead)

use std::fmt;

/// Errors that can occur while loading, building, or saving a
/// configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The in-memory document could not be converted to text.
    Serialization { message: String },

    /// A file-store operation failed.
    Io { op: &'static str, message: String },

    /// The document text is not valid JSON.
    Parse { message: String },

    /// A field inside an otherwise valid document failed validation
    /// (missing sub-field, wrong type, out-of-range index).
    FieldValidation { field: String, reason: String },

    /// A bounded read filled the whole buffer; the file is either
    /// truncated mid-document or unexpectedly large.
    FileTooLarge { file: String, capacity: usize },

    /// A read returned no bytes where a document was expected.
    EmptyFile { file: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Serialization { message } => {
                write!(f, "failed to serialize document: {}", message)
            }
            ConfigError::Io { op, message } => {
                write!(f, "file store {} failed: {}", op, message)
            }
            ConfigError::Parse { message } => {
                write!(f, "failed to parse document: {}", message)
            }
            ConfigError::FieldValidation { field, reason } => {
                write!(f, "invalid field '{}': {}", field, reason)
            }
            ConfigError::FileTooLarge { file, capacity } => {
                write!(
                    f,
                    "'{}' filled the whole {}-byte read buffer; refusing to parse",
                    file, capacity
                )
            }
            ConfigError::EmptyFile { file } => {
                write!(f, "'{}' produced no bytes", file)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<FileStoreError> for ConfigError {
    fn from(e: FileStoreError) -> Self {
        ConfigError::Io {
            op: e.op(),
            message: e.to_string(),
        }
    }
}

/// Errors reported by a [`FileStore`](crate::ports::outbound::FileStore)
/// implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStoreError {
    /// Open-for-read on a file that does not exist.
    NotFound { name: String },

    /// The file name is not acceptable to this store (path separators,
    /// parent references).
    InvalidName { name: String },

    /// The handle does not refer to an open file.
    InvalidHandle { handle: u32 },

    /// Write attempted on a handle opened read-only.
    NotWritable { name: String },

    /// Underlying I/O error.
    Io { message: String },
}

impl FileStoreError {
    /// Short operation label for log lines and `ConfigError::Io`.
    pub fn op(&self) -> &'static str {
        match self {
            FileStoreError::NotFound { .. } => "open",
            FileStoreError::InvalidName { .. } => "open",
            FileStoreError::InvalidHandle { .. } => "access",
            FileStoreError::NotWritable { .. } => "write",
            FileStoreError::Io { .. } => "io",
        }
    }
}

impl fmt::Display for FileStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileStoreError::NotFound { name } => write!(f, "file not found: {}", name),
            FileStoreError::InvalidName { name } => write!(f, "invalid file name: {}", name),
            FileStoreError::InvalidHandle { handle } => {
                write!(f, "handle {} is not open", handle)
            }
            FileStoreError::NotWritable { name } => {
                write!(f, "file {} was opened read-only", name)
            }
            FileStoreError::Io { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for FileStoreError {}
