//! # Device Identity
//!
//! The device serial number record persisted in the identity document.

/// Maximum visible serial-number length (the on-device record is a
/// null-terminated 16-character field).
pub const SERIAL_LEN: usize = 16;

/// Compiled-in serial used until a valid identity document is loaded.
pub const DEFAULT_SERIAL: &str = "123456789ABCDEFG";

/// The device-identity record.
///
/// Created with the compiled-in default and mutated only by a successful
/// load from the identity document: a load either fully overwrites the
/// serial or leaves the default untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceIdentity {
    serial: String,
}

impl Default for DeviceIdentity {
    fn default() -> Self {
        Self {
            serial: DEFAULT_SERIAL.to_string(),
        }
    }
}

impl DeviceIdentity {
    /// Create an identity with the given serial (truncated to
    /// [`SERIAL_LEN`] characters).
    pub fn new(serial: &str) -> Self {
        let mut identity = Self::default();
        identity.set_serial(serial);
        identity
    }

    /// The current serial number.
    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// Overwrite the serial, truncating to [`SERIAL_LEN`] characters as
    /// the fixed on-device field would.
    pub fn set_serial(&mut self, serial: &str) {
        self.serial = serial.chars().take(SERIAL_LEN).collect();
    }
}
