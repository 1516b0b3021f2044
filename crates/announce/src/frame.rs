//! Announcement frame layout and constants.

/// Device model tag, first field of every announcement frame.
pub const MODEL_TAG: &str = "sh-z-004";

/// Firmware version, rendered as four uppercase hex digits.
pub const FIRMWARE_VERSION: u16 = 0x0100;

/// UDP port management tooling listens on for announcements.
pub const ANNOUNCE_PORT: u16 = 52018;

/// Build the identity announcement frame.
///
/// Layout is `[model tag][version as %04X][serial]`, all ASCII, no
/// separators. With the 16-character serial the frame is 28 bytes.
#[must_use]
pub fn identity_frame(serial: &str) -> String {
    format!("{MODEL_TAG}{FIRMWARE_VERSION:04X}{serial}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_layout() {
        let frame = identity_frame("123456789ABCDEFG");
        assert_eq!(frame, "sh-z-0040100123456789ABCDEFG");
        assert_eq!(frame.len(), 28);
    }

    #[test]
    fn test_version_renders_as_four_hex_digits() {
        let frame = identity_frame("");
        assert_eq!(&frame[MODEL_TAG.len()..], "0100");
    }
}
