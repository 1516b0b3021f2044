//! # Byte-Array Codec
//!
//! Encodes fixed-length binary fields (IP addresses, MAC address) as JSON
//! arrays of `{index, value}` records inside a configuration document, and
//! decodes them back.
//!
//! The positional encoding keeps the persisted form order-independent:
//! entries may appear in any order, but every `index` must fall inside
//! `[0, len)` of the target field. An out-of-range or malformed entry is a
//! hard failure - the decoder stops immediately and never writes out of
//! bounds. Callers pre-seed the output slice with defaults, so a failed
//! decode leaves known-good values in place.

use crate::domain::errors::ConfigError;
use serde_json::{json, Map, Value};

/// Sub-record key holding the byte position.
pub const INDEX_KEY: &str = "index";

/// Sub-record key holding the byte value.
pub const VALUE_KEY: &str = "value";

/// Add `bytes` to `doc` under `field` as an array of `{index, value}`
/// records, one per byte.
///
/// Building the in-memory JSON tree cannot fail; the fallible part of a
/// save is the later document-to-text conversion and the file write.
pub fn encode_byte_array(doc: &mut Map<String, Value>, field: &str, bytes: &[u8]) {
    let entries: Vec<Value> = bytes
        .iter()
        .enumerate()
        .map(|(index, value)| json!({ INDEX_KEY: index, VALUE_KEY: *value }))
        .collect();
    doc.insert(field.to_string(), Value::Array(entries));
}

/// Decode an `{index, value}` array field into `out`.
///
/// Every entry must carry an integer `index` within `[0, out.len())` and an
/// integer `value` (truncated to one byte, as the original fixed-width
/// fields expect). Duplicate indices are tolerated - last write wins.
///
/// # Errors
///
/// Returns [`ConfigError::FieldValidation`] on the first entry that is not
/// an object, is missing a sub-field, or carries an out-of-range index.
/// Processing stops at that entry; `out` positions not yet visited keep
/// their pre-seeded values.
pub fn decode_byte_array(field: &str, node: &Value, out: &mut [u8]) -> Result<(), ConfigError> {
    let entries = node.as_array().ok_or_else(|| ConfigError::FieldValidation {
        field: field.to_string(),
        reason: "expected an array of {index, value} records".to_string(),
    })?;

    for entry in entries {
        let index = entry
            .get(INDEX_KEY)
            .and_then(Value::as_u64)
            .ok_or_else(|| ConfigError::FieldValidation {
                field: field.to_string(),
                reason: "record is missing an integer 'index'".to_string(),
            })?;
        let value = entry
            .get(VALUE_KEY)
            .and_then(Value::as_i64)
            .ok_or_else(|| ConfigError::FieldValidation {
                field: field.to_string(),
                reason: "record is missing an integer 'value'".to_string(),
            })?;

        if index >= out.len() as u64 {
            return Err(ConfigError::FieldValidation {
                field: field.to_string(),
                reason: format!("index {} out of range for a {}-byte field", index, out.len()),
            });
        }

        out[index as usize] = (value & 0xFF) as u8;
    }

    Ok(())
}
