//! # Configuration Documents
//!
//! Builds and parses the two persisted documents: the identity document
//! (one string field) and the network document (four byte-array fields
//! plus the static-IP flag). Byte arrays go through the
//! [codec](crate::domain::codec); tags are case-sensitive and
//! wire-compatible with earlier firmware generations.
//!
//! ## Field Policy
//!
//! Parsing takes an explicit [`FieldPolicy`]:
//!
//! - [`FieldPolicy::KeepPrevious`] (production default): a missing field,
//!   or a static-IP flag that is not a literal `true`/`false`, leaves the
//!   previous in-memory value unchanged.
//! - [`FieldPolicy::Strict`]: the same conditions are errors.
//!
//! A byte-array field that is *present but malformed* (bad record shape or
//! out-of-range index) fails the whole parse under both policies, and a
//! failed parse commits nothing - decoding happens on a scratch copy that
//! only replaces the caller's record on success.

use crate::domain::codec;
use crate::domain::errors::ConfigError;
use crate::domain::identity::DeviceIdentity;
use crate::domain::network::NetworkConfig;
use serde_json::{Map, Value};

/// File name of the identity document.
pub const IDENTITY_FILE_NAME: &str = "info.json";

/// File name of the network document.
pub const NETWORK_CONF_FILE_NAME: &str = "conf.json";

/// Tag of the serial-number field in the identity document.
pub const DEVICE_SN_TAG: &str = "sh_z_device_sn";

/// Tag of the static-IP flag in the network document.
pub const STATIC_IP_TAG: &str = "static_ip";

/// Tag of the IPv4 address byte array.
pub const IP_ADDR_TAG: &str = "ip_addr";

/// Tag of the subnet mask byte array.
pub const NETMASK_TAG: &str = "netmask";

/// Tag of the gateway byte array.
pub const GW_ADDR_TAG: &str = "gw_addr";

/// Tag of the MAC address byte array.
pub const MAC_ADDR_TAG: &str = "mac_addr";

/// What to do when a field is missing or carries the wrong scalar type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldPolicy {
    /// Leave the previous in-memory value unchanged.
    #[default]
    KeepPrevious,
    /// Treat the condition as a parse error.
    Strict,
}

/// Render the identity document to its persisted text form.
pub fn render_identity_document(identity: &DeviceIdentity) -> Result<String, ConfigError> {
    let mut doc = Map::new();
    doc.insert(
        DEVICE_SN_TAG.to_string(),
        Value::String(identity.serial().to_string()),
    );
    to_text(doc)
}

/// Parse identity document text, overwriting `identity` on success.
///
/// # Errors
///
/// [`ConfigError::Parse`] for malformed JSON. Under
/// [`FieldPolicy::Strict`], a missing or non-string serial field is a
/// [`ConfigError::FieldValidation`]; under `KeepPrevious` it leaves the
/// current serial in place.
pub fn parse_identity_document(
    text: &str,
    identity: &mut DeviceIdentity,
    policy: FieldPolicy,
) -> Result<(), ConfigError> {
    let root = from_text(text)?;

    match root.get(DEVICE_SN_TAG) {
        Some(Value::String(serial)) => {
            identity.set_serial(serial);
            Ok(())
        }
        Some(_) | None => match policy {
            FieldPolicy::KeepPrevious => Ok(()),
            FieldPolicy::Strict => Err(ConfigError::FieldValidation {
                field: DEVICE_SN_TAG.to_string(),
                reason: "missing or non-string serial number".to_string(),
            }),
        },
    }
}

/// Render the network document to its persisted text form.
pub fn render_network_document(config: &NetworkConfig) -> Result<String, ConfigError> {
    let mut doc = Map::new();
    codec::encode_byte_array(&mut doc, MAC_ADDR_TAG, &config.mac_addr);
    codec::encode_byte_array(&mut doc, IP_ADDR_TAG, &config.ip_addr);
    codec::encode_byte_array(&mut doc, NETMASK_TAG, &config.netmask);
    codec::encode_byte_array(&mut doc, GW_ADDR_TAG, &config.gateway);
    doc.insert(
        STATIC_IP_TAG.to_string(),
        Value::Bool(config.static_ip_enabled),
    );
    to_text(doc)
}

/// Parse network document text, overwriting `config` only if every
/// present field validates.
///
/// # Errors
///
/// [`ConfigError::Parse`] for malformed JSON,
/// [`ConfigError::FieldValidation`] for a malformed byte-array field
/// (both policies) or a missing/non-boolean field under
/// [`FieldPolicy::Strict`]. On any error `config` is left untouched.
pub fn parse_network_document(
    text: &str,
    config: &mut NetworkConfig,
    policy: FieldPolicy,
) -> Result<(), ConfigError> {
    let root = from_text(text)?;

    // Decode onto a scratch copy so a mid-parse failure commits nothing.
    let mut scratch = *config;

    match root.get(STATIC_IP_TAG) {
        Some(Value::Bool(flag)) => scratch.static_ip_enabled = *flag,
        Some(_) | None => {
            if policy == FieldPolicy::Strict {
                return Err(ConfigError::FieldValidation {
                    field: STATIC_IP_TAG.to_string(),
                    reason: "missing or non-boolean flag".to_string(),
                });
            }
        }
    }

    decode_array_field(&root, IP_ADDR_TAG, &mut scratch.ip_addr, policy)?;
    decode_array_field(&root, NETMASK_TAG, &mut scratch.netmask, policy)?;
    decode_array_field(&root, GW_ADDR_TAG, &mut scratch.gateway, policy)?;
    decode_array_field(&root, MAC_ADDR_TAG, &mut scratch.mac_addr, policy)?;

    *config = scratch;
    Ok(())
}

fn decode_array_field(
    root: &Value,
    tag: &str,
    out: &mut [u8],
    policy: FieldPolicy,
) -> Result<(), ConfigError> {
    match root.get(tag) {
        Some(node) => codec::decode_byte_array(tag, node, out),
        None => match policy {
            FieldPolicy::KeepPrevious => Ok(()),
            FieldPolicy::Strict => Err(ConfigError::FieldValidation {
                field: tag.to_string(),
                reason: "field is missing".to_string(),
            }),
        },
    }
}

fn to_text(doc: Map<String, Value>) -> Result<String, ConfigError> {
    serde_json::to_string(&Value::Object(doc)).map_err(|e| ConfigError::Serialization {
        message: e.to_string(),
    })
}

fn from_text(text: &str) -> Result<Value, ConfigError> {
    serde_json::from_str(text).map_err(|e| ConfigError::Parse {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identity_round_trip() {
        let identity = DeviceIdentity::new("RIO-0042");
        let text = render_identity_document(&identity).unwrap();

        let mut loaded = DeviceIdentity::default();
        parse_identity_document(&text, &mut loaded, FieldPolicy::KeepPrevious).unwrap();
        assert_eq!(loaded, identity);
    }

    #[test]
    fn test_identity_missing_field_keeps_previous() {
        let mut identity = DeviceIdentity::new("KEEP-ME");
        parse_identity_document("{}", &mut identity, FieldPolicy::KeepPrevious).unwrap();
        assert_eq!(identity.serial(), "KEEP-ME");
    }

    #[test]
    fn test_identity_missing_field_strict_fails() {
        let mut identity = DeviceIdentity::default();
        let err =
            parse_identity_document("{}", &mut identity, FieldPolicy::Strict).unwrap_err();
        assert!(matches!(err, ConfigError::FieldValidation { .. }));
    }

    #[test]
    fn test_network_round_trip() {
        let config = NetworkConfig {
            static_ip_enabled: true,
            ip_addr: [10, 0, 0, 2],
            netmask: [255, 255, 255, 0],
            gateway: [10, 0, 0, 1],
            mac_addr: [0x02, 0x11, 0x22, 0x33, 0x44, 0x55],
        };
        let text = render_network_document(&config).unwrap();

        let mut loaded = NetworkConfig::default();
        parse_network_document(&text, &mut loaded, FieldPolicy::KeepPrevious).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_non_boolean_flag_keeps_previous_value() {
        let doc = json!({ "static_ip": "yes" }).to_string();

        let mut config = NetworkConfig {
            static_ip_enabled: true,
            ..Default::default()
        };
        parse_network_document(&doc, &mut config, FieldPolicy::KeepPrevious).unwrap();
        assert!(config.static_ip_enabled);
    }

    #[test]
    fn test_non_boolean_flag_strict_fails() {
        let doc = json!({ "static_ip": 1 }).to_string();
        let mut config = NetworkConfig::default();
        assert!(parse_network_document(&doc, &mut config, FieldPolicy::Strict).is_err());
    }

    #[test]
    fn test_malformed_array_field_commits_nothing() {
        // ip_addr decodes fine, netmask carries an out-of-range index.
        let doc = json!({
            "static_ip": true,
            "ip_addr": [{ "index": 0, "value": 10 }],
            "netmask": [{ "index": 4, "value": 255 }],
        })
        .to_string();

        let mut config = NetworkConfig::default();
        let before = config;
        let err =
            parse_network_document(&doc, &mut config, FieldPolicy::KeepPrevious).unwrap_err();
        assert!(matches!(err, ConfigError::FieldValidation { .. }));
        assert_eq!(config, before);
    }

    #[test]
    fn test_missing_arrays_keep_preseeded_defaults() {
        let doc = json!({ "static_ip": true }).to_string();

        let mut config = NetworkConfig::default();
        parse_network_document(&doc, &mut config, FieldPolicy::KeepPrevious).unwrap();
        assert!(config.static_ip_enabled);
        assert_eq!(config.mac_addr, crate::domain::network::DEFAULT_MAC_ADDR);
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        let doc = json!({ "STATIC_IP": true }).to_string();
        let mut config = NetworkConfig::default();
        parse_network_document(&doc, &mut config, FieldPolicy::KeepPrevious).unwrap();
        assert!(!config.static_ip_enabled);
    }
}
