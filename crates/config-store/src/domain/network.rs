//! # Network Configuration
//!
//! The Ethernet interface record persisted in the network document.

/// Width of the IP-family byte arrays (address, netmask, gateway).
pub const IP_ADDR_LEN: usize = 4;

/// Width of the MAC address field.
pub const MAC_ADDR_LEN: usize = 6;

/// Compiled-in locally-administered MAC address (02:80:E1:83:05:24).
pub const DEFAULT_MAC_ADDR: [u8; MAC_ADDR_LEN] = [0x02, 0x80, 0xE1, 0x83, 0x05, 0x24];

/// The network-configuration record.
///
/// Every byte array always has its declared fixed length; the serialized
/// form indexes exactly that range. Instantiated once at startup with
/// defaults (unconfigured addresses, compiled-in MAC) and either
/// overwritten in place by a successful load or persisted as-is when no
/// document exists yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Use the static addresses below instead of DHCP.
    pub static_ip_enabled: bool,
    /// Static IPv4 address.
    pub ip_addr: [u8; IP_ADDR_LEN],
    /// Subnet mask.
    pub netmask: [u8; IP_ADDR_LEN],
    /// Default gateway.
    pub gateway: [u8; IP_ADDR_LEN],
    /// Interface MAC address.
    pub mac_addr: [u8; MAC_ADDR_LEN],
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            static_ip_enabled: false,
            ip_addr: [0; IP_ADDR_LEN],
            netmask: [0; IP_ADDR_LEN],
            gateway: [0; IP_ADDR_LEN],
            mac_addr: DEFAULT_MAC_ADDR,
        }
    }
}

impl NetworkConfig {
    /// Dotted-decimal rendering of the IP address, for log lines.
    pub fn ip_display(&self) -> String {
        let [a, b, c, d] = self.ip_addr;
        format!("{}.{}.{}.{}", a, b, c, d)
    }

    /// Colon-separated hex rendering of the MAC address, for log lines.
    pub fn mac_display(&self) -> String {
        self.mac_addr
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(":")
    }
}
