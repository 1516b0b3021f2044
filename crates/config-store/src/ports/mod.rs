//! # Ports
//!
//! Port traits for the config-store subsystem:
//!
//! - `inbound` - the transfer contract exposed to the external
//!   file-transfer service
//! - `outbound` - the file-store SPI the subsystem drives

pub mod inbound;
pub mod outbound;
