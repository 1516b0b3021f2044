//! # Device Identity Announcer
//!
//! Periodic UDP broadcast of the device identity so management tooling on
//! the local network can discover devices without prior configuration.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 Announcer (service)             │
//! │   wait-for-ready -> startup delay -> send loop  │
//! └───────────────────────┬─────────────────────────┘
//!                         │ BroadcastSocket (port)
//!           ┌─────────────┴─────────────┐
//!           │                           │
//!   UdpBroadcastSocket         NoOpBroadcastSocket
//!   (feature = "network")          (testing)
//! ```
//!
//! ## Frame Format
//!
//! The announcement is a fixed-layout ASCII frame:
//!
//! ```text
//! [model tag (8)] [firmware version, 4 hex digits] [serial (16)]
//! "sh-z-004"      "0100"                           "123456789ABCDEFG"
//! ```
//!
//! The frame is built once at startup from the settled serial number and
//! never changes for the life of the process.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforced By |
//! |-----------|-------------|
//! | Frame built once, immutable afterwards | [`Announcer::new`] |
//! | No send before the readiness signal | [`Announcer::run`] |
//! | Send failures never terminate the loop | [`Announcer::run`] |
//! | Fixed cadence regardless of outcome | [`Announcer::run`] |

pub mod adapters;
pub mod errors;
pub mod frame;
pub mod ports;
pub mod service;

pub use adapters::NoOpBroadcastSocket;
#[cfg(feature = "network")]
pub use adapters::UdpBroadcastSocket;
pub use errors::AnnounceError;
pub use frame::{identity_frame, ANNOUNCE_PORT, FIRMWARE_VERSION, MODEL_TAG};
pub use ports::BroadcastSocket;
pub use service::{AnnounceConfig, Announcer};
