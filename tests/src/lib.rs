//! # remote-io Test Suite
//!
//! Unified test crate for cross-subsystem behavior.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── lifecycle.rs        # Disk-backed load/default/persist cycles
//!     ├── transfer_locking.rs # Mutual exclusion between bridge and config ops
//!     └── worked_example.rs   # On-disk document format and frame layout
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p rio-tests
//! cargo test -p rio-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;
