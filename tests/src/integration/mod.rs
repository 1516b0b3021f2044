//! Cross-subsystem integration tests.

pub mod lifecycle;
pub mod transfer_locking;
pub mod worked_example;
