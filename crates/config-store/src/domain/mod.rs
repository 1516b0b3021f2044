//! # Domain Layer
//!
//! Pure domain logic for the configuration subsystem. No I/O happens here;
//! the service layer drives these types through the ports.

pub mod codec;
pub mod document;
pub mod errors;
pub mod identity;
pub mod network;
pub mod value_objects;
