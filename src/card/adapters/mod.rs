//! Adapter implementations of the card ports.

pub mod memory;
pub mod timestamp;
