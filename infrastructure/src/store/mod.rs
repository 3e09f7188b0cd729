//! In-process record storage

pub mod battles;
pub mod memory;
