//! Oracle adapters

pub mod openrouter;
pub mod scripted;
