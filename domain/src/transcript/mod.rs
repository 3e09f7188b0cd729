//! Transcript entities

pub mod entities;

pub use entities::{Speaker, Turn};
