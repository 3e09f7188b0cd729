//! Outbound ports of the application layer.
//!
//! The engine talks to the outside world only through these traits;
//! infrastructure provides the implementations.

pub mod battle_repository;
pub mod notifier;
pub mod oracle;
pub mod transcript_source;
