//! Application layer for gavel
//!
//! Orchestrates the domain layer: the battle engine use case, the
//! outbound ports it depends on (oracle, battle repository, notifier),
//! and the background tasks that keep a battle moving. Everything here
//! is infrastructure-agnostic; concrete adapters live one layer out.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::battle_repository::{BattlePatch, BattleRepository, StoreError};
pub use ports::notifier::{CourtroomNotifier, NoNotifier};
pub use ports::oracle::{Oracle, OracleError};
pub use ports::transcript_source::{EventRole, TranscriptEvent};
pub use use_cases::battle_engine::{AnalysisBatch, BattleEngine, EngineConfig, EngineError};
