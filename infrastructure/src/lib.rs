//! Infrastructure layer for gavel
//!
//! Concrete adapters behind the application ports: the OpenRouter
//! oracle and its offline scripted stand-in, the in-memory record
//! store, the system randomness source, configuration loading, and the
//! built-in case library.

pub mod cases;
pub mod config;
pub mod oracle;
pub mod random;
pub mod store;

// Re-export commonly used types
pub use cases::library::CaseLibrary;
pub use config::{ConfigError, GavelConfig};
pub use oracle::openrouter::OpenRouterOracle;
pub use oracle::scripted::CannedOracle;
pub use random::ThreadRandom;
pub use store::battles::InMemoryBattleRepository;
pub use store::memory::{MemoryStore, StoredRecord};
