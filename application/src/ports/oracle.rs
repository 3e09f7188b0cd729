//! Oracle port - outbound interface to the language-model backend.
//!
//! The oracle is an enrichment, never a requirement: every caller must
//! degrade gracefully when it is unavailable or returns garbage.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the oracle backend
#[derive(Error, Debug)]
pub enum OracleError {
    /// No backend configured (e.g. missing API key)
    #[error("Oracle is not configured")]
    Unavailable,

    #[error("Oracle request failed: {0}")]
    RequestFailed(String),

    #[error("Oracle reply was unparseable: {0}")]
    Unparseable(String),
}

/// Port for free-text generation.
///
/// Prompts arrive fully formed from the domain layer; the oracle is a
/// dumb pipe and never interprets them.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Generate a completion for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String, OracleError>;

    /// Whether the backend is configured at all. Callers may use this
    /// to skip requests that would fail with [`OracleError::Unavailable`].
    fn is_available(&self) -> bool {
        true
    }
}
