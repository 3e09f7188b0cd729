//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Battle is already completed")]
    BattleCompleted,

    #[error("Cannot advance past the closing stage")]
    NoFurtherStage,

    #[error("Oracle reply is not valid structured data: {0}")]
    UnparseableReply(String),

    #[error("Unknown score category: {0}")]
    UnknownCategory(String),

    #[error("Unknown objection kind: {0}")]
    UnknownObjection(String),
}
