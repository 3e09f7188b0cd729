//! Domain layer for gavel
//!
//! This crate contains the core business logic of the trial simulation.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Battle
//!
//! A battle pits the user against an AI opposing counsel over a [`Case`].
//! It progresses through four forward-only procedural stages
//! (opening, direct, cross, closing) and accumulates a four-category
//! score ledger capped at 100 per category.
//!
//! ## Heuristics
//!
//! Every utterance is classified locally: argument quality, scoring
//! category, objection detection, finish-phrase detection, and a
//! rhetoric [`StrategyProfile`] for the opposing counsel. An external
//! oracle may later refine these classifications; the heuristics keep
//! the simulation fully functional without it.

pub mod analysis;
pub mod battle;
pub mod case;
pub mod core;
pub mod heuristics;
pub mod prompt;
pub mod transcript;

// Re-export commonly used types
pub use analysis::{
    insights::{BattleInsights, InsightEvidence, parse_battle_insights},
    turn_analysis::{TurnAnalysis, parse_turn_analysis, strip_code_fences},
};
pub use battle::{
    entities::{Battle, BattleStatus, InsightSheet, ObjectionTally},
    score::{Category, ScoreCard, score_change},
    stage::{Stage, StageDecision, StageProgress, StageSignal},
};
pub use case::entities::{Case, EvidenceItem, EvidenceKind};
pub use self::core::{
    error::DomainError,
    random::{RandomSource, SequenceRandom},
};
pub use heuristics::{
    finish::is_finish_phrase,
    objection::{ObjectionKind, Ruling, detect_objection, rule_on_objection},
    quality::{QualityAssessment, QualityTier, classify_quality},
    scoring::guess_category,
    strategy::{StrategyProfile, derive_strategy},
};
