//! Courtroom notifier - output port for battle progress.
//!
//! The engine reports everything that happens through this trait; the
//! presentation side decides what to show. All methods default to
//! no-ops so implementors only override what they render.

use gavel_domain::battle::entities::{Battle, InsightSheet};
use gavel_domain::heuristics::objection::{ObjectionKind, Ruling};
use gavel_domain::transcript::entities::Turn;
use gavel_domain::{ScoreCard, Stage, StrategyProfile};

/// Observer for battle progress events.
pub trait CourtroomNotifier: Send + Sync {
    /// A turn was appended to the transcript.
    fn on_turn(&self, _turn: &Turn) {}

    /// The score ledger changed.
    fn on_scores(&self, _scores: &ScoreCard) {}

    /// The opposing counsel's strategy profile was recomputed.
    fn on_strategy(&self, _profile: &StrategyProfile) {}

    /// An objection was ruled on.
    fn on_objection(&self, _kind: ObjectionKind, _ruling: Ruling) {}

    /// The battle moved to a new stage.
    fn on_stage_changed(&self, _stage: Stage) {}

    /// The current stage became advance-eligible.
    fn on_advance_eligible(&self, _stage: Stage) {}

    /// Fresh insights were synthesized.
    fn on_insights(&self, _sheet: &InsightSheet) {}

    /// The battle completed.
    fn on_completed(&self, _battle: &Battle) {}

    /// One second of wall-clock time passed.
    fn on_elapsed(&self, _seconds: u64) {}

    /// An advisory message for the user (rejected commands, oracle
    /// unavailability, and the like).
    fn on_notice(&self, _message: &str) {}
}

/// Notifier that reports nothing.
pub struct NoNotifier;

impl CourtroomNotifier for NoNotifier {}
