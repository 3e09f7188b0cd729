//! Battle domain entities
//!
//! A [`Battle`] is the mutable record of one simulation run: current
//! stage, score ledger, objection tally, synthesized insights, and
//! completion state. All mutation goes through the methods here so the
//! invariants (forward-only stage, capped scores, sustained ≤ raised,
//! sealed-after-completion) hold by construction.

use crate::analysis::insights::BattleInsights;
use crate::battle::score::{Category, ScoreCard};
use crate::battle::stage::Stage;
use crate::heuristics::objection::Ruling;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleStatus {
    #[serde(rename = "in_progress")]
    InProgress,
    Completed,
}

/// Objection counters. `sustained <= raised` holds by construction:
/// the only mutation path records a ruling, which always increments
/// `raised` and conditionally increments `sustained`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectionTally {
    raised: u32,
    sustained: u32,
}

impl ObjectionTally {
    pub fn raised(&self) -> u32 {
        self.raised
    }

    pub fn sustained(&self) -> u32 {
        self.sustained
    }

    pub fn overruled(&self) -> u32 {
        self.raised - self.sustained
    }

    fn record(&mut self, ruling: Ruling) {
        self.raised += 1;
        if ruling == Ruling::Sustained {
            self.sustained += 1;
        }
    }
}

/// Insights synthesized from the transcript by the oracle.
///
/// Absent until the synthesizer first runs; replaced wholesale on each
/// synthesis pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightSheet {
    #[serde(flatten)]
    pub insights: BattleInsights,
    pub updated_at: DateTime<Utc>,
}

/// A battle: one run of the simulation against a case (Entity)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Battle {
    pub id: String,
    /// Reference to the case being argued; battles never own the case
    pub case_id: String,
    stage: Stage,
    scores: ScoreCard,
    objections: ObjectionTally,
    insights: Option<InsightSheet>,
    status: BattleStatus,
    duration_seconds: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Battle {
    /// Start a fresh battle at the opening stage with zeroed counters.
    /// The id is assigned by the store on create.
    pub fn open(case_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            case_id: case_id.into(),
            stage: Stage::Opening,
            scores: ScoreCard::new(),
            objections: ObjectionTally::default(),
            insights: None,
            status: BattleStatus::InProgress,
            duration_seconds: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn scores(&self) -> &ScoreCard {
        &self.scores
    }

    pub fn objections(&self) -> ObjectionTally {
        self.objections
    }

    pub fn insights(&self) -> Option<&InsightSheet> {
        self.insights.as_ref()
    }

    pub fn status(&self) -> BattleStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == BattleStatus::Completed
    }

    /// Elapsed duration, frozen once at completion
    pub fn duration_seconds(&self) -> Option<u64> {
        self.duration_seconds
    }

    /// Apply a score delta through the ledger.
    ///
    /// Returns the delta actually applied after clamping, or `None` if
    /// the battle is completed (the mutation is rejected as a no-op).
    pub fn apply_score_delta(&mut self, category: Category, delta: i32) -> Option<i32> {
        if self.is_completed() {
            return None;
        }
        Some(self.scores.apply_delta(category, delta))
    }

    /// Record an objection ruling. Returns false (no-op) when completed.
    pub fn record_objection(&mut self, ruling: Ruling) -> bool {
        if self.is_completed() {
            return false;
        }
        self.objections.record(ruling);
        true
    }

    /// Move to the next stage. Returns the new stage, or `None` when
    /// the battle is completed or already at closing (advancing past
    /// closing goes through [`Battle::complete`]).
    pub fn advance_stage(&mut self) -> Option<Stage> {
        if self.is_completed() {
            return None;
        }
        let next = self.stage.next()?;
        self.stage = next;
        Some(next)
    }

    /// Complete the battle, freezing the elapsed duration. Returns
    /// false if it was already completed (duration stays frozen).
    pub fn complete(&mut self, duration_seconds: u64) -> bool {
        if self.is_completed() {
            return false;
        }
        self.status = BattleStatus::Completed;
        self.duration_seconds = Some(duration_seconds);
        true
    }

    /// Replace the synthesized insight sheet.
    pub fn set_insights(&mut self, insights: BattleInsights, updated_at: DateTime<Utc>) {
        self.insights = Some(InsightSheet {
            insights,
            updated_at,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_battle_starts_zeroed_at_opening() {
        let battle = Battle::open("case-1");
        assert_eq!(battle.stage(), Stage::Opening);
        assert_eq!(battle.scores().total(), 0);
        assert_eq!(battle.objections().raised(), 0);
        assert!(battle.insights().is_none());
        assert!(!battle.is_completed());
    }

    #[test]
    fn test_stage_advances_forward_and_stops_at_closing() {
        let mut battle = Battle::open("case-1");
        assert_eq!(battle.advance_stage(), Some(Stage::Direct));
        assert_eq!(battle.advance_stage(), Some(Stage::Cross));
        assert_eq!(battle.advance_stage(), Some(Stage::Closing));
        assert_eq!(battle.advance_stage(), None);
        assert_eq!(battle.stage(), Stage::Closing);
    }

    #[test]
    fn test_completed_battle_rejects_mutation() {
        let mut battle = Battle::open("case-1");
        battle.apply_score_delta(Category::Logic, 40);
        assert!(battle.complete(321));
        assert_eq!(battle.duration_seconds(), Some(321));

        assert_eq!(battle.apply_score_delta(Category::Logic, 10), None);
        assert!(!battle.record_objection(Ruling::Sustained));
        assert_eq!(battle.advance_stage(), None);
        assert!(!battle.complete(999));

        // Nothing moved.
        assert_eq!(battle.scores().get(Category::Logic), 40);
        assert_eq!(battle.objections().raised(), 0);
        assert_eq!(battle.duration_seconds(), Some(321));
    }

    #[test]
    fn test_objection_tally_invariant() {
        let mut battle = Battle::open("case-1");
        battle.record_objection(Ruling::Sustained);
        battle.record_objection(Ruling::Overruled);
        battle.record_objection(Ruling::Sustained);
        let tally = battle.objections();
        assert_eq!(tally.raised(), 3);
        assert_eq!(tally.sustained(), 2);
        assert_eq!(tally.overruled(), 1);
        assert!(tally.sustained() <= tally.raised());
    }
}
