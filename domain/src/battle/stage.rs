//! Stage progression state machine.
//!
//! A battle moves through four procedural stages in a fixed forward
//! order: opening → direct → cross → closing. Advancing past closing
//! completes the battle. Stages never regress.
//!
//! Advancement policy differs per stage:
//! - **opening / closing**: fixed quotas — a number of user turns or a
//!   number of completed counsel exchanges, whichever fires first
//! - **direct / cross**: open-ended — a finish phrase or an oracle
//!   finish flag marks the stage advance-eligible; manual advancement
//!   requires a minimum number of exchanges; a user-turn ceiling
//!   force-advances as a safety fallback
//!
//! Every advancement signal, from either ingestion channel or the
//! oracle, feeds [`StageProgress::observe`] — the single arbitration
//! point for stage transitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User turns that close the opening stage
pub const OPENING_USER_TURN_QUOTA: u32 = 3;
/// User turns that close the closing stage (and the battle)
pub const CLOSING_USER_TURN_QUOTA: u32 = 2;
/// Counsel exchanges that close opening or closing
pub const EXCHANGE_QUOTA: u32 = 2;
/// Exchanges required before an examination stage may be advanced manually
pub const EXAMINATION_MIN_EXCHANGES: u32 = 3;
/// User-turn ceiling that force-advances an examination stage
pub const EXAMINATION_USER_TURN_CEILING: u32 = 7;

/// The four procedural stages, in forward-only order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Opening,
    Direct,
    Cross,
    Closing,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Opening, Stage::Direct, Stage::Cross, Stage::Closing];

    /// Position in the forward order, 0-based
    pub fn index(self) -> usize {
        match self {
            Stage::Opening => 0,
            Stage::Direct => 1,
            Stage::Cross => 2,
            Stage::Closing => 3,
        }
    }

    /// The following stage, or `None` past closing
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Opening => Some(Stage::Direct),
            Stage::Direct => Some(Stage::Cross),
            Stage::Cross => Some(Stage::Closing),
            Stage::Closing => None,
        }
    }

    /// Direct and cross examination are the open-ended stages
    pub fn is_examination(self) -> bool {
        matches!(self, Stage::Direct | Stage::Cross)
    }

    pub fn title(self) -> &'static str {
        match self {
            Stage::Opening => "Opening Statements",
            Stage::Direct => "Direct Examination",
            Stage::Cross => "Cross Examination",
            Stage::Closing => "Closing Arguments",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Stage::Opening => "Present your theory of the case and what you intend to prove",
            Stage::Direct => "Question your witnesses to establish facts favorable to your case",
            Stage::Cross => "Challenge the opposing side's witnesses and evidence",
            Stage::Closing => "Summarize your case and persuade the jury",
        }
    }

    /// Court transcript entry announcing entry into this stage
    pub fn transition_announcement(self) -> String {
        format!(
            "--- {} Phase Begins ---\n{}",
            self.title(),
            self.description()
        )
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Opening => "opening",
            Stage::Direct => "direct",
            Stage::Cross => "cross",
            Stage::Closing => "closing",
        };
        f.write_str(name)
    }
}

/// Court transcript entry appended when the battle completes
pub const COMPLETION_ANNOUNCEMENT: &str =
    "--- Case Complete ---\nBoth sides have presented their arguments. The court will now deliberate.";

/// An advancement signal observed by the arbitration point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageSignal {
    /// A user utterance was appended in the current stage
    UserTurn,
    /// A counsel reply completed an exchange in the current stage
    CounselExchange,
    /// The user spoke a finish phrase ("no further questions", ...)
    FinishPhrase,
    /// The oracle's deep analysis flagged the phase as finished
    OracleFinish,
    /// An explicit advance was requested
    ManualAdvance,
}

/// Outcome of observing a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageDecision {
    /// Nothing changes
    Stay,
    /// The stage became advance-eligible; an explicit advance may follow
    Eligible,
    /// The stage advances now
    Advance,
}

/// Per-stage progress tracker and transition arbiter.
///
/// Counting triggers advance immediately; finish signals only mark the
/// stage eligible, leaving the actual move to a manual advance (or the
/// turn ceiling). Reset on every transition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageProgress {
    user_turns: u32,
    exchanges: u32,
    eligible: bool,
}

impl StageProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_turns(&self) -> u32 {
        self.user_turns
    }

    pub fn exchanges(&self) -> u32 {
        self.exchanges
    }

    pub fn is_eligible(&self) -> bool {
        self.eligible
    }

    /// Clear counters after a transition
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Feed one advancement signal through the arbitration rules.
    pub fn observe(&mut self, stage: Stage, signal: StageSignal) -> StageDecision {
        match signal {
            StageSignal::UserTurn => {
                self.user_turns += 1;
                let quota_met = match stage {
                    Stage::Opening => self.user_turns >= OPENING_USER_TURN_QUOTA,
                    Stage::Closing => self.user_turns >= CLOSING_USER_TURN_QUOTA,
                    Stage::Direct | Stage::Cross => {
                        self.user_turns >= EXAMINATION_USER_TURN_CEILING
                    }
                };
                if quota_met {
                    StageDecision::Advance
                } else {
                    StageDecision::Stay
                }
            }
            StageSignal::CounselExchange => {
                self.exchanges += 1;
                if !stage.is_examination() && self.exchanges >= EXCHANGE_QUOTA {
                    StageDecision::Advance
                } else {
                    StageDecision::Stay
                }
            }
            StageSignal::FinishPhrase | StageSignal::OracleFinish => {
                // Finish signals only matter during examination stages
                if stage.is_examination() {
                    self.eligible = true;
                    StageDecision::Eligible
                } else {
                    StageDecision::Stay
                }
            }
            StageSignal::ManualAdvance => {
                let permitted = if stage.is_examination() {
                    self.eligible && self.exchanges >= EXAMINATION_MIN_EXCHANGES
                } else {
                    self.eligible
                };
                if permitted {
                    StageDecision::Advance
                } else {
                    StageDecision::Stay
                }
            }
        }
    }
}
