//! Score ledger: four capped rubric counters and their derived total.
//!
//! Invariants:
//! - each category stays within `[0, 100]` (deltas clamp, never error)
//! - `total` always equals the sum of the four categories; it is
//!   recomputed on every mutation, never drifted independently

use crate::core::error::DomainError;
use crate::core::random::RandomSource;
use crate::heuristics::quality::QualityAssessment;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper cap for each score category
pub const CATEGORY_CAP: i32 = 100;

/// The four rubric categories tracked by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Logic,
    Persuasiveness,
    Precedent,
    Clarity,
}

impl Category {
    /// All categories in declaration order. The order matters: keyword
    /// ties during category guessing resolve to the earliest entry.
    pub const ALL: [Category; 4] = [
        Category::Logic,
        Category::Persuasiveness,
        Category::Precedent,
        Category::Clarity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Logic => "logic",
            Category::Persuasiveness => "persuasiveness",
            Category::Precedent => "precedent",
            Category::Clarity => "clarity",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "logic" => Ok(Category::Logic),
            "persuasiveness" => Ok(Category::Persuasiveness),
            "precedent" => Ok(Category::Precedent),
            "clarity" => Ok(Category::Clarity),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}

/// The per-battle score ledger (Value Object)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    logic: i32,
    persuasiveness: i32,
    precedent: i32,
    clarity: i32,
    total: i32,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> i32 {
        match category {
            Category::Logic => self.logic,
            Category::Persuasiveness => self.persuasiveness,
            Category::Precedent => self.precedent,
            Category::Clarity => self.clarity,
        }
    }

    /// Derived total, bounded `[0, 400]` by construction
    pub fn total(&self) -> i32 {
        self.total
    }

    /// Apply a bounded delta to one category.
    ///
    /// The new value clamps to `[0, 100]` and the total is recomputed
    /// from all four categories. Returns the delta actually applied
    /// after clamping.
    pub fn apply_delta(&mut self, category: Category, delta: i32) -> i32 {
        let old = self.get(category);
        let new = (old + delta).clamp(0, CATEGORY_CAP);
        match category {
            Category::Logic => self.logic = new,
            Category::Persuasiveness => self.persuasiveness = new,
            Category::Precedent => self.precedent = new,
            Category::Clarity => self.clarity = new,
        }
        self.total = self.logic + self.persuasiveness + self.precedent + self.clarity;
        new - old
    }
}

/// Compute a score delta for a classified argument.
///
/// Base magnitude is drawn from `[5, 12]` for positive-multiplier tiers
/// and `[3, 7]` for negative ones; the final delta is
/// `floor(base * multiplier)`. Intentionally random — callers and tests
/// must treat the exact value as a range, not a point.
pub fn score_change(assessment: &QualityAssessment, rng: &mut dyn RandomSource) -> i32 {
    let base = if assessment.multiplier > 0.0 {
        rng.int_between(5, 12)
    } else {
        rng.int_between(3, 7)
    };
    (f64::from(base) * assessment.multiplier).floor() as i32
}
