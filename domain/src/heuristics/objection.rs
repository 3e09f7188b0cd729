//! Objection detection and adjudication.
//!
//! Detection: a fixed regex per objection kind, fired only when the
//! utterance also contains an objection indicator ("objection" /
//! "object"). Adjudication: a uniform 50/50 ruling — a documented
//! placeholder heuristic, not doctrinally accurate.

use crate::core::random::RandomSource;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::core::error::DomainError;

/// Score bonus applied to clarity when an objection is sustained
pub const SUSTAINED_CLARITY_BONUS: i32 = 8;

/// Recognized objection kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectionKind {
    Hearsay,
    Relevance,
    Leading,
    Speculation,
    Foundation,
    Argumentative,
}

impl ObjectionKind {
    pub const ALL: [ObjectionKind; 6] = [
        ObjectionKind::Hearsay,
        ObjectionKind::Relevance,
        ObjectionKind::Leading,
        ObjectionKind::Speculation,
        ObjectionKind::Foundation,
        ObjectionKind::Argumentative,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ObjectionKind::Hearsay => "hearsay",
            ObjectionKind::Relevance => "relevance",
            ObjectionKind::Leading => "leading",
            ObjectionKind::Speculation => "speculation",
            ObjectionKind::Foundation => "foundation",
            ObjectionKind::Argumentative => "argumentative",
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            ObjectionKind::Hearsay => r"\b(hearsay|hear say)\b",
            ObjectionKind::Relevance => r"\b(relevance|relevant|irrelevant)\b",
            ObjectionKind::Leading => r"\b(leading|leading question)\b",
            ObjectionKind::Speculation => r"\b(speculation|speculative|speculating)\b",
            ObjectionKind::Foundation => r"\b(foundation|lacks foundation)\b",
            ObjectionKind::Argumentative => r"\b(argumentative|arguing)\b",
        }
    }
}

impl fmt::Display for ObjectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| DomainError::UnknownObjection(s.to_string()))
    }
}

/// The two possible verdicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ruling {
    Sustained,
    Overruled,
}

fn objection_patterns() -> &'static Vec<(ObjectionKind, Regex)> {
    static PATTERNS: OnceLock<Vec<(ObjectionKind, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        ObjectionKind::ALL
            .into_iter()
            .map(|kind| {
                let regex = Regex::new(&format!("(?i){}", kind.pattern()))
                    .expect("objection pattern is a valid regex");
                (kind, regex)
            })
            .collect()
    })
}

fn objection_indicator() -> &'static Regex {
    static INDICATOR: OnceLock<Regex> = OnceLock::new();
    INDICATOR
        .get_or_init(|| Regex::new(r"(?i)\b(objection|object)\b").expect("valid indicator regex"))
}

/// Detect an objection in an utterance.
///
/// The kind pattern alone is not enough — "that question is leading"
/// is commentary; "objection, leading" is an objection.
pub fn detect_objection(text: &str) -> Option<ObjectionKind> {
    if !objection_indicator().is_match(text) {
        return None;
    }
    objection_patterns()
        .iter()
        .find(|(_, regex)| regex.is_match(text))
        .map(|(kind, _)| *kind)
}

/// Rule on an objection: uniform 50/50 sustain or overrule.
pub fn rule_on_objection(rng: &mut dyn RandomSource) -> Ruling {
    if rng.coin_flip() {
        Ruling::Sustained
    } else {
        Ruling::Overruled
    }
}

/// The court's transcript announcement for a ruling
pub fn ruling_announcement(kind: ObjectionKind, ruling: Ruling) -> String {
    match ruling {
        Ruling::Sustained => format!("Objection sustained. {kind} is not permitted."),
        Ruling::Overruled => "Objection overruled. You may proceed.".to_string(),
    }
}
