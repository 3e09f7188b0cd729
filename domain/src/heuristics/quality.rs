//! Argument quality classifier.
//!
//! Maps an utterance to a quality tier and scoring multiplier. Three
//! gibberish gates reject the turn outright; otherwise a weighted sum
//! over length, legal vocabulary, and argument structure picks the
//! tier.

use crate::battle::stage::Stage;
use crate::heuristics::vocabulary::{
    CAUSAL_CONNECTIVES, CONTRASTIVE_CONNECTIVES, EVIDENTIARY_VERBS, LEGAL_TERMS, count_hits,
};
use serde::{Deserialize, Serialize};

/// Quality tier of an argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Classification result: tier plus the score multiplier it carries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityAssessment {
    pub tier: QualityTier,
    pub multiplier: f64,
}

impl QualityAssessment {
    const EXCELLENT: Self = Self {
        tier: QualityTier::Excellent,
        multiplier: 1.5,
    };
    const GOOD: Self = Self {
        tier: QualityTier::Good,
        multiplier: 1.0,
    };
    const FAIR: Self = Self {
        tier: QualityTier::Fair,
        multiplier: 0.5,
    };
    const POOR: Self = Self {
        tier: QualityTier::Poor,
        multiplier: -0.3,
    };
    /// Rejected outright by a gibberish gate
    const REJECTED: Self = Self {
        tier: QualityTier::Poor,
        multiplier: -0.5,
    };
}

/// True when the text contains a run of five or more identical characters
fn has_repeated_run(text: &str) -> bool {
    let mut run = 0u32;
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if Some(c) == prev {
            run += 1;
            if run >= 5 {
                return true;
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }
    false
}

/// Vowel-to-letter ratio; `None` when the text has no ASCII letters
fn vowel_ratio(text: &str) -> Option<f64> {
    let vowels = text.chars().filter(|c| "aeiou".contains(*c)).count();
    let consonants = text
        .chars()
        .filter(|c| c.is_ascii_lowercase() && !"aeiou".contains(*c))
        .count();
    let letters = vowels + consonants;
    if letters == 0 {
        None
    } else {
        Some(vowels as f64 / letters as f64)
    }
}

/// Classify an utterance's argument quality.
///
/// The question-mark structure bonus only applies during examination
/// stages — questions are the point of direct and cross, but a question
/// is not an opening statement or a closing argument.
pub fn classify_quality(text: &str, stage: Stage) -> QualityAssessment {
    let text = text.trim().to_lowercase();
    let length = text.chars().count();

    // Gibberish gates, checked in order: too short, repeated characters,
    // consonant soup.
    if length < 10 {
        return QualityAssessment::REJECTED;
    }
    if has_repeated_run(&text) {
        return QualityAssessment::REJECTED;
    }
    if length > 20
        && let Some(ratio) = vowel_ratio(&text)
        && ratio < 0.15
    {
        return QualityAssessment::REJECTED;
    }

    let mut score = 0.0f64;

    // Length bonus (up to 2 points)
    if length > 50 {
        score += 1.0;
    }
    if length > 100 {
        score += 1.0;
    }

    // Legal vocabulary (0.5 per term, capped at 3 points)
    let legal_hits = count_hits(&text, LEGAL_TERMS);
    score += (legal_hits as f64 * 0.5).min(3.0);

    // Argument structure (0.5 each)
    if count_hits(&text, CAUSAL_CONNECTIVES) > 0 {
        score += 0.5;
    }
    if count_hits(&text, CONTRASTIVE_CONNECTIVES) > 0 {
        score += 0.5;
    }
    if count_hits(&text, EVIDENTIARY_VERBS) > 0 {
        score += 0.5;
    }
    if text.contains('?') && stage.is_examination() {
        score += 0.5;
    }

    if score >= 5.0 {
        QualityAssessment::EXCELLENT
    } else if score >= 3.0 {
        QualityAssessment::GOOD
    } else if score >= 1.5 {
        QualityAssessment::FAIR
    } else {
        QualityAssessment::POOR
    }
}
