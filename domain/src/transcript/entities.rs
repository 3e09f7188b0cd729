//! Transcript domain entities
//!
//! The transcript is the append-only, ordered sequence of [`Turn`]s in
//! a battle. Turns are never edited or removed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who produced a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The human player
    User,
    /// The AI opposing counsel
    Counsel,
    /// The court / system (stage transitions, rulings, rebukes)
    Court,
}

impl Speaker {
    /// Display label used in transcripts and prompts
    pub fn label(self) -> &'static str {
        match self {
            Speaker::User => "You",
            Speaker::Counsel => "AI Opposing Counsel",
            Speaker::Court => "Court",
        }
    }

    /// Court entries are system-generated, not argued
    pub fn is_system(self) -> bool {
        matches!(self, Speaker::Court)
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One timestamped utterance in a battle transcript (Entity)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text)
    }

    pub fn counsel(text: impl Into<String>) -> Self {
        Self::new(Speaker::Counsel, text)
    }

    pub fn court(text: impl Into<String>) -> Self {
        Self::new(Speaker::Court, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaker_labels() {
        assert_eq!(Speaker::User.label(), "You");
        assert_eq!(Speaker::Counsel.label(), "AI Opposing Counsel");
        assert!(Speaker::Court.is_system());
        assert!(!Speaker::User.is_system());
    }

    #[test]
    fn test_turn_constructors() {
        let turn = Turn::user("Your Honor, the evidence shows negligence.");
        assert_eq!(turn.speaker, Speaker::User);
        assert!(turn.text.contains("negligence"));
    }
}
