//! Transcript-event ingestion types.
//!
//! A secondary ingestion channel (an embedded voice widget, an external
//! UI) delivers finalized utterances as marked events. Markers increase
//! monotonically per battle; the engine deduplicates redeliveries by
//! high-water mark, so delivery may be at-least-once.

use serde::{Deserialize, Serialize};

/// Who produced an ingested utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventRole {
    User,
    Assistant,
}

/// One finalized utterance from the secondary channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEvent {
    /// Monotonic position of this event in the source's stream
    pub marker: u64,
    pub role: EventRole,
    pub text: String,
}

impl TranscriptEvent {
    pub fn user(marker: u64, text: impl Into<String>) -> Self {
        Self {
            marker,
            role: EventRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(marker: u64, text: impl Into<String>) -> Self {
        Self {
            marker,
            role: EventRole::Assistant,
            text: text.into(),
        }
    }
}
