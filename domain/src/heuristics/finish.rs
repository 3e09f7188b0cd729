//! Finish-phrase detection for the open-ended examination stages.

use regex::Regex;
use std::sync::OnceLock;

/// Court acknowledgment appended when a finish phrase is recognized
pub const FINISH_ACKNOWLEDGMENT: &str =
    "The court acknowledges. Please proceed to the next phase.";

/// The canonical finish phrase used by the manual "finish examination" path
pub const FINISH_PHRASE: &str = "That's all, Your Honor.";

fn finish_patterns() -> &'static Vec<Regex> {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            r"(?i)that'?s all.*your honor",
            r"(?i)no further questions",
            r"(?i)rest my case",
            r"(?i)nothing further",
            r"(?i)pass the witness",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("finish pattern is a valid regex"))
        .collect()
    })
}

/// True when the utterance signals the end of an examination phase.
///
/// Whether the signal has any effect is the stage machine's call; the
/// detector itself is stage-agnostic.
pub fn is_finish_phrase(text: &str) -> bool {
    finish_patterns().iter().any(|p| p.is_match(text))
}
