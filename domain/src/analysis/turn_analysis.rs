//! Deep turn-analysis reply parsing.
//!
//! The analysis prompt asks the oracle for a JSON object carrying
//! rubric scores, a score attribution, an objection flag, and a
//! finish-phase flag. Replies are tolerated in three shapes: bare JSON,
//! JSON wrapped in code fences, and JSON embedded in surrounding prose.

use crate::battle::score::Category;
use crate::core::error::DomainError;
use crate::heuristics::objection::ObjectionKind;
use serde::Deserialize;

/// Structured result of one deep-analysis cycle
#[derive(Debug, Clone, PartialEq)]
pub struct TurnAnalysis {
    /// Rubric gauges (0-100), absent when the oracle omitted them
    pub logic: Option<u8>,
    pub persuasiveness: Option<u8>,
    pub precedent: Option<u8>,
    pub clarity: Option<u8>,
    pub aggression: Option<u8>,
    pub confidence: Option<u8>,
    pub legal_reasoning: Option<u8>,
    /// Category the score change applies to
    pub category: Option<Category>,
    /// Signed score delta, clamped to the documented [-10, 20] band
    pub score_change: i32,
    /// Objection the oracle detected, if any
    pub objection: Option<ObjectionKind>,
    /// True when the oracle judged the current phase finished
    pub finish_phase: bool,
}

/// Raw JSON shape as produced by the oracle
#[derive(Debug, Deserialize)]
struct RawAnalysis {
    logic: Option<f64>,
    persuasiveness: Option<f64>,
    precedent: Option<f64>,
    clarity: Option<f64>,
    aggression: Option<f64>,
    confidence: Option<f64>,
    legal_reasoning: Option<f64>,
    category: Option<String>,
    score_change: Option<f64>,
    objection_detected: Option<String>,
    finish_phase: Option<bool>,
}

fn gauge(value: Option<f64>) -> Option<u8> {
    value.map(|v| v.clamp(0.0, 100.0).round() as u8)
}

/// Strip markdown code-fence wrapping from an oracle reply.
///
/// Handles ```` ```json ```` and bare ```` ``` ```` fences; anything
/// else is returned trimmed.
pub fn strip_code_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

/// Extract the outermost `{ ... }` object from prose, if present
fn embedded_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Parse a deep-analysis oracle reply.
///
/// Unknown category or objection strings degrade to `None` rather than
/// failing the whole cycle; a reply that is not JSON at all is an
/// [`DomainError::UnparseableReply`].
pub fn parse_turn_analysis(reply: &str) -> Result<TurnAnalysis, DomainError> {
    let stripped = strip_code_fences(reply);
    let raw: RawAnalysis = serde_json::from_str(stripped)
        .or_else(|err| match embedded_object(stripped) {
            Some(json) => serde_json::from_str(json),
            None => Err(err),
        })
        .map_err(|err| DomainError::UnparseableReply(err.to_string()))?;

    let category = raw
        .category
        .as_deref()
        .and_then(|s| s.parse::<Category>().ok());
    let objection = raw
        .objection_detected
        .as_deref()
        .filter(|s| !s.eq_ignore_ascii_case("none"))
        .and_then(|s| s.parse::<ObjectionKind>().ok());

    Ok(TurnAnalysis {
        logic: gauge(raw.logic),
        persuasiveness: gauge(raw.persuasiveness),
        precedent: gauge(raw.precedent),
        clarity: gauge(raw.clarity),
        aggression: gauge(raw.aggression),
        confidence: gauge(raw.confidence),
        legal_reasoning: gauge(raw.legal_reasoning),
        category,
        score_change: raw
            .score_change
            .map(|v| v.clamp(-10.0, 20.0).round() as i32)
            .unwrap_or(0),
        objection,
        finish_phase: raw.finish_phase.unwrap_or(false),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = r#"{
        "logic": 72, "persuasiveness": 64, "precedent": 58, "clarity": 80,
        "aggression": 45, "confidence": 70, "legal_reasoning": 66,
        "category": "clarity", "score_change": 9,
        "objection_detected": "none", "finish_phase": false
    }"#;

    #[test]
    fn test_parse_bare_json() {
        let analysis = parse_turn_analysis(REPLY).unwrap();
        assert_eq!(analysis.category, Some(Category::Clarity));
        assert_eq!(analysis.score_change, 9);
        assert_eq!(analysis.objection, None);
        assert!(!analysis.finish_phase);
        assert_eq!(analysis.clarity, Some(80));
    }

    #[test]
    fn test_parse_fenced_json() {
        let fenced = format!("```json\n{REPLY}\n```");
        let analysis = parse_turn_analysis(&fenced).unwrap();
        assert_eq!(analysis.category, Some(Category::Clarity));
    }

    #[test]
    fn test_parse_json_embedded_in_prose() {
        let wrapped = format!("Here is my analysis:\n{REPLY}\nLet me know if more is needed.");
        let analysis = parse_turn_analysis(&wrapped).unwrap();
        assert_eq!(analysis.score_change, 9);
    }

    #[test]
    fn test_objection_and_finish_flags() {
        let reply = r#"{"category": "logic", "score_change": -4,
                        "objection_detected": "hearsay", "finish_phase": true}"#;
        let analysis = parse_turn_analysis(reply).unwrap();
        assert_eq!(analysis.objection, Some(ObjectionKind::Hearsay));
        assert!(analysis.finish_phase);
        assert_eq!(analysis.score_change, -4);
    }

    #[test]
    fn test_score_change_clamps_to_documented_band() {
        let reply = r#"{"score_change": 55}"#;
        let analysis = parse_turn_analysis(reply).unwrap();
        assert_eq!(analysis.score_change, 20);
    }

    #[test]
    fn test_unknown_category_degrades_to_none() {
        let reply = r#"{"category": "theatrics", "score_change": 5}"#;
        let analysis = parse_turn_analysis(reply).unwrap();
        assert_eq!(analysis.category, None);
    }

    #[test]
    fn test_garbage_reply_is_unparseable() {
        let err = parse_turn_analysis("I cannot help with that.").unwrap_err();
        assert!(matches!(err, DomainError::UnparseableReply(_)));
    }

    #[test]
    fn test_strip_code_fences_variants() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
    }
}
