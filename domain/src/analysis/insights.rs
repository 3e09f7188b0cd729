//! Battle-insight reply parsing.
//!
//! The insight synthesizer asks the oracle for strategic notes,
//! evidence suggestions, and applicable precedents as one JSON object.

use crate::core::error::DomainError;
use crate::analysis::turn_analysis::strip_code_fences;
use serde::{Deserialize, Serialize};

/// One evidence suggestion produced by the synthesizer.
///
/// `kind` is free text from the oracle ("document", "video", ...);
/// unlike case-file evidence it is not constrained to an enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightEvidence {
    pub name: String,
    pub content: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub relevance: Option<String>,
}

/// Strategic insights synthesized from the transcript
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattleInsights {
    pub notes: String,
    pub evidence: Vec<InsightEvidence>,
    pub precedents: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawInsights {
    notes: Option<String>,
    evidence: Option<Vec<InsightEvidence>>,
    precedents: Option<Vec<String>>,
}

/// Parse an insight-synthesis oracle reply.
///
/// Missing fields default to empty — a reply with only notes is still
/// useful. A reply that is not JSON fails with
/// [`DomainError::UnparseableReply`].
pub fn parse_battle_insights(reply: &str) -> Result<BattleInsights, DomainError> {
    let stripped = strip_code_fences(reply);
    let raw: RawInsights = serde_json::from_str(stripped)
        .map_err(|err| DomainError::UnparseableReply(err.to_string()))?;

    Ok(BattleInsights {
        notes: raw.notes.unwrap_or_default(),
        evidence: raw.evidence.unwrap_or_default(),
        precedents: raw.precedents.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_insights() {
        let reply = r#"```json
        {
            "notes": "Press the chain-of-custody gap; the stop's timeline is weak.",
            "evidence": [
                {"name": "Dispatch Log", "content": "Stop lasted 40 minutes",
                 "type": "document", "relevance": "Supports undue-delay argument"}
            ],
            "precedents": ["Rodriguez v. United States (2015) - stop duration limits"]
        }
        ```"#;
        let insights = parse_battle_insights(reply).unwrap();
        assert!(insights.notes.contains("chain-of-custody"));
        assert_eq!(insights.evidence.len(), 1);
        assert_eq!(insights.evidence[0].kind.as_deref(), Some("document"));
        assert_eq!(insights.precedents.len(), 1);
    }

    #[test]
    fn test_missing_fields_default_empty() {
        let insights = parse_battle_insights(r#"{"notes": "Keep pressing."}"#).unwrap();
        assert_eq!(insights.notes, "Keep pressing.");
        assert!(insights.evidence.is_empty());
        assert!(insights.precedents.is_empty());
    }

    #[test]
    fn test_prose_reply_is_unparseable() {
        assert!(parse_battle_insights("No insights today.").is_err());
    }
}
