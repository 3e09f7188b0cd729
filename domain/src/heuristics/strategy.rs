//! Rhetoric strategy profiling.
//!
//! Derives a [`StrategyProfile`] snapshot from a single utterance using
//! three keyword-density formulas. The profile is replaced wholesale on
//! each recomputation; it is a snapshot, not a ledger.

use crate::heuristics::vocabulary::{
    AGGRESSIVE_WORDS, CONFIDENT_WORDS, HEDGING_WORDS, LEGAL_INDICATORS, count_hits,
};
use serde::{Deserialize, Serialize};

/// Three bounded gauges describing rhetorical style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyProfile {
    /// Assertive, forceful language (0-100)
    pub aggression: u8,
    /// Reliance on citations and legal authority (0-100)
    pub precedent_use: u8,
    /// Certainty minus hedging (30-100)
    pub confidence: u8,
}

/// Derive a strategy profile from an utterance.
///
/// The rescaling constants are deliberate: short utterances hit only a
/// few list entries, so densities are stretched (×300, ×250) and given
/// floors (+30, +20, +40) to land in a readable band.
pub fn derive_strategy(text: &str) -> StrategyProfile {
    let text = text.to_lowercase();

    let aggressive_hits = count_hits(&text, AGGRESSIVE_WORDS) as f64;
    let aggression =
        (aggressive_hits / AGGRESSIVE_WORDS.len() as f64 * 300.0 + 30.0).clamp(0.0, 100.0);

    let citation_hits = count_hits(&text, LEGAL_INDICATORS) as f64;
    let precedent_use =
        (citation_hits / LEGAL_INDICATORS.len() as f64 * 250.0 + 20.0).clamp(0.0, 100.0);

    let confident_hits = count_hits(&text, CONFIDENT_WORDS) as f64;
    let hedging_hits = count_hits(&text, HEDGING_WORDS) as f64;
    let base = confident_hits / CONFIDENT_WORDS.len() as f64 * 100.0;
    let penalty = hedging_hits / HEDGING_WORDS.len() as f64 * 40.0;
    let confidence = (base - penalty + 40.0).clamp(30.0, 100.0);

    StrategyProfile {
        aggression: aggression.round() as u8,
        precedent_use: precedent_use.round() as u8,
        confidence: confidence.round() as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_text_sits_on_the_floors() {
        let profile = derive_strategy("Good morning.");
        assert_eq!(profile.aggression, 30);
        assert_eq!(profile.precedent_use, 20);
        assert_eq!(profile.confidence, 40);
    }

    #[test]
    fn test_aggressive_rhetoric_raises_aggression() {
        let profile = derive_strategy("This claim is clearly false and obviously wrong.");
        // 4 hits / 22 words * 300 + 30 = 84.5
        assert_eq!(profile.aggression, 85);
    }

    #[test]
    fn test_citations_raise_precedent_use() {
        let profile = derive_strategy(
            "As established in Terry v. Ohio, the Supreme Court ruling controls; \
             the doctrine and the statute agree.",
        );
        assert!(profile.precedent_use > 60);
        assert!(profile.precedent_use <= 100);
    }

    #[test]
    fn test_hedging_lowers_confidence_to_its_floor() {
        let profile = derive_strategy(
            "It may be that this perhaps suggests what possibly appears likely, \
             though it could arguably seem otherwise.",
        );
        assert_eq!(profile.confidence, 30);
    }

    #[test]
    fn test_gauges_never_exceed_bounds() {
        let loaded = AGGRESSIVE_WORDS.join(" ")
            + " "
            + &LEGAL_INDICATORS.join(" ")
            + " "
            + &CONFIDENT_WORDS.join(" ");
        let profile = derive_strategy(&loaded);
        assert_eq!(profile.aggression, 100);
        assert_eq!(profile.precedent_use, 100);
        assert_eq!(profile.confidence, 100);
    }
}
