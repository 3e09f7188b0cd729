//! Fixed word lists backing the text heuristics.
//!
//! Matching is lowercase substring containment throughout, so
//! multi-word entries ("your honor", "case law") are valid.

/// Legal terms that indicate a substantive argument
pub(crate) const LEGAL_TERMS: &[&str] = &[
    "evidence",
    "precedent",
    "case law",
    "statute",
    "amendment",
    "court",
    "ruling",
    "objection",
    "testimony",
    "witness",
    "defendant",
    "plaintiff",
    "your honor",
    "counsel",
    "establish",
    "demonstrate",
    "prove",
    "violation",
    "constitutional",
    "reasonable",
    "standard",
    "burden",
    "duty",
    "rights",
    "liability",
    "damages",
    "negligence",
    "intent",
    "miranda",
    "jurisdiction",
];

/// Causal connectives (+0.5 structure bonus)
pub(crate) const CAUSAL_CONNECTIVES: &[&str] = &["because", "therefore", "thus"];

/// Contrastive connectives (+0.5 structure bonus)
pub(crate) const CONTRASTIVE_CONNECTIVES: &[&str] = &["however", "but", "although"];

/// Evidentiary verbs (+0.5 structure bonus)
pub(crate) const EVIDENTIARY_VERBS: &[&str] = &["show", "prove", "demonstrate"];

/// Keyword sets per score category, in [`Category::ALL`] order
///
/// [`Category::ALL`]: crate::battle::score::Category::ALL
pub(crate) const CATEGORY_KEYWORDS: [&[&str]; 4] = [
    // logic
    &["because", "therefore", "thus", "consequently", "follows", "reason"],
    // persuasiveness
    &["your honor", "must", "clearly", "undoubtedly", "compelling", "justice"],
    // precedent
    &["case", "precedent", "court held", "ruling", "established", "decision"],
    // clarity
    &["specifically", "clearly", "evidence shows", "facts", "witness", "testimony"],
];

/// Aggressive-rhetoric markers for the strategy profile
pub(crate) const AGGRESSIVE_WORDS: &[&str] = &[
    "clearly",
    "undoubtedly",
    "absolutely",
    "unequivocally",
    "categorically",
    "emphatically",
    "indisputably",
    "patently",
    "manifestly",
    "obviously",
    "conclusively",
    "definitively",
    "must",
    "shall",
    "demand",
    "insist",
    "reject",
    "refute",
    "false",
    "wrong",
    "fails",
    "frivolous",
];

/// Legal-citation indicators for the strategy profile
pub(crate) const LEGAL_INDICATORS: &[&str] = &[
    "v.",
    "vs.",
    "precedent",
    "case law",
    "court held",
    "established",
    "ruling",
    "decision",
    "holding",
    "supreme court",
    "circuit",
    "doctrine",
    "standard",
    "test",
    "principle",
    "statute",
    "section",
    "amendment",
    "article",
    "code",
    "regulation",
];

/// Confidence markers for the strategy profile
pub(crate) const CONFIDENT_WORDS: &[&str] = &[
    "will",
    "proven",
    "demonstrates",
    "shows",
    "establishes",
    "confirms",
    "evidence",
    "fact",
    "clearly",
    "certainly",
    "undoubtedly",
];

/// Hedging markers that lower the confidence gauge
pub(crate) const HEDGING_WORDS: &[&str] = &[
    "may",
    "might",
    "could",
    "perhaps",
    "possibly",
    "arguably",
    "suggests",
    "appears",
    "seems",
    "likely",
];

/// Count how many entries of `list` occur in `text` (already lowercased)
pub(crate) fn count_hits(text: &str, list: &[&str]) -> usize {
    list.iter().filter(|term| text.contains(*term)).count()
}
