//! Case domain entities
//!
//! A [`Case`] is the immutable scenario a battle is fought over. The
//! core never mutates a case; the library of cases is owned by the
//! storage layer.

use serde::{Deserialize, Serialize};

/// Kind of an evidence item attached to a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceKind {
    Document,
    Video,
    Testimony,
    Physical,
}

/// A single piece of evidence in a case file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub name: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: EvidenceKind,
}

/// A legal case: the scenario for a battle (Entity)
///
/// Immutable for the duration of a battle. Battles reference a case by
/// id; they never own it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub id: String,
    pub title: String,
    pub case_type: String,
    /// Difficulty rating, 1 (introductory) to 5 (expert)
    pub difficulty: u8,
    pub issue: String,
    pub description: String,
    pub facts: String,
    pub statutes: String,
    pub burden_of_proof: String,
    /// The thesis the user is expected to argue
    pub user_argument: String,
    /// The opposing side's one-sentence thesis
    pub defense_thesis: String,
    /// Free-form strategic notes shipped with the case file
    pub notes: String,
    pub evidence: Vec<EvidenceItem>,
    pub precedents: Vec<String>,
}

impl Case {
    /// Precedent citations joined for prompt interpolation
    pub fn precedents_line(&self) -> String {
        self.precedents.join("; ")
    }
}
