//! Battle repository port.
//!
//! Battles are persisted as keyed records; updates are partial patches
//! merged field-by-field into the stored record, so concurrent writers
//! touching different fields never clobber each other.

use async_trait::async_trait;
use gavel_domain::{Battle, BattleStatus, InsightSheet, ObjectionTally, ScoreCard, Stage};
use serde::Serialize;
use thiserror::Error;

/// Errors from the record store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Partial update to a persisted battle.
///
/// Only the fields that are `Some` are written; serialization skips the
/// rest so the merge in the store leaves them untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BattlePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<ScoreCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objections: Option<ObjectionTally>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<InsightSheet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BattleStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u64>,
}

impl BattlePatch {
    pub fn is_empty(&self) -> bool {
        self.stage.is_none()
            && self.scores.is_none()
            && self.objections.is_none()
            && self.insights.is_none()
            && self.status.is_none()
            && self.duration_seconds.is_none()
    }
}

/// Port for battle persistence.
#[async_trait]
pub trait BattleRepository: Send + Sync {
    /// Persist a new battle. The store assigns the id and returns the
    /// stored record.
    async fn create(&self, battle: Battle) -> Result<Battle, StoreError>;

    /// Fetch a battle by id.
    async fn get(&self, id: &str) -> Result<Battle, StoreError>;

    /// Merge a partial update into a stored battle and return the
    /// updated record.
    async fn update(&self, id: &str, patch: BattlePatch) -> Result<Battle, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch_serializes_to_empty_object() {
        let patch = BattlePatch::default();
        assert!(patch.is_empty());
        assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = BattlePatch {
            stage: Some(Stage::Cross),
            duration_seconds: Some(90),
            ..Default::default()
        };
        assert!(!patch.is_empty());
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["stage"], "cross");
        assert_eq!(json["duration_seconds"], 90);
        assert!(json.get("scores").is_none());
        assert!(json.get("status").is_none());
    }
}
