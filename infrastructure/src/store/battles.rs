//! Battle repository backed by the in-memory record store.

use async_trait::async_trait;
use gavel_application::{BattlePatch, BattleRepository, StoreError};
use gavel_domain::Battle;

use crate::store::memory::{MemoryStore, StoredRecord};

impl StoredRecord for Battle {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn stamp_created(&mut self, at: chrono::DateTime<chrono::Utc>) {
        self.created_at = at;
        self.updated_at = at;
    }
}

pub struct InMemoryBattleRepository {
    store: MemoryStore<Battle>,
}

impl InMemoryBattleRepository {
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new("battle"),
        }
    }

    /// All stored battles, newest first.
    pub fn history(&self) -> Result<Vec<Battle>, StoreError> {
        self.store.list(Some("-created_at"))
    }
}

impl Default for InMemoryBattleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BattleRepository for InMemoryBattleRepository {
    async fn create(&self, battle: Battle) -> Result<Battle, StoreError> {
        self.store.create(battle)
    }

    async fn get(&self, id: &str) -> Result<Battle, StoreError> {
        self.store.get(id)
    }

    async fn update(&self, id: &str, patch: BattlePatch) -> Result<Battle, StoreError> {
        let patch = serde_json::to_value(&patch)
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        self.store.update(id, &patch)
    }
}
