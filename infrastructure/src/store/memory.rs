//! Generic in-memory keyed-record store.
//!
//! Records are kept as typed values; updates arrive as JSON objects
//! and are merged field-by-field into the serialized record, so a
//! partial update never clobbers fields it does not mention. Every
//! update bumps the record's `updated_at` timestamp.
//!
//! Listing supports base44-style sort keys: a field name sorts
//! ascending, a leading `-` sorts descending.

use std::cmp::Ordering;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use chrono::{DateTime, Utc};
use gavel_application::StoreError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A record persisted in a [`MemoryStore`].
///
/// Records must serialize to a JSON object carrying `created_at` and
/// `updated_at` fields; the store manages both.
pub trait StoredRecord: Serialize + DeserializeOwned + Clone + Send + Sync {
    fn id(&self) -> &str;
    fn assign_id(&mut self, id: String);
    /// Set both timestamps at creation time.
    fn stamp_created(&mut self, at: DateTime<Utc>);
}

pub struct MemoryStore<T> {
    /// Record-kind prefix used for assigned ids
    name: &'static str,
    records: RwLock<Vec<T>>,
    next_id: AtomicU64,
}

impl<T: StoredRecord> MemoryStore<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            records: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Persist a new record, assigning its id and timestamps.
    pub fn create(&self, mut record: T) -> Result<T, StoreError> {
        let n = self.next_id.fetch_add(1, AtomicOrdering::Relaxed);
        record.assign_id(format!("{}-{}", self.name, n));
        record.stamp_created(Utc::now());
        let mut records = self.write()?;
        records.push(record.clone());
        Ok(record)
    }

    pub fn get(&self, id: &str) -> Result<T, StoreError> {
        self.read()?
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// All records, optionally sorted by a field (`-field` descends).
    pub fn list(&self, sort: Option<&str>) -> Result<Vec<T>, StoreError> {
        let mut records = self.read()?.clone();
        if let Some(key) = sort {
            let (field, descending) = match key.strip_prefix('-') {
                Some(field) => (field, true),
                None => (key, false),
            };
            let mut keyed: Vec<(Value, T)> = Vec::with_capacity(records.len());
            for record in records {
                let value = serde_json::to_value(&record)
                    .map_err(|err| StoreError::Serialization(err.to_string()))?;
                keyed.push((value.get(field).cloned().unwrap_or(Value::Null), record));
            }
            keyed.sort_by(|a, b| {
                let order = compare_fields(&a.0, &b.0);
                if descending { order.reverse() } else { order }
            });
            records = keyed.into_iter().map(|(_, record)| record).collect();
        }
        Ok(records)
    }

    /// Merge a JSON object into the stored record and bump `updated_at`.
    pub fn update(&self, id: &str, patch: &Value) -> Result<T, StoreError> {
        let mut records = self.write()?;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let mut value = serde_json::to_value(&*slot)
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        let (Some(record), Some(fields)) = (value.as_object_mut(), patch.as_object()) else {
            return Err(StoreError::Serialization(
                "record and patch must both be JSON objects".to_string(),
            ));
        };
        for (key, field) in fields {
            record.insert(key.clone(), field.clone());
        }
        record.insert("updated_at".to_string(), serde_json::json!(Utc::now()));

        let merged: T = serde_json::from_value(value)
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        *slot = merged.clone();
        Ok(merged)
    }

    /// Remove a record. Returns whether it existed.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut records = self.write()?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        Ok(records.len() < before)
    }

    /// Records whose serialized fields exactly match every criterion.
    pub fn filter(&self, criteria: &serde_json::Map<String, Value>) -> Result<Vec<T>, StoreError> {
        let records = self.read()?;
        let mut matches = Vec::new();
        for record in records.iter() {
            let value = serde_json::to_value(record)
                .map_err(|err| StoreError::Serialization(err.to_string()))?;
            let hit = criteria
                .iter()
                .all(|(key, expected)| value.get(key) == Some(expected));
            if hit {
                matches.push(record.clone());
            }
        }
        Ok(matches)
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<T>>, StoreError> {
        self.records
            .read()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<T>>, StoreError> {
        self.records
            .write()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))
    }
}

fn compare_fields(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}
