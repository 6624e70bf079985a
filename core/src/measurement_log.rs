//! Ordered, persisted list of measurement records.
//!
//! The whole list is stored as one JSON array under a single blob key and
//! rewritten after every mutation. After [`MeasurementLog::load`] the list is
//! ordered newest first; [`MeasurementLog::add`] always inserts at the front.
//! Ids are unique: a repeated id replaces the earlier entry on `add`, and
//! only the newest copy survives `load`.

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::{CoreConfig, DEFAULT_STORAGE_KEY};
use crate::error::LogError;
use crate::models::MeasurementRecord;
use crate::storage::BlobStore;

/// Encode records as the persisted JSON array.
pub fn encode_records(records: &[MeasurementRecord]) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(records)
}

/// Decode the persisted JSON array.
pub fn decode_records(data: &[u8]) -> Result<Vec<MeasurementRecord>, serde_json::Error> {
    serde_json::from_slice(data)
}

/// Sort newest first. Stable, so equal dates keep their relative order.
pub fn sort_newest_first(records: &mut [MeasurementRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Keep only the first record for each id.
fn dedup_by_id(records: &mut Vec<MeasurementRecord>) {
    let mut seen = HashSet::new();
    records.retain(|r| seen.insert(r.id));
}

#[derive(Debug)]
pub struct MeasurementLog<S> {
    store: S,
    key: String,
    records: Vec<MeasurementRecord>,
}

impl<S: BlobStore> MeasurementLog<S> {
    /// Empty log over `store`, using the default key. Call [`Self::load`] to
    /// read existing records.
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: DEFAULT_STORAGE_KEY.to_string(),
            records: Vec::new(),
        }
    }

    pub fn with_config(store: S, config: &CoreConfig) -> Self {
        Self {
            store,
            key: config.storage_key.clone(),
            records: Vec::new(),
        }
    }

    /// New log with existing records already loaded.
    pub fn open(store: S) -> Self {
        let mut log = Self::new(store);
        log.load();
        log
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Records in their current order.
    pub fn records(&self) -> &[MeasurementRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&MeasurementRecord> {
        self.records.iter().find(|r| r.id == *id)
    }

    /// Replace the in-memory list with the persisted one, newest first.
    ///
    /// A missing blob, a read failure or undecodable data all leave the log
    /// empty; none of them is reported as an error.
    pub fn load(&mut self) {
        self.records = match self.store.get_blob(&self.key) {
            Ok(Some(data)) => match decode_records(&data) {
                Ok(mut records) => {
                    sort_newest_first(&mut records);
                    dedup_by_id(&mut records);
                    records
                }
                Err(e) => {
                    warn!(key = %self.key, error = %e, "discarding undecodable measurement log");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read measurement log");
                Vec::new()
            }
        };
        debug!(count = self.records.len(), "loaded measurement log");
    }

    /// Insert `record` as the most recent entry, whatever its date. An
    /// existing entry with the same id is replaced, so ids stay unique.
    pub fn add(&mut self, record: MeasurementRecord) -> Result<(), LogError> {
        let before = self.records.len();
        self.records.retain(|r| r.id != record.id);
        debug!(
            id = %record.id,
            replaced = before != self.records.len(),
            "adding measurement"
        );
        self.records.insert(0, record);
        self.save()
    }

    /// Replace the record with the same id in place. Returns `Ok(false)`
    /// without persisting when no record matches.
    pub fn update(&mut self, record: MeasurementRecord) -> Result<bool, LogError> {
        let Some(slot) = self.records.iter_mut().find(|r| r.id == record.id) else {
            debug!(id = %record.id, "update of unknown measurement ignored");
            return Ok(false);
        };
        *slot = record;
        self.save()?;
        Ok(true)
    }

    /// Remove the record with `id`, if any.
    pub fn delete(&mut self, id: &Uuid) -> Result<(), LogError> {
        let before = self.records.len();
        self.records.retain(|r| r.id != *id);
        debug!(%id, removed = before - self.records.len(), "deleting measurement");
        self.save()
    }

    /// Remove the records at `indices` (positions in the current order).
    /// Out-of-range indices are ignored.
    pub fn delete_at(&mut self, indices: &[usize]) -> Result<(), LogError> {
        let doomed: BTreeSet<usize> = indices.iter().copied().collect();
        let mut index = 0;
        self.records.retain(|_| {
            let keep = !doomed.contains(&index);
            index += 1;
            keep
        });
        debug!(count = self.records.len(), "deleted measurements by index");
        self.save()
    }

    /// Persist the full list. The in-memory list is not rolled back if this
    /// fails.
    fn save(&mut self) -> Result<(), LogError> {
        let data = encode_records(&self.records)?;
        self.store.set_blob(&self.key, data)?;
        Ok(())
    }
}
