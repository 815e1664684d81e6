// ABOUTME: In-memory store of every deployment record for the orchestrator's lifetime.
// ABOUTME: Readers get cloned snapshots; writes happen under the lock, one record at a time.

use parking_lot::RwLock;
use std::collections::HashMap;

use super::SubmitError;
use super::record::DeploymentRecord;
use crate::types::DeploymentId;

/// Concurrent map of deployment id to record.
///
/// Records are never removed, so memory grows with the number of
/// submissions over the life of the process.
#[derive(Debug, Default)]
pub struct DeploymentRegistry {
    records: RwLock<HashMap<DeploymentId, DeploymentRecord>>,
}

impl DeploymentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&self, record: DeploymentRecord) -> Result<(), SubmitError> {
        let mut records = self.records.write();
        if records.contains_key(&record.id) {
            return Err(SubmitError::DuplicateId(record.id));
        }
        records.insert(record.id.clone(), record);
        Ok(())
    }

    /// Snapshot of a record, or `None` if the id was never issued.
    pub fn get(&self, id: &DeploymentId) -> Option<DeploymentRecord> {
        self.records.read().get(id).cloned()
    }

    /// Apply `update` to a stored record and return the resulting snapshot.
    pub(crate) fn update<F>(&self, id: &DeploymentId, update: F) -> Option<DeploymentRecord>
    where
        F: FnOnce(&mut DeploymentRecord),
    {
        let mut records = self.records.write();
        let record = records.get_mut(id)?;
        update(record);
        Some(record.clone())
    }

    /// All records, oldest first.
    pub fn list(&self) -> Vec<DeploymentRecord> {
        let mut records: Vec<_> = self.records.read().values().cloned().collect();
        records.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        records
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}
