//! Id-indexed store for recorded usage events.

use std::collections::BTreeMap;

use crate::models::UsageRecord;

/// The set of usage events, keyed by use id.
#[derive(Debug, Default)]
pub struct UsageStore {
    records: BTreeMap<String, UsageRecord>,
    next_seq: u64,
}

impl UsageStore {
    /// Reserves the next use id in the `U-XXXX` sequence.
    pub fn next_id(&mut self) -> String {
        self.next_seq += 1;
        format!("U-{:04}", self.next_seq)
    }

    /// Inserts a record under its use id.
    pub fn insert(&mut self, record: UsageRecord) {
        self.records.insert(record.use_id.clone(), record);
    }

    /// Looks up a usage by id.
    pub fn get(&self, use_id: &str) -> Option<&UsageRecord> {
        self.records.get(use_id)
    }

    /// Looks up a usage by id for mutation.
    pub fn get_mut(&mut self, use_id: &str) -> Option<&mut UsageRecord> {
        self.records.get_mut(use_id)
    }

    /// Looks up a usage by id, requiring it to belong to the personnel.
    pub fn get_for_personnel(&self, use_id: &str, personnel: &str) -> Option<&UsageRecord> {
        self.records.get(use_id).filter(|u| u.personnel == personnel)
    }

    /// Removes a usage by id, returning the removed record.
    pub fn remove(&mut self, use_id: &str) -> Option<UsageRecord> {
        self.records.remove(use_id)
    }

    /// Iterates all usages in id order.
    pub fn iter(&self) -> impl Iterator<Item = &UsageRecord> {
        self.records.values()
    }

    /// Iterates the usages owned by one personnel, in id order.
    pub fn for_personnel<'a>(
        &'a self,
        personnel: &'a str,
    ) -> impl Iterator<Item = &'a UsageRecord> {
        self.records
            .values()
            .filter(move |u| u.personnel == personnel)
    }

    /// Removes every usage owned by the personnel, returning how many were
    /// removed.
    pub fn remove_for_personnel(&mut self, personnel: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|_, u| u.personnel != personnel);
        before - self.records.len()
    }

    /// Number of stored usages.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no usages.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
