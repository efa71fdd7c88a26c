//! Id-indexed store for granted off-day credits.

use std::collections::BTreeMap;

use crate::models::GrantRecord;

/// The set of granted off-day credits, keyed by grant id.
///
/// `BTreeMap` iteration order is id order, which gives every id-sorted
/// listing for free.
#[derive(Debug, Default)]
pub struct GrantStore {
    records: BTreeMap<String, GrantRecord>,
    next_seq: u64,
}

impl GrantStore {
    /// Reserves the next grant id in the `G-XXXX` sequence.
    ///
    /// Zero-pads to four digits but never truncates past 9999.
    pub fn next_id(&mut self) -> String {
        self.next_seq += 1;
        format!("G-{:04}", self.next_seq)
    }

    /// Inserts a record under its id.
    pub fn insert(&mut self, record: GrantRecord) {
        self.records.insert(record.id.clone(), record);
    }

    /// Looks up a grant by id.
    pub fn get(&self, id: &str) -> Option<&GrantRecord> {
        self.records.get(id)
    }

    /// Looks up a grant by id for mutation.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut GrantRecord> {
        self.records.get_mut(id)
    }

    /// Looks up a grant by id, requiring it to belong to the personnel.
    pub fn get_for_personnel(&self, id: &str, personnel: &str) -> Option<&GrantRecord> {
        self.records.get(id).filter(|g| g.personnel == personnel)
    }

    /// Removes a grant by id, returning the removed record.
    pub fn remove(&mut self, id: &str) -> Option<GrantRecord> {
        self.records.remove(id)
    }

    /// Iterates all grants in id order.
    pub fn iter(&self) -> impl Iterator<Item = &GrantRecord> {
        self.records.values()
    }

    /// Iterates the grants owned by one personnel, in id order.
    pub fn for_personnel<'a>(
        &'a self,
        personnel: &'a str,
    ) -> impl Iterator<Item = &'a GrantRecord> {
        self.records
            .values()
            .filter(move |g| g.personnel == personnel)
    }

    /// Removes every grant owned by the personnel, returning how many were
    /// removed.
    pub fn remove_for_personnel(&mut self, personnel: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|_, g| g.personnel != personnel);
        before - self.records.len()
    }

    /// Number of stored grants.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no grants.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
