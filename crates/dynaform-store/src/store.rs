//! In-memory record store

use std::collections::BTreeMap;

use tracing::debug;

use crate::record::{Record, RecordId};
use crate::{Error, Result};

/// Ordered store of submitted records.
///
/// Iteration follows append order because ids are assigned monotonically.
/// The store does not validate payloads; that happened at submit time.
#[derive(Debug)]
pub struct RecordStore {
    records: BTreeMap<RecordId, Record>,
    next_id: u64,
}

impl RecordStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Append a record, returning its assigned id
    pub fn append(&mut self, record: Record) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        debug!("Stored record {} ({})", id, record.form_type);
        self.records.insert(id, record);
        id
    }

    /// Replace the record stored under an id
    pub fn replace(&mut self, id: RecordId, record: Record) -> Result<()> {
        match self.records.get_mut(&id) {
            Some(slot) => {
                debug!("Replaced record {} ({})", id, record.form_type);
                *slot = record;
                Ok(())
            }
            None => Err(Error::UnknownRecord(id)),
        }
    }

    /// Remove a record, returning it
    pub fn remove(&mut self, id: RecordId) -> Result<Record> {
        let record = self.records.remove(&id).ok_or(Error::UnknownRecord(id))?;
        debug!("Removed record {}", id);
        Ok(record)
    }

    /// Retrieve a record by id
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.get(&id)
    }

    /// Iterate records in append order
    pub fn records(&self) -> impl Iterator<Item = (RecordId, &Record)> {
        self.records.iter().map(|(id, record)| (*id, record))
    }

    /// Ids currently in the store, in append order
    #[must_use]
    pub fn ids(&self) -> Vec<RecordId> {
        self.records.keys().copied().collect()
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
