//! The user's clause table: an insertion-ordered set of records, unique by
//! `(identifier, description)`.

use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

use crate::clause::ClauseRecord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no table row at position {position} (table has {len} rows)")]
    IndexOutOfRange { position: usize, len: usize },
}

type OwnedKey = (String, String);

fn owned_key(record: &ClauseRecord) -> OwnedKey {
    (record.identifier.clone(), record.description.clone())
}

#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    items: IndexMap<OwnedKey, ClauseRecord>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record` unless an entry with the same identity key exists.
    ///
    /// Returns `true` when the record was added.
    pub fn add(&mut self, record: ClauseRecord) -> bool {
        let key = owned_key(&record);
        if self.items.contains_key(&key) {
            debug!(identifier = %record.identifier, "clause already in table");
            return false;
        }
        self.items.insert(key, record);
        true
    }

    /// Remove and return the row at `position`, shifting later rows up.
    pub fn remove_at(&mut self, position: usize) -> Result<ClauseRecord, SelectionError> {
        let len = self.items.len();
        self.items
            .shift_remove_index(position)
            .map(|(_, record)| record)
            .ok_or(SelectionError::IndexOutOfRange { position, len })
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, record: &ClauseRecord) -> bool {
        self.position_of(record).is_some()
    }

    /// Current row position of the entry sharing `record`'s identity key.
    pub fn position_of(&self, record: &ClauseRecord) -> Option<usize> {
        self.items.get_index_of(&owned_key(record))
    }

    pub fn get(&self, position: usize) -> Option<&ClauseRecord> {
        self.items.get_index(position).map(|(_, record)| record)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClauseRecord> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Export form: `identifier<TAB>description` per row, rows joined by
    /// newlines, no trailing newline.
    pub fn serialize(&self) -> String {
        self.iter()
            .map(|record| format!("{}\t{}", record.identifier, record.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
