//! Planning-scheme clause records as delivered by the remote clause list.
//!
//! On the wire each record is a bare 4-element array:
//! `[identifier, category, abbreviation, description]`. Cells are usually
//! strings, but spreadsheet-backed endpoints emit clause numbers like `43.02`
//! as JSON numbers, so numeric cells are accepted and kept as text.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A single planning-scheme clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawRecord", into = "WireRecord")]
pub struct ClauseRecord {
    /// Clause number, e.g. `43.02`.
    pub identifier: String,
    /// Zone or overlay name, e.g. `Commercial 1 Zone`.
    pub category: String,
    /// Zone or overlay abbreviation, e.g. `C1Z`.
    pub abbreviation: String,
    /// Matter for which a permit is required.
    pub description: String,
}

/// Borrowed `(identifier, description)` pair that decides whether two
/// records are the same entry in a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClauseKey<'a> {
    pub identifier: &'a str,
    pub description: &'a str,
}

impl ClauseRecord {
    pub fn new(
        identifier: impl Into<String>,
        category: impl Into<String>,
        abbreviation: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            category: category.into(),
            abbreviation: abbreviation.into(),
            description: description.into(),
        }
    }

    pub fn key(&self) -> ClauseKey<'_> {
        ClauseKey {
            identifier: &self.identifier,
            description: &self.description,
        }
    }

    /// Label shown in the first column of the clause table.
    pub fn table_label(&self) -> String {
        format!("Clause {}", self.identifier)
    }
}

// ── Wire form ──

#[derive(Deserialize)]
#[serde(untagged)]
enum Cell {
    Text(String),
    Number(serde_json::Number),
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Text(s) => s,
            Cell::Number(n) => n.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct RawRecord(Cell, Cell, Cell, Cell);

impl From<RawRecord> for ClauseRecord {
    fn from(RawRecord(identifier, category, abbreviation, description): RawRecord) -> Self {
        Self::new(identifier, category, abbreviation, description)
    }
}

#[derive(Serialize)]
struct WireRecord(String, String, String, String);

impl From<ClauseRecord> for WireRecord {
    fn from(r: ClauseRecord) -> Self {
        WireRecord(r.identifier, r.category, r.abbreviation, r.description)
    }
}

/// The full clause list, loaded once and never mutated afterwards.
///
/// Cloning is cheap: the records sit behind an `Arc` shared with the search
/// engine and the view layer.
#[derive(Debug, Clone, Default)]
pub struct ClauseDataset {
    records: Arc<[ClauseRecord]>,
}

impl ClauseDataset {
    pub fn new(records: Vec<ClauseRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[ClauseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<ClauseRecord>> for ClauseDataset {
    fn from(records: Vec<ClauseRecord>) -> Self {
        Self::new(records)
    }
}
