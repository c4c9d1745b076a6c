//! User actions on the clause table and the notifications they produce.

use std::fmt;
use std::time::Instant;

use thiserror::Error;
use tracing::{info, warn};

use crate::clause::ClauseRecord;
use crate::workbench::{Highlight, Workbench};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Success => "success",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        })
    }
}

/// A transient message for the notification strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(level: Level, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Write-only access to the system clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl Workbench {
    /// Add `record` to the table and highlight its row.
    ///
    /// Adding a record already in the table changes nothing and returns
    /// `false`.
    pub fn add(&mut self, record: ClauseRecord, now: Instant) -> bool {
        let highlight = Highlight {
            identifier: record.identifier.clone(),
            description: record.description.clone(),
            until: now + self.highlight_for,
        };
        let identifier = record.identifier.clone();
        if !self.selection.add(record) {
            return false;
        }
        info!(identifier = %identifier, rows = self.selection.len(), "clause added to table");
        self.highlight = Some(highlight);
        true
    }

    /// Add the result at `index` in the current result list.
    pub fn add_result(&mut self, index: usize, now: Instant) -> bool {
        match self.results().get(index).cloned() {
            Some(record) => self.add(record, now),
            None => false,
        }
    }

    pub fn remove(&mut self, position: usize) -> Notification {
        match self.selection.remove_at(position) {
            Ok(record) => {
                info!(identifier = %record.identifier, rows = self.selection.len(), "clause removed from table");
                Notification::new(
                    Level::Warning,
                    "Removed",
                    format!("Clause {} removed from table", record.identifier),
                )
            }
            Err(e) => {
                warn!(error = %e, "remove failed");
                Notification::new(Level::Error, "Error", e.to_string())
            }
        }
    }

    pub fn clear(&mut self) -> Notification {
        let rows = self.selection.len();
        self.selection.clear();
        self.highlight = None;
        info!(rows, "table cleared");
        Notification::new(Level::Info, "Cleared", "Table has been cleared")
    }

    /// Copy the table as tab-separated text.
    pub fn copy(&self, clipboard: &mut dyn Clipboard) -> Notification {
        let text = self.selection.serialize();
        match clipboard.write_text(&text) {
            Ok(()) => {
                info!(rows = self.selection.len(), bytes = text.len(), "table copied");
                Notification::new(Level::Success, "Success", "Table copied to clipboard!")
            }
            Err(e) => {
                warn!(error = %e, "copy to clipboard failed");
                Notification::new(Level::Error, "Error", "Failed to copy table to clipboard")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::clause::ClauseDataset;
    use crate::search::SearchConfig;

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Option<String>,
        fail: bool,
    }

    impl Clipboard for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Write("denied".into()));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    fn a() -> ClauseRecord {
        ClauseRecord::new("43.02", "Commercial 1 Zone", "C1Z", "desc1")
    }

    fn b() -> ClauseRecord {
        ClauseRecord::new("44.01", "Residential Zone", "R1Z", "desc2")
    }

    fn bench() -> Workbench {
        Workbench::new(ClauseDataset::new(vec![a(), b()]), SearchConfig::default())
    }

    #[test]
    fn add_twice_keeps_one_row() {
        let mut wb = bench();
        let now = Instant::now();
        assert!(wb.add(a(), now));
        assert!(!wb.add(a(), now));
        assert_eq!(wb.selection().len(), 1);
    }

    #[test]
    fn add_result_uses_current_results() {
        let mut wb = bench();
        wb.search_now("res");
        assert!(wb.add_result(0, Instant::now()));
        assert_eq!(wb.selection().get(0).unwrap().identifier, "44.01");
        assert!(!wb.add_result(4, Instant::now()));
    }

    #[test]
    fn add_highlights_for_bounded_time() {
        let mut wb = bench().with_highlight(Duration::from_secs(2));
        let now = Instant::now();
        wb.add(a(), now);
        assert!(wb.is_highlighted(&a(), now + Duration::from_millis(1500)));
        assert!(!wb.is_highlighted(&b(), now));
        assert!(!wb.is_highlighted(&a(), now + Duration::from_secs(2)));
        assert!(wb.expire_highlight(now + Duration::from_secs(3)));
        assert!(!wb.expire_highlight(now + Duration::from_secs(3)));
    }

    #[test]
    fn duplicate_add_keeps_existing_highlight() {
        let mut wb = bench();
        let now = Instant::now();
        wb.add(a(), now);
        wb.add(b(), now);
        wb.add(a(), now);
        assert!(wb.is_highlighted(&b(), now));
        assert!(!wb.is_highlighted(&a(), now));
    }

    #[test]
    fn remove_names_identifier() {
        let mut wb = bench();
        let now = Instant::now();
        wb.add(a(), now);
        wb.add(b(), now);
        let note = wb.remove(0);
        assert_eq!(note.level, Level::Warning);
        assert_eq!(note.body, "Clause 43.02 removed from table");
        assert_eq!(wb.selection().get(0).unwrap().identifier, "44.01");
    }

    #[test]
    fn remove_out_of_range_reports_error() {
        let mut wb = bench();
        wb.add(a(), Instant::now());
        let note = wb.remove(5);
        assert_eq!(note.level, Level::Error);
        assert_eq!(wb.selection().len(), 1);
    }

    #[test]
    fn clear_empties_table() {
        let mut wb = bench();
        wb.add(a(), Instant::now());
        let note = wb.clear();
        assert_eq!(note.level, Level::Info);
        assert_eq!(note.body, "Table has been cleared");
        assert!(wb.selection().is_empty());
    }

    #[test]
    fn copy_writes_tab_separated_table() {
        let mut wb = bench();
        let now = Instant::now();
        wb.add(a(), now);
        wb.add(b(), now);
        let mut clipboard = MemoryClipboard::default();
        let note = wb.copy(&mut clipboard);
        assert_eq!(note.level, Level::Success);
        assert_eq!(
            clipboard.contents.as_deref(),
            Some("43.02\tdesc1\n44.01\tdesc2")
        );
    }

    #[test]
    fn copy_failure_is_reported_not_raised() {
        let mut wb = bench();
        wb.add(a(), Instant::now());
        let mut clipboard = MemoryClipboard {
            fail: true,
            ..MemoryClipboard::default()
        };
        let note = wb.copy(&mut clipboard);
        assert_eq!(note.level, Level::Error);
        assert_eq!(note.body, "Failed to copy table to clipboard");
        assert_eq!(wb.selection().len(), 1);
    }
}
