//! View models: what the front-end draws, derived from workbench state.
//!
//! Nothing here touches a terminal. The front-end maps these onto whatever
//! surface it owns.

use std::time::Instant;

use crate::workbench::{SearchState, Workbench};

pub const LOADING_MESSAGE: &str = "Loading planning clauses...";
pub const SEARCHING_MESSAGE: &str = "Searching...";
pub const NO_RESULTS_MESSAGE: &str = "No matching clauses found";
pub const EMPTY_TABLE_MESSAGE: &str =
    "No clauses added to the table yet. Search and click clauses above to add them.";
pub const TABLE_HEADERS: [&str; 2] = [
    "Planning scheme clause",
    "Matter for which a permit is required",
];
pub const SEARCH_PLACEHOLDER: &str = "Search for clauses by number (e.g. 43.02), name (e.g. 'Commercial Zone') or abbreviation (e.g. 'DDO')";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub identifier: String,
    pub category: String,
    pub abbreviation: String,
    pub description: String,
    /// Already in the table.
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    /// Nothing typed yet, or the query is too short.
    Blank,
    Searching,
    NoResults,
    Items(Vec<ResultItem>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Position passed to the row's remove control.
    pub position: usize,
    pub label: String,
    pub description: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    Empty,
    Rows(Vec<TableRow>),
}

impl TableView {
    pub fn len(&self) -> usize {
        match self {
            TableView::Empty => 0,
            TableView::Rows(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResultView {
    pub fn len(&self) -> usize {
        match self {
            ResultView::Items(items) => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result list annotated with table membership.
pub fn result_view(workbench: &Workbench) -> ResultView {
    match workbench.search_state() {
        SearchState::Idle => ResultView::Blank,
        SearchState::Pending(_) => ResultView::Searching,
        SearchState::Done { results, .. } if results.is_empty() => ResultView::NoResults,
        SearchState::Done { results, .. } => ResultView::Items(
            results
                .iter()
                .map(|record| ResultItem {
                    identifier: record.identifier.clone(),
                    category: record.category.clone(),
                    abbreviation: record.abbreviation.clone(),
                    description: record.description.clone(),
                    selected: workbench.selection().contains(record),
                })
                .collect(),
        ),
    }
}

pub fn table_view(workbench: &Workbench, now: Instant) -> TableView {
    let selection = workbench.selection();
    if selection.is_empty() {
        return TableView::Empty;
    }
    TableView::Rows(
        selection
            .iter()
            .enumerate()
            .map(|(position, record)| TableRow {
                position,
                label: record.table_label(),
                description: record.description.clone(),
                highlighted: workbench.is_highlighted(record, now),
            })
            .collect(),
    )
}
