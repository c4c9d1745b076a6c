//! Session state once the clause list is loaded: the dataset, the last
//! search, the clause table and the transient row highlight.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::clause::{ClauseDataset, ClauseRecord};
use crate::search::{SearchConfig, SearchQuery, search};
use crate::selection::SelectionStore;

pub const DEFAULT_HIGHLIGHT: Duration = Duration::from_millis(2000);

/// Where the result list is in its input → debounce → search cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// No query, or the query is below the minimum length.
    #[default]
    Idle,
    /// A search for this query is scheduled but has not run.
    Pending(SearchQuery),
    Done {
        query: SearchQuery,
        results: Vec<ClauseRecord>,
    },
}

#[derive(Debug, Clone)]
pub(crate) struct Highlight {
    pub(crate) identifier: String,
    pub(crate) description: String,
    pub(crate) until: Instant,
}

impl Highlight {
    pub(crate) fn covers(&self, record: &ClauseRecord, now: Instant) -> bool {
        now < self.until
            && self.identifier == record.identifier
            && self.description == record.description
    }
}

#[derive(Debug, Clone)]
pub struct Workbench {
    dataset: ClauseDataset,
    config: SearchConfig,
    pub(crate) search: SearchState,
    pub(crate) selection: SelectionStore,
    pub(crate) highlight: Option<Highlight>,
    pub(crate) highlight_for: Duration,
}

impl Workbench {
    pub fn new(dataset: ClauseDataset, config: SearchConfig) -> Self {
        Self {
            dataset,
            config,
            search: SearchState::Idle,
            selection: SelectionStore::new(),
            highlight: None,
            highlight_for: DEFAULT_HIGHLIGHT,
        }
    }

    pub fn with_highlight(mut self, duration: Duration) -> Self {
        self.set_highlight_duration(duration);
        self
    }

    /// How long a newly added table row stays highlighted.
    pub fn set_highlight_duration(&mut self, duration: Duration) {
        self.highlight_for = duration;
    }

    pub fn dataset(&self) -> &ClauseDataset {
        &self.dataset
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    /// Record a change to the search input.
    ///
    /// Below the minimum length the results are cleared at once and `None`
    /// is returned. Otherwise the result list enters the pending state and
    /// the normalised query is returned for the caller to schedule.
    pub fn input_changed(&mut self, raw: &str) -> Option<SearchQuery> {
        match SearchQuery::parse(raw, self.config.min_query_len) {
            Some(query) => {
                self.search = SearchState::Pending(query.clone());
                Some(query)
            }
            None => {
                self.search = SearchState::Idle;
                None
            }
        }
    }

    /// Run a scheduled search. Ignored unless `query` is the one pending,
    /// so a late firing can never replace fresher input.
    pub fn run_search(&mut self, query: &SearchQuery) -> bool {
        if !matches!(&self.search, SearchState::Pending(pending) if pending == query) {
            debug!(query = %query, "dropping stale search");
            return false;
        }
        let results = search(&self.dataset, query, &self.config);
        self.search = SearchState::Done {
            query: query.clone(),
            results,
        };
        true
    }

    /// Search immediately, bypassing the pending state.
    pub fn search_now(&mut self, raw: &str) -> &SearchState {
        if let Some(query) = self.input_changed(raw) {
            self.run_search(&query);
        }
        &self.search
    }

    /// Results currently on screen, empty unless a search has completed.
    pub fn results(&self) -> &[ClauseRecord] {
        match &self.search {
            SearchState::Done { results, .. } => results,
            _ => &[],
        }
    }

    pub fn is_highlighted(&self, record: &ClauseRecord, now: Instant) -> bool {
        self.highlight
            .as_ref()
            .is_some_and(|h| h.covers(record, now))
    }

    /// Drop the highlight once it has expired. Returns `true` if it changed.
    pub fn expire_highlight(&mut self, now: Instant) -> bool {
        match &self.highlight {
            Some(h) if now >= h.until => {
                self.highlight = None;
                true
            }
            _ => false,
        }
    }
}
