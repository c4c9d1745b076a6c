//! Page-level lifecycle: `Loading -> Ready` or `Loading -> Error`.

use std::fmt;
use std::time::Instant;

use tracing::{info, warn};

use crate::clause::ClauseDataset;
use crate::search::SearchConfig;
use crate::view::{ResultView, TableView, result_view, table_view};
use crate::workbench::Workbench;

#[derive(Debug, Clone, Default)]
pub enum Page {
    #[default]
    Loading,
    Ready(Box<Workbench>),
    /// Load failed. Only a manual retry leaves this state.
    Error { message: String },
}

/// A fully derived page, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Loading,
    Error {
        message: String,
    },
    Ready {
        results: ResultView,
        table: TableView,
    },
}

impl Page {
    /// Resolve a finished load.
    pub fn loaded<E: fmt::Display>(
        result: Result<ClauseDataset, E>,
        config: SearchConfig,
    ) -> Self {
        match result {
            Ok(dataset) => {
                info!(records = dataset.len(), "clause list ready");
                Page::Ready(Box::new(Workbench::new(dataset, config)))
            }
            Err(e) => {
                warn!(error = %e, "clause list failed to load");
                Page::Error {
                    message: format!("Unable to load planning clauses: {e}"),
                }
            }
        }
    }

    pub fn workbench(&self) -> Option<&Workbench> {
        match self {
            Page::Ready(wb) => Some(wb.as_ref()),
            _ => None,
        }
    }

    pub fn workbench_mut(&mut self) -> Option<&mut Workbench> {
        match self {
            Page::Ready(wb) => Some(wb.as_mut()),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Page::Ready(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Page::Error { .. })
    }

    pub fn view(&self, now: Instant) -> PageView {
        match self {
            Page::Loading => PageView::Loading,
            Page::Error { message } => PageView::Error {
                message: message.clone(),
            },
            Page::Ready(wb) => PageView::Ready {
                results: result_view(wb),
                table: table_view(wb, now),
            },
        }
    }
}
