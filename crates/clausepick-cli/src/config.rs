//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use clausepick_core::{MatchFields, SearchConfig};
use clausepick_source::{DEFAULT_DATA_KEY, DEFAULT_ENDPOINT};

#[derive(Debug, Parser)]
#[command(
    name = "clausepick",
    version,
    about = "Search planning-scheme clauses and build a copyable clause table"
)]
pub struct Cli {
    #[command(flatten)]
    pub settings: Settings,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Interactive search and table builder (default).
    Browse,
    /// Load the clause list, run one search and print the matches.
    Search {
        /// Clause number, zone name or abbreviation.
        query: String,
    },
}

#[derive(Debug, Clone, Args)]
pub struct Settings {
    /// URL serving the clause list.
    #[arg(long, global = true, env = "CLAUSEPICK_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Response field holding the record array.
    #[arg(long, global = true, env = "CLAUSEPICK_DATA_KEY", default_value = DEFAULT_DATA_KEY)]
    pub data_key: String,

    /// Shortest query that triggers a search.
    #[arg(
        long,
        global = true,
        env = "CLAUSEPICK_MIN_QUERY_LEN",
        default_value_t = 1,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub min_query_len: u16,

    /// Maximum number of matches shown.
    #[arg(
        long,
        global = true,
        env = "CLAUSEPICK_LIMIT",
        default_value_t = 5,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub limit: u16,

    /// Fields matched against the query: `standard` or `with-description`.
    #[arg(long, global = true, env = "CLAUSEPICK_MATCH_FIELDS", default_value_t = MatchFields::Standard)]
    pub match_fields: MatchFields,

    /// Quiet period after the last keystroke before searching.
    #[arg(long, global = true, default_value_t = 300)]
    pub debounce_ms: u64,

    /// How long a newly added table row stays highlighted.
    #[arg(long, global = true, default_value_t = 2000)]
    pub highlight_ms: u64,

    /// How long a notification stays on screen.
    #[arg(long, global = true, default_value_t = 3000)]
    pub toast_ms: u64,

    /// Write logs here. Interactive mode discards logs without it.
    #[arg(long, global = true, env = "CLAUSEPICK_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// Resolved timings and search options for the interactive front-end.
#[derive(Debug, Clone, Copy)]
pub struct AppSettings {
    pub search: SearchConfig,
    pub debounce: Duration,
    pub highlight: Duration,
    pub toast: Duration,
}

impl Settings {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            min_query_len: usize::from(self.min_query_len),
            limit: usize::from(self.limit),
            fields: self.match_fields,
        }
    }

    pub fn app_settings(&self) -> AppSettings {
        AppSettings {
            search: self.search_config(),
            debounce: Duration::from_millis(self.debounce_ms),
            highlight: Duration::from_millis(self.highlight_ms),
            toast: Duration::from_millis(self.toast_ms),
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            debounce: Duration::from_millis(300),
            highlight: Duration::from_millis(2000),
            toast: Duration::from_millis(3000),
        }
    }
}
