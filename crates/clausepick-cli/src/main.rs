mod app;
mod clipboard;
mod config;
mod display;
mod schedule;
mod terminal;
mod toast;

use std::fs::File;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use clausepick_core::{Workbench, view::result_view};
use clausepick_source::{ClauseSource, HttpClauseSource};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::clipboard::SystemClipboard;
use crate::config::{Cli, Command, Settings};

/// Logs go to `log_file` when given. Without one, interactive sessions log
/// nothing (stderr shares the screen) and one-shot commands log to stderr.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> anyhow::Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if interactive => {}
        None => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

async fn search_once(
    source: &dyn ClauseSource,
    settings: &Settings,
    query: &str,
) -> anyhow::Result<()> {
    let dataset = source
        .load()
        .await
        .context("unable to load planning clauses")?;
    let mut workbench = Workbench::new(dataset, settings.search_config());
    workbench.search_now(query);
    let lines = display::result_lines(&result_view(&workbench), None);
    if lines.is_empty() {
        eprintln!(
            "query must be at least {} character(s) long",
            settings.min_query_len
        );
    }
    for line in lines {
        println!("{}", line.text);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Command::Browse);
    let interactive = matches!(command, Command::Browse);
    init_logging(cli.settings.log_file.as_deref(), interactive)?;
    tracing::info!("clausepick v{}", env!("CARGO_PKG_VERSION"));

    let source = Arc::new(
        HttpClauseSource::new(cli.settings.endpoint.as_str())
            .with_data_key(cli.settings.data_key.as_str()),
    );

    match command {
        Command::Browse => {
            let (tx, rx) = mpsc::unbounded_channel();
            let app = App::new(
                cli.settings.app_settings(),
                source,
                Box::new(SystemClipboard::new()),
                tx,
            );
            terminal::run(app, rx).await
        }
        Command::Search { query } => search_once(source.as_ref(), &cli.settings, &query).await,
    }
}
