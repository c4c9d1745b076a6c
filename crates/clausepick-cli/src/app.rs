//! Interactive front-end state and event handling.
//!
//! All mutable state lives here and is touched only by the UI task. The data
//! load and the debounce timer run as spawned tasks that report back as
//! [`AppEvent`]s on the UI channel.

use std::sync::Arc;
use std::time::Instant;

use clausepick_core::{
    ClauseDataset, Clipboard, Notification, Page, PageView, SearchQuery,
};
use clausepick_source::{ClauseSource, DataLoadError};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

use crate::config::AppSettings;
use crate::schedule::{Debouncer, Fired};
use crate::toast::Toasts;

#[derive(Debug)]
pub enum AppEvent {
    Command(Command),
    Loaded(Result<ClauseDataset, DataLoadError>),
    SearchDue(Fired<SearchQuery>),
    /// Periodic wake-up for expiring toasts and row highlights.
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert(char),
    Backspace,
    Up,
    Down,
    ToggleFocus,
    /// Add the focused result, or remove the focused table row.
    Activate,
    RemoveRow,
    Copy,
    Clear,
    DismissToast,
    Retry,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Results,
    Table,
}

pub struct App {
    settings: AppSettings,
    page: Page,
    input: String,
    focus: Focus,
    result_cursor: usize,
    table_cursor: usize,
    toasts: Toasts,
    debouncer: Debouncer<SearchQuery, AppEvent>,
    source: Arc<dyn ClauseSource>,
    clipboard: Box<dyn Clipboard>,
    tx: UnboundedSender<AppEvent>,
    quit: bool,
}

impl App {
    pub fn new(
        settings: AppSettings,
        source: Arc<dyn ClauseSource>,
        clipboard: Box<dyn Clipboard>,
        tx: UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            settings,
            page: Page::Loading,
            input: String::new(),
            focus: Focus::Results,
            result_cursor: 0,
            table_cursor: 0,
            toasts: Toasts::new(settings.toast),
            debouncer: Debouncer::new(settings.debounce, tx.clone(), AppEvent::SearchDue),
            source,
            clipboard,
            tx,
            quit: false,
        }
    }

    /// Enter `Loading` and fetch the clause list in the background.
    pub fn start_load(&mut self) {
        self.page = Page::Loading;
        self.debouncer.cancel();
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = source.load().await;
            let _ = tx.send(AppEvent::Loaded(result));
        });
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn view(&self, now: Instant) -> PageView {
        self.page.view(now)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn result_cursor(&self) -> usize {
        self.result_cursor
    }

    pub fn table_cursor(&self) -> usize {
        self.table_cursor
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Translate a key press. Printable keys edit the query on the ready
    /// page; on the error page `r` retries.
    pub fn command_for(&self, key: KeyEvent) -> Option<Command> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => Some(Command::Quit),
            KeyCode::Char('c') if ctrl => Some(Command::Quit),
            KeyCode::Char('y') if ctrl => Some(Command::Copy),
            KeyCode::Char('x') if ctrl => Some(Command::Clear),
            KeyCode::Char('w') if ctrl => Some(Command::DismissToast),
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char('r') if self.page.is_error() => Some(Command::Retry),
            KeyCode::Char(c) if self.page.is_ready() => Some(Command::Insert(c)),
            KeyCode::Backspace => Some(Command::Backspace),
            KeyCode::Up => Some(Command::Up),
            KeyCode::Down => Some(Command::Down),
            KeyCode::Tab | KeyCode::BackTab => Some(Command::ToggleFocus),
            KeyCode::Enter => Some(Command::Activate),
            KeyCode::Delete => Some(Command::RemoveRow),
            _ => None,
        }
    }

    pub fn handle(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Command(cmd) => self.apply(cmd, now),
            AppEvent::Loaded(result) => self.loaded(result),
            AppEvent::SearchDue(fired) => {
                if let Some(query) = self.debouncer.accept(fired)
                    && let Some(wb) = self.page.workbench_mut()
                    && wb.run_search(&query)
                {
                    self.result_cursor = 0;
                }
            }
            AppEvent::Tick => {
                self.toasts.expire(now);
                if let Some(wb) = self.page.workbench_mut() {
                    wb.expire_highlight(now);
                }
            }
        }
    }

    fn loaded(&mut self, result: Result<ClauseDataset, DataLoadError>) {
        self.page = Page::loaded(result, self.settings.search);
        if let Some(wb) = self.page.workbench_mut() {
            wb.set_highlight_duration(self.settings.highlight);
        }
        self.input.clear();
        self.focus = Focus::Results;
        self.result_cursor = 0;
        self.table_cursor = 0;
    }

    fn apply(&mut self, cmd: Command, now: Instant) {
        debug!(?cmd, "command");
        match cmd {
            Command::Quit => self.quit = true,
            Command::Retry => {
                if self.page.is_error() {
                    info!("retrying clause list load");
                    self.start_load();
                }
            }
            Command::DismissToast => {
                self.toasts.dismiss_oldest();
            }
            _ => self.apply_ready(cmd, now),
        }
    }

    /// Commands that only make sense once the clause list is loaded.
    fn apply_ready(&mut self, cmd: Command, now: Instant) {
        let Some(wb) = self.page.workbench_mut() else {
            return;
        };
        let notification: Option<Notification> = match cmd {
            Command::Insert(c) => {
                self.input.push(c);
                self.input_changed();
                None
            }
            Command::Backspace => {
                if self.input.pop().is_some() {
                    self.input_changed();
                }
                None
            }
            Command::Up => {
                let cursor = self.cursor_mut();
                *cursor = cursor.saturating_sub(1);
                None
            }
            Command::Down => {
                let len = self.focused_len();
                let cursor = self.cursor_mut();
                if *cursor + 1 < len {
                    *cursor += 1;
                }
                None
            }
            Command::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Results => Focus::Table,
                    Focus::Table => Focus::Results,
                };
                None
            }
            Command::Activate => match self.focus {
                Focus::Results => {
                    wb.add_result(self.result_cursor, now);
                    None
                }
                Focus::Table => self.remove_focused_row(),
            },
            Command::RemoveRow => match self.focus {
                Focus::Table => self.remove_focused_row(),
                Focus::Results => None,
            },
            Command::Copy => Some(wb.copy(self.clipboard.as_mut())),
            Command::Clear => {
                let note = wb.clear();
                self.table_cursor = 0;
                Some(note)
            }
            Command::Quit | Command::Retry | Command::DismissToast => None,
        };
        if let Some(note) = notification {
            self.toasts.push(note, now);
        }
    }

    fn input_changed(&mut self) {
        let Some(wb) = self.page.workbench_mut() else {
            return;
        };
        self.result_cursor = 0;
        match wb.input_changed(&self.input) {
            Some(query) => self.debouncer.schedule(query),
            None => self.debouncer.cancel(),
        }
    }

    fn remove_focused_row(&mut self) -> Option<Notification> {
        let wb = self.page.workbench_mut()?;
        let note = wb.remove(self.table_cursor);
        let rows = wb.selection().len();
        self.table_cursor = self.table_cursor.min(rows.saturating_sub(1));
        Some(note)
    }

    fn focused_len(&self) -> usize {
        let Some(wb) = self.page.workbench() else {
            return 0;
        };
        match self.focus {
            Focus::Results => wb.results().len(),
            Focus::Table => wb.selection().len(),
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.focus {
            Focus::Results => &mut self.result_cursor,
            Focus::Table => &mut self.table_cursor,
        }
    }
}
