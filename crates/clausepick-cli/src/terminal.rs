//! Raw-mode terminal session and the UI event loop.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{Event, EventStream};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use futures::StreamExt;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;

use crate::app::{App, AppEvent};
use crate::display::{self, Frame};

const TICK: Duration = Duration::from_millis(250);

/// Raw mode + alternate screen for the lifetime of the guard.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("enabling raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen).context("entering alternate screen")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn draw(out: &mut Stdout, app: &App) -> anyhow::Result<()> {
    let page = app.view(Instant::now());
    let frame = Frame {
        page: &page,
        input: app.input(),
        focus: app.focus(),
        result_cursor: app.result_cursor(),
        table_cursor: app.table_cursor(),
        toasts: app.toasts().iter().collect(),
    };
    let lines = display::layout(&frame);
    let size = terminal::size().context("reading terminal size")?;
    display::paint(out, &lines, size, display::input_column(&page, app.input()))?;
    Ok(())
}

/// Run the interactive session until the user quits.
pub async fn run(mut app: App, mut rx: UnboundedReceiver<AppEvent>) -> anyhow::Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut out = io::stdout();
    let mut keys = EventStream::new();
    let mut ticker = tokio::time::interval(TICK);

    app.start_load();
    loop {
        draw(&mut out, &app)?;
        tokio::select! {
            event = keys.next() => match event {
                Some(Ok(Event::Key(key))) => {
                    if let Some(cmd) = app.command_for(key) {
                        app.handle(AppEvent::Command(cmd), Instant::now());
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("reading terminal events"),
                None => break,
            },
            Some(event) = rx.recv() => app.handle(event, Instant::now()),
            _ = ticker.tick() => app.handle(AppEvent::Tick, Instant::now()),
        }
        if app.should_quit() {
            info!("quit requested");
            break;
        }
    }
    Ok(())
}
