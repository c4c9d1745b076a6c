//! Terminal layout for the clause search page.
//!
//! [`layout`] turns a [`PageView`] plus front-end state into styled lines;
//! [`paint`] writes them to the terminal. Layout is pure so it can be tested
//! without a terminal.

use std::io::{self, Write};

use clausepick_core::view::{
    EMPTY_TABLE_MESSAGE, LOADING_MESSAGE, NO_RESULTS_MESSAGE, SEARCH_PLACEHOLDER,
    SEARCHING_MESSAGE, TABLE_HEADERS,
};
use clausepick_core::{Level, Notification, PageView, ResultView, TableView};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use crate::app::Focus;

const LABEL_WIDTH: usize = 26;
const SEARCH_PROMPT: &str = "Search: ";
const TICK: &str = "✓";
const KEY_HINTS: &str =
    "Enter add/remove · Tab results/table · Del remove · Ctrl-Y copy · Ctrl-X clear · Esc quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Dim,
    Cursor,
    Highlight,
    Toast(Level),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub tone: Tone,
}

impl Line {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    fn blank() -> Self {
        Self::new("", Tone::Plain)
    }
}

/// Everything the screen shows in one frame.
pub struct Frame<'a> {
    pub page: &'a PageView,
    pub input: &'a str,
    pub focus: Focus,
    pub result_cursor: usize,
    pub table_cursor: usize,
    pub toasts: Vec<&'a Notification>,
}

pub fn layout(frame: &Frame<'_>) -> Vec<Line> {
    let mut lines = Vec::new();
    match frame.page {
        PageView::Loading => {
            lines.push(Line::new(format!("  {LOADING_MESSAGE}"), Tone::Dim));
        }
        PageView::Error { message } => {
            lines.push(Line::new(format!("  {message}"), Tone::Toast(Level::Error)));
            lines.push(Line::blank());
            lines.push(Line::new("  Press r to retry, Esc to quit", Tone::Dim));
        }
        PageView::Ready { results, table } => {
            if frame.input.is_empty() {
                lines.push(Line::new(
                    format!("{SEARCH_PROMPT}{SEARCH_PLACEHOLDER}"),
                    Tone::Dim,
                ));
            } else {
                lines.push(Line::new(
                    format!("{SEARCH_PROMPT}{}", frame.input),
                    Tone::Plain,
                ));
            }
            let result_cursor = (frame.focus == Focus::Results).then_some(frame.result_cursor);
            lines.extend(result_lines(results, result_cursor));
            lines.push(Line::blank());
            let table_cursor = (frame.focus == Focus::Table).then_some(frame.table_cursor);
            lines.extend(table_lines(table, table_cursor));
            lines.push(Line::blank());
            lines.push(Line::new(KEY_HINTS, Tone::Dim));
        }
    }

    if !frame.toasts.is_empty() {
        lines.push(Line::blank());
        for note in &frame.toasts {
            lines.push(toast_line(note));
        }
    }
    lines
}

/// Lines for the result list. `cursor` marks the focused item, if any.
pub fn result_lines(view: &ResultView, cursor: Option<usize>) -> Vec<Line> {
    match view {
        ResultView::Blank => Vec::new(),
        ResultView::Searching => vec![Line::new(format!("  {SEARCHING_MESSAGE}"), Tone::Dim)],
        ResultView::NoResults => vec![Line::new(format!("  {NO_RESULTS_MESSAGE}"), Tone::Dim)],
        ResultView::Items(items) => {
            let mut lines = Vec::with_capacity(items.len() * 2);
            for (i, item) in items.iter().enumerate() {
                let focused = cursor == Some(i);
                let marker = if focused { '>' } else { ' ' };
                let tick = if item.selected { TICK } else { " " };
                lines.push(Line::new(
                    format!(
                        "{marker} {tick} {:<8} {} ({})",
                        item.identifier, item.category, item.abbreviation
                    ),
                    if focused { Tone::Cursor } else { Tone::Plain },
                ));
                lines.push(Line::new(format!("      {}", item.description), Tone::Dim));
            }
            lines
        }
    }
}

/// Lines for the clause table. `cursor` marks the focused row, if any.
pub fn table_lines(view: &TableView, cursor: Option<usize>) -> Vec<Line> {
    match view {
        TableView::Empty => vec![Line::new(format!("  {EMPTY_TABLE_MESSAGE}"), Tone::Dim)],
        TableView::Rows(rows) => {
            let mut lines = Vec::with_capacity(rows.len() + 1);
            lines.push(Line::new(
                format!(
                    "  {:<LABEL_WIDTH$} {}",
                    TABLE_HEADERS[0], TABLE_HEADERS[1]
                ),
                Tone::Heading,
            ));
            for row in rows {
                let focused = cursor == Some(row.position);
                let marker = if focused { '>' } else { ' ' };
                let tone = if focused {
                    Tone::Cursor
                } else if row.highlighted {
                    Tone::Highlight
                } else {
                    Tone::Plain
                };
                lines.push(Line::new(
                    format!(
                        "{marker} {:<LABEL_WIDTH$} {}  [Remove]",
                        row.label, row.description
                    ),
                    tone,
                ));
            }
            lines
        }
    }
}

fn toast_line(note: &Notification) -> Line {
    Line::new(
        format!("[{}] {}: {}", note.level, note.title, note.body),
        Tone::Toast(note.level),
    )
}

/// Clip `text` to `width` columns, counting chars.
fn clip(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

// ── Painting ──

fn tone_style(out: &mut impl Write, tone: Tone) -> io::Result<()> {
    match tone {
        Tone::Plain => Ok(()),
        Tone::Heading => queue!(out, SetAttribute(Attribute::Bold)),
        Tone::Dim => queue!(out, SetForegroundColor(Color::DarkGrey)),
        Tone::Cursor => queue!(out, SetAttribute(Attribute::Reverse)),
        Tone::Highlight => queue!(out, SetForegroundColor(Color::Yellow)),
        Tone::Toast(Level::Success) => queue!(out, SetForegroundColor(Color::Green)),
        Tone::Toast(Level::Info) => queue!(out, SetForegroundColor(Color::Cyan)),
        Tone::Toast(Level::Warning) => queue!(out, SetForegroundColor(Color::Yellow)),
        Tone::Toast(Level::Error) => queue!(out, SetForegroundColor(Color::Red)),
    }
}

/// Redraw the whole screen. When `input_col` is set the terminal cursor is
/// parked at that column of the search line.
pub fn paint(
    out: &mut impl Write,
    lines: &[Line],
    size: (u16, u16),
    input_col: Option<u16>,
) -> io::Result<()> {
    let (width, height) = size;
    queue!(out, Hide, MoveTo(0, 0), Clear(ClearType::All))?;
    for (row, line) in lines.iter().take(usize::from(height)).enumerate() {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        queue!(out, MoveTo(0, row))?;
        tone_style(out, line.tone)?;
        queue!(
            out,
            Print(clip(&line.text, usize::from(width))),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
    }
    if let Some(col) = input_col {
        queue!(out, MoveTo(col.min(width.saturating_sub(1)), 0), Show)?;
    }
    out.flush()
}

/// Cursor column for the search input on the ready page.
pub fn input_column(page: &PageView, input: &str) -> Option<u16> {
    match page {
        PageView::Ready { .. } => {
            let col = SEARCH_PROMPT.chars().count() + input.chars().count();
            Some(u16::try_from(col).unwrap_or(u16::MAX))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clausepick_core::{ResultItem, TableRow};

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    fn item(identifier: &str, selected: bool) -> ResultItem {
        ResultItem {
            identifier: identifier.into(),
            category: "Commercial 1 Zone".into(),
            abbreviation: "C1Z".into(),
            description: "Permit required for...".into(),
            selected,
        }
    }

    fn frame<'a>(page: &'a PageView, input: &'a str) -> Frame<'a> {
        Frame {
            page,
            input,
            focus: Focus::Results,
            result_cursor: 0,
            table_cursor: 0,
            toasts: Vec::new(),
        }
    }

    #[test]
    fn loading_page() {
        let lines = layout(&frame(&PageView::Loading, ""));
        assert_eq!(texts(&lines), vec!["  Loading planning clauses..."]);
    }

    #[test]
    fn error_page_has_no_search_input() {
        let page = PageView::Error {
            message: "Unable to load planning clauses: server returned HTTP 500".into(),
        };
        let lines = layout(&frame(&page, ""));
        assert!(lines[0].text.contains("500"));
        assert!(lines.iter().all(|l| !l.text.starts_with(SEARCH_PROMPT)));
        assert!(lines.iter().any(|l| l.text.contains("Press r to retry")));
    }

    #[test]
    fn ready_page_shows_placeholder_when_input_empty() {
        let page = PageView::Ready {
            results: ResultView::Blank,
            table: TableView::Empty,
        };
        let lines = layout(&frame(&page, ""));
        assert!(lines[0].text.starts_with(SEARCH_PROMPT));
        assert!(lines[0].text.contains("43.02"));
        assert_eq!(lines[0].tone, Tone::Dim);
        assert!(lines.iter().any(|l| l.text.contains(EMPTY_TABLE_MESSAGE)));
    }

    #[test]
    fn result_items_show_tick_and_cursor() {
        let view = ResultView::Items(vec![item("43.02", false), item("43.03", true)]);
        let lines = result_lines(&view, Some(0));
        assert_eq!(lines.len(), 4);
        assert!(lines[0].text.starts_with("> "));
        assert_eq!(lines[0].tone, Tone::Cursor);
        assert!(!lines[0].text.contains(TICK));
        assert!(lines[2].text.contains(TICK));
        assert!(lines[2].text.contains("43.03"));
        assert!(lines[2].text.contains("Commercial 1 Zone (C1Z)"));
        assert!(lines[3].text.contains("Permit required for..."));
    }

    #[test]
    fn searching_and_no_results_states() {
        assert_eq!(
            texts(&result_lines(&ResultView::Searching, None)),
            vec!["  Searching..."]
        );
        assert_eq!(
            texts(&result_lines(&ResultView::NoResults, None)),
            vec!["  No matching clauses found"]
        );
        assert!(result_lines(&ResultView::Blank, None).is_empty());
    }

    #[test]
    fn table_rows_with_header_and_highlight() {
        let view = TableView::Rows(vec![
            TableRow {
                position: 0,
                label: "Clause 43.02".into(),
                description: "desc1".into(),
                highlighted: false,
            },
            TableRow {
                position: 1,
                label: "Clause 44.01".into(),
                description: "desc2".into(),
                highlighted: true,
            },
        ]);
        let lines = table_lines(&view, None);
        assert_eq!(lines[0].tone, Tone::Heading);
        assert!(lines[0].text.contains("Planning scheme clause"));
        assert!(lines[1].text.contains("Clause 43.02"));
        assert!(lines[1].text.contains("[Remove]"));
        assert_eq!(lines[2].tone, Tone::Highlight);

        let focused = table_lines(&view, Some(1));
        assert_eq!(focused[2].tone, Tone::Cursor);
    }

    #[test]
    fn toasts_follow_page() {
        let note = Notification::new(Level::Warning, "Removed", "Clause 43.02 removed from table");
        let mut f = frame(&PageView::Loading, "");
        f.toasts = vec![&note];
        let lines = layout(&f);
        let last = lines.last().unwrap();
        assert_eq!(last.text, "[warning] Removed: Clause 43.02 removed from table");
        assert_eq!(last.tone, Tone::Toast(Level::Warning));
    }

    #[test]
    fn clip_counts_chars() {
        assert_eq!(clip("✓ 43.02", 3), "✓ 4");
        assert_eq!(clip("short", 80), "short");
    }

    #[test]
    fn input_column_only_on_ready_page() {
        let ready = PageView::Ready {
            results: ResultView::Blank,
            table: TableView::Empty,
        };
        assert_eq!(input_column(&ready, "43"), Some(10));
        assert_eq!(input_column(&PageView::Loading, "43"), None);
    }

    #[test]
    fn paint_writes_escape_sequences() {
        let lines = vec![Line::new("hello", Tone::Heading)];
        let mut buf = Vec::new();
        paint(&mut buf, &lines, (80, 24), Some(8)).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("hello"));
    }
}
