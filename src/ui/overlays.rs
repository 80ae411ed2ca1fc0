//! Acknowledged overlay screens for perch.
//!
//! An overlay replaces the browse frame until the next keypress: the help
//! screen, the entry-info view for non-directory entries, and warning
//! messages for recoverable I/O failures.

use crate::core::{EntryInfo, format_mtime, human_size};

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// The overlay currently owning the screen, if any.
#[derive(Debug)]
pub enum Overlay {
    Help,
    Info(EntryInfo),
    Message(String),
}

const HELP_TEXT: &str = "\
NAVIGATION
  j / k or Down / Up   Move cursor down/up
  Enter                Open directory, or show entry details
  b / Backspace        Go back (history, then parent)

VIEW SETTINGS
  a   Toggle hidden files (dotfiles)
  l   Toggle long format (detailed/simple view)
  H   Toggle human-readable file sizes
  s   Cycle sort order (name -> size -> time)
  d   Toggle directories-only filter
  f   Toggle files-only filter
  r   Refresh current directory

OTHER
  q   Quit
  ?   Show this help";

pub fn draw_help(frame: &mut Frame) {
    let mut lines: Vec<Line> = HELP_TEXT.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(ack_line());

    let block = Block::default().borders(Borders::ALL).title(" Help ");
    frame.render_widget(Paragraph::new(lines).block(block), frame.area());
}

pub fn draw_info(frame: &mut Frame, info: &EntryInfo) {
    let mut lines = vec![
        field_line("Name", info.name().to_string_lossy()),
        field_line(
            "Type",
            info.file_type().map(|t| t.label()).unwrap_or("?"),
        ),
        field_line(
            "Size",
            info.size()
                .map(|s| format!("{} ({})", s, human_size(s)))
                .unwrap_or_else(|| "?".to_string()),
        ),
        field_line(
            "Modified",
            info.modified()
                .map(format_mtime)
                .unwrap_or_else(|| "?".to_string()),
        ),
        field_line("Attributes", info.attributes().unwrap_or("?")),
    ];
    if let Some(target) = info.link_target() {
        lines.push(field_line("Target", target.to_string_lossy()));
    }
    lines.push(Line::from(""));
    lines.push(ack_line());

    let block = Block::default().borders(Borders::ALL).title(" Entry ");
    frame.render_widget(Paragraph::new(lines).block(block), frame.area());
}

pub fn draw_message(frame: &mut Frame, text: &str) {
    let lines = vec![Line::from(text.to_string()), Line::from(""), ack_line()];
    let block = Block::default().borders(Borders::ALL).title(" Warning ");
    frame.render_widget(Paragraph::new(lines).block(block), frame.area());
}

fn field_line<'a>(label: &'a str, value: impl Into<String>) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{label:<11}"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value.into()),
    ])
}

fn ack_line() -> Line<'static> {
    Line::from(Span::styled(
        "Press any key to continue...",
        Style::default().add_modifier(Modifier::DIM),
    ))
}
