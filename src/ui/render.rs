//! Frame rendering for perch.
//!
//! Produces the whole browse frame from session state and terminal size:
//! title line, settings summary, blank separator, viewport-clipped entry
//! list, and the footer hint line. Stays pure rendering: it reads state
//! and recomputes the scroll offset, nothing else.

use crate::app::AppState;
use crate::core::{format_entry_long, settings_summary, truncate_with_ellipsis};
use crate::ui::overlays::{self, Overlay};
use crate::utils::helpers::shorten_home_path;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

// Quick-help subset; the full key list lives on the help screen.
const FOOTER_HINTS: &str =
    "j/k move  enter open  b back  a hidden  l long  s sort  ? help  q quit";

/// Renders the entire frame. An active overlay owns the whole screen
/// until it is acknowledged.
pub fn render(frame: &mut Frame, app: &mut AppState) {
    if let Some(overlay) = app.overlay() {
        match overlay {
            Overlay::Help => overlays::draw_help(frame),
            Overlay::Info(info) => overlays::draw_info(frame, info),
            Overlay::Message(text) => overlays::draw_message(frame, text),
        }
        return;
    }

    let area = frame.area();
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);

    // Title: current path, home-shortened, truncated to the terminal width.
    let title = format!("perch: {}", shorten_home_path(app.nav().current_dir()));
    frame.render_widget(
        Paragraph::new(Span::styled(
            truncate_with_ellipsis(&title, area.width as usize),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(settings_summary(app.settings())),
        chunks[1],
    );

    // chunks[2] stays blank: the separator between header and list.

    let list_area = chunks[3];
    let available = (list_area.height as usize).max(1);
    app.nav_mut().ensure_cursor_visible(available);

    let settings = app.settings();
    let nav = app.nav();
    let start = nav.scroll();
    let end = (start + available).min(nav.entries().len());

    let mut lines: Vec<Line> = Vec::with_capacity(available);
    for (offset, entry) in nav.entries()[start..end].iter().enumerate() {
        let text = if settings.long_format() {
            format_entry_long(entry, settings)
        } else {
            entry.name_str().into_owned()
        };

        let mut style = Style::default();
        if entry.is_dir() {
            style = style.add_modifier(Modifier::BOLD);
        }
        if start + offset == nav.cursor() {
            style = style.add_modifier(Modifier::REVERSED);
        }
        lines.push(Line::from(Span::styled(text, style)));
    }
    // Filler rows keep the frame height stable across redraws.
    while lines.len() < available {
        lines.push(Line::from(Span::styled(
            "~",
            Style::default().add_modifier(Modifier::DIM),
        )));
    }
    frame.render_widget(Paragraph::new(lines), list_area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            FOOTER_HINTS,
            Style::default().add_modifier(Modifier::DIM),
        )),
        chunks[4],
    );
}
