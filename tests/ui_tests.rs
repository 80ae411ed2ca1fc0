//! UI rendering tests for perch.
//!
//! These render the full frame into a ratatui TestBackend and assert on
//! the produced buffer text: header, settings summary, viewport clipping,
//! filler rows, and the overlay screens.
//!
//! Temporary directories are cleaned up automatically when the tests end.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use perch::app::AppState;
use perch::config::Config;
use perch::ui;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::fs::{self, File};
use std::path::Path;
use tempfile::tempdir;

fn app_at(path: &Path) -> AppState {
    let config = Config::default();
    let settings = config.settings().clone();
    let mut app = AppState::new(&config, settings, path.to_path_buf());
    app.reload();
    app
}

/// Renders one frame and returns the buffer as trimmed text lines.
fn render_lines(
    app: &mut AppState,
    width: u16,
    height: u16,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend)?;
    terminal.draw(|f| ui::render(f, app))?;

    let buffer = terminal.backend().buffer();
    let mut lines = Vec::with_capacity(usize::from(height));
    for y in 0..height {
        let mut line = String::new();
        for x in 0..width {
            let cell = buffer.cell((x, y)).ok_or("cell out of declared viewport")?;
            line.push_str(cell.symbol());
        }
        lines.push(line.trim_end().to_owned());
    }
    Ok(lines)
}

fn press(app: &mut AppState, code: KeyCode) {
    app.handle_keypress(KeyEvent::new(code, KeyModifiers::NONE));
    if app.take_refresh() {
        app.reload();
    }
}

#[test]
fn frame_layout_header_list_footer() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("alpha.txt"))?;
    File::create(dir.path().join("beta.txt"))?;

    let mut app = app_at(dir.path());
    let lines = render_lines(&mut app, 70, 12)?;

    assert!(lines[0].starts_with("perch: "));
    assert_eq!(
        lines[1],
        "[Sort:Name] [Hidden:OFF] [Format:Short] [Human:OFF] [Filter:All]"
    );
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "alpha.txt");
    assert_eq!(lines[4], "beta.txt");
    // rows past the snapshot are padded with the filler marker
    assert_eq!(lines[5], "~");
    assert!(lines[11].contains("quit"));
    Ok(())
}

#[test]
fn long_title_is_truncated_with_ellipsis() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let deep = dir
        .path()
        .join("a_rather_long_directory_name")
        .join("another_long_component");
    fs::create_dir_all(&deep)?;

    let mut app = app_at(&deep);
    let lines = render_lines(&mut app, 24, 8)?;
    assert!(lines[0].ends_with("..."));
    assert!(lines[0].chars().count() <= 24);
    Ok(())
}

#[test]
fn viewport_scrolls_to_keep_cursor_visible() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    for i in 0..30 {
        File::create(dir.path().join(format!("file_{i:02}")))?;
    }

    let mut app = app_at(dir.path());
    // viewport height: 10 total - 4 reserved = 6 rows
    for _ in 0..20 {
        press(&mut app, KeyCode::Char('j'));
    }
    let lines = render_lines(&mut app, 40, 10)?;

    // cursor row (index 20) must be inside the drawn window
    assert!(lines[3..9].iter().any(|l| l == "file_20"));
    // and the window starts at the recomputed scroll offset, not at 0
    assert!(!lines[3..9].iter().any(|l| l == "file_00"));
    assert_eq!(app.nav().scroll(), 15);
    Ok(())
}

#[test]
fn long_format_rows_show_metadata_columns() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("notes.txt"))?;

    let mut app = app_at(dir.path());
    press(&mut app, KeyCode::Char('l'));
    let lines = render_lines(&mut app, 100, 8)?;

    let row = lines
        .iter()
        .find(|l| l.contains("notes.txt"))
        .ok_or("entry row missing")?;
    assert!(row.starts_with('-'), "mode string expected: {row}");
    assert!(lines[1].contains("[Format:Long]"));
    Ok(())
}

#[test]
fn help_overlay_owns_the_frame_until_acknowledged() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("a.txt"))?;

    let mut app = app_at(dir.path());
    press(&mut app, KeyCode::Char('?'));
    let lines = render_lines(&mut app, 60, 24)?;
    let text = lines.join("\n");
    assert!(text.contains("NAVIGATION"));
    assert!(text.contains("Press any key to continue"));
    assert!(!text.contains("a.txt"));

    press(&mut app, KeyCode::Char('x'));
    let lines = render_lines(&mut app, 60, 24)?;
    assert!(lines.join("\n").contains("a.txt"));
    Ok(())
}

#[test]
fn info_overlay_shows_entry_details() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("plain.txt"))?;

    let mut app = app_at(dir.path());
    press(&mut app, KeyCode::Enter);
    let lines = render_lines(&mut app, 60, 16)?;
    let text = lines.join("\n");
    assert!(text.contains("plain.txt"));
    assert!(text.contains("File"));
    Ok(())
}

#[test]
fn tiny_terminal_still_renders() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("a.txt"))?;

    let mut app = app_at(dir.path());
    // smaller than the reserved header/footer lines: the viewport clamps to one row
    let lines = render_lines(&mut app, 10, 5)?;
    assert_eq!(lines.len(), 5);
    Ok(())
}
