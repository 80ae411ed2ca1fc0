//! Session controller for perch.
//!
//! [AppState] owns all mutable session state: the settings, the navigation
//! state, the back-history, the active overlay, and the refresh/resize
//! flags. The event loop hands it decoded commands; everything else here
//! is private dispatch.

use crate::app::history::History;
use crate::app::keymap::{Command, Keymap};
use crate::app::nav::NavState;
use crate::config::{Config, Settings};
use crate::core::{EntryInfo, fm, formatter};
use crate::ui::overlays::Overlay;

use crossterm::event::KeyEvent;
use std::path::PathBuf;

/// How the event loop should proceed after a keypress.
pub enum KeypressResult {
    Continue,
    Quit,
}

/// Central application state for an interactive session.
///
/// Created once at startup and torn down with the terminal. The first loop
/// iteration performs the initial load through the refresh flag.
pub struct AppState {
    settings: Settings,
    keymap: Keymap,
    nav: NavState,
    history: History,
    overlay: Option<Overlay>,
    needs_refresh: bool,
    pending_resize: bool,
}

impl AppState {
    /// `start_dir` must already be an absolute, validated directory; the
    /// entry point treats resolution failure as fatal before any terminal
    /// state changes.
    pub fn new(config: &Config, settings: Settings, start_dir: PathBuf) -> Self {
        Self {
            settings,
            keymap: Keymap::from_config(config.keys()),
            nav: NavState::new(start_dir),
            history: History::new(),
            overlay: None,
            needs_refresh: true,
            pending_resize: false,
        }
    }

    // Accessors

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    #[inline]
    pub fn nav_mut(&mut self) -> &mut NavState {
        &mut self.nav
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[inline]
    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    // Refresh and resize flags, consumed by the event loop

    pub fn request_refresh(&mut self) {
        self.needs_refresh = true;
    }

    pub fn take_refresh(&mut self) -> bool {
        std::mem::take(&mut self.needs_refresh)
    }

    pub fn note_resize(&mut self) {
        self.pending_resize = true;
    }

    pub fn take_resize(&mut self) -> bool {
        std::mem::take(&mut self.pending_resize)
    }

    /// Reloads the snapshot of the current directory with the current
    /// settings. On failure the previous snapshot and path are kept and a
    /// warning overlay is raised; nothing in the loop terminates the
    /// process.
    pub fn reload(&mut self) {
        match fm::load_dir(self.nav.current_dir(), &self.settings) {
            Ok(mut entries) => {
                formatter::sort_entries(&mut entries, self.settings.sort());
                self.nav.replace_entries(entries);
            }
            Err(e) => {
                let text = format!("Cannot read {}: {}", self.nav.current_dir().display(), e);
                self.overlay = Some(Overlay::Message(text));
            }
        }
    }

    /// Central key handler: an active overlay swallows the keypress as its
    /// acknowledgement; otherwise the key is decoded into a command and
    /// dispatched. Unbound keys change nothing.
    ///
    /// Closing the help or info view forces a refresh so stale cached
    /// metadata never survives it. Warning messages do not: refreshing
    /// after "cannot read directory" would just raise the warning again.
    pub fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        if let Some(overlay) = self.overlay.take() {
            if !matches!(overlay, Overlay::Message(_)) {
                self.needs_refresh = true;
            }
            return KeypressResult::Continue;
        }

        match self.keymap.lookup(key) {
            Some(command) => self.dispatch(command),
            None => KeypressResult::Continue,
        }
    }

    fn dispatch(&mut self, command: Command) -> KeypressResult {
        match command {
            Command::Quit => return KeypressResult::Quit,
            Command::CursorUp => self.nav.move_up(),
            Command::CursorDown => self.nav.move_down(),
            Command::Open => self.open_selected(),
            Command::Back => self.go_back(),
            Command::ToggleHidden => {
                self.settings.toggle_show_hidden();
                self.needs_refresh = true;
            }
            Command::ToggleDirsOnly => {
                self.settings.toggle_dirs_only();
                self.needs_refresh = true;
            }
            Command::ToggleFilesOnly => {
                self.settings.toggle_files_only();
                self.needs_refresh = true;
            }
            Command::CycleSort => {
                self.settings.cycle_sort();
                self.needs_refresh = true;
            }
            // same snapshot, different rendering
            Command::ToggleLong => self.settings.toggle_long_format(),
            Command::ToggleHuman => self.settings.toggle_human_readable(),
            Command::Refresh => self.needs_refresh = true,
            Command::Help => self.overlay = Some(Overlay::Help),
        }
        KeypressResult::Continue
    }

    /// Opens the entry under the cursor: directories are entered (pushing
    /// the current location onto the history), everything else raises the
    /// entry-info overlay. An empty snapshot is a silent no-op.
    fn open_selected(&mut self) {
        let Some(entry) = self.nav.selected_entry() else {
            return;
        };

        if entry.is_dir() {
            let target = entry.path().to_path_buf();
            let origin = self.nav.current_dir().to_path_buf();
            if self.adopt_dir(target) {
                self.history.push(origin);
            }
        } else {
            self.overlay = Some(Overlay::Info(EntryInfo::from_entry(entry)));
        }
    }

    /// Returns to the most recent distinct history entry, falling back to
    /// the filesystem parent when the history is exhausted. At the root,
    /// where the parent is the current path or absent, nothing happens.
    fn go_back(&mut self) {
        if let Some(prev) = self.history.pop() {
            if prev != self.nav.current_dir() {
                self.adopt_dir(prev);
                return;
            }
        }

        if let Some(parent) = self.nav.current_dir().parent() {
            let parent = parent.to_path_buf();
            if parent != self.nav.current_dir() {
                self.adopt_dir(parent);
            }
        }
    }

    /// Loads `target` and makes it the current directory. A directory that
    /// cannot be opened raises the warning overlay and leaves the session
    /// where it is; the history is not rewound.
    fn adopt_dir(&mut self, target: PathBuf) -> bool {
        match fm::load_dir(&target, &self.settings) {
            Ok(mut entries) => {
                formatter::sort_entries(&mut entries, self.settings.sort());
                self.nav.set_dir(target, entries);
                true
            }
            Err(e) => {
                let text = format!("Cannot open {}: {}", target.display(), e);
                self.overlay = Some(Overlay::Message(text));
                false
            }
        }
    }
}
