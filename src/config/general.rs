//! General configuration settings for perch.
//!
//! Defines the [General] struct deserialized from the `[general]` table of
//! perch.toml and the runtime [Settings] record the session controller
//! mutates. CLI flags are layered on top of the config-provided defaults
//! by the entry point.

use serde::Deserialize;

/// Active sort order for the snapshot.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    Name,
    Size,
    Time,
}

impl SortMode {
    /// Next mode in the Name -> Size -> Time -> Name cycle.
    pub fn cycled(self) -> Self {
        match self {
            SortMode::Name => SortMode::Size,
            SortMode::Size => SortMode::Time,
            SortMode::Time => SortMode::Name,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Name => "Name",
            SortMode::Size => "Size",
            SortMode::Time => "Time",
        }
    }
}

/// Raw `[general]` table as read from perch.toml.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    show_hidden: bool,
    long_format: bool,
    human_readable: bool,
    dirs_only: bool,
    files_only: bool,
    sort: SortMode,
}

impl Default for General {
    fn default() -> Self {
        General {
            show_hidden: false,
            long_format: false,
            human_readable: false,
            dirs_only: false,
            files_only: false,
            sort: SortMode::Name,
        }
    }
}

/// The live settings record owned by the session.
///
/// Invariant: `dirs_only` and `files_only` are never true at the same
/// time; every path that sets one clears the other.
#[derive(Debug, Clone)]
pub struct Settings {
    show_hidden: bool,
    recursive: bool,
    long_format: bool,
    dirs_only: bool,
    files_only: bool,
    human_readable: bool,
    sort: SortMode,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::from(General::default())
    }
}

impl From<General> for Settings {
    fn from(g: General) -> Self {
        let mut files_only = g.files_only;
        if g.dirs_only && g.files_only {
            eprintln!(
                "[Warning] perch.toml sets both dirs_only and files_only; ignoring files_only"
            );
            files_only = false;
        }
        Settings {
            show_hidden: g.show_hidden,
            recursive: false,
            long_format: g.long_format,
            dirs_only: g.dirs_only,
            files_only,
            human_readable: g.human_readable,
            sort: g.sort,
        }
    }
}

impl Settings {
    // Accessors

    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn recursive(&self) -> bool {
        self.recursive
    }

    #[inline]
    pub fn long_format(&self) -> bool {
        self.long_format
    }

    #[inline]
    pub fn dirs_only(&self) -> bool {
        self.dirs_only
    }

    #[inline]
    pub fn files_only(&self) -> bool {
        self.files_only
    }

    #[inline]
    pub fn human_readable(&self) -> bool {
        self.human_readable
    }

    #[inline]
    pub fn sort(&self) -> SortMode {
        self.sort
    }

    // CLI override setters, only ever turning features on

    pub fn set_show_hidden(&mut self, on: bool) {
        self.show_hidden = on;
    }

    pub fn set_recursive(&mut self, on: bool) {
        self.recursive = on;
    }

    pub fn set_long_format(&mut self, on: bool) {
        self.long_format = on;
    }

    pub fn set_human_readable(&mut self, on: bool) {
        self.human_readable = on;
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
    }

    pub fn enable_dirs_only(&mut self) {
        self.dirs_only = true;
        self.files_only = false;
    }

    pub fn enable_files_only(&mut self) {
        self.files_only = true;
        self.dirs_only = false;
    }

    // Interactive toggles

    pub fn toggle_show_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
    }

    pub fn toggle_long_format(&mut self) {
        self.long_format = !self.long_format;
    }

    pub fn toggle_human_readable(&mut self) {
        self.human_readable = !self.human_readable;
    }

    pub fn toggle_dirs_only(&mut self) {
        self.dirs_only = !self.dirs_only;
        if self.dirs_only {
            self.files_only = false;
        }
    }

    pub fn toggle_files_only(&mut self) {
        self.files_only = !self.files_only;
        if self.files_only {
            self.dirs_only = false;
        }
    }

    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.cycled();
    }
}
