//! Key binding configuration for perch.
//!
//! Defines the [Keys] struct deserialized from the `[keys]` table of
//! perch.toml. Each field is a list of key notations bound to one command;
//! the lists replace the built-in defaults wholesale when present.

use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Keys {
    quit: Vec<String>,
    cursor_up: Vec<String>,
    cursor_down: Vec<String>,
    open: Vec<String>,
    back: Vec<String>,
    toggle_hidden: Vec<String>,
    toggle_long: Vec<String>,
    toggle_human: Vec<String>,
    dirs_only: Vec<String>,
    files_only: Vec<String>,
    cycle_sort: Vec<String>,
    refresh: Vec<String>,
    help: Vec<String>,
}

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for Keys {
    fn default() -> Self {
        Keys {
            quit: keys(&["q", "esc"]),
            cursor_up: keys(&["k", "up"]),
            cursor_down: keys(&["j", "down"]),
            open: keys(&["enter"]),
            back: keys(&["b", "backspace"]),
            toggle_hidden: keys(&["a"]),
            toggle_long: keys(&["l"]),
            toggle_human: keys(&["H"]),
            dirs_only: keys(&["d"]),
            files_only: keys(&["f"]),
            cycle_sort: keys(&["s"]),
            refresh: keys(&["r"]),
            help: keys(&["?"]),
        }
    }
}

impl Keys {
    // Accessors

    #[inline]
    pub fn quit(&self) -> &[String] {
        &self.quit
    }

    #[inline]
    pub fn cursor_up(&self) -> &[String] {
        &self.cursor_up
    }

    #[inline]
    pub fn cursor_down(&self) -> &[String] {
        &self.cursor_down
    }

    #[inline]
    pub fn open(&self) -> &[String] {
        &self.open
    }

    #[inline]
    pub fn back(&self) -> &[String] {
        &self.back
    }

    #[inline]
    pub fn toggle_hidden(&self) -> &[String] {
        &self.toggle_hidden
    }

    #[inline]
    pub fn toggle_long(&self) -> &[String] {
        &self.toggle_long
    }

    #[inline]
    pub fn toggle_human(&self) -> &[String] {
        &self.toggle_human
    }

    #[inline]
    pub fn dirs_only(&self) -> &[String] {
        &self.dirs_only
    }

    #[inline]
    pub fn files_only(&self) -> &[String] {
        &self.files_only
    }

    #[inline]
    pub fn cycle_sort(&self) -> &[String] {
        &self.cycle_sort
    }

    #[inline]
    pub fn refresh(&self) -> &[String] {
        &self.refresh
    }

    #[inline]
    pub fn help(&self) -> &[String] {
        &self.help
    }
}
