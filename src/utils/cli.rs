//! Command-line interface for perch.
//!
//! Flags map onto the [Settings] record; the session core never sees argv.
//! Conflicting filter flags and conflicting mode flags are rejected by
//! clap with a nonzero exit before any interactive state exists.

use crate::config::{Settings, SortMode};

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "perch",
    version,
    about = "A small, keyboard-driven terminal file browser",
    after_help = "Run with no flags to browse the current directory; press ? inside for keys."
)]
pub struct Cli {
    /// Directory to open (defaults to the current directory)
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Show hidden files (dotfiles)
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Long listing format (permissions, owner, size, mtime)
    #[arg(short = 'l', long = "long")]
    pub long: bool,

    /// Human-readable sizes (1.5K, 2.0M, ...)
    #[arg(short = 'H', long = "human-readable")]
    pub human_readable: bool,

    /// Sort by size, largest first
    #[arg(short = 'S', long = "sort-size", group = "sort")]
    pub sort_size: bool,

    /// Sort by modification time, newest first
    #[arg(short = 't', long = "sort-time", group = "sort")]
    pub sort_time: bool,

    /// Sort by name (the default)
    #[arg(short = 'n', long = "sort-name", group = "sort")]
    pub sort_name: bool,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only", conflicts_with = "files_only")]
    pub dirs_only: bool,

    /// List regular files only
    #[arg(short = 'f', long = "files-only")]
    pub files_only: bool,

    /// Recurse into subdirectories (batch mode only)
    #[arg(short = 'r', long = "recursive")]
    pub recursive: bool,

    /// Print the listing once and exit instead of browsing
    #[arg(short = 'b', long = "batch", conflicts_with = "interactive")]
    pub batch: bool,

    /// Run the interactive browser (the default)
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,
}

impl Cli {
    /// Layers the flags over the config-provided defaults. Flags only ever
    /// switch features on; an absent flag leaves the config value alone.
    pub fn apply_to(&self, settings: &mut Settings) {
        if self.all {
            settings.set_show_hidden(true);
        }
        if self.long {
            settings.set_long_format(true);
        }
        if self.human_readable {
            settings.set_human_readable(true);
        }
        if self.recursive {
            settings.set_recursive(true);
        }
        if self.sort_size {
            settings.set_sort(SortMode::Size);
        }
        if self.sort_time {
            settings.set_sort(SortMode::Time);
        }
        if self.sort_name {
            settings.set_sort(SortMode::Name);
        }
        if self.dirs_only {
            settings.enable_dirs_only();
        }
        if self.files_only {
            settings.enable_files_only();
        }
    }
}
