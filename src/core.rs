//! Core runtime logic for perch.
//!
//! This module contains the non-UI engine pieces used by the application:
//! - [fm]: directory snapshot loading and file metadata (see [load_dir], [FileEntry], [EntryInfo]).
//! - [formatter]: ordering comparators plus formatting of attributes, sizes, and times.
//! - [batch]: the one-shot, optionally recursive stdout listing mode.
//! - [terminal]: terminal setup/teardown and the main crossterm/ratatui event loop.
//!
//! Most callers will import [load_dir] and [FileEntry] from this module.

pub mod batch;
pub mod fm;
pub mod formatter;
pub mod terminal;

pub use fm::{EntryInfo, FileEntry, FileType, include_entry, load_dir};
pub use formatter::{
    compare_entries, format_entry_long, format_mode, format_mtime, format_size, human_size,
    settings_summary, sort_entries, truncate_with_ellipsis,
};
