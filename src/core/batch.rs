//! Non-interactive listing mode for perch.
//!
//! Prints the listing once and exits, sharing the loader, ordering, and
//! row formatting with the interactive browser. With the recursive setting
//! it descends into subdirectories depth-first, one `path:` block each.

use crate::config::Settings;
use crate::core::fm;
use crate::core::formatter;

use std::io::{self, Write};
use std::path::Path;

/// Lists `path` to stdout per the settings.
pub fn run(path: &Path, settings: &Settings) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_listing(&mut out, path, settings)
}

/// Writes one directory block (and, recursively, its subdirectories when
/// requested). A directory that cannot be opened is reported on stderr and
/// skipped; the rest of the traversal continues.
pub fn write_listing<W: Write>(out: &mut W, path: &Path, settings: &Settings) -> io::Result<()> {
    let mut entries = match fm::load_dir(path, settings) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("perch: {}: {}", path.display(), e);
            return Ok(());
        }
    };
    formatter::sort_entries(&mut entries, settings.sort());

    writeln!(out, "{}:", path.display())?;
    for entry in &entries {
        if settings.long_format() {
            writeln!(out, "{}", formatter::format_entry_long(entry, settings))?;
        } else {
            writeln!(out, "{}", entry.name_str())?;
        }
    }
    writeln!(out)?;

    if settings.recursive() {
        for entry in &entries {
            if entry.is_dir() {
                write_listing(out, entry.path(), settings)?;
            }
        }
    }
    Ok(())
}
