//! Helpers for perch.
//!
//! Small path utilities shared by the entry point and the renderer:
//! resolving the start directory and displaying home directories as "~".

use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use std::{fs, io};

/// Resolves the start directory to an absolute path and requires it to be
/// a directory. Either failure is fatal at the call site, before any
/// terminal state changes.
pub fn resolve_start_dir(path: &Path) -> io::Result<PathBuf> {
    let resolved = fs::canonicalize(path)?;
    if !resolved.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotADirectory,
            "not a directory",
        ));
    }
    Ok(resolved)
}

/// Shortens the home directory prefix to "~" for the title line.
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Some(home_dir) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        } else {
            let mut short = stripped.display().to_string();
            if short.starts_with(MAIN_SEPARATOR) {
                short.remove(0);
            }
            return format!("~{}{}", MAIN_SEPARATOR, short);
        }
    }
    path.display().to_string()
}
