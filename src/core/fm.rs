//! Directory snapshot loading for perch.
//!
//! Provides the FileEntry struct which is used throughout perch.
//! Also holds the EntryInfo struct shown by the entry-info overlay.

use crate::config::Settings;

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Represents a single entry in a directory snapshot.
///
/// Holds the basename, the absolute path composed from the parent directory,
/// and the metadata of the entry if the query succeeded. Entries are
/// recreated on every reload, never mutated in place.
#[derive(Debug)]
pub struct FileEntry {
    name: OsString,
    path: PathBuf,
    metadata: Option<Metadata>,
    link_target: Option<PathBuf>,
}

impl FileEntry {
    pub fn new(
        name: OsString,
        path: PathBuf,
        metadata: Option<Metadata>,
        link_target: Option<PathBuf>,
    ) -> Self {
        FileEntry {
            name,
            path,
            metadata,
            link_target,
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Whether the metadata query succeeded at load time.
    #[inline]
    pub fn has_metadata(&self) -> bool {
        self.metadata.is_some()
    }

    #[inline]
    pub fn link_target(&self) -> Option<&Path> {
        self.link_target.as_deref()
    }

    pub fn is_hidden(&self) -> bool {
        self.name_str().starts_with('.')
    }

    /// True only for entries whose metadata is present and identifies a
    /// directory. Symlinks to directories are not directories here: the
    /// metadata comes from `symlink_metadata`.
    pub fn is_dir(&self) -> bool {
        self.metadata.as_ref().is_some_and(|m| m.is_dir())
    }

    pub fn is_file(&self) -> bool {
        self.metadata.as_ref().is_some_and(|m| m.is_file())
    }

    pub fn is_symlink(&self) -> bool {
        self.metadata
            .as_ref()
            .is_some_and(|m| m.file_type().is_symlink())
    }

    pub fn size(&self) -> Option<u64> {
        self.metadata.as_ref().map(|m| m.len())
    }

    pub fn modified(&self) -> Option<SystemTime> {
        self.metadata.as_ref().and_then(|m| m.modified().ok())
    }
}

/// Enumerator for the file types shown inside [EntryInfo].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Directory,
    Symlink,
    Other,
}

impl FileType {
    pub fn label(self) -> &'static str {
        match self {
            FileType::File => "File",
            FileType::Directory => "Directory",
            FileType::Symlink => "Symlink",
            FileType::Other => "Other",
        }
    }
}

/// Detail record for the entry-info overlay.
///
/// Built from the entry's cached metadata; the controller requests a refresh
/// after the overlay is acknowledged so a stale record never outlives it.
#[derive(Debug)]
pub struct EntryInfo {
    name: OsString,
    file_type: Option<FileType>,
    size: Option<u64>,
    modified: Option<SystemTime>,
    attributes: Option<String>,
    link_target: Option<PathBuf>,
}

impl EntryInfo {
    pub fn from_entry(entry: &FileEntry) -> Self {
        let file_type = entry.metadata().map(|m| {
            let ft = m.file_type();
            if ft.is_dir() {
                FileType::Directory
            } else if ft.is_symlink() {
                FileType::Symlink
            } else if ft.is_file() {
                FileType::File
            } else {
                FileType::Other
            }
        });

        EntryInfo {
            name: entry.name().to_os_string(),
            file_type,
            size: entry.size(),
            modified: entry.modified(),
            attributes: entry.metadata().map(crate::core::formatter::format_mode),
            link_target: entry.link_target().map(Path::to_path_buf),
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn file_type(&self) -> Option<FileType> {
        self.file_type
    }

    #[inline]
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    #[inline]
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    #[inline]
    pub fn attributes(&self) -> Option<&str> {
        self.attributes.as_deref()
    }

    #[inline]
    pub fn link_target(&self) -> Option<&Path> {
        self.link_target.as_deref()
    }
}

/// Decides whether an entry survives the visibility filters.
///
/// Entries without metadata pass the hidden filter but fail both type
/// filters, so they stay visible unless a type filter is active.
pub fn include_entry(entry: &FileEntry, settings: &Settings) -> bool {
    if !settings.show_hidden() && entry.is_hidden() {
        return false;
    }
    if settings.dirs_only() && !entry.is_dir() {
        return false;
    }
    if settings.files_only() && !entry.is_file() {
        return false;
    }
    true
}

/// Reads the direct children of `path` into a snapshot, applying the
/// visibility filters from `settings`.
///
/// Metadata is queried with `symlink_metadata` and never follows symlinks;
/// a failed query produces an entry without metadata rather than dropping
/// it. An unreadable child dirent is skipped. An unopenable directory is
/// the caller's problem: the error is returned untouched.
pub fn load_dir(path: &Path, settings: &Settings) -> io::Result<Vec<FileEntry>> {
    let mut entries = Vec::with_capacity(128);

    for dirent in fs::read_dir(path)? {
        let dirent = match dirent {
            Ok(d) => d,
            Err(_) => continue,
        };

        let name = dirent.file_name();
        let entry_path = dirent.path();
        let metadata = fs::symlink_metadata(&entry_path).ok();

        let link_target = match &metadata {
            Some(m) if m.file_type().is_symlink() => fs::read_link(&entry_path).ok(),
            _ => None,
        };

        let entry = FileEntry::new(name, entry_path, metadata, link_target);
        if include_entry(&entry, settings) {
            entries.push(entry);
        }
    }
    Ok(entries)
}
