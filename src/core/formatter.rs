//! Sorting and display formatting for snapshot entries in perch.
//!
//! Holds the three total-order comparators used by the ordering policy and
//! the row/field formatters shared by the interactive renderer and the
//! batch listing.

use crate::config::{Settings, SortMode};
use crate::core::fm::FileEntry;

use chrono::{DateTime, Local};
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use std::cmp::Ordering;
use std::fs::Metadata;
use std::time::SystemTime;

const SIZE_UNITS: [&str; 5] = ["B", "K", "M", "G", "T"];

/// Byte-lexicographic name order, the tie-break for every sort mode.
fn cmp_name(a: &FileEntry, b: &FileEntry) -> Ordering {
    a.name().cmp(b.name())
}

/// Strict total order between two entries under the given sort mode.
///
/// Size and Time sort descending (largest/newest first); equal keys and
/// entries without usable metadata fall back to name order, which keeps the
/// result deterministic.
pub fn compare_entries(a: &FileEntry, b: &FileEntry, mode: SortMode) -> Ordering {
    match mode {
        SortMode::Name => cmp_name(a, b),
        SortMode::Size => match (a.size(), b.size()) {
            (Some(sa), Some(sb)) => sb.cmp(&sa).then_with(|| cmp_name(a, b)),
            _ => cmp_name(a, b),
        },
        SortMode::Time => match (a.modified(), b.modified()) {
            (Some(ta), Some(tb)) => tb.cmp(&ta).then_with(|| cmp_name(a, b)),
            _ => cmp_name(a, b),
        },
    }
}

/// Sorts a whole snapshot in place. Applied after filtering, before any
/// viewport computation.
pub fn sort_entries(entries: &mut [FileEntry], mode: SortMode) {
    entries.sort_by(|a, b| compare_entries(a, b, mode));
}

/// Scales a byte count into the `B/K/M/G/T` range, dividing by 1024 until
/// the magnitude drops below it, one decimal place.
pub fn human_size(size: u64) -> String {
    let mut scaled = size as f64;
    let mut unit = 0;
    while scaled >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }
    format!("{scaled:.1}{}", SIZE_UNITS[unit])
}

/// Formats entry attributes in a unix-like `drwxr-xr-x` form.
///
/// On Unix the leading character covers directories, symlinks, and the
/// device/fifo/socket types; on Windows a short attribute string is
/// produced instead (not all flags map 1:1 to Unix).
pub fn format_mode(meta: &Metadata) -> String {
    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;
        use std::os::unix::fs::PermissionsExt;

        let file_type = meta.file_type();
        let first = if file_type.is_dir() {
            'd'
        } else if file_type.is_symlink() {
            'l'
        } else if file_type.is_char_device() {
            'c'
        } else if file_type.is_block_device() {
            'b'
        } else if file_type.is_fifo() {
            'p'
        } else if file_type.is_socket() {
            's'
        } else {
            '-'
        };

        let mode = meta.permissions().mode();
        let mut chars = [first, '-', '-', '-', '-', '-', '-', '-', '-', '-'];
        let shifts = [6, 3, 0];
        for (i, &shift) in shifts.iter().enumerate() {
            let base = 1 + i * 3;
            if (mode >> (shift + 2)) & 1u32 != 0 {
                chars[base] = 'r';
            }
            if (mode >> (shift + 1)) & 1u32 != 0 {
                chars[base + 1] = 'w';
            }
            if (mode >> shift) & 1u32 != 0 {
                chars[base + 2] = 'x';
            }
        }
        chars.iter().collect()
    }
    #[cfg(windows)]
    {
        use std::os::windows::fs::MetadataExt;
        let attr = meta.file_attributes();
        let mut out = String::with_capacity(5);
        out.push(if attr & 0x10 != 0 {
            'd'
        } else if attr & 0x400 != 0 {
            'l'
        } else {
            '-'
        });
        out.push(if attr & 0x02 != 0 { 'h' } else { '-' });
        out.push(if attr & 0x04 != 0 { 's' } else { '-' });
        out.push(if attr & 0x20 != 0 { 'a' } else { '-' });
        out.push(if attr & 0x01 != 0 { 'r' } else { '-' });
        out
    }
}

/// Formats a modification time as local `YYYY-MM-DD HH:MM`.
pub fn format_mtime(mtime: SystemTime) -> String {
    let dt: DateTime<Local> = DateTime::from(mtime);
    dt.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(unix)]
fn owner_name(meta: &Metadata) -> String {
    use std::os::unix::fs::MetadataExt;
    uzers::get_user_by_uid(meta.uid())
        .map(|u| u.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(unix)]
fn group_name(meta: &Metadata) -> String {
    use std::os::unix::fs::MetadataExt;
    uzers::get_group_by_gid(meta.gid())
        .map(|g| g.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(unix)]
fn link_count(meta: &Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;
    meta.nlink()
}

#[cfg(not(unix))]
fn owner_name(_meta: &Metadata) -> String {
    "-".to_string()
}

#[cfg(not(unix))]
fn group_name(_meta: &Metadata) -> String {
    "-".to_string()
}

#[cfg(not(unix))]
fn link_count(_meta: &Metadata) -> u64 {
    1
}

/// Formats the size column, raw byte count or unit-scaled per settings.
pub fn format_size(size: u64, settings: &Settings) -> String {
    if settings.human_readable() {
        human_size(size)
    } else {
        size.to_string()
    }
}

/// Builds one long-format row: mode, links, owner, group, size, mtime,
/// name, and the resolved target for symlinks. Entries whose metadata
/// query failed render the placeholder row instead of being dropped.
pub fn format_entry_long(entry: &FileEntry, settings: &Settings) -> String {
    let Some(meta) = entry.metadata() else {
        return format!(
            "?????????? {:>3} {:<8} {:<8} {:>9} {:>16} {}",
            "?",
            "?",
            "?",
            "?",
            "?",
            entry.name_str()
        );
    };

    let mtime = entry
        .modified()
        .map(format_mtime)
        .unwrap_or_else(|| "-".to_string());

    let mut row = format!(
        "{} {:>3} {:<8} {:<8} {:>9} {:>16} {}",
        format_mode(meta),
        link_count(meta),
        owner_name(meta),
        group_name(meta),
        format_size(meta.len(), settings),
        mtime,
        entry.name_str()
    );

    if let Some(target) = entry.link_target() {
        row.push_str(" -> ");
        row.push_str(&target.to_string_lossy());
    }
    row
}

/// One-line summary of the active settings, shown under the title line.
pub fn settings_summary(settings: &Settings) -> String {
    format!(
        "[Sort:{}] [Hidden:{}] [Format:{}] [Human:{}] [Filter:{}]",
        settings.sort().label(),
        if settings.show_hidden() { "ON" } else { "OFF" },
        if settings.long_format() { "Long" } else { "Short" },
        if settings.human_readable() { "ON" } else { "OFF" },
        if settings.dirs_only() {
            "Dirs"
        } else if settings.files_only() {
            "Files"
        } else {
            "All"
        },
    )
}

/// Truncates a display string to `max_width` terminal cells, keeping a
/// trailing `...` marker when anything was cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::core::fm::load_dir;
    use rand::rng;
    use rand::seq::SliceRandom;
    use std::fs::{self, File};
    use std::io::Write;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn write_sized(dir: &std::path::Path, name: &str, bytes: usize) -> std::io::Result<()> {
        let mut f = File::create(dir.join(name))?;
        f.write_all(&vec![b'x'; bytes])
    }

    #[test]
    fn human_size_scales_by_1024() {
        assert_eq!(human_size(0), "0.0B");
        assert_eq!(human_size(500), "500.0B");
        assert_eq!(human_size(1536), "1.5K");
        assert_eq!(human_size(1024 * 1024), "1.0M");
        assert_eq!(human_size(5 * 1024 * 1024 * 1024), "5.0G");
        assert_eq!(human_size(2 * 1024 * 1024 * 1024 * 1024), "2.0T");
    }

    #[test]
    fn name_order_is_bytewise() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        File::create(tmp.path().join("a.txt"))?;
        File::create(tmp.path().join(".hidden"))?;
        fs::create_dir(tmp.path().join("sub"))?;

        let mut settings = Settings::default();
        settings.toggle_show_hidden();

        let mut entries = load_dir(tmp.path(), &settings)?;
        entries.shuffle(&mut rng());
        sort_entries(&mut entries, SortMode::Name);

        // '.' (0x2E) sorts before 'a' (0x61)
        let names: Vec<_> = entries.iter().map(|e| e.name_str().into_owned()).collect();
        assert_eq!(names, vec![".hidden", "a.txt", "sub"]);
        Ok(())
    }

    #[test]
    fn size_order_descends_with_name_tiebreak() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        write_sized(tmp.path(), "b", 500)?;
        write_sized(tmp.path(), "a", 10)?;
        write_sized(tmp.path(), "c", 10)?;

        let mut entries = load_dir(tmp.path(), &Settings::default())?;
        entries.shuffle(&mut rng());
        sort_entries(&mut entries, SortMode::Size);

        let names: Vec<_> = entries.iter().map(|e| e.name_str().into_owned()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        Ok(())
    }

    #[test]
    fn time_order_newest_first() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let base = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        for (name, offset) in [("old", 0u64), ("newest", 120), ("mid", 60)] {
            let f = File::create(tmp.path().join(name))?;
            f.set_modified(base + Duration::from_secs(offset))?;
        }

        let mut entries = load_dir(tmp.path(), &Settings::default())?;
        entries.shuffle(&mut rng());
        sort_entries(&mut entries, SortMode::Time);

        let names: Vec<_> = entries.iter().map(|e| e.name_str().into_owned()).collect();
        assert_eq!(names, vec!["newest", "mid", "old"]);
        Ok(())
    }

    #[test]
    fn comparators_are_strict_total_orders() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        write_sized(tmp.path(), "one", 100)?;
        write_sized(tmp.path(), "two", 200)?;

        let entries = load_dir(tmp.path(), &Settings::default())?;
        for mode in [SortMode::Name, SortMode::Size, SortMode::Time] {
            for a in &entries {
                assert_eq!(compare_entries(a, a, mode), Ordering::Equal);
                for b in &entries {
                    let ab = compare_entries(a, b, mode);
                    let ba = compare_entries(b, a, mode);
                    assert_eq!(ab, ba.reverse(), "asymmetry under {mode:?}");
                }
            }
        }
        Ok(())
    }

    #[test]
    fn long_row_contains_expected_fields() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        write_sized(tmp.path(), "data.bin", 2048)?;

        let entries = load_dir(tmp.path(), &Settings::default())?;
        let settings = Settings::default();
        let row = format_entry_long(&entries[0], &settings);
        assert!(row.contains("data.bin"));
        assert!(row.contains("2048"));

        let mut human = settings.clone();
        human.toggle_human_readable();
        let row = format_entry_long(&entries[0], &human);
        assert!(row.contains("2.0K"));
        Ok(())
    }

    #[test]
    fn truncation_preserves_trailing_marker() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        let long = "/home/user/projects/deeply/nested/directory";
        let cut = truncate_with_ellipsis(long, 20);
        assert!(cut.ends_with("..."));
        assert!(cut.width() <= 20);
        assert_eq!(truncate_with_ellipsis("abcdef", 2), "..");
    }

    #[test]
    fn summary_reflects_settings() {
        let mut settings = Settings::default();
        assert_eq!(
            settings_summary(&settings),
            "[Sort:Name] [Hidden:OFF] [Format:Short] [Human:OFF] [Filter:All]"
        );
        settings.toggle_dirs_only();
        settings.cycle_sort();
        assert!(settings_summary(&settings).contains("[Sort:Size]"));
        assert!(settings_summary(&settings).contains("[Filter:Dirs]"));
    }
}
