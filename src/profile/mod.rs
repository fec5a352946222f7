//! Profile discovery: resolve the Firefox profile directory from
//! `profiles.ini` and pick the files the navigators read.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{Error, Result};
use crate::utils::firefox_dir;

const SESSION_DIR: &str = "sessionstore-backups";
const SESSION_FILE: &str = "recovery.jsonlz4";
const BACKUP_DIR: &str = "bookmarkbackups";
const BACKUP_MARKER: &str = "bookmarks";

/// Resolve the profile directory from `<home>/.mozilla/firefox/profiles.ini`.
///
/// The profile name is taken from the first line containing `Path`, using the
/// text after its `=` separator.
///
/// # Errors
///
/// Returns an error if:
/// - `$HOME` is not set ([`Error::Environment`])
/// - `profiles.ini` cannot be read ([`Error::Io`])
/// - No line in `profiles.ini` yields a profile name ([`Error::Config`])
pub fn locate_profile() -> Result<PathBuf> {
    let firefox_dir = firefox_dir()?;
    let ini_path = firefox_dir.join("profiles.ini");
    let ini = fs::read_to_string(&ini_path).map_err(|source| Error::io(&ini_path, source))?;

    let name = profile_name(&ini)
        .ok_or_else(|| Error::Config(format!("no Path entry in {}", ini_path.display())))?;
    Ok(firefox_dir.join(name))
}

/// First line containing `Path`, value after `=`.
fn profile_name(ini: &str) -> Option<&str> {
    ini.lines()
        .find(|line| line.contains("Path"))
        .and_then(|line| line.split_once('='))
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

/// Path of the session recovery container inside a profile. The file name is
/// fixed; only the profile directory varies.
pub fn session_file(profile: &Path) -> PathBuf {
    profile.join(SESSION_DIR).join(SESSION_FILE)
}

/// Pick the bookmark backup to read: the most recently modified file in
/// `<profile>/bookmarkbackups/` whose name contains `bookmarks`.
///
/// # Errors
///
/// Returns an error if:
/// - The backups directory cannot be listed ([`Error::Io`])
/// - No file name contains the marker ([`Error::NotFound`])
pub fn locate_bookmark_file(profile: &Path) -> Result<PathBuf> {
    let backups_dir = profile.join(BACKUP_DIR);
    let entries = fs::read_dir(&backups_dir).map_err(|source| Error::io(&backups_dir, source))?;

    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries {
        let entry = entry.map_err(|source| Error::io(&backups_dir, source))?;
        if !entry.file_name().to_string_lossy().contains(BACKUP_MARKER) {
            continue;
        }

        let modified = entry
            .metadata()
            .and_then(|meta| meta.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);

        // Strictly-greater comparison: mtime ties keep the first file seen
        // during the directory scan.
        let replace = match &newest {
            None => true,
            Some((best, _)) => modified > *best,
        };
        if replace {
            newest = Some((modified, entry.path()));
        }
    }

    newest
        .map(|(_, path)| path)
        .ok_or_else(|| Error::NotFound(format!("no bookmark backup in {}", backups_dir.display())))
}
