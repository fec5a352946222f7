//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

/// Wrap a JSON document in the compressed container framing
/// (`mozLz40\0` + little-endian payload size + LZ4 block).
pub fn pack_container(json: &str) -> Vec<u8> {
    let payload = json.as_bytes();
    let mut raw = Vec::new();
    raw.extend_from_slice(b"mozLz40\0");
    raw.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    raw.extend_from_slice(&lz4_flex::block::compress(payload));
    raw
}

/// Builder for fake Firefox home directories: `profiles.ini`, a profile
/// directory, and packed session/bookmark containers inside it.
pub struct FirefoxHomeBuilder {
    temp_dir: TempDir,
    profile_name: String,
}

impl FirefoxHomeBuilder {
    /// Create a home directory with `.mozilla/firefox/profiles.ini` pointing at
    /// an (initially empty) profile directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let profile_name = "abcd1234.default-release".to_string();

        let firefox_dir = temp_dir.path().join(".mozilla").join("firefox");
        fs::create_dir_all(firefox_dir.join(&profile_name)).expect("Failed to create profile dir");
        fs::write(
            firefox_dir.join("profiles.ini"),
            format!("[Profile0]\nName=default\nIsRelative=1\nPath={profile_name}\n"),
        )
        .expect("Failed to write profiles.ini");

        Self { temp_dir, profile_name }
    }

    /// Home directory path (what `$HOME` should point at)
    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The resolved profile directory path
    pub fn profile_dir(&self) -> PathBuf {
        self.temp_dir.path().join(".mozilla").join("firefox").join(&self.profile_name)
    }

    /// Write the given session JSON as a packed `recovery.jsonlz4`
    pub fn with_session(self, json: &str) -> Self {
        let session_dir = self.profile_dir().join("sessionstore-backups");
        fs::create_dir_all(&session_dir).expect("Failed to create session dir");
        fs::write(session_dir.join("recovery.jsonlz4"), pack_container(json))
            .expect("Failed to write recovery.jsonlz4");
        self
    }

    /// Write a packed bookmark backup with a controlled modification time,
    /// offset in seconds from a fixed base.
    pub fn with_bookmark_backup(self, file_name: &str, json: &str, mtime_offset_secs: u64) -> Self {
        let backups_dir = self.profile_dir().join("bookmarkbackups");
        fs::create_dir_all(&backups_dir).expect("Failed to create backups dir");

        let path = backups_dir.join(file_name);
        fs::write(&path, pack_container(json)).expect("Failed to write bookmark backup");

        let base = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        File::options()
            .write(true)
            .open(&path)
            .expect("Failed to reopen backup")
            .set_modified(base + Duration::from_secs(mtime_offset_secs))
            .expect("Failed to set mtime");
        self
    }

    /// Write raw bytes directly as `recovery.jsonlz4` (for corrupt inputs)
    pub fn with_raw_session_bytes(self, bytes: &[u8]) -> Self {
        let session_dir = self.profile_dir().join("sessionstore-backups");
        fs::create_dir_all(&session_dir).expect("Failed to create session dir");
        fs::write(session_dir.join("recovery.jsonlz4"), bytes)
            .expect("Failed to write recovery.jsonlz4");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for FirefoxHomeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A session document with one window per tab; each tab has a single entry.
pub fn session_json(tabs: &[(&str, &str, i64)]) -> String {
    let windows: Vec<String> = tabs
        .iter()
        .map(|(title, url, last_accessed)| {
            format!(
                r#"{{"tabs":[{{"index":1,"lastAccessed":{last_accessed},"entries":[{{"title":"{title}","url":"{url}"}}]}}]}}"#
            )
        })
        .collect();
    format!(r#"{{"windows":[{}]}}"#, windows.join(","))
}

/// A bookmark document whose toolbar holds one leaf and one nested folder
/// with a second leaf.
pub fn bookmarks_json() -> String {
    r#"{"children":[
        {"root":"placesRoot","children":[{"title":"Elsewhere","uri":"http://elsewhere"}]},
        {"root":"toolbarFolder","children":[
            {"title":"A","uri":"http://a"},
            {"title":"Folder","children":[{"title":"B","uri":"http://b"}]}
        ]}
    ]}"#
    .to_string()
}
