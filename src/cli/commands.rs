use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use serde_json::Value;

use crate::bookmarks::render_bookmarks;
use crate::container::decode_container;
use crate::models::{BookmarkMode, SessionMode};
use crate::profile::{locate_bookmark_file, locate_profile, session_file};
use crate::utils::read_file;

#[derive(Parser)]
#[command(name = "fftabs")]
#[command(version = "0.1.0")]
#[command(about = "Read Firefox session tabs and toolbar bookmarks from a profile", long_about = None)]
#[command(group(
    ArgGroup::new("selection")
        .required(true)
        .multiple(true)
        .args(["urls", "titles", "current", "bookmarks", "session_json", "bookmarks_json"])
))]
pub struct Cli {
    /// Path to the Firefox profile directory (skips profiles.ini discovery)
    #[arg(short = 'p', long = "profile", value_name = "PATH")]
    pub profile: Option<PathBuf>,

    /// Print session tab URLs
    #[arg(short = 'u', long = "urls")]
    pub urls: bool,

    /// Print session tab titles
    #[arg(short = 't', long = "titles")]
    pub titles: bool,

    /// Print only the most recently accessed tab; -u/-t narrow the field
    #[arg(short = 'c', long = "current")]
    pub current: bool,

    /// Print toolbar bookmarks; -u/-t narrow the fields
    #[arg(short = 'b', long = "bookmarks")]
    pub bookmarks: bool,

    /// Print the raw session document as pretty JSON
    #[arg(short = 's', long = "session-json")]
    pub session_json: bool,

    /// Print the raw bookmarks document as pretty JSON
    #[arg(short = 'd', long = "bookmarks-json")]
    pub bookmarks_json: bool,
}

impl Cli {
    fn wants_session(&self) -> bool {
        self.urls || self.titles || self.current || self.session_json
    }

    fn wants_bookmarks(&self) -> bool {
        self.bookmarks || self.bookmarks_json
    }

    fn session_mode(&self) -> SessionMode {
        SessionMode {
            raw: self.session_json,
            titles: self.titles,
            urls: self.urls,
            active: self.current,
        }
    }

    fn bookmark_mode(&self) -> BookmarkMode {
        BookmarkMode { raw: self.bookmarks_json, titles: self.titles, urls: self.urls }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let profile = match &cli.profile {
        Some(path) => path.clone(),
        None => locate_profile()?,
    };

    if cli.wants_session() {
        let path = session_file(&profile);
        let root = load_document(&path)?;
        for line in crate::session::render_session(&root, cli.session_mode())? {
            println!("{line}");
        }
    }

    if cli.wants_bookmarks() {
        let path = locate_bookmark_file(&profile)?;
        let root = load_document(&path)?;
        for line in render_bookmarks(&root, cli.bookmark_mode())? {
            println!("{line}");
        }
    }

    Ok(())
}

/// Read a compressed container and parse the JSON inside it.
fn load_document(path: &std::path::Path) -> Result<Value> {
    let raw = read_file(path)?;
    let json = decode_container(&raw)
        .with_context(|| format!("failed to decode container at {}", path.display()))?;
    serde_json::from_slice(&json)
        .with_context(|| format!("invalid JSON inside {}", path.display()))
}
