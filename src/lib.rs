//! fftabs - read Firefox session tabs and toolbar bookmarks without the browser
//!
//! This library decodes the compressed containers Firefox keeps in a profile
//! directory and walks the JSON documents inside them. It supports:
//!
//! - Decoding the `mozLz40\0` container framing (`recovery.jsonlz4`, bookmark backups)
//! - Locating the profile directory from `profiles.ini` and picking the newest
//!   bookmark backup by modification time
//! - Projecting open tabs, the most recently accessed tab, and the bookmarks
//!   toolbar to plain text lines
//!
//! # Example
//!
//! ```no_run
//! use fftabs::models::SessionMode;
//! use fftabs::{decode_container, locate_profile, render_session, session_file};
//!
//! let profile = locate_profile()?;
//! let raw = std::fs::read(session_file(&profile))?;
//! let json = decode_container(&raw)?;
//! let root: serde_json::Value = serde_json::from_slice(&json)?;
//! for line in render_session(&root, SessionMode { titles: true, ..Default::default() })? {
//!     println!("{line}");
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod bookmarks;
pub mod cli;
pub mod container;
pub mod error;
pub mod models;
pub mod profile;
pub mod session;
pub mod utils;

// Re-export commonly used types
pub use bookmarks::render_bookmarks;
pub use container::decode_container;
pub use error::{Error, Result};
pub use profile::{locate_bookmark_file, locate_profile, session_file};
pub use session::render_session;
