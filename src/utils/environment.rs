use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Get the Firefox configuration root (~/.mozilla/firefox)
pub fn firefox_dir() -> Result<PathBuf> {
    let home = env::var("HOME")
        .map_err(|_| Error::Environment("HOME environment variable not set".to_string()))?;
    Ok(PathBuf::from(home).join(".mozilla").join("firefox"))
}
