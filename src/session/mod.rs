//! Session navigator: walk the parsed `recovery.jsonlz4` document and project
//! open tabs to output lines.
//!
//! The session schema is partially implicit: each tab carries an `entries`
//! array of history entries plus a 1-based `index` pointing at the entry that
//! is the tab's current page. Tabs whose `index` does not resolve are skipped;
//! sibling tabs keep being processed. A window whose `tabs` field is not an
//! array ends the scan over the remaining windows.

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::models::{PageEntry, SessionMode};

/// Render the session document per `mode`, one output line per element.
/// An empty string element stands for the blank separator line.
///
/// A document without a `windows` array renders as empty output; a session
/// with no windows is valid.
///
/// # Errors
///
/// Returns an error only when `mode.raw` is set and the document cannot be
/// re-serialized.
pub fn render_session(root: &Value, mode: SessionMode) -> Result<Vec<String>> {
    if mode.raw {
        return Ok(vec![serde_json::to_string_pretty(root)?]);
    }

    let mut lines = Vec::new();
    let Some(windows) = root.get("windows").and_then(Value::as_array) else {
        return Ok(lines);
    };

    let mut active = ActiveTab::default();
    for window in windows {
        let Some(tabs) = window.get("tabs").and_then(Value::as_array) else {
            break;
        };
        for tab in tabs {
            let Some(page) = current_page(tab) else {
                continue;
            };

            if let Some(last_accessed) = tab.get("lastAccessed").and_then(Value::as_i64) {
                active.observe(last_accessed, &page);
            }

            emit_tab(&page, mode, &mut lines);
        }
    }

    if mode.active {
        active.emit(mode, &mut lines);
    }

    Ok(lines)
}

/// Resolve a tab's current page: the entry at `entries[index - 1]`.
///
/// Returns `None` when `entries` is not an array, `index` is missing,
/// non-positive or out of range, or the resolved entry is not an object.
fn current_page(tab: &Value) -> Option<PageEntry> {
    let entries = tab.get("entries")?.as_array()?;
    let index = usize::try_from(tab.get("index")?.as_u64()?).ok()?;
    let entry = entries.get(index.checked_sub(1)?)?;
    if !entry.is_object() {
        return None;
    }
    PageEntry::deserialize(entry).ok()
}

fn emit_tab(page: &PageEntry, mode: SessionMode, lines: &mut Vec<String>) {
    if mode.titles && mode.urls && !mode.active {
        // Pair form requires both fields present.
        if let (Some(title), Some(url)) = (&page.title, &page.url) {
            lines.push(title.clone());
            lines.push(url.clone());
            lines.push(String::new());
        }
        return;
    }

    if mode.titles
        && !mode.active
        && let Some(title) = &page.title
    {
        lines.push(title.clone());
    }
    if mode.urls
        && !mode.active
        && let Some(url) = &page.url
    {
        lines.push(url.clone());
    }
}

/// Running "most recently accessed tab" accumulator threaded through the scan.
///
/// The maximum starts at 0 and only a strictly greater `lastAccessed` replaces
/// the held page, so equal timestamps keep the first tab seen and tabs with
/// `lastAccessed <= 0` never win.
#[derive(Debug, Default)]
struct ActiveTab {
    last_accessed: i64,
    page: Option<PageEntry>,
}

impl ActiveTab {
    fn observe(&mut self, last_accessed: i64, page: &PageEntry) {
        if last_accessed > self.last_accessed {
            self.last_accessed = last_accessed;
            self.page = Some(page.clone());
        }
    }

    /// Emit the held page: title only under `-t`, url only under `-u`,
    /// both when neither narrows the output. Titles take precedence when
    /// both flags are set.
    fn emit(&self, mode: SessionMode, lines: &mut Vec<String>) {
        let Some(page) = &self.page else {
            return;
        };
        if mode.titles {
            if let Some(title) = &page.title {
                lines.push(title.clone());
            }
        } else if mode.urls {
            if let Some(url) = &page.url {
                lines.push(url.clone());
            }
        } else {
            if let Some(title) = &page.title {
                lines.push(title.clone());
            }
            if let Some(url) = &page.url {
                lines.push(url.clone());
            }
        }
    }
}
