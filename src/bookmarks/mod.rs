//! Bookmark navigator: locate the toolbar subtree in a parsed bookmark backup
//! and project its leaves to output lines.
//!
//! The toolbar is the first top-level child whose `root` field is the string
//! `"toolbarFolder"`. There is no fallback: a document without that marker
//! fails, no matter how many bookmarks live elsewhere in the tree.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::BookmarkMode;

const TOOLBAR_MARKER: &str = "toolbarFolder";

/// Render the bookmarks document per `mode`, one output line per element.
/// An empty string element stands for the blank separator line.
///
/// # Errors
///
/// Returns [`Error::Schema`] when the document has no top-level `children`
/// array or no toolbar folder with children ("failed to get bookmarks
/// toolbar"), and a serialization error when `mode.raw` is set and the
/// document cannot be re-serialized.
pub fn render_bookmarks(root: &Value, mode: BookmarkMode) -> Result<Vec<String>> {
    if mode.raw {
        return Ok(vec![serde_json::to_string_pretty(root)?]);
    }

    let toolbar = toolbar_children(root)
        .ok_or_else(|| Error::Schema("failed to get bookmarks toolbar".to_string()))?;

    let mut lines = Vec::new();
    collect(toolbar, mode, &mut lines);
    Ok(lines)
}

/// Scan the top-level children for the toolbar marker and hand back that
/// node's own `children` array.
fn toolbar_children(root: &Value) -> Option<&Vec<Value>> {
    root.get("children")?
        .as_array()?
        .iter()
        .find(|child| child.get("root").and_then(Value::as_str) == Some(TOOLBAR_MARKER))?
        .get("children")?
        .as_array()
}

/// Depth-first, document-order traversal. A node with a string `uri` is a
/// leaf bookmark; a node with an array `children` is a folder; anything else
/// is skipped.
fn collect(nodes: &[Value], mode: BookmarkMode, lines: &mut Vec<String>) {
    for node in nodes {
        if let Some(uri) = node.get("uri").and_then(Value::as_str) {
            let title = node.get("title").and_then(Value::as_str);

            if !mode.titles && !mode.urls {
                // Default pair form; needs a string title to emit at all.
                if let Some(title) = title {
                    lines.push(title.to_owned());
                    lines.push(uri.to_owned());
                    lines.push(String::new());
                }
                continue;
            }
            if mode.urls {
                lines.push(uri.to_owned());
            }
            if mode.titles && let Some(title) = title {
                lines.push(title.to_owned());
            }
        } else if let Some(children) = node.get("children").and_then(Value::as_array) {
            collect(children, mode, lines);
        }
    }
}
