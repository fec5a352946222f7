use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a field as a string, mapping any non-string value to `None`.
///
/// Session history entries occasionally carry numeric or null titles; those
/// suppress the field rather than failing the entry.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}
