use serde::Deserialize;

/// Title/url projection of one session history entry.
///
/// Either field may be absent or non-string in the document; such fields come
/// back as `None` and are simply not printed.
#[derive(Debug, Clone, Deserialize)]
pub struct PageEntry {
    #[serde(default, deserialize_with = "crate::models::deserializers::lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "crate::models::deserializers::lenient_string")]
    pub url: Option<String>,
}
