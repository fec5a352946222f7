/// Projection selected for a session rendering pass.
///
/// The flags combine freely; `raw` short-circuits the others.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionMode {
    /// Serialize the whole document instead of traversing it
    pub raw: bool,
    /// Include tab titles
    pub titles: bool,
    /// Include tab URLs
    pub urls: bool,
    /// Restrict output to the most recently accessed tab
    pub active: bool,
}

/// Projection selected for a bookmark rendering pass.
///
/// With neither `titles` nor `urls` set, leaves emit title/url pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookmarkMode {
    /// Serialize the whole document instead of traversing it
    pub raw: bool,
    /// Include bookmark titles
    pub titles: bool,
    /// Include bookmark URLs
    pub urls: bool,
}
