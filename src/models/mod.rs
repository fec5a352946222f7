//! Data models for session and bookmark rendering.
//!
//! This module defines the types shared between the CLI and the navigators:
//!
//! - [`SessionMode`] / [`BookmarkMode`] - which projection a renderer emits
//! - [`PageEntry`] - the title/url pair extracted from a history entry
//!
//! [`PageEntry`] uses serde with a lenient deserializer for its fields
//! (in the `deserializers` module) so that a malformed field suppresses only
//! that field, never the whole entry.

pub mod deserializers;
pub mod modes;
pub mod page;

pub use modes::{BookmarkMode, SessionMode};
pub use page::PageEntry;
