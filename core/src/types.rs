//! Domain DTOs for the catalog API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates. Ids are
//! opaque strings: the client never originates or interprets them.

use serde::{Deserialize, Serialize};

/// Text shown in place of an absent or empty description.
pub const DESCRIPTION_PLACEHOLDER: &str = "N/A";

/// A single catalog record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Item {
    /// The description, or [`DESCRIPTION_PLACEHOLDER`] when there is none.
    pub fn display_description(&self) -> &str {
        match self.description.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => DESCRIPTION_PLACEHOLDER,
        }
    }

    /// Whether id, name or description contains `needle`.
    ///
    /// `needle` must already be lower-cased.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        self.id.to_lowercase().contains(needle)
            || self.name.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

/// Request body for both create and update. Sent exactly as drafted, so
/// empty strings reach the server unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemPayload {
    pub name: String,
    pub description: String,
}
