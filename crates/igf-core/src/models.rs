//! # Domain Models
//!
//! The catalog holds a single kind of entity: a game record. Every field apart
//! from the identifier is free-form text supplied by whoever shared the game.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categories that get a dedicated page. Any other `genre` value is still a
/// valid category, it just has no shortcut route.
pub const KNOWN_CATEGORIES: [&str; 4] = ["action", "sports", "educational", "puzzle"];

/// Opaque record identifier assigned by the store on insert.
///
/// What a well-formed id looks like is up to the store (an ObjectId hex string
/// for MongoDB, a UUID for the memory store). Malformed ids are treated as
/// absent records, never as parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for GameId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Every tracked field of a game record.
///
/// Serialized names match the share/edit form inputs, so the same struct is
/// used for form decoding and for store documents. Absent fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The record's category, e.g. "puzzle"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    /// Where the game can be played or downloaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot3: Option<String>,
}

impl GameFields {
    /// True when the record's category field equals `category` exactly.
    pub fn is_in_category(&self, category: &str) -> bool {
        self.genre.as_deref() == Some(category)
    }

    /// Screenshot URLs that were actually supplied, in display order.
    pub fn screenshots(&self) -> Vec<&str> {
        [&self.screenshot1, &self.screenshot2, &self.screenshot3]
            .into_iter()
            .filter_map(|s| s.as_deref())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// A stored game record: its identifier plus every tracked field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    #[serde(flatten)]
    pub fields: GameFields,
}
