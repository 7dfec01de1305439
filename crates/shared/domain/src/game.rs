//! Games and their media.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MEDIA_TYPE_IMAGE, MEDIA_TYPE_VIDEO};
use crate::error::DomainError;
use crate::update::nullable;

/// Game domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub is_active: bool,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewGame {
    pub title: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
}

fn default_active() -> bool {
    true
}

impl NewGame {
    /// An active game with only a title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_active: true,
            description: None,
            release_date: None,
            developer: None,
            publisher: None,
        }
    }
}

/// `None` leaves a column unchanged; `Some(None)` sets a nullable column to NULL
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGame {
    pub title: Option<String>,
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub release_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "nullable")]
    pub developer: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub publisher: Option<Option<String>>,
}

/// Kind of a media row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    #[serde(rename = "video")]
    Video,
    #[serde(rename = "imagen")]
    Image,
}

impl MediaKind {
    /// Stored column value
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Video => MEDIA_TYPE_VIDEO,
            MediaKind::Image => MEDIA_TYPE_IMAGE,
        }
    }
}

impl TryFrom<&str> for MediaKind {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            MEDIA_TYPE_VIDEO => Ok(MediaKind::Video),
            MEDIA_TYPE_IMAGE => Ok(MediaKind::Image),
            other => Err(DomainError::validation(format!("Unknown media type: {other}"))),
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screenshot or trailer attached to a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub id: i32,
    pub game_id: i32,
    pub url: String,
    pub caption: Option<String>,
    pub media_type: MediaKind,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewMedia {
    pub game_id: i32,
    pub url: String,
    pub caption: Option<String>,
    pub media_type: MediaKind,
}
