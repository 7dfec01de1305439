//! User engagement with games (favorites, comments) and genre tagging.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's favorite game. One row per (user, game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub user_id: i32,
    pub game_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i32,
    pub user_id: i32,
    pub game_id: i32,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewComment {
    pub user_id: i32,
    pub game_id: i32,
    pub body: String,
}

/// Genre tag (row of `genders`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

/// Genre assigned to a game. One row per (game, genre).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameGenre {
    pub game_id: i32,
    pub gender_id: i32,
}
