//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.
//! Table and column names are the persisted wire contract.

pub mod comment;
pub mod comparative;
pub mod favorite;
pub mod game;
pub mod game_characteristic;
pub mod game_gender;
pub mod gender;
pub mod media;
pub mod platform;
pub mod social_account;
pub mod store;
pub mod user;
