//! Domain layer - Core catalog entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The `database` feature only lets JSON documents be used as ORM columns.

pub mod catalog;
pub mod constants;
pub mod document;
pub mod engagement;
pub mod error;
pub mod game;
pub mod password;
pub mod policy;
pub mod pricing;
pub mod update;
pub mod user;

pub use catalog::{GameCharacteristic, NewGameCharacteristic, Platform, SystemRequirements, UpdateGameCharacteristic};
pub use constants::*;
pub use document::{CharacteristicView, GameDetailView, OfferView, ToDocument, UserProfileView};
pub use engagement::{Comment, Favorite, GameGenre, Genre, NewComment};
pub use error::{DomainError, DomainResult};
pub use game::{Game, Media, MediaKind, NewGame, NewMedia, UpdateGame};
pub use password::Password;
pub use policy::DeletePolicy;
pub use pricing::{Comparative, NewComparative, NewStorefront, Storefront, UpdateStorefront};
pub use user::{CreateUser, NewSocialAccount, NewUser, SocialAccount, UpdateUser, User, UserProfile, UserRole};
