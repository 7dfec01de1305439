//! Repository layer for data access.
//!
//! Each table family has a repository trait for dependency injection and a
//! SeaORM-backed `*Store` implementation. Relationships are read through
//! explicit query methods; entities never hold back-references.

mod cascade;
pub mod entities;

pub mod characteristic_repository;
pub mod comment_repository;
pub mod comparative_repository;
pub mod favorite_repository;
pub mod game_repository;
pub mod genre_repository;
pub mod media_repository;
pub mod platform_repository;
pub mod social_account_repository;
pub mod storefront_repository;
pub mod user_repository;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

pub use characteristic_repository::{CharacteristicRepository, CharacteristicStore};
pub use comment_repository::{CommentRepository, CommentStore};
pub use comparative_repository::{ComparativeRepository, ComparativeStore};
pub use favorite_repository::{FavoriteRepository, FavoriteStore};
pub use game_repository::{GameRepository, GameStore};
pub use genre_repository::{GenreRepository, GenreStore};
pub use media_repository::{MediaRepository, MediaStore};
pub use platform_repository::{PlatformRepository, PlatformStore};
pub use social_account_repository::{SocialAccountRepository, SocialAccountStore};
pub use storefront_repository::{StorefrontRepository, StorefrontStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use characteristic_repository::MockCharacteristicRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use comment_repository::MockCommentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use comparative_repository::MockComparativeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use favorite_repository::MockFavoriteRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use game_repository::MockGameRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use genre_repository::MockGenreRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use media_repository::MockMediaRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use platform_repository::MockPlatformRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use social_account_repository::MockSocialAccountRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use storefront_repository::MockStorefrontRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

/// Every repository behind a trait object, sharing one connection pool.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub social_accounts: Arc<dyn SocialAccountRepository>,
    pub games: Arc<dyn GameRepository>,
    pub media: Arc<dyn MediaRepository>,
    pub platforms: Arc<dyn PlatformRepository>,
    pub characteristics: Arc<dyn CharacteristicRepository>,
    pub stores: Arc<dyn StorefrontRepository>,
    pub comparatives: Arc<dyn ComparativeRepository>,
    pub genres: Arc<dyn GenreRepository>,
    pub favorites: Arc<dyn FavoriteRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

impl Repositories {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: Arc::new(UserStore::new(db.clone())),
            social_accounts: Arc::new(SocialAccountStore::new(db.clone())),
            games: Arc::new(GameStore::new(db.clone())),
            media: Arc::new(MediaStore::new(db.clone())),
            platforms: Arc::new(PlatformStore::new(db.clone())),
            characteristics: Arc::new(CharacteristicStore::new(db.clone())),
            stores: Arc::new(StorefrontStore::new(db.clone())),
            comparatives: Arc::new(ComparativeStore::new(db.clone())),
            genres: Arc::new(GenreStore::new(db.clone())),
            favorites: Arc::new(FavoriteStore::new(db.clone())),
            comments: Arc::new(CommentStore::new(db)),
        }
    }
}
