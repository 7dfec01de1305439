//! Shared setup for integration tests: a migrated in-memory SQLite database.

#![allow(dead_code)]

use catalog_service_lib::infra::Database;
use catalog_service_lib::repository::Repositories;
use catalog_service_lib::service::CatalogManager;
use common::DatabaseConfig;
use domain::{Game, GameCharacteristic, NewGame, NewGameCharacteristic, NewUser, Platform, User, UserProfile, UserRole};

pub struct TestContext {
    pub db: Database,
    pub repos: Repositories,
}

impl TestContext {
    pub async fn new() -> Self {
        let db = Database::connect(&DatabaseConfig::in_memory())
            .await
            .expect("in-memory database");
        let repos = Repositories::new(db.get_connection());
        Self { db, repos }
    }

    pub fn service(&self) -> CatalogManager {
        CatalogManager::new(self.repos.clone())
    }

    pub async fn user(&self, email: &str) -> User {
        self.repos
            .users
            .create(NewUser {
                email: email.to_string(),
                password_hash: "$argon2id$not-a-real-hash".to_string(),
                role: UserRole::User,
                profile: UserProfile::default(),
            })
            .await
            .expect("create user")
    }

    pub async fn game(&self, title: &str) -> Game {
        self.repos
            .games
            .create(NewGame::titled(title))
            .await
            .expect("create game")
    }

    pub async fn platform(&self, name: &str) -> Platform {
        self.repos
            .platforms
            .create(name.to_string())
            .await
            .expect("create platform")
    }

    pub async fn build(&self, game: &Game, platform: &Platform, filename: &str) -> GameCharacteristic {
        self.repos
            .characteristics
            .create(NewGameCharacteristic::new(game.id, filename).on_platform(platform.id))
            .await
            .expect("create characteristic")
    }
}
