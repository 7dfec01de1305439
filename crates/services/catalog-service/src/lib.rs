//! Catalog Service Library
//!
//! Persistence layer of the game catalog: SeaORM entities and migrations,
//! repositories with explicit relationship queries, and the catalog service
//! that assembles the nested read views.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use tracing::info;

use common::AppResult;
use domain::{CreateUser, User, UserRole};

use crate::config::CatalogServiceConfig;
use crate::infra::Database;
use crate::repository::Repositories;
use crate::service::{CatalogManager, CatalogService};

/// Connect, migrate and wire the service over the shared pool.
pub async fn build_service(config: &CatalogServiceConfig) -> AppResult<CatalogManager> {
    let db = Database::connect(&config.database).await?;
    let repos = Repositories::new(db.get_connection());

    Ok(CatalogManager::new(repos))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = CatalogServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Register a user from the command line.
pub async fn add_user(email: String, password: String, role: UserRole) -> Result<User, Box<dyn std::error::Error>> {
    let config = CatalogServiceConfig::from_env();
    let service = build_service(&config).await?;

    let user = service
        .register_user(CreateUser {
            email,
            password,
            role,
            profile: Default::default(),
        })
        .await
        .map_err(|e| {
            tracing::warn!(code = e.code(), "User registration failed: {}", e);
            e.user_message()
        })?;

    Ok(user)
}

/// Check that the configured database answers.
pub async fn ping() -> Result<(), Box<dyn std::error::Error>> {
    let config = CatalogServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;
    db.ping().await?;

    info!("Database reachable");
    Ok(())
}
