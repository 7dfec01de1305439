//! Database connection and initialization.

use std::time::Duration;

use common::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement};
use sea_orm_migration::MigratorTrait;

use super::migrations::Migrator;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the pool and apply pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let database = Self::connect_without_migrations(config).await?;

        if let Err(e) = database.run_migrations().await {
            tracing::error!("Failed to run migrations: {}", e);
            return Err(e);
        }

        tracing::info!("Database connected and migrations applied");

        Ok(database)
    }

    /// Connect without running migrations (for CLI commands).
    pub async fn connect_without_migrations(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(connect_options(config)).await?;
        Ok(Self { connection })
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Run pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Rollback the last migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Get migration status (list all migrations with applied status).
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        use sea_orm::{EntityTrait, QueryOrder};
        use sea_orm_migration::seaql_migrations;

        // Missing bookkeeping table means nothing is applied yet
        let has_table = self
            .connection
            .query_one(Statement::from_string(
                self.connection.get_database_backend(),
                bookkeeping_probe(self.connection.get_database_backend()),
            ))
            .await?
            .is_some();

        let applied: std::collections::HashSet<String> = if has_table {
            seaql_migrations::Entity::find()
                .order_by_asc(seaql_migrations::Column::Version)
                .all(&self.connection)
                .await?
                .into_iter()
                .map(|m| m.version)
                .collect()
        } else {
            Default::default()
        };

        let migrations: Vec<(String, bool)> = Migrator::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let is_applied = applied.contains(&name);
                (name, is_applied)
            })
            .collect();

        Ok(migrations)
    }

    /// Drop every table and run all migrations fresh.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}

fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(config.sqlx_logging);
    options
}

fn bookkeeping_probe(backend: sea_orm::DatabaseBackend) -> String {
    match backend {
        sea_orm::DatabaseBackend::Sqlite => {
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'seaql_migrations'".to_string()
        }
        sea_orm::DatabaseBackend::Postgres => {
            "SELECT tablename FROM pg_tables WHERE tablename = 'seaql_migrations'".to_string()
        }
        _ => {
            "SELECT table_name FROM information_schema.tables WHERE table_name = 'seaql_migrations'".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_applies_all_migrations() {
        let db = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();

        let status = db.migration_status().await.unwrap();
        assert_eq!(status.len(), 4);
        assert!(status.iter().all(|(_, applied)| *applied));
        db.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_status_before_migrations() {
        let db = Database::connect_without_migrations(&DatabaseConfig::in_memory())
            .await
            .unwrap();

        let status = db.migration_status().await.unwrap();
        assert!(status.iter().all(|(_, applied)| !*applied));
    }

    #[tokio::test]
    async fn test_rollback_then_reapply() {
        let db = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();

        db.rollback_migration().await.unwrap();
        let status = db.migration_status().await.unwrap();
        assert!(!status.last().unwrap().1);

        db.run_migrations().await.unwrap();
        let status = db.migration_status().await.unwrap();
        assert!(status.last().unwrap().1);
    }
}
