//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}
//!
//! Every foreign key is `ON DELETE RESTRICT`; cascading is done explicitly
//! by the repositories.

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users_tables;
mod m20240101_000002_create_games_tables;
mod m20240101_000003_create_pricing_tables;
mod m20240101_000004_create_engagement_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_tables::Migration),
            Box::new(m20240101_000002_create_games_tables::Migration),
            Box::new(m20240101_000003_create_pricing_tables::Migration),
            Box::new(m20240101_000004_create_engagement_tables::Migration),
        ]
    }
}
