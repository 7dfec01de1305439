//! Migration: Create genders, game_genders, favorites and comments tables.

use domain::GENRE_NAME_MAX_LENGTH;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Genders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Genders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Genders::Name)
                            .string_len(GENRE_NAME_MAX_LENGTH)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GameGenders::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(GameGenders::GameId).integer().not_null())
                    .col(ColumnDef::new(GameGenders::GenderId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_game_genders")
                            .col(GameGenders::GameId)
                            .col(GameGenders::GenderId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_genders_game_id")
                            .from(GameGenders::Table, GameGenders::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_genders_gender_id")
                            .from(GameGenders::Table, GameGenders::GenderId)
                            .to(Genders::Table, Genders::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Favorites::UserId).integer().not_null())
                    .col(ColumnDef::new(Favorites::GameId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_favorites")
                            .col(Favorites::UserId)
                            .col(Favorites::GameId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_user_id")
                            .from(Favorites::Table, Favorites::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_game_id")
                            .from(Favorites::Table, Favorites::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Comments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Comments::UserId).integer().not_null())
                    .col(ColumnDef::new(Comments::GameId).integer().not_null())
                    .col(ColumnDef::new(Comments::Body).text().not_null())
                    .col(
                        ColumnDef::new(Comments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_user_id")
                            .from(Comments::Table, Comments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_game_id")
                            .from(Comments::Table, Comments::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comments_game_id")
                    .table(Comments::Table)
                    .col(Comments::GameId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(GameGenders::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Genders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Genders {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum GameGenders {
    Table,
    GameId,
    GenderId,
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    UserId,
    GameId,
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
    UserId,
    GameId,
    Body,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Games {
    Table,
    Id,
}
