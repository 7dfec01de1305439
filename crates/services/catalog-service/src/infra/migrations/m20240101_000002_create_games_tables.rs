//! Migration: Create games, platforms, game_characteristics and media tables.

use domain::{
    COMPANY_MAX_LENGTH, FILETYPE_MAX_LENGTH, LONG_TEXT_MAX_LENGTH, MEDIA_TYPE_MAX_LENGTH,
    PLATFORM_NAME_MAX_LENGTH, TITLE_MAX_LENGTH, VALID_MEDIA_TYPES,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Games::Title).string_len(TITLE_MAX_LENGTH).not_null())
                    .col(
                        ColumnDef::new(Games::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Games::Description).text().null())
                    .col(ColumnDef::new(Games::ReleaseDate).date().null())
                    .col(ColumnDef::new(Games::Developer).string_len(COMPANY_MAX_LENGTH).null())
                    .col(ColumnDef::new(Games::Publisher).string_len(COMPANY_MAX_LENGTH).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Platforms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Platforms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Platforms::Name)
                            .string_len(PLATFORM_NAME_MAX_LENGTH)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GameCharacteristics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GameCharacteristics::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GameCharacteristics::GameId).integer().not_null())
                    .col(ColumnDef::new(GameCharacteristics::PlatformId).integer().null())
                    .col(
                        ColumnDef::new(GameCharacteristics::Filename)
                            .string_len(LONG_TEXT_MAX_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameCharacteristics::Filetype)
                            .string_len(FILETYPE_MAX_LENGTH)
                            .null(),
                    )
                    .col(ColumnDef::new(GameCharacteristics::Size).big_integer().null())
                    .col(ColumnDef::new(GameCharacteristics::Minimum).json().null())
                    .col(ColumnDef::new(GameCharacteristics::Recommended).json().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_characteristics_game_id")
                            .from(GameCharacteristics::Table, GameCharacteristics::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_characteristics_platform_id")
                            .from(GameCharacteristics::Table, GameCharacteristics::PlatformId)
                            .to(Platforms::Table, Platforms::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_game_characteristics_game_id")
                    .table(GameCharacteristics::Table)
                    .col(GameCharacteristics::GameId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Media::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Media::GameId).integer().not_null())
                    .col(ColumnDef::new(Media::Url).string_len(LONG_TEXT_MAX_LENGTH).not_null())
                    .col(ColumnDef::new(Media::Caption).text().null())
                    .col(
                        ColumnDef::new(Media::MediaType)
                            .string_len(MEDIA_TYPE_MAX_LENGTH)
                            .not_null()
                            .check(Expr::col(Media::MediaType).is_in(VALID_MEDIA_TYPES.iter().copied())),
                    )
                    .col(
                        ColumnDef::new(Media::UploadedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_media_game_id")
                            .from(Media::Table, Media::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_media_game_id")
                    .table(Media::Table)
                    .col(Media::GameId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(GameCharacteristics::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Platforms::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Games {
    Table,
    Id,
    Title,
    IsActive,
    Description,
    ReleaseDate,
    Developer,
    Publisher,
}

#[derive(DeriveIden)]
enum Platforms {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum GameCharacteristics {
    Table,
    Id,
    GameId,
    PlatformId,
    Filename,
    Filetype,
    Size,
    Minimum,
    Recommended,
}

#[derive(DeriveIden)]
enum Media {
    Table,
    Id,
    GameId,
    Url,
    Caption,
    MediaType,
    UploadedAt,
}
