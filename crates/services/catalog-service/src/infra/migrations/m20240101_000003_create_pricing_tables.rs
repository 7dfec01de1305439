//! Migration: Create stores and comparatives tables.

use domain::{LONG_TEXT_MAX_LENGTH, OFFER_ID_MAX_LENGTH, PRICE_PRECISION, PRICE_SCALE};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Stores::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Stores::Url).string_len(LONG_TEXT_MAX_LENGTH).not_null())
                    .col(ColumnDef::new(Stores::HomePage).string_len(LONG_TEXT_MAX_LENGTH).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Comparatives::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Comparatives::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Comparatives::CharacteristicId).integer().not_null())
                    .col(
                        ColumnDef::new(Comparatives::OfferId)
                            .string_len(OFFER_ID_MAX_LENGTH)
                            .null(),
                    )
                    .col(ColumnDef::new(Comparatives::StoresId).integer().not_null())
                    .col(
                        ColumnDef::new(Comparatives::Price)
                            .decimal_len(PRICE_PRECISION, PRICE_SCALE)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Comparatives::PriceDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comparatives_characteristic_id")
                            .from(Comparatives::Table, Comparatives::CharacteristicId)
                            .to(GameCharacteristics::Table, GameCharacteristics::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comparatives_stores_id")
                            .from(Comparatives::Table, Comparatives::StoresId)
                            .to(Stores::Table, Stores::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Price history is read per characteristic, newest last
        manager
            .create_index(
                Index::create()
                    .name("idx_comparatives_characteristic_price_date")
                    .table(Comparatives::Table)
                    .col(Comparatives::CharacteristicId)
                    .col(Comparatives::PriceDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comparatives::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Stores::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Stores {
    Table,
    Id,
    Url,
    HomePage,
}

#[derive(DeriveIden)]
enum Comparatives {
    Table,
    Id,
    CharacteristicId,
    OfferId,
    StoresId,
    Price,
    PriceDate,
}

#[derive(DeriveIden)]
enum GameCharacteristics {
    Table,
    Id,
}
