//! Migration: Create users and social_accounts tables.

use domain::{
    ADDRESS_MAX_LENGTH, ALIAS_MAX_LENGTH, CITY_MAX_LENGTH, COUNTRY_MAX_LENGTH, EMAIL_MAX_LENGTH,
    LASTNAME_MAX_LENGTH, LONG_TEXT_MAX_LENGTH, PASSWORD_HASH_MAX_LENGTH, PHONE_MAX_LENGTH,
    PROVIDER_MAX_LENGTH, ROLE_MAX_LENGTH, ROLE_USER, SOCIAL_ID_MAX_LENGTH, VALID_ROLES, ZIP_CODE_MAX_LENGTH,
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
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(EMAIL_MAX_LENGTH)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::PasswordHash)
                            .string_len(PASSWORD_HASH_MAX_LENGTH)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Users::Alias).string_len(ALIAS_MAX_LENGTH).null())
                    .col(ColumnDef::new(Users::Lastname).string_len(LASTNAME_MAX_LENGTH).null())
                    .col(ColumnDef::new(Users::BirthDay).date().null())
                    .col(ColumnDef::new(Users::MobilePhone).string_len(PHONE_MAX_LENGTH).null())
                    .col(ColumnDef::new(Users::Address).string_len(ADDRESS_MAX_LENGTH).null())
                    .col(ColumnDef::new(Users::Country).string_len(COUNTRY_MAX_LENGTH).null())
                    .col(ColumnDef::new(Users::City).string_len(CITY_MAX_LENGTH).null())
                    .col(ColumnDef::new(Users::ZipCode).string_len(ZIP_CODE_MAX_LENGTH).null())
                    .col(ColumnDef::new(Users::Image).string_len(LONG_TEXT_MAX_LENGTH).null())
                    .col(ColumnDef::new(Users::Bio).text().null())
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Users::Role)
                            .string_len(ROLE_MAX_LENGTH)
                            .not_null()
                            .default(ROLE_USER)
                            .check(Expr::col(Users::Role).is_in(VALID_ROLES.iter().copied())),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SocialAccounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SocialAccounts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SocialAccounts::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(SocialAccounts::Provider)
                            .string_len(PROVIDER_MAX_LENGTH)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SocialAccounts::SocialId)
                            .string_len(SOCIAL_ID_MAX_LENGTH)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SocialAccounts::AccessToken)
                            .string_len(LONG_TEXT_MAX_LENGTH)
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_social_accounts_user_id")
                            .from(SocialAccounts::Table, SocialAccounts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_social_accounts_user_id")
                    .table(SocialAccounts::Table)
                    .col(SocialAccounts::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SocialAccounts::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    Alias,
    Lastname,
    BirthDay,
    MobilePhone,
    Address,
    Country,
    City,
    ZipCode,
    Image,
    Bio,
    IsActive,
    Role,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SocialAccounts {
    Table,
    Id,
    UserId,
    Provider,
    SocialId,
    AccessToken,
}
