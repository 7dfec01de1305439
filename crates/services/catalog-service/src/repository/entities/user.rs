//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{DomainError, User, UserProfile, UserRole};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub alias: Option<String>,
    pub lastname: Option<String>,
    pub birth_day: Option<Date>,
    pub mobile_phone: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub image: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub is_active: bool,
    pub role: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::social_account::Entity")]
    SocialAccounts,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comments,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorites,
}

impl Related<super::social_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SocialAccounts.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorites.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Write every profile column of the active model
pub(crate) fn set_profile(active: &mut ActiveModel, profile: UserProfile) {
    active.alias = sea_orm::Set(profile.alias);
    active.lastname = sea_orm::Set(profile.lastname);
    active.birth_day = sea_orm::Set(profile.birth_day);
    active.mobile_phone = sea_orm::Set(profile.mobile_phone);
    active.address = sea_orm::Set(profile.address);
    active.country = sea_orm::Set(profile.country);
    active.city = sea_orm::Set(profile.city);
    active.zip_code = sea_orm::Set(profile.zip_code);
    active.image = sea_orm::Set(profile.image);
    active.bio = sea_orm::Set(profile.bio);
}

/// Convert database model to domain entity
impl TryFrom<Model> for User {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(User {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            profile: UserProfile {
                alias: model.alias,
                lastname: model.lastname,
                birth_day: model.birth_day,
                mobile_phone: model.mobile_phone,
                address: model.address,
                country: model.country,
                city: model.city,
                zip_code: model.zip_code,
                image: model.image,
                bio: model.bio,
            },
            is_active: model.is_active,
            role: UserRole::try_from(model.role.as_str())?,
            created_at: model.created_at,
        })
    }
}
