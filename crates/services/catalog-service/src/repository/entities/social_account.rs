//! Social login database entity.

use sea_orm::entity::prelude::*;

use domain::SocialAccount;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "social_accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub provider: Option<String>,
    pub social_id: Option<String>,
    pub access_token: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SocialAccount {
    fn from(model: Model) -> Self {
        SocialAccount {
            id: model.id,
            user_id: model.user_id,
            provider: model.provider,
            social_id: model.social_id,
            access_token: model.access_token,
        }
    }
}
