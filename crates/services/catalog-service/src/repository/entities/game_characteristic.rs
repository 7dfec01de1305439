//! Game build database entity.
//!
//! `minimum` and `recommended` are JSON columns decoded straight into
//! `SystemRequirements`; a malformed document fails the query.

use sea_orm::entity::prelude::*;

use domain::{GameCharacteristic, SystemRequirements};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game_characteristics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub game_id: i32,
    pub platform_id: Option<i32>,
    pub filename: String,
    pub filetype: Option<String>,
    pub size: Option<i64>,
    #[sea_orm(column_type = "Json", nullable)]
    pub minimum: Option<SystemRequirements>,
    #[sea_orm(column_type = "Json", nullable)]
    pub recommended: Option<SystemRequirements>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::game::Entity",
        from = "Column::GameId",
        to = "super::game::Column::Id"
    )]
    Game,
    #[sea_orm(
        belongs_to = "super::platform::Entity",
        from = "Column::PlatformId",
        to = "super::platform::Column::Id"
    )]
    Platform,
    #[sea_orm(has_many = "super::comparative::Entity")]
    Comparatives,
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl Related<super::platform::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Platform.def()
    }
}

impl Related<super::comparative::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comparatives.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for GameCharacteristic {
    fn from(model: Model) -> Self {
        GameCharacteristic {
            id: model.id,
            game_id: model.game_id,
            platform_id: model.platform_id,
            filename: model.filename,
            filetype: model.filetype,
            size: model.size,
            minimum: model.minimum,
            recommended: model.recommended,
        }
    }
}
