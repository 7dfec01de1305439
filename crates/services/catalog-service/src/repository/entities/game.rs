//! Game database entity.

use sea_orm::entity::prelude::*;

use domain::Game;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub is_active: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub release_date: Option<Date>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::media::Entity")]
    Media,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorites,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comments,
    #[sea_orm(has_many = "super::game_characteristic::Entity")]
    GameCharacteristics,
    #[sea_orm(has_many = "super::game_gender::Entity")]
    GameGenders,
}

impl Related<super::media::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Media.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorites.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl Related<super::game_characteristic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameCharacteristics.def()
    }
}

impl Related<super::game_gender::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameGenders.def()
    }
}

impl Related<super::gender::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_gender::Relation::Gender.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_gender::Relation::Game.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Game {
    fn from(model: Model) -> Self {
        Game {
            id: model.id,
            title: model.title,
            is_active: model.is_active,
            description: model.description,
            release_date: model.release_date,
            developer: model.developer,
            publisher: model.publisher,
        }
    }
}
