//! Genre tag database entity (table `genders`).

use sea_orm::entity::prelude::*;

use domain::Genre;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "genders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_gender::Entity")]
    GameGenders,
}

impl Related<super::game_gender::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameGenders.def()
    }
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_gender::Relation::Game.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_gender::Relation::Gender.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Genre {
    fn from(model: Model) -> Self {
        Genre {
            id: model.id,
            name: model.name,
        }
    }
}
