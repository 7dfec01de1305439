//! Platform database entity.

use sea_orm::entity::prelude::*;

use domain::Platform;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "platforms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_characteristic::Entity")]
    GameCharacteristics,
}

impl Related<super::game_characteristic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameCharacteristics.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Platform {
    fn from(model: Model) -> Self {
        Platform {
            id: model.id,
            name: model.name,
        }
    }
}
