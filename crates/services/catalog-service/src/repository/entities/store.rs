//! Store database entity.

use sea_orm::entity::prelude::*;

use domain::Storefront;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub url: String,
    pub home_page: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comparative::Entity")]
    Comparatives,
}

impl Related<super::comparative::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comparatives.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Storefront {
    fn from(model: Model) -> Self {
        Storefront {
            id: model.id,
            url: model.url,
            home_page: model.home_page,
        }
    }
}
