//! Price record database entity.

use sea_orm::entity::prelude::*;

use domain::Comparative;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comparatives")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub characteristic_id: i32,
    pub offer_id: Option<String>,
    pub stores_id: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub price_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::game_characteristic::Entity",
        from = "Column::CharacteristicId",
        to = "super::game_characteristic::Column::Id"
    )]
    GameCharacteristic,
    #[sea_orm(
        belongs_to = "super::store::Entity",
        from = "Column::StoresId",
        to = "super::store::Column::Id"
    )]
    Store,
}

impl Related<super::game_characteristic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameCharacteristic.def()
    }
}

impl Related<super::store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Store.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Comparative {
    fn from(model: Model) -> Self {
        Comparative {
            id: model.id,
            characteristic_id: model.characteristic_id,
            offer_id: model.offer_id,
            stores_id: model.stores_id,
            price: model.price,
            price_date: model.price_date,
        }
    }
}
