//! Game media database entity.

use sea_orm::entity::prelude::*;

use domain::{DomainError, Media, MediaKind};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "media")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub game_id: i32,
    pub url: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub caption: Option<String>,
    pub media_type: String,
    pub uploaded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::game::Entity",
        from = "Column::GameId",
        to = "super::game::Column::Id"
    )]
    Game,
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Media {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Media {
            id: model.id,
            game_id: model.game_id,
            url: model.url,
            caption: model.caption,
            media_type: MediaKind::try_from(model.media_type.as_str())?,
            uploaded_at: model.uploaded_at,
        })
    }
}
