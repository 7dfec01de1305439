//! Screenshots and trailers attached to games.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::cascade;
use super::entities::media::{self, ActiveModel, Entity as MediaEntity};
use common::{AppError, AppResult};
use domain::{Media, NewMedia};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MediaRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Media>>;

    /// Media of the game, ordered by id
    async fn find_media_by_game(&self, game_id: i32) -> AppResult<Vec<Media>>;

    async fn create(&self, media: NewMedia) -> AppResult<Media>;

    async fn update_caption(&self, id: i32, caption: Option<String>) -> AppResult<Media>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

pub struct MediaStore {
    db: DatabaseConnection,
}

impl MediaStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MediaRepository for MediaStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Media>> {
        let result = MediaEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Media::try_from).transpose()?)
    }

    async fn find_media_by_game(&self, game_id: i32) -> AppResult<Vec<Media>> {
        let media = MediaEntity::find()
            .filter(media::Column::GameId.eq(game_id))
            .order_by_asc(media::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(media.into_iter().map(Media::try_from).collect::<Result<Vec<_>, _>>()?)
    }

    async fn create(&self, media: NewMedia) -> AppResult<Media> {
        let active_model = ActiveModel {
            game_id: Set(media.game_id),
            url: Set(media.url),
            caption: Set(media.caption),
            media_type: Set(media.media_type.as_str().to_string()),
            uploaded_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Media::try_from(model)?)
    }

    async fn update_caption(&self, id: i32, caption: Option<String>) -> AppResult<Media> {
        let media = MediaEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = media.into();
        active.caption = Set(caption);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Media::try_from(model)?)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        cascade::delete_row::<MediaEntity, _>(&self.db, id).await
    }
}
