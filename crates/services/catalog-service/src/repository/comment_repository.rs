//! Comments left by users on games.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::cascade;
use super::entities::comment::{self, ActiveModel, Entity as CommentEntity};
use common::{AppError, AppResult};
use domain::{Comment, NewComment};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Comment>>;

    /// Comments on the game, oldest first
    async fn find_comments_by_game(&self, game_id: i32) -> AppResult<Vec<Comment>>;

    /// Comments written by the user, oldest first
    async fn find_comments_by_user(&self, user_id: i32) -> AppResult<Vec<Comment>>;

    async fn create(&self, comment: NewComment) -> AppResult<Comment>;

    /// Replace the comment body
    async fn edit(&self, id: i32, body: String) -> AppResult<Comment>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

pub struct CommentStore {
    db: DatabaseConnection,
}

impl CommentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Comment>> {
        let result = CommentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Comment::from))
    }

    async fn find_comments_by_game(&self, game_id: i32) -> AppResult<Vec<Comment>> {
        let comments = CommentEntity::find()
            .filter(comment::Column::GameId.eq(game_id))
            .order_by_asc(comment::Column::CreatedAt)
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(comments.into_iter().map(Comment::from).collect())
    }

    async fn find_comments_by_user(&self, user_id: i32) -> AppResult<Vec<Comment>> {
        let comments = CommentEntity::find()
            .filter(comment::Column::UserId.eq(user_id))
            .order_by_asc(comment::Column::CreatedAt)
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(comments.into_iter().map(Comment::from).collect())
    }

    async fn create(&self, comment: NewComment) -> AppResult<Comment> {
        let active_model = ActiveModel {
            user_id: Set(comment.user_id),
            game_id: Set(comment.game_id),
            body: Set(comment.body),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Comment::from(model))
    }

    async fn edit(&self, id: i32, body: String) -> AppResult<Comment> {
        let comment = CommentEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = comment.into();
        active.body = Set(body);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Comment::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        cascade::delete_row::<CommentEntity, _>(&self.db, id).await
    }
}
