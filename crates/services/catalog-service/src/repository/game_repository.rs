//! Game repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::cascade;
use super::entities::game::{self, ActiveModel, Entity as GameEntity};
use common::{AppError, AppResult};
use domain::{DeletePolicy, Game, NewGame, UpdateGame};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Game repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Game>>;

    /// Games with the given ids, ordered by id. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[i32]) -> AppResult<Vec<Game>>;

    async fn list(&self) -> AppResult<Vec<Game>>;

    /// Games visible in the catalog
    async fn list_active(&self) -> AppResult<Vec<Game>>;

    async fn create(&self, game: NewGame) -> AppResult<Game>;

    async fn update(&self, id: i32, changes: UpdateGame) -> AppResult<Game>;

    /// Delete a game. `Cascade` also removes media, favorites, comments,
    /// genre tags, builds and their prices.
    async fn delete(&self, id: i32, policy: DeletePolicy) -> AppResult<()>;
}

pub struct GameStore {
    db: DatabaseConnection,
}

impl GameStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GameRepository for GameStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Game>> {
        let result = GameEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Game::from))
    }

    async fn find_by_ids(&self, ids: &[i32]) -> AppResult<Vec<Game>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let games = GameEntity::find()
            .filter(game::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(game::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(games.into_iter().map(Game::from).collect())
    }

    async fn list(&self) -> AppResult<Vec<Game>> {
        let games = GameEntity::find()
            .order_by_asc(game::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(games.into_iter().map(Game::from).collect())
    }

    async fn list_active(&self) -> AppResult<Vec<Game>> {
        let games = GameEntity::find()
            .filter(game::Column::IsActive.eq(true))
            .order_by_asc(game::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(games.into_iter().map(Game::from).collect())
    }

    async fn create(&self, game: NewGame) -> AppResult<Game> {
        let active_model = ActiveModel {
            title: Set(game.title),
            is_active: Set(game.is_active),
            description: Set(game.description),
            release_date: Set(game.release_date),
            developer: Set(game.developer),
            publisher: Set(game.publisher),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Game::from(model))
    }

    async fn update(&self, id: i32, changes: UpdateGame) -> AppResult<Game> {
        let game = GameEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = game.into();

        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(is_active) = changes.is_active {
            active.is_active = Set(is_active);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(release_date) = changes.release_date {
            active.release_date = Set(release_date);
        }
        if let Some(developer) = changes.developer {
            active.developer = Set(developer);
        }
        if let Some(publisher) = changes.publisher {
            active.publisher = Set(publisher);
        }

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Game::from(model))
    }

    async fn delete(&self, id: i32, policy: DeletePolicy) -> AppResult<()> {
        if !policy.cascades() {
            return cascade::delete_row::<GameEntity, _>(&self.db, id).await;
        }

        let txn = self.db.begin().await.map_err(AppError::from)?;
        cascade::clear_game(&txn, id).await?;
        cascade::delete_row::<GameEntity, _>(&txn, id).await?;
        txn.commit().await.map_err(AppError::from)?;

        tracing::debug!(game_id = id, "Game deleted with dependants");
        Ok(())
    }
}
