//! Favorites join table.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

use super::entities::{
    favorite::{self, ActiveModel, Entity as FavoriteEntity},
    game::{self, Entity as GameEntity},
};
use common::{AppError, AppResult};
use domain::{Favorite, Game};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Mark a game as favorite. Adding the same pair twice is a unique violation.
    async fn add(&self, user_id: i32, game_id: i32) -> AppResult<Favorite>;

    async fn remove(&self, user_id: i32, game_id: i32) -> AppResult<()>;

    async fn exists(&self, user_id: i32, game_id: i32) -> AppResult<bool>;

    /// Favorites of the user, ordered by game id
    async fn find_favorites_by_user(&self, user_id: i32) -> AppResult<Vec<Favorite>>;

    /// Users who favorited the game, ordered by user id
    async fn find_favorites_by_game(&self, game_id: i32) -> AppResult<Vec<Favorite>>;

    /// The favorite games themselves, ordered by id
    async fn find_favorite_games(&self, user_id: i32) -> AppResult<Vec<Game>>;
}

pub struct FavoriteStore {
    db: DatabaseConnection,
}

impl FavoriteStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteStore {
    async fn add(&self, user_id: i32, game_id: i32) -> AppResult<Favorite> {
        let active_model = ActiveModel {
            user_id: Set(user_id),
            game_id: Set(game_id),
        };

        FavoriteEntity::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Favorite { user_id, game_id })
    }

    async fn remove(&self, user_id: i32, game_id: i32) -> AppResult<()> {
        let result = FavoriteEntity::delete_by_id((user_id, game_id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn exists(&self, user_id: i32, game_id: i32) -> AppResult<bool> {
        let count = FavoriteEntity::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .filter(favorite::Column::GameId.eq(game_id))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn find_favorites_by_user(&self, user_id: i32) -> AppResult<Vec<Favorite>> {
        let favorites = FavoriteEntity::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .order_by_asc(favorite::Column::GameId)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(favorites.into_iter().map(Favorite::from).collect())
    }

    async fn find_favorites_by_game(&self, game_id: i32) -> AppResult<Vec<Favorite>> {
        let favorites = FavoriteEntity::find()
            .filter(favorite::Column::GameId.eq(game_id))
            .order_by_asc(favorite::Column::UserId)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(favorites.into_iter().map(Favorite::from).collect())
    }

    async fn find_favorite_games(&self, user_id: i32) -> AppResult<Vec<Game>> {
        let games = GameEntity::find()
            .inner_join(FavoriteEntity)
            .filter(favorite::Column::UserId.eq(user_id))
            .order_by_asc(game::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(games.into_iter().map(Game::from).collect())
    }
}
