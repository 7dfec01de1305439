//! Genres and the game/genre tagging join table.
//!
//! Genres live in the `genders` table and tags in `game_genders`.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use super::cascade;
use super::entities::{
    game::{self, Entity as GameEntity},
    game_gender,
    gender::{self, ActiveModel, Entity as GenreEntity},
};
use common::{AppError, AppResult};
use domain::{DeletePolicy, Game, GameGenre, Genre};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait GenreRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Genre>>;

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Genre>>;

    /// All genres, ordered by id
    async fn list(&self) -> AppResult<Vec<Genre>>;

    /// Create a genre. Names are unique.
    async fn create(&self, name: String) -> AppResult<Genre>;

    async fn rename(&self, id: i32, name: String) -> AppResult<Genre>;

    /// Delete a genre. `Cascade` also untags it from every game.
    async fn delete(&self, id: i32, policy: DeletePolicy) -> AppResult<()>;

    /// Tag a game with a genre. Tagging twice is a unique violation.
    async fn tag_game(&self, game_id: i32, genre_id: i32) -> AppResult<GameGenre>;

    async fn untag_game(&self, game_id: i32, genre_id: i32) -> AppResult<()>;

    /// Genres of the game, ordered by id
    async fn find_genres_by_game(&self, game_id: i32) -> AppResult<Vec<Genre>>;

    /// Games tagged with the genre, ordered by id
    async fn find_games_by_genre(&self, genre_id: i32) -> AppResult<Vec<Game>>;
}

pub struct GenreStore {
    db: DatabaseConnection,
}

impl GenreStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GenreRepository for GenreStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Genre>> {
        let result = GenreEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Genre::from))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        let result = GenreEntity::find()
            .filter(gender::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Genre::from))
    }

    async fn list(&self) -> AppResult<Vec<Genre>> {
        let genres = GenreEntity::find()
            .order_by_asc(gender::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(genres.into_iter().map(Genre::from).collect())
    }

    async fn create(&self, name: String) -> AppResult<Genre> {
        let active_model = ActiveModel {
            name: Set(name),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Genre::from(model))
    }

    async fn rename(&self, id: i32, name: String) -> AppResult<Genre> {
        let genre = GenreEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = genre.into();
        active.name = Set(name);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Genre::from(model))
    }

    async fn delete(&self, id: i32, policy: DeletePolicy) -> AppResult<()> {
        if !policy.cascades() {
            return cascade::delete_row::<GenreEntity, _>(&self.db, id).await;
        }

        let txn = self.db.begin().await.map_err(AppError::from)?;
        cascade::clear_genre(&txn, id).await?;
        cascade::delete_row::<GenreEntity, _>(&txn, id).await?;
        txn.commit().await.map_err(AppError::from)?;

        tracing::debug!(genre_id = id, "Genre deleted and untagged");
        Ok(())
    }

    async fn tag_game(&self, game_id: i32, genre_id: i32) -> AppResult<GameGenre> {
        let active_model = game_gender::ActiveModel {
            game_id: Set(game_id),
            gender_id: Set(genre_id),
        };

        game_gender::Entity::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(GameGenre {
            game_id,
            gender_id: genre_id,
        })
    }

    async fn untag_game(&self, game_id: i32, genre_id: i32) -> AppResult<()> {
        let result = game_gender::Entity::delete_by_id((game_id, genre_id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn find_genres_by_game(&self, game_id: i32) -> AppResult<Vec<Genre>> {
        let genres = GenreEntity::find()
            .inner_join(game_gender::Entity)
            .filter(game_gender::Column::GameId.eq(game_id))
            .order_by_asc(gender::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(genres.into_iter().map(Genre::from).collect())
    }

    async fn find_games_by_genre(&self, genre_id: i32) -> AppResult<Vec<Game>> {
        let games = GameEntity::find()
            .inner_join(game_gender::Entity)
            .filter(game_gender::Column::GenderId.eq(genre_id))
            .order_by_asc(game::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(games.into_iter().map(Game::from).collect())
    }
}
