//! Row removal shared by the repositories.
//!
//! The helpers are generic over [`ConnectionTrait`] so cascades run on the
//! transaction opened by the calling repository. Children are always
//! removed before their parents; every foreign key is `ON DELETE RESTRICT`.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PrimaryKeyTrait, QueryFilter, QuerySelect};

use super::entities::{comment, comparative, favorite, game_characteristic, game_gender, media, social_account};
use common::{AppError, AppResult};

/// Delete one row by integer primary key.
///
/// Returns [`AppError::NotFound`] when no row matched.
pub(crate) async fn delete_row<E, C>(conn: &C, id: i32) -> AppResult<()>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    C: ConnectionTrait,
{
    let result = E::delete_by_id(id).exec(conn).await.map_err(AppError::from)?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(())
}

/// Remove the given builds together with their price history
async fn delete_characteristics<C: ConnectionTrait>(conn: &C, ids: Vec<i32>) -> AppResult<()> {
    if ids.is_empty() {
        return Ok(());
    }

    comparative::Entity::delete_many()
        .filter(comparative::Column::CharacteristicId.is_in(ids.clone()))
        .exec(conn)
        .await?;

    game_characteristic::Entity::delete_many()
        .filter(game_characteristic::Column::Id.is_in(ids))
        .exec(conn)
        .await?;

    Ok(())
}

async fn characteristic_ids<C: ConnectionTrait>(
    conn: &C,
    filter: sea_orm::sea_query::SimpleExpr,
) -> AppResult<Vec<i32>> {
    let ids = game_characteristic::Entity::find()
        .select_only()
        .column(game_characteristic::Column::Id)
        .filter(filter)
        .into_tuple::<i32>()
        .all(conn)
        .await?;

    Ok(ids)
}

/// Remove every row that references the user
pub(crate) async fn clear_user<C: ConnectionTrait>(conn: &C, user_id: i32) -> AppResult<()> {
    social_account::Entity::delete_many()
        .filter(social_account::Column::UserId.eq(user_id))
        .exec(conn)
        .await?;

    favorite::Entity::delete_many()
        .filter(favorite::Column::UserId.eq(user_id))
        .exec(conn)
        .await?;

    comment::Entity::delete_many()
        .filter(comment::Column::UserId.eq(user_id))
        .exec(conn)
        .await?;

    Ok(())
}

/// Remove every row that references the game, builds and prices included
pub(crate) async fn clear_game<C: ConnectionTrait>(conn: &C, game_id: i32) -> AppResult<()> {
    media::Entity::delete_many()
        .filter(media::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;

    favorite::Entity::delete_many()
        .filter(favorite::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;

    comment::Entity::delete_many()
        .filter(comment::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;

    game_gender::Entity::delete_many()
        .filter(game_gender::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;

    let ids = characteristic_ids(conn, game_characteristic::Column::GameId.eq(game_id)).await?;
    delete_characteristics(conn, ids).await
}

/// Remove the platform's builds and their prices
pub(crate) async fn clear_platform<C: ConnectionTrait>(conn: &C, platform_id: i32) -> AppResult<()> {
    let ids = characteristic_ids(conn, game_characteristic::Column::PlatformId.eq(platform_id)).await?;
    delete_characteristics(conn, ids).await
}

/// Remove the build's price history
pub(crate) async fn clear_characteristic<C: ConnectionTrait>(conn: &C, characteristic_id: i32) -> AppResult<()> {
    comparative::Entity::delete_many()
        .filter(comparative::Column::CharacteristicId.eq(characteristic_id))
        .exec(conn)
        .await?;

    Ok(())
}

/// Remove every price recorded at the store
pub(crate) async fn clear_store<C: ConnectionTrait>(conn: &C, store_id: i32) -> AppResult<()> {
    comparative::Entity::delete_many()
        .filter(comparative::Column::StoresId.eq(store_id))
        .exec(conn)
        .await?;

    Ok(())
}

/// Untag the genre from every game
pub(crate) async fn clear_genre<C: ConnectionTrait>(conn: &C, genre_id: i32) -> AppResult<()> {
    game_gender::Entity::delete_many()
        .filter(game_gender::Column::GenderId.eq(genre_id))
        .exec(conn)
        .await?;

    Ok(())
}
