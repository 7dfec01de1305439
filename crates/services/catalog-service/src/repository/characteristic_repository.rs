//! Per-platform game builds.
//!
//! Empty requirement documents are stored as `NULL`, so a build read back
//! never carries `Some` of an empty document.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::cascade;
use super::entities::game_characteristic::{self, ActiveModel, Entity as CharacteristicEntity};
use common::{AppError, AppResult};
use domain::{DeletePolicy, GameCharacteristic, NewGameCharacteristic, SystemRequirements, UpdateGameCharacteristic};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CharacteristicRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<GameCharacteristic>>;

    /// Builds of the game, ordered by id
    async fn find_characteristics_by_game(&self, game_id: i32) -> AppResult<Vec<GameCharacteristic>>;

    /// Builds released for the platform, ordered by id
    async fn find_characteristics_by_platform(&self, platform_id: i32) -> AppResult<Vec<GameCharacteristic>>;

    async fn create(&self, characteristic: NewGameCharacteristic) -> AppResult<GameCharacteristic>;

    async fn update(&self, id: i32, changes: UpdateGameCharacteristic) -> AppResult<GameCharacteristic>;

    /// Delete a build. `Cascade` also removes its price history.
    async fn delete(&self, id: i32, policy: DeletePolicy) -> AppResult<()>;
}

pub struct CharacteristicStore {
    db: DatabaseConnection,
}

impl CharacteristicStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn non_empty(requirements: Option<SystemRequirements>) -> Option<SystemRequirements> {
    requirements.filter(|r| !r.is_empty())
}

#[async_trait]
impl CharacteristicRepository for CharacteristicStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<GameCharacteristic>> {
        let result = CharacteristicEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(GameCharacteristic::from))
    }

    async fn find_characteristics_by_game(&self, game_id: i32) -> AppResult<Vec<GameCharacteristic>> {
        let characteristics = CharacteristicEntity::find()
            .filter(game_characteristic::Column::GameId.eq(game_id))
            .order_by_asc(game_characteristic::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(characteristics.into_iter().map(GameCharacteristic::from).collect())
    }

    async fn find_characteristics_by_platform(&self, platform_id: i32) -> AppResult<Vec<GameCharacteristic>> {
        let characteristics = CharacteristicEntity::find()
            .filter(game_characteristic::Column::PlatformId.eq(platform_id))
            .order_by_asc(game_characteristic::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(characteristics.into_iter().map(GameCharacteristic::from).collect())
    }

    async fn create(&self, characteristic: NewGameCharacteristic) -> AppResult<GameCharacteristic> {
        let active_model = ActiveModel {
            game_id: Set(characteristic.game_id),
            platform_id: Set(characteristic.platform_id),
            filename: Set(characteristic.filename),
            filetype: Set(characteristic.filetype),
            size: Set(characteristic.size),
            minimum: Set(non_empty(characteristic.minimum)),
            recommended: Set(non_empty(characteristic.recommended)),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(GameCharacteristic::from(model))
    }

    async fn update(&self, id: i32, changes: UpdateGameCharacteristic) -> AppResult<GameCharacteristic> {
        let characteristic = CharacteristicEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = characteristic.into();

        if let Some(platform_id) = changes.platform_id {
            active.platform_id = Set(platform_id);
        }
        if let Some(filename) = changes.filename {
            active.filename = Set(filename);
        }
        if let Some(filetype) = changes.filetype {
            active.filetype = Set(filetype);
        }
        if let Some(size) = changes.size {
            active.size = Set(size);
        }
        if let Some(minimum) = changes.minimum {
            active.minimum = Set(non_empty(minimum));
        }
        if let Some(recommended) = changes.recommended {
            active.recommended = Set(non_empty(recommended));
        }

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(GameCharacteristic::from(model))
    }

    async fn delete(&self, id: i32, policy: DeletePolicy) -> AppResult<()> {
        if !policy.cascades() {
            return cascade::delete_row::<CharacteristicEntity, _>(&self.db, id).await;
        }

        let txn = self.db.begin().await.map_err(AppError::from)?;
        cascade::clear_characteristic(&txn, id).await?;
        cascade::delete_row::<CharacteristicEntity, _>(&txn, id).await?;
        txn.commit().await.map_err(AppError::from)?;

        tracing::debug!(characteristic_id = id, "Characteristic deleted with price history");
        Ok(())
    }
}
