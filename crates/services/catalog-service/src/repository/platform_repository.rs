//! Platform repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::cascade;
use super::entities::platform::{self, ActiveModel, Entity as PlatformEntity};
use common::{AppError, AppResult};
use domain::{DeletePolicy, Platform};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PlatformRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Platform>>;

    /// Platforms with the given ids, ordered by id
    async fn find_by_ids(&self, ids: &[i32]) -> AppResult<Vec<Platform>>;

    async fn list(&self) -> AppResult<Vec<Platform>>;

    async fn create(&self, name: String) -> AppResult<Platform>;

    async fn rename(&self, id: i32, name: String) -> AppResult<Platform>;

    /// Delete a platform. `Cascade` also removes its builds and their prices.
    async fn delete(&self, id: i32, policy: DeletePolicy) -> AppResult<()>;
}

pub struct PlatformStore {
    db: DatabaseConnection,
}

impl PlatformStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlatformRepository for PlatformStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Platform>> {
        let result = PlatformEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Platform::from))
    }

    async fn find_by_ids(&self, ids: &[i32]) -> AppResult<Vec<Platform>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let platforms = PlatformEntity::find()
            .filter(platform::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(platform::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(platforms.into_iter().map(Platform::from).collect())
    }

    async fn list(&self) -> AppResult<Vec<Platform>> {
        let platforms = PlatformEntity::find()
            .order_by_asc(platform::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(platforms.into_iter().map(Platform::from).collect())
    }

    async fn create(&self, name: String) -> AppResult<Platform> {
        let active_model = ActiveModel {
            name: Set(name),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Platform::from(model))
    }

    async fn rename(&self, id: i32, name: String) -> AppResult<Platform> {
        let platform = PlatformEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = platform.into();
        active.name = Set(name);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Platform::from(model))
    }

    async fn delete(&self, id: i32, policy: DeletePolicy) -> AppResult<()> {
        if !policy.cascades() {
            return cascade::delete_row::<PlatformEntity, _>(&self.db, id).await;
        }

        let txn = self.db.begin().await.map_err(AppError::from)?;
        cascade::clear_platform(&txn, id).await?;
        cascade::delete_row::<PlatformEntity, _>(&txn, id).await?;
        txn.commit().await.map_err(AppError::from)?;

        tracing::debug!(platform_id = id, "Platform deleted with dependants");
        Ok(())
    }
}
