//! Store repository implementation (`stores` table).

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::cascade;
use super::entities::store::{self, ActiveModel, Entity as StoreEntity};
use common::{AppError, AppResult};
use domain::{DeletePolicy, NewStorefront, Storefront, UpdateStorefront};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StorefrontRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Storefront>>;

    /// Stores with the given ids, ordered by id
    async fn find_by_ids(&self, ids: &[i32]) -> AppResult<Vec<Storefront>>;

    async fn list(&self) -> AppResult<Vec<Storefront>>;

    async fn create(&self, store: NewStorefront) -> AppResult<Storefront>;

    async fn update(&self, id: i32, changes: UpdateStorefront) -> AppResult<Storefront>;

    /// Delete a store. `Cascade` also removes every price recorded there.
    async fn delete(&self, id: i32, policy: DeletePolicy) -> AppResult<()>;
}

pub struct StorefrontStore {
    db: DatabaseConnection,
}

impl StorefrontStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StorefrontRepository for StorefrontStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Storefront>> {
        let result = StoreEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Storefront::from))
    }

    async fn find_by_ids(&self, ids: &[i32]) -> AppResult<Vec<Storefront>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let stores = StoreEntity::find()
            .filter(store::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(store::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(stores.into_iter().map(Storefront::from).collect())
    }

    async fn list(&self) -> AppResult<Vec<Storefront>> {
        let stores = StoreEntity::find()
            .order_by_asc(store::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(stores.into_iter().map(Storefront::from).collect())
    }

    async fn create(&self, store: NewStorefront) -> AppResult<Storefront> {
        let active_model = ActiveModel {
            url: Set(store.url),
            home_page: Set(store.home_page),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Storefront::from(model))
    }

    async fn update(&self, id: i32, changes: UpdateStorefront) -> AppResult<Storefront> {
        let store = StoreEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = store.into();

        if let Some(url) = changes.url {
            active.url = Set(url);
        }
        if let Some(home_page) = changes.home_page {
            active.home_page = Set(home_page);
        }

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Storefront::from(model))
    }

    async fn delete(&self, id: i32, policy: DeletePolicy) -> AppResult<()> {
        if !policy.cascades() {
            return cascade::delete_row::<StoreEntity, _>(&self.db, id).await;
        }

        let txn = self.db.begin().await.map_err(AppError::from)?;
        cascade::clear_store(&txn, id).await?;
        cascade::delete_row::<StoreEntity, _>(&txn, id).await?;
        txn.commit().await.map_err(AppError::from)?;

        tracing::debug!(store_id = id, "Store deleted with price records");
        Ok(())
    }
}
