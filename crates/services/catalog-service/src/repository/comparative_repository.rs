//! Price records.
//!
//! Records are append-only: a price change is recorded as a new row and
//! there is no update operation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::cascade;
use super::entities::comparative::{self, ActiveModel, Entity as ComparativeEntity};
use common::{AppError, AppResult};
use domain::{Comparative, NewComparative};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ComparativeRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Comparative>>;

    /// Price history of one build, oldest first
    async fn find_comparatives_by_characteristic(&self, characteristic_id: i32) -> AppResult<Vec<Comparative>>;

    /// Price histories of several builds in one query, oldest first
    async fn find_comparatives_by_characteristics(&self, characteristic_ids: &[i32]) -> AppResult<Vec<Comparative>>;

    /// Every price recorded at the store, oldest first
    async fn find_comparatives_by_store(&self, store_id: i32) -> AppResult<Vec<Comparative>>;

    /// Append a price record. A missing `price_date` means now.
    async fn record(&self, comparative: NewComparative) -> AppResult<Comparative>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

pub struct ComparativeStore {
    db: DatabaseConnection,
}

impl ComparativeStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ComparativeRepository for ComparativeStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Comparative>> {
        let result = ComparativeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Comparative::from))
    }

    async fn find_comparatives_by_characteristic(&self, characteristic_id: i32) -> AppResult<Vec<Comparative>> {
        let records = ComparativeEntity::find()
            .filter(comparative::Column::CharacteristicId.eq(characteristic_id))
            .order_by_asc(comparative::Column::PriceDate)
            .order_by_asc(comparative::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(records.into_iter().map(Comparative::from).collect())
    }

    async fn find_comparatives_by_characteristics(&self, characteristic_ids: &[i32]) -> AppResult<Vec<Comparative>> {
        if characteristic_ids.is_empty() {
            return Ok(Vec::new());
        }

        let records = ComparativeEntity::find()
            .filter(comparative::Column::CharacteristicId.is_in(characteristic_ids.to_vec()))
            .order_by_asc(comparative::Column::PriceDate)
            .order_by_asc(comparative::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(records.into_iter().map(Comparative::from).collect())
    }

    async fn find_comparatives_by_store(&self, store_id: i32) -> AppResult<Vec<Comparative>> {
        let records = ComparativeEntity::find()
            .filter(comparative::Column::StoresId.eq(store_id))
            .order_by_asc(comparative::Column::PriceDate)
            .order_by_asc(comparative::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(records.into_iter().map(Comparative::from).collect())
    }

    async fn record(&self, comparative: NewComparative) -> AppResult<Comparative> {
        let active_model = ActiveModel {
            characteristic_id: Set(comparative.characteristic_id),
            offer_id: Set(comparative.offer_id),
            stores_id: Set(comparative.stores_id),
            price: Set(comparative.price),
            price_date: Set(comparative.price_date.unwrap_or_else(chrono::Utc::now)),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Comparative::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        cascade::delete_row::<ComparativeEntity, _>(&self.db, id).await
    }
}
