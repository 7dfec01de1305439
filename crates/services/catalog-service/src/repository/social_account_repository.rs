//! Linked third-party login accounts.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::cascade;
use super::entities::social_account::{self, ActiveModel, Entity as SocialAccountEntity};
use common::{AppError, AppResult};
use domain::{NewSocialAccount, SocialAccount};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SocialAccountRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<SocialAccount>>;

    /// Accounts linked to the user, ordered by id
    async fn find_social_accounts_by_user(&self, user_id: i32) -> AppResult<Vec<SocialAccount>>;

    /// Resolve a provider login to the linked account
    async fn find_by_provider(&self, provider: &str, social_id: &str) -> AppResult<Option<SocialAccount>>;

    async fn create(&self, account: NewSocialAccount) -> AppResult<SocialAccount>;

    /// Replace the stored token; `None` clears it
    async fn update_access_token(&self, id: i32, access_token: Option<String>) -> AppResult<SocialAccount>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

pub struct SocialAccountStore {
    db: DatabaseConnection,
}

impl SocialAccountStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SocialAccountRepository for SocialAccountStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<SocialAccount>> {
        let result = SocialAccountEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(SocialAccount::from))
    }

    async fn find_social_accounts_by_user(&self, user_id: i32) -> AppResult<Vec<SocialAccount>> {
        let accounts = SocialAccountEntity::find()
            .filter(social_account::Column::UserId.eq(user_id))
            .order_by_asc(social_account::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(accounts.into_iter().map(SocialAccount::from).collect())
    }

    async fn find_by_provider(&self, provider: &str, social_id: &str) -> AppResult<Option<SocialAccount>> {
        let result = SocialAccountEntity::find()
            .filter(social_account::Column::Provider.eq(provider))
            .filter(social_account::Column::SocialId.eq(social_id))
            .order_by_asc(social_account::Column::Id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(SocialAccount::from))
    }

    async fn create(&self, account: NewSocialAccount) -> AppResult<SocialAccount> {
        let active_model = ActiveModel {
            user_id: Set(account.user_id),
            provider: Set(account.provider),
            social_id: Set(account.social_id),
            access_token: Set(account.access_token),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(SocialAccount::from(model))
    }

    async fn update_access_token(&self, id: i32, access_token: Option<String>) -> AppResult<SocialAccount> {
        let account = SocialAccountEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = account.into();
        active.access_token = Set(access_token);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(SocialAccount::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        cascade::delete_row::<SocialAccountEntity, _>(&self.db, id).await
    }
}
