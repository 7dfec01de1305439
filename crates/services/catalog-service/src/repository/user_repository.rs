//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::cascade;
use super::entities::user::{self, set_profile, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{DeletePolicy, NewUser, UpdateUser, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List all users, oldest first
    async fn list(&self) -> AppResult<Vec<User>>;

    /// List users whose account is active
    async fn list_active(&self) -> AppResult<Vec<User>>;

    /// Create a new user. The password must already be hashed.
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// Update user fields
    async fn update(&self, id: i32, changes: UpdateUser) -> AppResult<User>;

    /// Delete user by ID
    async fn delete(&self, id: i32, policy: DeletePolicy) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::try_from).transpose()?)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::try_from).transpose()?)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let users = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(users.into_iter().map(User::try_from).collect::<Result<Vec<_>, _>>()?)
    }

    async fn list_active(&self) -> AppResult<Vec<User>> {
        let users = UserEntity::find()
            .filter(user::Column::IsActive.eq(true))
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(users.into_iter().map(User::try_from).collect::<Result<Vec<_>, _>>()?)
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let mut active_model = ActiveModel {
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            is_active: Set(true),
            role: Set(user.role.as_str().to_string()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };
        set_profile(&mut active_model, user.profile);

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(User::try_from(model)?)
    }

    async fn update(&self, id: i32, changes: UpdateUser) -> AppResult<User> {
        let user = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = user.into();

        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(role) = changes.role {
            active.role = Set(role.as_str().to_string());
        }
        if let Some(is_active) = changes.is_active {
            active.is_active = Set(is_active);
        }
        if let Some(profile) = changes.profile {
            set_profile(&mut active, profile);
        }

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(User::try_from(model)?)
    }

    async fn delete(&self, id: i32, policy: DeletePolicy) -> AppResult<()> {
        if !policy.cascades() {
            return cascade::delete_row::<UserEntity, _>(&self.db, id).await;
        }

        let txn = self.db.begin().await.map_err(AppError::from)?;
        cascade::clear_user(&txn, id).await?;
        cascade::delete_row::<UserEntity, _>(&txn, id).await?;
        txn.commit().await.map_err(AppError::from)?;

        tracing::debug!(user_id = id, "User deleted with dependants");
        Ok(())
    }
}
