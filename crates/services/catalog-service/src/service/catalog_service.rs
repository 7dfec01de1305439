//! Catalog service - registration and the nested read views.
//!
//! Views are assembled from batched queries: one query per table family,
//! never one per row.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;

use common::{AppError, AppResult};
use domain::{
    CharacteristicView, Comparative, CreateUser, GameCharacteristic, GameDetailView, NewUser, Password, User,
    UserProfileView,
};

use crate::repository::Repositories;

/// Catalog service trait for dependency injection.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Hash the password and store a new user
    async fn register_user(&self, user: CreateUser) -> AppResult<User>;

    /// User with linked accounts and favorite game ids
    async fn user_profile(&self, user_id: i32) -> AppResult<UserProfileView>;

    /// Game with media, builds (with current offers) and genres
    async fn game_detail(&self, game_id: i32) -> AppResult<GameDetailView>;

    /// One build with its platform and current offers
    async fn characteristic_detail(&self, characteristic_id: i32) -> AppResult<CharacteristicView>;

    /// Every price recorded for a build, oldest first
    async fn price_history(&self, characteristic_id: i32) -> AppResult<Vec<Comparative>>;
}

/// Concrete implementation of CatalogService over the repositories.
pub struct CatalogManager {
    repos: Repositories,
}

impl CatalogManager {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    /// Build views for many characteristics with three batched lookups.
    async fn characteristic_views(
        &self,
        characteristics: Vec<GameCharacteristic>,
    ) -> AppResult<Vec<CharacteristicView>> {
        if characteristics.is_empty() {
            return Ok(Vec::new());
        }

        let platform_ids: Vec<i32> = characteristics
            .iter()
            .filter_map(|c| c.platform_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let characteristic_ids: Vec<i32> = characteristics.iter().map(|c| c.id).collect();

        let (platforms, records) = futures::try_join!(
            self.repos.platforms.find_by_ids(&platform_ids),
            self.repos.comparatives.find_comparatives_by_characteristics(&characteristic_ids),
        )?;

        let store_ids: Vec<i32> = records
            .iter()
            .map(|r| r.stores_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let stores: BTreeMap<_, _> = self
            .repos
            .stores
            .find_by_ids(&store_ids)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        let platforms: BTreeMap<_, _> = platforms.into_iter().map(|p| (p.id, p)).collect();
        let mut histories: BTreeMap<i32, Vec<Comparative>> = BTreeMap::new();
        for record in records {
            histories.entry(record.characteristic_id).or_default().push(record);
        }

        let views = characteristics
            .into_iter()
            .map(|characteristic| {
                let platform = characteristic.platform_id.and_then(|id| platforms.get(&id).cloned());
                let history = histories.remove(&characteristic.id).unwrap_or_default();
                CharacteristicView::assemble(characteristic, platform, history, &stores)
            })
            .collect();

        Ok(views)
    }
}

#[async_trait]
impl CatalogService for CatalogManager {
    async fn register_user(&self, user: CreateUser) -> AppResult<User> {
        let password = Password::new(&user.password)?;

        let created = self
            .repos
            .users
            .create(NewUser {
                email: user.email,
                password_hash: password.into_string(),
                role: user.role,
                profile: user.profile,
            })
            .await?;

        tracing::info!(user_id = created.id, role = %created.role, "User registered");
        Ok(created)
    }

    async fn user_profile(&self, user_id: i32) -> AppResult<UserProfileView> {
        let user = self.repos.users.find_by_id(user_id).await?.ok_or(AppError::NotFound)?;

        let (accounts, favorites) = futures::try_join!(
            self.repos.social_accounts.find_social_accounts_by_user(user_id),
            self.repos.favorites.find_favorites_by_user(user_id),
        )?;

        Ok(UserProfileView::from(user)
            .with_social_accounts(accounts)
            .with_favorites(favorites))
    }

    async fn game_detail(&self, game_id: i32) -> AppResult<GameDetailView> {
        let game = self.repos.games.find_by_id(game_id).await?.ok_or(AppError::NotFound)?;

        let (media, characteristics, genres) = futures::try_join!(
            self.repos.media.find_media_by_game(game_id),
            self.repos.characteristics.find_characteristics_by_game(game_id),
            self.repos.genres.find_genres_by_game(game_id),
        )?;
        let characteristics = self.characteristic_views(characteristics).await?;

        tracing::debug!(game_id, builds = characteristics.len(), "Game detail assembled");

        let mut view = GameDetailView::from(game);
        view.media = media;
        view.characteristics = characteristics;
        view.genres = genres;
        Ok(view)
    }

    async fn characteristic_detail(&self, characteristic_id: i32) -> AppResult<CharacteristicView> {
        let characteristic = self
            .repos
            .characteristics
            .find_by_id(characteristic_id)
            .await?
            .ok_or(AppError::NotFound)?;

        self.characteristic_views(vec![characteristic])
            .await?
            .pop()
            .ok_or_else(|| AppError::internal("characteristic view missing"))
    }

    async fn price_history(&self, characteristic_id: i32) -> AppResult<Vec<Comparative>> {
        if self.repos.characteristics.find_by_id(characteristic_id).await?.is_none() {
            return Err(AppError::NotFound);
        }

        self.repos
            .comparatives
            .find_comparatives_by_characteristic(characteristic_id)
            .await
    }
}
