//! Serialization documents.
//!
//! Every entity converts to a flat document of its own columns. Nested
//! shapes are separate named views so a caller always knows which one it
//! gets:
//!
//! - [`UserProfileView`]: user + social accounts + favorite game ids
//! - [`GameDetailView`]: game + media + characteristics + genres
//! - [`CharacteristicView`]: characteristic + platform + current offers
//! - [`OfferView`]: price record + its store

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::catalog::{GameCharacteristic, Platform};
use crate::engagement::{Comment, Favorite, GameGenre, Genre};
use crate::error::DomainResult;
use crate::game::{Game, Media};
use crate::pricing::{current_offers, lowest_price, Comparative, Storefront};
use crate::user::{SocialAccount, User};

/// Deterministic conversion to a key-value document.
pub trait ToDocument: Serialize {
    fn to_document(&self) -> DomainResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl ToDocument for User {}
impl ToDocument for SocialAccount {}
impl ToDocument for Game {}
impl ToDocument for Media {}
impl ToDocument for Platform {}
impl ToDocument for GameCharacteristic {}
impl ToDocument for Storefront {}
impl ToDocument for Comparative {}
impl ToDocument for Genre {}
impl ToDocument for GameGenre {}
impl ToDocument for Favorite {}
impl ToDocument for Comment {}

/// User document with linked accounts and favorites inlined.
///
/// Relationship fields are always present; unloaded relationships are empty.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfileView {
    #[serde(flatten)]
    pub user: User,
    pub social_accounts: Vec<SocialAccount>,
    pub favorite_game_ids: Vec<i32>,
}

impl From<User> for UserProfileView {
    fn from(user: User) -> Self {
        Self {
            user,
            social_accounts: Vec::new(),
            favorite_game_ids: Vec::new(),
        }
    }
}

impl UserProfileView {
    pub fn with_social_accounts(mut self, mut accounts: Vec<SocialAccount>) -> Self {
        accounts.sort_by_key(|a| a.id);
        self.social_accounts = accounts;
        self
    }

    pub fn with_favorites(mut self, favorites: Vec<Favorite>) -> Self {
        let mut ids: Vec<i32> = favorites.into_iter().map(|f| f.game_id).collect();
        ids.sort_unstable();
        self.favorite_game_ids = ids;
        self
    }
}

impl ToDocument for UserProfileView {}

/// Current price at one store
#[derive(Debug, Clone, Serialize)]
pub struct OfferView {
    #[serde(flatten)]
    pub offer: Comparative,
    pub store: Option<Storefront>,
}

impl ToDocument for OfferView {}

/// Characteristic document with its platform and current offers inlined
#[derive(Debug, Clone, Serialize)]
pub struct CharacteristicView {
    #[serde(flatten)]
    pub characteristic: GameCharacteristic,
    pub platform: Option<Platform>,
    pub offers: Vec<OfferView>,
    pub lowest_price: Option<Decimal>,
}

impl CharacteristicView {
    /// Build the view from a characteristic and its price history.
    ///
    /// Only the newest record per store becomes an offer. Stores missing
    /// from `stores` are rendered as `null`.
    pub fn assemble(
        characteristic: GameCharacteristic,
        platform: Option<Platform>,
        history: Vec<Comparative>,
        stores: &BTreeMap<i32, Storefront>,
    ) -> Self {
        let latest = current_offers(history);
        let lowest_price = lowest_price(&latest);
        let offers = latest
            .into_iter()
            .map(|offer| OfferView {
                store: stores.get(&offer.stores_id).cloned(),
                offer,
            })
            .collect();

        Self {
            characteristic,
            platform,
            offers,
            lowest_price,
        }
    }
}

impl ToDocument for CharacteristicView {}

/// Game document with media, builds and genres inlined
#[derive(Debug, Clone, Serialize)]
pub struct GameDetailView {
    #[serde(flatten)]
    pub game: Game,
    pub media: Vec<Media>,
    pub characteristics: Vec<CharacteristicView>,
    pub genres: Vec<Genre>,
}

impl From<Game> for GameDetailView {
    fn from(game: Game) -> Self {
        Self {
            game,
            media: Vec::new(),
            characteristics: Vec::new(),
            genres: Vec::new(),
        }
    }
}

impl ToDocument for GameDetailView {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::{UserProfile, UserRole};
    use chrono::{TimeZone, Utc};

    fn user() -> User {
        User {
            id: 1,
            email: "a@x.com".to_string(),
            password_hash: "secret-hash".to_string(),
            profile: UserProfile {
                alias: Some("ax".to_string()),
                ..UserProfile::default()
            },
            is_active: true,
            role: UserRole::User,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_user_document_is_flat_and_hides_password() {
        let doc = user().to_document().unwrap();

        assert_eq!(doc["email"], "a@x.com");
        assert_eq!(doc["alias"], "ax");
        assert_eq!(doc["role"], "user");
        assert!(doc.get("password_hash").is_none());
        assert!(doc.get("profile").is_none());
    }

    #[test]
    fn test_profile_without_accounts_has_empty_sequence() {
        let doc = UserProfileView::from(user()).to_document().unwrap();

        assert_eq!(doc["social_accounts"], serde_json::json!([]));
        assert_eq!(doc["favorite_game_ids"], serde_json::json!([]));
        assert_eq!(doc["email"], "a@x.com");
    }

    #[test]
    fn test_profile_orders_favorites() {
        let view = UserProfileView::from(user()).with_favorites(vec![
            Favorite { user_id: 1, game_id: 9 },
            Favorite { user_id: 1, game_id: 3 },
        ]);
        assert_eq!(view.favorite_game_ids, vec![3, 9]);
    }

    #[test]
    fn test_characteristic_view_uses_current_offers() {
        let characteristic = GameCharacteristic {
            id: 5,
            game_id: 1,
            platform_id: Some(2),
            filename: "f.txt".to_string(),
            filetype: None,
            size: None,
            minimum: None,
            recommended: None,
        };
        let at = |day| Utc.with_ymd_and_hms(2024, 2, day, 0, 0, 0).unwrap();
        let history = vec![
            Comparative {
                id: 1,
                characteristic_id: 5,
                offer_id: None,
                stores_id: 1,
                price: Decimal::new(2999, 2),
                price_date: at(1),
            },
            Comparative {
                id: 2,
                characteristic_id: 5,
                offer_id: None,
                stores_id: 1,
                price: Decimal::new(1999, 2),
                price_date: at(2),
            },
        ];
        let stores = BTreeMap::from([(
            1,
            Storefront {
                id: 1,
                url: "https://shop.example".to_string(),
                home_page: None,
            },
        )]);

        let view = CharacteristicView::assemble(characteristic, None, history, &stores);

        assert_eq!(view.offers.len(), 1);
        assert_eq!(view.offers[0].offer.id, 2);
        assert_eq!(view.lowest_price, Some(Decimal::new(1999, 2)));

        let doc = view.to_document().unwrap();
        assert_eq!(doc["filename"], "f.txt");
        assert_eq!(doc["offers"][0]["store"]["url"], "https://shop.example");
        assert!(doc["platform"].is_null());
    }
}
