//! Nested read views assembled by the catalog service.

mod support;

use std::collections::BTreeMap;

use catalog_service_lib::service::CatalogService;
use chrono::{Duration, TimeZone, Utc};
use common::AppError;
use domain::{
    CreateUser, MediaKind, NewComparative, NewGameCharacteristic, NewMedia, NewSocialAccount, NewStorefront,
    Password, SystemRequirements, ToDocument, UpdateGameCharacteristic, UserProfile, UserRole,
};
use rust_decimal::Decimal;

use support::TestContext;

#[tokio::test]
async fn test_game_detail_reaches_its_characteristic() {
    let ctx = TestContext::new().await;
    let game = ctx.game("Foo").await;
    let platform = ctx.platform("PC").await;
    ctx.build(&game, &platform, "f.txt").await;

    let detail = ctx.service().game_detail(game.id).await.unwrap();

    assert_eq!(detail.characteristics.len(), 1);
    let doc = detail.to_document().unwrap();
    assert_eq!(doc["title"], "Foo");
    assert_eq!(doc["characteristics"].as_array().map(Vec::len), Some(1));
    assert_eq!(doc["characteristics"][0]["filename"], "f.txt");
    assert_eq!(doc["characteristics"][0]["platform"]["name"], "PC");
    assert_eq!(doc["media"], serde_json::json!([]));
}

#[tokio::test]
async fn test_game_detail_reaches_characteristic_without_platform() {
    let ctx = TestContext::new().await;
    let game = ctx.game("Foo").await;
    ctx.repos
        .characteristics
        .create(NewGameCharacteristic::new(game.id, "f.txt"))
        .await
        .unwrap();

    let detail = ctx.service().game_detail(game.id).await.unwrap();

    assert_eq!(detail.characteristics.len(), 1);
    assert!(detail.characteristics[0].platform.is_none());
    let doc = detail.to_document().unwrap();
    assert_eq!(doc["characteristics"][0]["filename"], "f.txt");
    assert!(doc["characteristics"][0]["platform"].is_null());
    assert!(doc["characteristics"][0]["platform_id"].is_null());
}

#[tokio::test]
async fn test_game_detail_includes_media_and_genres() {
    let ctx = TestContext::new().await;
    let game = ctx.game("Foo").await;
    let rpg = ctx.repos.genres.create("RPG".to_string()).await.unwrap();
    let indie = ctx.repos.genres.create("Indie".to_string()).await.unwrap();
    ctx.repos.genres.tag_game(game.id, indie.id).await.unwrap();
    ctx.repos.genres.tag_game(game.id, rpg.id).await.unwrap();
    ctx.repos
        .media
        .create(NewMedia {
            game_id: game.id,
            url: "https://cdn.example/shot.png".to_string(),
            caption: Some("Title screen".to_string()),
            media_type: MediaKind::Image,
        })
        .await
        .unwrap();

    let detail = ctx.service().game_detail(game.id).await.unwrap();

    let names: Vec<_> = detail.genres.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["RPG", "Indie"]);
    assert_eq!(detail.media.len(), 1);

    let doc = detail.to_document().unwrap();
    assert_eq!(doc["media"][0]["media_type"], "imagen");
}

#[tokio::test]
async fn test_game_detail_missing_game() {
    let ctx = TestContext::new().await;

    let result = ctx.service().game_detail(1).await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_current_offers_and_price_history() {
    let ctx = TestContext::new().await;
    let game = ctx.game("Foo").await;
    let platform = ctx.platform("PC").await;
    let build = ctx.build(&game, &platform, "f.txt").await;
    let shop = ctx
        .repos
        .stores
        .create(NewStorefront {
            url: "https://shop.example".to_string(),
            home_page: Some("https://shop.example/home".to_string()),
        })
        .await
        .unwrap();
    let bazaar = ctx
        .repos
        .stores
        .create(NewStorefront {
            url: "https://bazaar.example".to_string(),
            home_page: None,
        })
        .await
        .unwrap();

    let start = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    for (store_id, cents, offset) in [(shop.id, 2999, 0), (shop.id, 1999, 2), (bazaar.id, 2499, 1)] {
        ctx.repos
            .comparatives
            .record(NewComparative {
                characteristic_id: build.id,
                offer_id: None,
                stores_id: store_id,
                price: Decimal::new(cents, 2),
                price_date: Some(start + Duration::days(offset)),
            })
            .await
            .unwrap();
    }

    let service = ctx.service();
    let history = service.price_history(build.id).await.unwrap();
    let dates: Vec<_> = history.iter().map(|r| r.price_date).collect();
    assert_eq!(history.len(), 3);
    assert!(dates.windows(2).all(|w| w[0] <= w[1]));

    let view = service.characteristic_detail(build.id).await.unwrap();
    assert_eq!(view.offers.len(), 2);
    assert_eq!(view.offers[0].offer.stores_id, shop.id);
    assert_eq!(view.offers[0].offer.price.round_dp(2), Decimal::new(1999, 2));
    assert_eq!(
        view.offers[0].store.as_ref().map(|s| s.url.as_str()),
        Some("https://shop.example")
    );
    assert_eq!(view.lowest_price.map(|p| p.round_dp(2)), Some(Decimal::new(1999, 2)));

    assert!(matches!(service.price_history(build.id + 1).await, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_price_date_defaults_to_now() {
    let ctx = TestContext::new().await;
    let game = ctx.game("Foo").await;
    let platform = ctx.platform("PC").await;
    let build = ctx.build(&game, &platform, "f.txt").await;
    let store = ctx
        .repos
        .stores
        .create(NewStorefront {
            url: "https://shop.example".to_string(),
            home_page: None,
        })
        .await
        .unwrap();

    let before = Utc::now() - Duration::seconds(1);
    let record = ctx
        .repos
        .comparatives
        .record(NewComparative {
            characteristic_id: build.id,
            offer_id: Some("sku-9".to_string()),
            stores_id: store.id,
            price: Decimal::new(500, 2),
            price_date: None,
        })
        .await
        .unwrap();

    assert!(record.price_date >= before);
    assert_eq!(record.offer_id.as_deref(), Some("sku-9"));
}

#[tokio::test]
async fn test_requirement_documents_round_trip() {
    let ctx = TestContext::new().await;
    let game = ctx.game("Foo").await;
    let platform = ctx.platform("PC").await;

    let minimum = SystemRequirements {
        os: Some("Windows 10".to_string()),
        memory: Some("8 GB".to_string()),
        extra: BTreeMap::from([("vr".to_string(), "optional".to_string())]),
        ..SystemRequirements::default()
    };
    let created = ctx
        .repos
        .characteristics
        .create(NewGameCharacteristic {
            filetype: Some("zip".to_string()),
            size: Some(4_294_967_296),
            minimum: Some(minimum.clone()),
            recommended: Some(SystemRequirements::default()),
            ..NewGameCharacteristic::new(game.id, "foo-win64.zip").on_platform(platform.id)
        })
        .await
        .unwrap();

    let loaded = ctx
        .repos
        .characteristics
        .find_by_id(created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.minimum, Some(minimum));
    assert_eq!(loaded.recommended, None);
    assert_eq!(loaded.size, Some(4_294_967_296));

    let updated = ctx
        .repos
        .characteristics
        .update(
            created.id,
            UpdateGameCharacteristic {
                recommended: Some(Some(SystemRequirements {
                    graphics: Some("GTX 1060".to_string()),
                    ..SystemRequirements::default()
                })),
                ..UpdateGameCharacteristic::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(
        updated.recommended.and_then(|r| r.graphics).as_deref(),
        Some("GTX 1060")
    );
    assert_eq!(updated.filename, "foo-win64.zip");

    let detached = ctx
        .repos
        .characteristics
        .update(
            created.id,
            UpdateGameCharacteristic {
                platform_id: Some(None),
                filetype: Some(None),
                minimum: Some(None),
                ..UpdateGameCharacteristic::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(detached.platform_id, None);
    assert_eq!(detached.filetype, None);
    assert_eq!(detached.minimum, None);
    assert_eq!(detached.size, Some(4_294_967_296));
    assert!(ctx
        .repos
        .characteristics
        .find_characteristics_by_platform(platform.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_registered_user_profile() {
    let ctx = TestContext::new().await;
    let service = ctx.service();

    let user = service
        .register_user(CreateUser {
            email: "a@x.com".to_string(),
            password: "correct horse battery".to_string(),
            role: UserRole::Premium,
            profile: UserProfile {
                alias: Some("ax".to_string()),
                ..UserProfile::default()
            },
        })
        .await
        .unwrap();
    assert!(Password::from_hash(user.password_hash.clone()).verify("correct horse battery"));

    let profile = service.user_profile(user.id).await.unwrap();
    let doc = profile.to_document().unwrap();
    assert_eq!(doc["social_accounts"], serde_json::json!([]));
    assert_eq!(doc["role"], "premium");
    assert_eq!(doc["alias"], "ax");
    assert!(doc.get("password_hash").is_none());

    let game = ctx.game("Foo").await;
    ctx.repos.favorites.add(user.id, game.id).await.unwrap();
    ctx.repos
        .social_accounts
        .create(NewSocialAccount {
            user_id: user.id,
            provider: Some("github".to_string()),
            social_id: Some("gh-42".to_string()),
            access_token: Some("token".to_string()),
        })
        .await
        .unwrap();

    let profile = service.user_profile(user.id).await.unwrap();
    assert_eq!(profile.social_accounts.len(), 1);
    assert_eq!(profile.favorite_game_ids, vec![game.id]);

    let linked = ctx
        .repos
        .social_accounts
        .find_by_provider("github", "gh-42")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(linked.user_id, user.id);
}
