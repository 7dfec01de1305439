//! Integrity rules enforced by the store and surfaced as `StoreError`.

mod support;

use catalog_service_lib::repository::entities::{media, user};
use common::{AppError, StoreError};
use chrono::Utc;
use domain::{NewComment, NewComparative, NewUser, UserProfile, UserRole};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, Set};

use support::TestContext;

fn store_error(err: AppError) -> StoreError {
    match err {
        AppError::Store(e) => e,
        other => panic!("expected store error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_duplicate_email_is_unique_violation() {
    let ctx = TestContext::new().await;
    ctx.user("a@x.com").await;

    let err = ctx
        .repos
        .users
        .create(NewUser {
            email: "a@x.com".to_string(),
            password_hash: "other".to_string(),
            role: UserRole::Premium,
            profile: UserProfile::default(),
        })
        .await
        .unwrap_err();

    assert!(matches!(store_error(err), StoreError::UniqueViolation(_)));
    assert_eq!(ctx.repos.users.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_favorite_is_unique_violation() {
    let ctx = TestContext::new().await;
    let user = ctx.user("a@x.com").await;
    let game = ctx.game("Foo").await;

    ctx.repos.favorites.add(user.id, game.id).await.unwrap();
    let err = ctx.repos.favorites.add(user.id, game.id).await.unwrap_err();

    assert!(matches!(store_error(err), StoreError::UniqueViolation(_)));
    assert_eq!(ctx.repos.favorites.find_favorites_by_user(user.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_favorite_requires_existing_user_and_game() {
    let ctx = TestContext::new().await;
    let user = ctx.user("a@x.com").await;
    let game = ctx.game("Foo").await;

    let err = ctx.repos.favorites.add(user.id + 100, game.id).await.unwrap_err();
    assert!(matches!(store_error(err), StoreError::ForeignKeyViolation(_)));

    let err = ctx.repos.favorites.add(user.id, game.id + 100).await.unwrap_err();
    assert!(matches!(store_error(err), StoreError::ForeignKeyViolation(_)));
}

#[tokio::test]
async fn test_duplicate_genre_tag_is_unique_violation() {
    let ctx = TestContext::new().await;
    let game = ctx.game("Foo").await;
    let genre = ctx.repos.genres.create("RPG".to_string()).await.unwrap();

    ctx.repos.genres.tag_game(game.id, genre.id).await.unwrap();
    let err = ctx.repos.genres.tag_game(game.id, genre.id).await.unwrap_err();

    assert!(matches!(store_error(err), StoreError::UniqueViolation(_)));
}

#[tokio::test]
async fn test_duplicate_genre_name_is_unique_violation() {
    let ctx = TestContext::new().await;
    ctx.repos.genres.create("RPG".to_string()).await.unwrap();

    let err = ctx.repos.genres.create("RPG".to_string()).await.unwrap_err();

    assert!(matches!(store_error(err), StoreError::UniqueViolation(_)));
}

#[tokio::test]
async fn test_price_for_missing_characteristic_is_rejected() {
    let ctx = TestContext::new().await;
    let store = ctx
        .repos
        .stores
        .create(domain::NewStorefront {
            url: "https://shop.example".to_string(),
            home_page: None,
        })
        .await
        .unwrap();

    let err = ctx
        .repos
        .comparatives
        .record(NewComparative {
            characteristic_id: 999,
            offer_id: None,
            stores_id: store.id,
            price: Decimal::new(1999, 2),
            price_date: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(store_error(err), StoreError::ForeignKeyViolation(_)));
}

#[tokio::test]
async fn test_comment_for_missing_game_is_rejected() {
    let ctx = TestContext::new().await;
    let user = ctx.user("a@x.com").await;

    let err = ctx
        .repos
        .comments
        .create(NewComment {
            user_id: user.id,
            game_id: 404,
            body: "hello".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(store_error(err), StoreError::ForeignKeyViolation(_)));
}

#[tokio::test]
async fn test_missing_required_column_is_not_null_violation() {
    let ctx = TestContext::new().await;

    let active = user::ActiveModel {
        password_hash: Set("hash".to_string()),
        is_active: Set(true),
        role: Set("user".to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    let err = active.insert(ctx.db.connection()).await.unwrap_err();

    assert!(matches!(StoreError::from(err), StoreError::NotNullViolation(_)));
}

#[tokio::test]
async fn test_unknown_role_is_rejected_by_store() {
    let ctx = TestContext::new().await;

    let active = user::ActiveModel {
        email: Set("mod@x.com".to_string()),
        password_hash: Set("hash".to_string()),
        is_active: Set(true),
        role: Set("moderator".to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    let err = active.insert(ctx.db.connection()).await.unwrap_err();

    assert!(matches!(
        StoreError::from(err),
        StoreError::Unknown(msg) if msg.to_lowercase().contains("check")
    ));
    assert!(ctx.repos.users.find_by_email("mod@x.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_unknown_media_type_is_rejected_by_store() {
    let ctx = TestContext::new().await;
    let game = ctx.game("Foo").await;

    let active = media::ActiveModel {
        game_id: Set(game.id),
        url: Set("https://cdn.example/clip.gif".to_string()),
        caption: Set(None),
        media_type: Set("gif".to_string()),
        uploaded_at: Set(Utc::now()),
        ..Default::default()
    };
    let err = active.insert(ctx.db.connection()).await.unwrap_err();

    assert!(matches!(StoreError::from(err), StoreError::Unknown(_)));
    assert!(ctx.repos.media.find_media_by_game(game.id).await.unwrap().is_empty());
}
