//! Plain repository reads and writes.

mod support;

use common::AppError;
use domain::{
    MediaKind, NewComment, NewGame, NewMedia, NewSocialAccount, NewStorefront, UpdateGame, UpdateStorefront,
    UpdateUser, UserProfile, UserRole,
};

use support::TestContext;

#[tokio::test]
async fn test_user_update_and_active_listing() {
    let ctx = TestContext::new().await;
    let alice = ctx.user("alice@x.com").await;
    let bob = ctx.user("bob@x.com").await;

    let updated = ctx
        .repos
        .users
        .update(
            bob.id,
            UpdateUser {
                role: Some(UserRole::Admin),
                is_active: Some(false),
                profile: Some(UserProfile {
                    city: Some("Lyon".to_string()),
                    ..UserProfile::default()
                }),
                ..UpdateUser::default()
            },
        )
        .await
        .unwrap();
    assert!(updated.is_admin());
    assert!(!updated.is_active);
    assert_eq!(updated.profile.city.as_deref(), Some("Lyon"));

    let active: Vec<_> = ctx.repos.users.list_active().await.unwrap().into_iter().map(|u| u.id).collect();
    assert_eq!(active, vec![alice.id]);

    let found = ctx.repos.users.find_by_email("bob@x.com").await.unwrap().unwrap();
    assert_eq!(found.role, UserRole::Admin);

    let err = ctx.repos.users.update(999, UpdateUser::default()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn test_game_listing_and_update() {
    let ctx = TestContext::new().await;
    let foo = ctx.game("Foo").await;
    let bar = ctx
        .repos
        .games
        .create(NewGame {
            is_active: false,
            developer: Some("Studio".to_string()),
            ..NewGame::titled("Bar")
        })
        .await
        .unwrap();

    let active: Vec<_> = ctx.repos.games.list_active().await.unwrap().into_iter().map(|g| g.id).collect();
    assert_eq!(active, vec![foo.id]);

    let renamed = ctx
        .repos
        .games
        .update(
            bar.id,
            UpdateGame {
                title: Some("Bar: Remastered".to_string()),
                ..UpdateGame::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.title, "Bar: Remastered");
    assert_eq!(renamed.developer.as_deref(), Some("Studio"));

    let cleared = ctx
        .repos
        .games
        .update(
            bar.id,
            UpdateGame {
                developer: Some(None),
                ..UpdateGame::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.developer, None);
    assert_eq!(cleared.title, "Bar: Remastered");

    let games = ctx.repos.games.find_by_ids(&[bar.id, foo.id, 404]).await.unwrap();
    assert_eq!(games.iter().map(|g| g.id).collect::<Vec<_>>(), vec![foo.id, bar.id]);
    assert!(ctx.repos.games.find_by_ids(&[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_media_caption_and_kind() {
    let ctx = TestContext::new().await;
    let game = ctx.game("Foo").await;

    let trailer = ctx
        .repos
        .media
        .create(NewMedia {
            game_id: game.id,
            url: "https://cdn.example/trailer.mp4".to_string(),
            caption: None,
            media_type: MediaKind::Video,
        })
        .await
        .unwrap();

    let captioned = ctx
        .repos
        .media
        .update_caption(trailer.id, Some("Launch trailer".to_string()))
        .await
        .unwrap();
    assert_eq!(captioned.caption.as_deref(), Some("Launch trailer"));
    assert_eq!(captioned.media_type, MediaKind::Video);

    ctx.repos.media.delete(trailer.id).await.unwrap();
    assert!(ctx.repos.media.find_media_by_game(game.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_social_account_token_refresh() {
    let ctx = TestContext::new().await;
    let user = ctx.user("a@x.com").await;
    let account = ctx
        .repos
        .social_accounts
        .create(NewSocialAccount {
            user_id: user.id,
            provider: Some("steam".to_string()),
            social_id: Some("765611".to_string()),
            access_token: Some("old".to_string()),
        })
        .await
        .unwrap();

    let refreshed = ctx
        .repos
        .social_accounts
        .update_access_token(account.id, Some("new".to_string()))
        .await
        .unwrap();
    assert_eq!(refreshed.access_token.as_deref(), Some("new"));

    assert!(ctx
        .repos
        .social_accounts
        .find_by_provider("steam", "other")
        .await
        .unwrap()
        .is_none());

    ctx.repos.social_accounts.delete(account.id).await.unwrap();
    assert!(ctx.repos.social_accounts.find_by_id(account.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_genre_tagging() {
    let ctx = TestContext::new().await;
    let foo = ctx.game("Foo").await;
    let bar = ctx.game("Bar").await;
    let rpg = ctx.repos.genres.create("RPG".to_string()).await.unwrap();

    ctx.repos.genres.tag_game(bar.id, rpg.id).await.unwrap();
    ctx.repos.genres.tag_game(foo.id, rpg.id).await.unwrap();

    let games = ctx.repos.genres.find_games_by_genre(rpg.id).await.unwrap();
    assert_eq!(games.iter().map(|g| g.id).collect::<Vec<_>>(), vec![foo.id, bar.id]);

    ctx.repos.genres.untag_game(bar.id, rpg.id).await.unwrap();
    let err = ctx.repos.genres.untag_game(bar.id, rpg.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    let renamed = ctx.repos.genres.rename(rpg.id, "Role-playing".to_string()).await.unwrap();
    assert_eq!(renamed.name, "Role-playing");
    assert!(ctx.repos.genres.find_by_name("RPG").await.unwrap().is_none());
    assert_eq!(ctx.repos.genres.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_favorites_in_both_directions() {
    let ctx = TestContext::new().await;
    let alice = ctx.user("alice@x.com").await;
    let bob = ctx.user("bob@x.com").await;
    let foo = ctx.game("Foo").await;
    let bar = ctx.game("Bar").await;

    ctx.repos.favorites.add(alice.id, bar.id).await.unwrap();
    ctx.repos.favorites.add(alice.id, foo.id).await.unwrap();
    ctx.repos.favorites.add(bob.id, foo.id).await.unwrap();

    let titles: Vec<_> = ctx
        .repos
        .favorites
        .find_favorite_games(alice.id)
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.title)
        .collect();
    assert_eq!(titles, vec!["Foo", "Bar"]);

    let fans: Vec<_> = ctx
        .repos
        .favorites
        .find_favorites_by_game(foo.id)
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.user_id)
        .collect();
    assert_eq!(fans, vec![alice.id, bob.id]);

    ctx.repos.favorites.remove(alice.id, foo.id).await.unwrap();
    assert!(!ctx.repos.favorites.exists(alice.id, foo.id).await.unwrap());
    assert!(matches!(
        ctx.repos.favorites.remove(alice.id, foo.id).await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn test_comment_edit() {
    let ctx = TestContext::new().await;
    let user = ctx.user("a@x.com").await;
    let game = ctx.game("Foo").await;

    let first = ctx
        .repos
        .comments
        .create(NewComment {
            user_id: user.id,
            game_id: game.id,
            body: "first".to_string(),
        })
        .await
        .unwrap();
    ctx.repos
        .comments
        .create(NewComment {
            user_id: user.id,
            game_id: game.id,
            body: "second".to_string(),
        })
        .await
        .unwrap();

    let edited = ctx.repos.comments.edit(first.id, "first!".to_string()).await.unwrap();
    assert_eq!(edited.body, "first!");
    assert_eq!(edited.created_at, first.created_at);

    let bodies: Vec<_> = ctx
        .repos
        .comments
        .find_comments_by_game(game.id)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.body)
        .collect();
    assert_eq!(bodies, vec!["first!", "second"]);
}

#[tokio::test]
async fn test_store_and_platform_updates() {
    let ctx = TestContext::new().await;
    let store = ctx
        .repos
        .stores
        .create(NewStorefront {
            url: "https://shop.example".to_string(),
            home_page: None,
        })
        .await
        .unwrap();

    let updated = ctx
        .repos
        .stores
        .update(
            store.id,
            UpdateStorefront {
                home_page: Some(Some("https://shop.example/".to_string())),
                ..UpdateStorefront::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.url, "https://shop.example");
    assert_eq!(updated.home_page.as_deref(), Some("https://shop.example/"));

    let cleared = ctx
        .repos
        .stores
        .update(
            store.id,
            UpdateStorefront {
                home_page: Some(None),
                ..UpdateStorefront::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.home_page, None);
    assert_eq!(cleared.url, "https://shop.example");
    assert_eq!(ctx.repos.stores.list().await.unwrap().len(), 1);

    let platform = ctx.platform("PS5").await;
    let renamed = ctx.repos.platforms.rename(platform.id, "PlayStation 5".to_string()).await.unwrap();
    assert_eq!(renamed.name, "PlayStation 5");
    assert_eq!(ctx.repos.platforms.find_by_ids(&[platform.id]).await.unwrap().len(), 1);
    assert_eq!(ctx.repos.platforms.list().await.unwrap()[0].name, "PlayStation 5");
}
