use super::*;
use crate::server::util::password;

/// Tests changing nickname and password together.
///
/// Expected: Ok with the new nickname and a hash matching the new password
#[tokio::test]
async fn updates_nickname_and_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    factory::player::create_player_with(db, "alice@x.com", "alice").await?;

    let service = PlayerService::new(db);
    let player = service
        .update_player(
            "alice@x.com",
            UpdatePlayerParam {
                nickname: Some("alice_new".to_string()),
                password: Some("Changed#456".to_string()),
            },
        )
        .await?;

    assert_eq!(player.nickname, "alice_new");
    assert!(password::verify("Changed#456", &player.password_hash));

    Ok(())
}

/// Tests keeping the current nickname is not a conflict.
///
/// Expected: Ok with nickname unchanged
#[tokio::test]
async fn accepts_own_nickname() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    factory::player::create_player_with(db, "alice@x.com", "alice").await?;

    let service = PlayerService::new(db);
    let player = service.update_nickname("alice@x.com", "alice").await?;

    assert_eq!(player.nickname, "alice");

    Ok(())
}

/// Tests taking another player's nickname.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_nickname_of_other_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    factory::player::create_player_with(db, "alice@x.com", "alice").await?;
    factory::player::create_player_with(db, "bob@x.com", "bob").await?;

    let service = PlayerService::new(db);
    let result = service.update_nickname("alice@x.com", "bob").await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests a weak password is rejected without touching the stored hash.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_weak_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let alice = factory::player::create_player_with(db, "alice@x.com", "alice").await?;

    let service = PlayerService::new(db);
    let result = service.change_password("alice@x.com", "weak").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let player = service.get_player("alice@x.com").await?;
    assert_eq!(player.password_hash, alice.password);

    Ok(())
}

/// Tests updating skin and profile image URLs.
///
/// Expected: Ok for valid URLs, BadRequest for invalid ones
#[tokio::test]
async fn updates_image_urls() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    factory::player::create_player_with(db, "alice@x.com", "alice").await?;

    let service = PlayerService::new(db);
    let player = service
        .update_skin("alice@x.com", "https://x.com/skin.png")
        .await?;
    assert_eq!(player.skin_url.as_deref(), Some("https://x.com/skin.png"));

    let player = service
        .update_profile_image("alice@x.com", "https://x.com/me.png")
        .await?;
    assert_eq!(player.profile_image_url.as_deref(), Some("https://x.com/me.png"));

    let result = service.update_skin("alice@x.com", "javascript:alert(1)").await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests updating a player that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PlayerService::new(db);
    let result = service.update_nickname("ghost@x.com", "ghost").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests two players claiming the same nickname at the same time.
///
/// Expected: one Ok, the other Err(AppError::Conflict)
#[tokio::test]
async fn concurrent_nickname_claims_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let alice = factory::create_player(db).await?;
    let bob = factory::create_player(db).await?;

    let service = PlayerService::new(db);
    let (first, second) = tokio::join!(
        service.update_nickname(&alice.email, "shadow"),
        service.update_nickname(&bob.email, "shadow")
    );

    let results = [first, second];
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .any(|r| matches!(r, Err(AppError::Conflict(_)))));

    Ok(())
}

/// Tests changing only the password.
///
/// Expected: Ok with nickname kept and the new password verifying; weak password is rejected
#[tokio::test]
async fn changes_password_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    factory::player::create_player_with(db, "alice@x.com", "alice").await?;

    let service = PlayerService::new(db);
    let player = service.change_password("alice@x.com", "Rotated#789").await?;

    assert_eq!(player.nickname, "alice");
    assert!(password::verify("Rotated#789", &player.password_hash));

    let weak = service.change_password("alice@x.com", "short").await;
    assert!(matches!(weak, Err(AppError::BadRequest(_))));

    Ok(())
}
