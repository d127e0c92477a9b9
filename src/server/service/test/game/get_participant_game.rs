use super::*;
use crate::server::error::auth::AuthError;

/// Tests a participant reading a game they played.
///
/// Expected: Ok with every participant listed
#[tokio::test]
async fn returns_game_to_participant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    factory::player::create_player_with(db, "alice@x.com", "alice").await?;
    factory::player::create_player_with(db, "bob@x.com", "bob").await?;

    let service = GameService::new(db, GameRules::default());
    let created = service
        .create_game(create_param(&["alice@x.com", "bob@x.com"], "alice@x.com", 120))
        .await?;

    let game = service.get_participant_game(created.id, "bob@x.com").await?;

    assert_eq!(game.id, created.id);
    assert_eq!(game.players.len(), 2);

    Ok(())
}

/// Tests that an outsider gets the same error for an existing and a missing game.
///
/// Expected: Err(AuthError::AccessDenied) for both, never NotFound
#[tokio::test]
async fn outsider_cannot_tell_missing_from_existing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    factory::player::create_player_with(db, "alice@x.com", "alice").await?;
    factory::player::create_player_with(db, "bob@x.com", "bob").await?;
    factory::player::create_player_with(db, "eve@x.com", "eve").await?;

    let service = GameService::new(db, GameRules::default());
    let created = service
        .create_game(create_param(&["alice@x.com", "bob@x.com"], "bob@x.com", 120))
        .await?;

    let existing = service.get_participant_game(created.id, "eve@x.com").await;
    let missing = service.get_participant_game(created.id + 100, "eve@x.com").await;

    for result in [existing, missing] {
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
        ));
    }

    // Admin path still distinguishes the two
    assert!(matches!(
        service.get_game(created.id + 100).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
