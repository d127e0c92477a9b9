use super::*;

/// Tests moving the murderer role to another participant.
///
/// Expected: Ok with the target as the only murderer
#[tokio::test]
async fn moves_murderer_to_participant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let players = factory::helpers::create_players(db, 3).await?;
    let emails: Vec<&str> = players.iter().map(|p| p.email.as_str()).collect();
    let (game, _) = factory::create_game(db, &emails).await?;

    let service = GameService::new(db, GameRules::default());
    let game = service.set_murderer(game.id, &players[1].email).await?;

    let murderers: Vec<_> = game
        .players
        .iter()
        .filter(|p| p.role == GameRole::Murderer)
        .map(|p| p.player_email.as_str())
        .collect();
    assert_eq!(murderers, vec![players[1].email.as_str()]);

    Ok(())
}

/// Tests choosing a murderer who did not play.
///
/// Expected: Err(AppError::BadRequest) and the original murderer kept
#[tokio::test]
async fn rejects_non_participant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let players = factory::helpers::create_players(db, 3).await?;
    let (game, _) =
        factory::create_game(db, &[players[0].email.as_str(), players[1].email.as_str()]).await?;

    let service = GameService::new(db, GameRules::default());
    let result = service.set_murderer(game.id, &players[2].email).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.was_murderer(&players[0].email, game.id).await?);

    Ok(())
}

/// Tests changing the murderer of an unknown game.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let alice = factory::create_player(db).await?;

    let service = GameService::new(db, GameRules::default());
    let result = service.set_murderer(7, &alice.email).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
