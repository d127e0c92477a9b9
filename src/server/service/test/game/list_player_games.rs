use super::*;

/// Tests listing the games of a player.
///
/// Expected: Ok with only the games the player took part in
#[tokio::test]
async fn lists_games_of_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let players = factory::helpers::create_players(db, 3).await?;
    let (a, b, c) = (
        players[0].email.as_str(),
        players[1].email.as_str(),
        players[2].email.as_str(),
    );
    factory::create_game(db, &[a, b]).await?;
    factory::create_game(db, &[b, c]).await?;

    let service = GameService::new(db, GameRules::default());

    assert_eq!(service.list_player_games(a).await?.len(), 1);
    assert_eq!(service.list_player_games(b).await?.len(), 2);

    Ok(())
}

/// Tests listing games of an unknown player.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GameService::new(db, GameRules::default());
    let result = service.list_player_games("ghost@x.com").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
