use super::*;

/// Tests creating a game with participants.
///
/// Expected: Ok with every participant and role stored
#[tokio::test]
async fn creates_game_with_participants() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let players = factory::helpers::create_players(db, 2).await?;

    let repo = GameRepository::new(db);
    let game_id = repo.create(300).await?;
    let now = Utc::now();
    repo.add_participant(game_id, &players[0].email, GameRole::Murderer, now)
        .await?;
    repo.add_participant(game_id, &players[1].email, GameRole::Innocent, now)
        .await?;

    assert!(repo.exists(game_id).await?);

    let game = repo.find_by_id(game_id).await?.unwrap();
    assert_eq!(game.duration, 300);
    assert_eq!(game.players.len(), 2);
    assert_eq!(game.players[0].player_email, players[0].email);
    assert_eq!(game.players[0].player_nickname, players[0].nickname);
    assert_eq!(game.players[0].role, GameRole::Murderer);
    assert_eq!(game.players[1].role, GameRole::Innocent);

    Ok(())
}
