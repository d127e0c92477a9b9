use super::*;
use crate::server::data::{
    friend::FriendRepository, friend_request::FriendRequestRepository, game::GameRepository,
};

/// Tests deleting a player removes every row that references them.
///
/// Verifies friendships in both directions, requests sent and received, game
/// participation and role assignments are removed while other players' data survives.
///
/// Expected: Ok and the player no longer exists
#[tokio::test]
async fn deletes_player_and_related_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let players = factory::helpers::create_players(db, 3).await?;
    let (alice, bob, carol) = (&players[0], &players[1], &players[2]);
    factory::create_friendship(db, &alice.email, &bob.email).await?;
    factory::create_friendship(db, &bob.email, &carol.email).await?;
    factory::create_friend_request(db, &alice.email, &carol.email).await?;
    factory::create_friend_request(db, &carol.email, &alice.email).await?;
    let (game, _) = factory::create_game(
        db,
        &[alice.email.as_str(), bob.email.as_str(), carol.email.as_str()],
    )
    .await?;

    let service = PlayerService::new(db);
    service.delete_player(&alice.email).await?;

    assert!(matches!(
        service.get_player(&alice.email).await,
        Err(AppError::NotFound(_))
    ));

    let friend_repo = FriendRepository::new(db);
    let bob_friends = friend_repo.get_friends(&bob.email).await?;
    assert_eq!(bob_friends.len(), 1);
    assert_eq!(bob_friends[0].email, carol.email);

    let request_repo = FriendRequestRepository::new(db);
    assert!(request_repo.get_received(&carol.email).await?.is_empty());
    assert!(request_repo.get_sent(&carol.email).await?.is_empty());

    let game = GameRepository::new(db).find_by_id(game.id).await?.unwrap();
    assert_eq!(game.players.len(), 2);
    assert!(!game.has_participant(&alice.email));

    Ok(())
}

/// Tests deleting a player that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PlayerService::new(db);
    let result = service.delete_player("ghost@x.com").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
