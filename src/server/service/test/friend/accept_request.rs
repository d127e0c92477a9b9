use super::*;

/// Tests the full request and accept flow between alice and bob.
///
/// Verifies both friend lists contain the other player with a timestamp and the
/// request no longer exists.
///
/// Expected: Ok with mutual friendship
#[tokio::test]
async fn accepting_creates_mutual_friendship() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let alice = factory::player::create_player_with(db, "alice@x.com", "alice").await?;
    let bob = factory::player::create_player_with(db, "bob@x.com", "bob").await?;

    let service = FriendService::new(db);
    let id = service.send_request(&alice.email, &bob.email).await?;
    let friend = service.accept_request(id, &bob.email).await?;

    assert_eq!(friend.email, alice.email);
    assert_eq!(friend.nickname, "alice");

    let alice_friends = service.list_friends(&alice.email).await?;
    let bob_friends = service.list_friends(&bob.email).await?;
    assert_eq!(alice_friends.len(), 1);
    assert_eq!(alice_friends[0].email, bob.email);
    assert_eq!(bob_friends.len(), 1);
    assert_eq!(bob_friends[0].email, alice.email);
    assert_eq!(alice_friends[0].friendship_date, friend.friendship_date);

    assert!(matches!(
        service.get_request(id, &bob.email).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests accepting also clears a pending request in the opposite direction.
///
/// Expected: Ok with no pending requests left between the pair
#[tokio::test]
async fn accepting_clears_reverse_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let alice = factory::create_player(db).await?;
    let bob = factory::create_player(db).await?;

    let service = FriendService::new(db);
    let id = service.send_request(&alice.email, &bob.email).await?;
    service.send_request(&bob.email, &alice.email).await?;

    service.accept_request(id, &bob.email).await?;

    assert!(service.list_requests(&alice.email).await?.is_empty());
    assert!(service.list_requests(&bob.email).await?.is_empty());

    Ok(())
}

/// Tests the requester cannot accept their own request.
///
/// Expected: Err(AuthError::AccessDenied) and the request is still pending
#[tokio::test]
async fn only_recipient_can_accept() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let players = factory::helpers::create_players(db, 3).await?;
    let (alice, bob, carol) = (&players[0], &players[1], &players[2]);

    let service = FriendService::new(db);
    let id = service.send_request(&alice.email, &bob.email).await?;

    assert!(matches!(
        service.accept_request(id, &alice.email).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(matches!(
        service.accept_request(id, &carol.email).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(service.list_requests(&bob.email).await?.len(), 1);
    assert!(service.list_friends(&alice.email).await?.is_empty());

    Ok(())
}

/// Tests accepting a request that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let alice = factory::create_player(db).await?;

    let service = FriendService::new(db);
    let result = service.accept_request(404, &alice.email).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
