use super::*;

/// Tests deleting a request by id.
///
/// Expected: Ok(1), then Ok(0) on a second delete
#[tokio::test]
async fn deletes_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let alice = factory::create_player(db).await?;
    let bob = factory::create_player(db).await?;
    let request = factory::create_friend_request(db, &alice.email, &bob.email).await?;

    let repo = FriendRequestRepository::new(db);

    assert_eq!(repo.delete(request.id).await?, 1);
    assert_eq!(repo.delete(request.id).await?, 0);
    assert!(repo.find_by_id(request.id).await?.is_none());

    Ok(())
}

/// Tests deleting by direction leaves the opposite direction in place.
///
/// Expected: Ok(1) with the reverse request still pending
#[tokio::test]
async fn deletes_only_given_direction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let alice = factory::create_player(db).await?;
    let bob = factory::create_player(db).await?;
    factory::create_friend_request(db, &alice.email, &bob.email).await?;
    factory::create_friend_request(db, &bob.email, &alice.email).await?;

    let repo = FriendRequestRepository::new(db);

    assert_eq!(repo.delete_between(&alice.email, &bob.email).await?, 1);
    assert!(!repo.exists(&alice.email, &bob.email).await?);
    assert!(repo.exists(&bob.email, &alice.email).await?);

    Ok(())
}

/// Tests deleting every request a player sent or received.
///
/// Expected: Ok(2) with unrelated requests untouched
#[tokio::test]
async fn deletes_all_requests_for_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let players = factory::helpers::create_players(db, 3).await?;
    let (alice, bob, carol) = (&players[0], &players[1], &players[2]);
    factory::create_friend_request(db, &alice.email, &bob.email).await?;
    factory::create_friend_request(db, &carol.email, &alice.email).await?;
    factory::create_friend_request(db, &bob.email, &carol.email).await?;

    let repo = FriendRequestRepository::new(db);

    assert_eq!(repo.delete_all_for_player(&alice.email).await?, 2);
    assert!(repo.exists(&bob.email, &carol.email).await?);

    Ok(())
}
