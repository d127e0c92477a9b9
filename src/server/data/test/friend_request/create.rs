use super::*;

/// Tests creating a pending request.
///
/// Expected: Ok with a request that can be looked up by id
#[tokio::test]
async fn creates_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let alice = factory::player::PlayerFactory::new(db)
        .nickname("alice")
        .profile_image_url("https://x.com/alice.png")
        .build()
        .await?;
    let bob = factory::create_player(db).await?;

    let repo = FriendRequestRepository::new(db);
    let id = repo.create(&alice.email, &bob.email).await?;

    let request = repo.find_by_id(id).await?.unwrap();
    assert_eq!(request.requester_email, alice.email);
    assert_eq!(request.requester_nickname, "alice");
    assert_eq!(
        request.requester_profile_image_url.as_deref(),
        Some("https://x.com/alice.png")
    );
    assert_eq!(request.player_email, bob.email);

    assert!(repo.exists(&alice.email, &bob.email).await?);
    assert!(!repo.exists(&bob.email, &alice.email).await?);

    Ok(())
}

/// Tests the unique index on the ordered pair.
///
/// Expected: Err on the duplicate insert, while the reverse direction is allowed
#[tokio::test]
async fn rejects_duplicate_direction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let alice = factory::create_player(db).await?;
    let bob = factory::create_player(db).await?;

    let repo = FriendRequestRepository::new(db);
    repo.create(&alice.email, &bob.email).await?;

    let duplicate = repo.create(&alice.email, &bob.email).await;
    assert!(matches!(
        duplicate.map_err(|e| e.sql_err()),
        Err(Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))
    ));
    assert!(repo.create(&bob.email, &alice.email).await.is_ok());

    Ok(())
}

/// Tests looking up a request that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FriendRequestRepository::new(db);

    assert!(repo.find_by_id(42).await?.is_none());

    Ok(())
}
