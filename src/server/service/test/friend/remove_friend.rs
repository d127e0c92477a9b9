use super::*;

/// Tests removing a friend removes the friendship for both players.
///
/// Expected: Ok with both friend lists empty
#[tokio::test]
async fn removes_both_directions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let alice = factory::create_player(db).await?;
    let bob = factory::create_player(db).await?;
    factory::create_friendship(db, &alice.email, &bob.email).await?;

    let service = FriendService::new(db);
    service.remove_friend(&alice.email, &bob.email).await?;

    assert!(service.list_friends(&alice.email).await?.is_empty());
    assert!(service.list_friends(&bob.email).await?.is_empty());

    Ok(())
}

/// Tests removing a friendship that does not exist.
///
/// Expected: Ok
#[tokio::test]
async fn removing_non_friend_succeeds() -> Result<(), AppError> {
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

    assert!(service.remove_friend(&alice.email, &bob.email).await.is_ok());

    Ok(())
}

/// Tests removing a friend that is not a player.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_friend() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let alice = factory::create_player(db).await?;

    let service = FriendService::new(db);
    let result = service.remove_friend(&alice.email, "ghost@x.com").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
