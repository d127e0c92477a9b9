use super::*;

/// Tests sending a request to another player.
///
/// Expected: Ok(id) with the request listed for both sides
#[tokio::test]
async fn sends_request() -> Result<(), AppError> {
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

    let received = service.list_requests(&bob.email).await?;
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].id, id);
    assert_eq!(received[0].requester_email, alice.email);

    let sent = service.list_sent_requests(&alice.email).await?;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].player_email, bob.email);

    Ok(())
}

/// Tests sending the same request twice.
///
/// Expected: Err(AppError::Conflict) on the second send
#[tokio::test]
async fn rejects_duplicate_request() -> Result<(), AppError> {
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
    service.send_request(&alice.email, &bob.email).await?;

    let result = service.send_request(&alice.email, &bob.email).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests sending a request to an existing friend, in either direction.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_request_between_friends() -> Result<(), AppError> {
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

    assert!(matches!(
        service.send_request(&alice.email, &bob.email).await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        service.send_request(&bob.email, &alice.email).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Tests sending a request to yourself.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_self_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let alice = factory::create_player(db).await?;

    let service = FriendService::new(db);
    let result = service.send_request(&alice.email, &alice.email).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests sending a request to a player that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_target() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let alice = factory::create_player(db).await?;

    let service = FriendService::new(db);
    let result = service.send_request(&alice.email, "ghost@x.com").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a duplicate insert that got past the pending-request check.
///
/// Expected: the unique pair violation maps to AppError::Conflict, other errors stay DbErr
#[tokio::test]
async fn maps_unique_violation_to_conflict() -> Result<(), AppError> {
    use crate::server::data::friend_request::FriendRequestRepository;

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
    let duplicate = repo.create(&alice.email, &bob.email).await.unwrap_err();

    assert!(matches!(
        AppError::conflict_on_unique(duplicate, "Friend request already sent"),
        AppError::Conflict(_)
    ));
    assert!(matches!(
        AppError::conflict_on_unique(sea_orm::DbErr::Custom("boom".to_string()), "unused"),
        AppError::DbErr(_)
    ));

    Ok(())
}

/// Tests two identical requests sent at the same time.
///
/// Expected: one Ok, the other Err(AppError::Conflict), one pending row
#[tokio::test]
async fn concurrent_duplicate_requests_conflict() -> Result<(), AppError> {
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
    let (first, second) = tokio::join!(
        service.send_request(&alice.email, &bob.email),
        service.send_request(&alice.email, &bob.email)
    );

    let results = [first, second];
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .any(|r| matches!(r, Err(AppError::Conflict(_)))));
    assert_eq!(service.list_requests(&bob.email).await?.len(), 1);

    Ok(())
}
