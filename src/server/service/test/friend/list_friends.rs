use super::*;
use chrono::Utc;
use crate::server::error::internal::InternalError;

/// Tests a one-sided friendship row is reported as an internal error.
///
/// Expected: Err(InternalError::MissingReciprocalFriendship)
#[tokio::test]
async fn reports_missing_reciprocal_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let alice = factory::create_player(db).await?;
    let bob = factory::create_player(db).await?;
    factory::friends::create_friendship_row(db, &alice.email, &bob.email, Utc::now()).await?;

    let service = FriendService::new(db);
    let result = service.list_friends(&alice.email).await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(
            InternalError::MissingReciprocalFriendship { .. }
        ))
    ));

    Ok(())
}

/// Tests listing friends of a player with several friends.
///
/// Expected: Ok with every friend present
#[tokio::test]
async fn lists_all_friends() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let players = factory::helpers::create_players(db, 3).await?;
    let (alice, bob, carol) = (&players[0], &players[1], &players[2]);
    factory::create_friendship(db, &alice.email, &bob.email).await?;
    factory::create_friendship(db, &alice.email, &carol.email).await?;

    let service = FriendService::new(db);
    let friends = service.list_friends(&alice.email).await?;

    assert_eq!(friends.len(), 2);
    assert!(friends.iter().any(|f| f.email == bob.email));
    assert!(friends.iter().any(|f| f.email == carol.email));

    Ok(())
}
