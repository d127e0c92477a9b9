use super::*;

/// Tests adding coins increases the balance by exactly the amount.
///
/// Expected: Ok with coins == previous + amount
#[tokio::test]
async fn increases_balance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let alice = factory::player::PlayerFactory::new(db)
        .coins(100)
        .build()
        .await?;

    let service = PlayerService::new(db);
    let player = service.add_coins(&alice.email, 50).await?;

    assert_eq!(player.coins, 150);

    Ok(())
}

/// Tests non-positive amounts are rejected.
///
/// Expected: Err(AppError::BadRequest) and balance unchanged
#[tokio::test]
async fn rejects_non_positive_amount() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let alice = factory::player::PlayerFactory::new(db)
        .coins(100)
        .build()
        .await?;

    let service = PlayerService::new(db);

    assert!(matches!(
        service.add_coins(&alice.email, 0).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.add_coins(&alice.email, -10).await,
        Err(AppError::BadRequest(_))
    ));
    assert_eq!(service.get_player(&alice.email).await?.coins, 100);

    Ok(())
}

/// Tests the balance cap of 999,999 coins.
///
/// Expected: reaching the cap succeeds, exceeding it fails with BadRequest
#[tokio::test]
async fn enforces_balance_cap() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let alice = factory::player::PlayerFactory::new(db)
        .coins(999_000)
        .build()
        .await?;

    let service = PlayerService::new(db);

    assert!(matches!(
        service.add_coins(&alice.email, 1_000).await,
        Err(AppError::BadRequest(_))
    ));
    let player = service.add_coins(&alice.email, 999).await?;
    assert_eq!(player.coins, 999_999);

    Ok(())
}
