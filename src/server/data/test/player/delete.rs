use super::*;

/// Tests deleting an existing player.
///
/// Expected: Ok(1) and the player no longer exists
#[tokio::test]
async fn deletes_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let player = factory::player::PlayerFactory::new(db)
        .without_roles()
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let deleted = repo.delete(&player.email).await?;

    assert_eq!(deleted, 1);
    assert!(!repo.exists(&player.email).await?);

    Ok(())
}

/// Tests deleting a player that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let deleted = repo.delete("ghost@x.com").await?;

    assert_eq!(deleted, 0);

    Ok(())
}
