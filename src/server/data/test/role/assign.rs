use super::*;

/// Tests granting a role to a player.
///
/// Expected: Ok with the role listed for the player
#[tokio::test]
async fn grants_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let player = factory::create_player(db).await?;

    let repo = RoleRepository::new(db);
    repo.assign(&player.email, Role::Admin).await?;

    let roles = repo.get_for_player(&player.email).await?;
    assert!(roles.contains(&Role::User));
    assert!(roles.contains(&Role::Admin));

    Ok(())
}

/// Tests granting a role the player already holds.
///
/// Expected: Ok without a duplicate assignment
#[tokio::test]
async fn assigning_twice_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let player = factory::create_player(db).await?;

    let repo = RoleRepository::new(db);
    repo.assign(&player.email, Role::User).await?;
    repo.assign(&player.email, Role::User).await?;

    let roles = repo.get_for_player(&player.email).await?;
    assert_eq!(roles, vec![Role::User]);

    Ok(())
}
