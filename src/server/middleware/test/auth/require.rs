use super::*;

/// Tests an anonymous request.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_anonymous_caller() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let anonymous = Caller::default();
    let result = AuthGuard::new(db, &anonymous).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a valid token whose player was deleted.
///
/// Expected: Err(AuthError::PlayerNotFound)
#[tokio::test]
async fn rejects_token_for_missing_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ghost = caller("ghost@x.com");
    let result = AuthGuard::new(db, &ghost).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::PlayerNotFound(email))) => {
            assert_eq!(email, "ghost@x.com")
        }
        other => panic!("Expected PlayerNotFound, got: {:?}", other),
    }

    Ok(())
}

/// Tests an empty permission list for an existing player.
///
/// Expected: Ok(Player) for the token subject
#[tokio::test]
async fn grants_authenticated_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let alice = factory::create_player(db).await?;

    let alice_caller = caller(&alice.email);
    let player = AuthGuard::new(db, &alice_caller).require(&[]).await?;

    assert_eq!(player.email, alice.email);

    Ok(())
}

/// Tests the admin check uses stored roles rather than token claims.
///
/// Expected: Ok for an admin, Err(AccessDenied) for a plain user
#[tokio::test]
async fn admin_permission_reads_stored_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let admin = factory::player::PlayerFactory::new(db)
        .admin(true)
        .build()
        .await?;
    let user = factory::create_player(db).await?;

    // Token claims only USER, the stored ADMIN role decides
    let admin_caller = caller(&admin.email);
    let granted = AuthGuard::new(db, &admin_caller)
        .require(&[Permission::Admin])
        .await?;
    assert!(granted.is_admin());

    let user_caller = caller(&user.email);
    let denied = AuthGuard::new(db, &user_caller)
        .require(&[Permission::Admin])
        .await;
    match denied {
        Err(AppError::AuthErr(AuthError::AccessDenied(email, reason))) => {
            assert_eq!(email, user.email);
            assert!(reason.contains("admin"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}

/// Tests a non-owner acting on someone else's player.
///
/// Expected: Err(AuthError::AccessDenied) for Owner, Ok for the owner itself
#[tokio::test]
async fn owner_permission_denies_other_players() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let alice = factory::create_player(db).await?;
    let bob = factory::create_player(db).await?;

    let alice_caller = caller(&alice.email);
    let guard = AuthGuard::new(db, &alice_caller);

    assert!(guard.require(&[Permission::Owner(&alice.email)]).await.is_ok());
    assert!(matches!(
        guard.require(&[Permission::Owner(&bob.email)]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests the owner-or-admin permission.
///
/// Expected: Ok for an admin on another player, Err(AccessDenied) for a plain user
#[tokio::test]
async fn owner_or_admin_lets_admin_through() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_roles(db).await?;

    let admin = factory::player::PlayerFactory::new(db)
        .admin(true)
        .build()
        .await?;
    let alice = factory::create_player(db).await?;
    let bob = factory::create_player(db).await?;

    let admin_caller = caller(&admin.email);
    assert!(AuthGuard::new(db, &admin_caller)
        .require(&[Permission::OwnerOrAdmin(&alice.email)])
        .await
        .is_ok());

    let bob_caller = caller(&bob.email);
    assert!(matches!(
        AuthGuard::new(db, &bob_caller)
            .require(&[Permission::OwnerOrAdmin(&alice.email)])
            .await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
