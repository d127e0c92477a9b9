use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::GameRole;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    config::Config,
    data::{
        friend::FriendRepository, friend_request::FriendRequestRepository, game::GameRepository,
        player::PlayerRepository, role::RoleRepository,
    },
    error::AppError,
    model::{player::CreatePlayerParam, role::Role},
    util::password,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Makes sure the configured admin account exists and holds the ADMIN role.
///
/// Creates the account with the configured nickname and password when missing. An
/// existing account keeps its credentials and only gets whichever of USER and ADMIN it lacks.
/// Roles must already be seeded.
pub async fn ensure_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let player_repo = PlayerRepository::new(db);
    let role_repo = RoleRepository::new(db);

    if !player_repo.exists(&config.admin_email).await? {
        let password_hash = password::hash(&config.admin_password)?;

        player_repo
            .create(CreatePlayerParam {
                email: config.admin_email.clone(),
                nickname: config.admin_nickname.clone(),
                password_hash,
                coins: 0,
                skin_url: None,
                profile_image_url: None,
            })
            .await?;

        tracing::info!("Created admin account {}", config.admin_email);
    }

    let held = role_repo.get_for_player(&config.admin_email).await?;
    for role in [Role::User, Role::Admin] {
        if !held.contains(&role) {
            role_repo.assign(&config.admin_email, role).await?;
            tracing::info!("Granted {} to admin account", role.as_str());
        }
    }

    Ok(())
}

struct SamplePlayer {
    email: &'static str,
    nickname: &'static str,
    password: &'static str,
    coins: i32,
    skin: &'static str,
    admin: bool,
}

const SAMPLE_PLAYERS: [SamplePlayer; 10] = [
    SamplePlayer {
        email: "paquito@veil.com",
        nickname: "PakitoChokolatero",
        password: "Paquito123!",
        coins: 150,
        skin: "chocolate",
        admin: false,
    },
    SamplePlayer {
        email: "manolo@veil.com",
        nickname: "ManolitoElCabesa",
        password: "Manolo456!",
        coins: 250,
        skin: "cabeza",
        admin: false,
    },
    SamplePlayer {
        email: "pepito@veil.com",
        nickname: "PepitoGrilloLoco",
        password: "Pepito789!",
        coins: 300,
        skin: "grillo",
        admin: false,
    },
    SamplePlayer {
        email: "juanito@veil.com",
        nickname: "JuanitoAlimana",
        password: "Juanito321!",
        coins: 120,
        skin: "alimana",
        admin: false,
    },
    SamplePlayer {
        email: "lolito@veil.com",
        nickname: "LolitoFdezGaming",
        password: "Lolito654!",
        coins: 450,
        skin: "gamer",
        admin: true,
    },
    SamplePlayer {
        email: "carmela@veil.com",
        nickname: "CarmelaLaChoni",
        password: "Carmela987!",
        coins: 200,
        skin: "choni",
        admin: false,
    },
    SamplePlayer {
        email: "mariano@veil.com",
        nickname: "MarianoRajoyB",
        password: "Mariano741!",
        coins: 180,
        skin: "politico",
        admin: false,
    },
    SamplePlayer {
        email: "fede@veil.com",
        nickname: "FedeToroSalvaje",
        password: "Fede852!Toro",
        coins: 350,
        skin: "toro",
        admin: false,
    },
    SamplePlayer {
        email: "concha@veil.com",
        nickname: "ConchaVelascOh",
        password: "Concha963!",
        coins: 275,
        skin: "actress",
        admin: false,
    },
    SamplePlayer {
        email: "trini@veil.com",
        nickname: "TriniLaBorracha",
        password: "Trini159!x",
        coins: 95,
        skin: "fiesta",
        admin: false,
    },
];

/// Friendships as (player index, player index, days ago).
const SAMPLE_FRIENDSHIPS: [(usize, usize, i64); 6] = [
    (0, 1, 30),
    (0, 2, 15),
    (1, 2, 7),
    (2, 3, 45),
    (4, 5, 20),
    (8, 9, 60),
];

/// Pending requests as (requester index, recipient index).
const SAMPLE_REQUESTS: [(usize, usize); 5] = [(3, 0), (6, 0), (7, 1), (9, 4), (6, 9)];

struct SampleGame {
    duration: i32,
    players: &'static [usize],
    murderer: usize,
    hours_ago: i64,
}

const SAMPLE_GAMES: [SampleGame; 4] = [
    SampleGame {
        duration: 180,
        players: &[0, 1, 2],
        murderer: 2,
        hours_ago: 5 * 24,
    },
    SampleGame {
        duration: 300,
        players: &[1, 2, 3, 4],
        murderer: 3,
        hours_ago: 3 * 24,
    },
    SampleGame {
        duration: 600,
        players: &[4, 5, 6, 7, 8],
        murderer: 7,
        hours_ago: 24,
    },
    SampleGame {
        duration: 900,
        players: &[0, 1, 2, 3, 4, 5, 7, 8],
        murderer: 5,
        hours_ago: 12,
    },
];

/// Loads a fixed set of demo players, friendships, requests and games.
///
/// Skipped when the first sample player already exists, so restarting with sample data
/// enabled never duplicates or resets anything. Everything is inserted in one transaction.
///
/// # Returns
/// - `Ok(true)` - Sample data inserted
/// - `Ok(false)` - Sample data was already present
pub async fn load_sample_data(db: &DatabaseConnection) -> Result<bool, AppError> {
    if PlayerRepository::new(db)
        .exists(SAMPLE_PLAYERS[0].email)
        .await?
    {
        tracing::info!("Sample data already present, skipping");
        return Ok(false);
    }

    // Hash before opening the transaction, argon2 is slow
    let mut hashes = Vec::with_capacity(SAMPLE_PLAYERS.len());
    for sample in &SAMPLE_PLAYERS {
        hashes.push(password::hash(sample.password)?);
    }

    let txn = db.begin().await?;
    let player_repo = PlayerRepository::new(&txn);
    let role_repo = RoleRepository::new(&txn);

    for (sample, password_hash) in SAMPLE_PLAYERS.iter().zip(hashes) {
        player_repo
            .create(CreatePlayerParam {
                email: sample.email.to_string(),
                nickname: sample.nickname.to_string(),
                password_hash,
                coins: sample.coins,
                skin_url: Some(format!("https://example.com/skins/{}.png", sample.skin)),
                profile_image_url: Some(format!(
                    "https://example.com/profiles/{}.png",
                    sample.email.split('@').next().unwrap_or(sample.nickname)
                )),
            })
            .await?;

        role_repo.assign(sample.email, Role::User).await?;
        if sample.admin {
            role_repo.assign(sample.email, Role::Admin).await?;
        }
    }

    let now = Utc::now();

    let friend_repo = FriendRepository::new(&txn);
    for (a, b, days_ago) in SAMPLE_FRIENDSHIPS {
        friend_repo
            .insert_pair(
                SAMPLE_PLAYERS[a].email,
                SAMPLE_PLAYERS[b].email,
                now - Duration::days(days_ago),
            )
            .await?;
    }

    let request_repo = FriendRequestRepository::new(&txn);
    for (requester, recipient) in SAMPLE_REQUESTS {
        request_repo
            .create(SAMPLE_PLAYERS[requester].email, SAMPLE_PLAYERS[recipient].email)
            .await?;
    }

    let game_repo = GameRepository::new(&txn);
    for sample in &SAMPLE_GAMES {
        let game_id = game_repo.create(sample.duration).await?;
        let played_at = now - Duration::hours(sample.hours_ago);

        for &index in sample.players {
            let role = if index == sample.murderer {
                GameRole::Murderer
            } else {
                GameRole::Innocent
            };
            game_repo
                .add_participant(game_id, SAMPLE_PLAYERS[index].email, role, played_at)
                .await?;
        }
    }

    txn.commit().await?;

    tracing::info!(
        "Loaded sample data: {} players, {} games",
        SAMPLE_PLAYERS.len(),
        SAMPLE_GAMES.len()
    );

    Ok(true)
}
