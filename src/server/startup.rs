use sea_orm::DatabaseConnection;
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::{fred::prelude::Pool, RedisStore};

use crate::server::{
    config::Config,
    error::Error,
    service::user::UserService,
    util::{functions::FunctionsClient, storage::FsBlobStore},
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<Pool>>, Error> {
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};
    use tower_sessions_redis_store::fred::prelude::*;

    let redis_config = Config::from_url(&config.valkey_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Secure cookies everywhere except debug builds served over plain http
    let secure_cookies = !cfg!(debug_assertions);

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Build the client used to invoke the serverless functions
pub fn build_functions_client(config: &Config) -> Result<FunctionsClient, Error> {
    FunctionsClient::builder(&config.functions_url, &config.functions_api_key)
        .user_agent(&config.user_agent())
        .build()
}

/// Create the storage directory if needed and open the blob store on it
pub async fn open_blob_store(config: &Config) -> Result<FsBlobStore, Error> {
    let store = FsBlobStore::open(&config.storage_dir).await?;

    Ok(store)
}

/// Create the configured administrator when the user table is still empty
pub async fn bootstrap_admin(db: &DatabaseConnection, config: &Config) -> Result<(), Error> {
    use dioxus_logger::tracing;

    let Some((username, password)) = &config.bootstrap_admin else {
        return Ok(());
    };

    if let Some(user) = UserService::new(db).bootstrap_admin(username, password).await? {
        tracing::info!("Created initial administrator {}", user.username);
    }

    Ok(())
}
