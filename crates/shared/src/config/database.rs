use sqlx::{
    Pool, Postgres,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use tracing::info;

pub type ConnectionPool = Pool<Postgres>;

/// Where the pool connects to. Chosen once at startup.
#[derive(Clone)]
pub enum DatabaseConfig {
    Url(String),
    Params {
        host: String,
        port: u16,
        user: String,
        password: Option<String>,
        database: String,
    },
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseConfig::Url(_) => f.debug_tuple("Url").field(&"<redacted>").finish(),
            DatabaseConfig::Params {
                host,
                port,
                user,
                database,
                ..
            } => f
                .debug_struct("Params")
                .field("host", host)
                .field("port", port)
                .field("user", user)
                .field("database", database)
                .finish_non_exhaustive(),
        }
    }
}

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(
        config: &DatabaseConfig,
        min_connections: u32,
        max_connections: u32,
    ) -> anyhow::Result<ConnectionPool> {
        let options = PgPoolOptions::new()
            .min_connections(min_connections)
            .max_connections(max_connections);

        let pool = match config {
            DatabaseConfig::Url(url) => {
                info!("Connecting to database using DATABASE_URL");
                options.connect(url).await
            }
            DatabaseConfig::Params {
                host,
                port,
                user,
                password,
                database,
            } => {
                info!("Connecting to database {database} at {host}:{port}");

                let mut connect = PgConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .username(user)
                    .database(database);

                if let Some(password) = password {
                    connect = connect.password(password);
                }

                options.connect_with(connect).await
            }
        }
        .map_err(|err| anyhow::anyhow!("Failed to create database connection pool: {}", err))?;

        Ok(pool)
    }
}

pub async fn run_migrations(pool: &ConnectionPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;

    Ok(())
}
