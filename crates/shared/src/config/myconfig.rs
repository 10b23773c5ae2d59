use crate::config::database::DatabaseConfig;
use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_UPLOAD_DIR: &str = "public/uploads";
const DEFAULT_BCRYPT_COST: u32 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub jwt_secret: String,
    pub frontend_url: Option<String>,
    pub run_migrations: bool,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub bcrypt_cost: u32,
    pub db_max_conn: u32,
    pub db_min_conn: u32,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database = match var("DATABASE_URL") {
            Some(url) => DatabaseConfig::Url(url),
            None => DatabaseConfig::Params {
                host: var("PGHOST").unwrap_or_else(|| "localhost".to_string()),
                port: var("PGPORT")
                    .map(|p| p.parse::<u16>())
                    .transpose()
                    .context("PGPORT must be a valid u16 integer")?
                    .unwrap_or(5432),
                user: var("PGUSER").unwrap_or_else(|| "postgres".to_string()),
                password: var("PGPASSWORD"),
                database: var("PGDATABASE").unwrap_or_else(|| "postgres".to_string()),
            },
        };

        let jwt_secret = var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;

        let run_migrations = match var("RUN_MIGRATIONS").as_deref() {
            None | Some("false") => false,
            Some("true") => true,
            Some(other) => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = var("PORT")
            .map(|p| p.parse::<u16>())
            .transpose()
            .context("PORT must be a valid u16 integer")?
            .unwrap_or(DEFAULT_PORT);

        let bcrypt_cost = var("BCRYPT_COST")
            .map(|c| c.parse::<u32>())
            .transpose()
            .context("Unable to parse BCRYPT_COST as u32")?
            .unwrap_or(DEFAULT_BCRYPT_COST);

        let db_max_conn: u32 = var("DB_MAX_CONNECTION")
            .unwrap_or_else(|| "5".to_string())
            .parse::<u32>()
            .context("Unable to parse DB_MAX_CONNECTION as u32")?;

        let db_min_conn: u32 = var("DB_MIN_CONNECTION")
            .unwrap_or_else(|| "1".to_string())
            .parse::<u32>()
            .context("Unable to parse DB_MIN_CONNECTION as u32")?;

        let upload_dir = var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR));

        Ok(Self {
            database,
            jwt_secret,
            frontend_url: var("FRONTEND_URL"),
            run_migrations,
            port,
            upload_dir,
            bcrypt_cost,
            db_max_conn,
            db_min_conn,
        })
    }
}
