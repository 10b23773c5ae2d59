mod database;
mod hashing;
mod jwt;
mod myconfig;
mod storage;

pub use self::database::{ConnectionManager, ConnectionPool, DatabaseConfig, run_migrations};
pub use self::hashing::Hashing;
pub use self::jwt::{Claims, JwtConfig, TOKEN_TTL_DAYS};
pub use self::myconfig::Config;
pub use self::storage::{LocalFileStorage, UPLOAD_URL_PREFIX, generate_file_name};
