use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Custom: {0}")]
    Custom(String),
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match err {
            SqlxError::RowNotFound => RepositoryError::NotFound,
            SqlxError::Database(ref db_err) if db_err.is_unique_violation() => {
                RepositoryError::AlreadyExists(
                    db_err.constraint().unwrap_or("unique constraint").to_string(),
                )
            }
            SqlxError::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                RepositoryError::ForeignKey(
                    db_err.constraint().unwrap_or("foreign key").to_string(),
                )
            }
            other => RepositoryError::Sqlx(other),
        }
    }
}
