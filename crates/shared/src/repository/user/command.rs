use crate::{
    abstract_trait::UserCommandRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::User as UserModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<UserModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            INSERT INTO users (email, password)
            VALUES ($1, $2)
            RETURNING user_id, email, password, role
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            let err = RepositoryError::from(err);
            if !matches!(err, RepositoryError::AlreadyExists(_)) {
                error!("❌ Failed to create user {email}: {err:?}");
            }
            err
        })?;

        info!("✅ Created user ID {} ({})", user.user_id, user.email);
        Ok(user)
    }
}
