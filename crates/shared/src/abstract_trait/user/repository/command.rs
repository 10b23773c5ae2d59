use crate::{errors::RepositoryError, model::User as UserModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandRepositoryTrait {
    /// `email` must already be normalized; the password is stored as given.
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<UserModel, RepositoryError>;
}
