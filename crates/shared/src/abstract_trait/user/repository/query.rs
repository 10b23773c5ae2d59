use crate::{errors::RepositoryError, model::User as UserModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, RepositoryError>;
}
