use crate::{
    domain::{requests::RegisterRequest, responses::UserResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynRegisterService = Arc<dyn RegisterServiceTrait + Send + Sync>;

#[async_trait]
pub trait RegisterServiceTrait {
    async fn register(&self, request: &RegisterRequest) -> Result<UserResponse, ServiceError>;
}
