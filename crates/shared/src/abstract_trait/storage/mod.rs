use crate::{
    domain::requests::{UploadKind, UploadedFile},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynFileStorage = Arc<dyn FileStorageTrait + Send + Sync>;

#[async_trait]
pub trait FileStorageTrait {
    /// Persists the upload and returns the public URL path it is served under.
    async fn save(&self, kind: UploadKind, file: &UploadedFile) -> Result<String, ServiceError>;
}
