use crate::{
    domain::{
        requests::{
            CreateProductRecord, CreateProductRequest, UpdateProductRecord, UpdateProductRequest,
            UploadedFile,
        },
        responses::ProductResponse,
    },
    errors::{RepositoryError, ServiceError},
    model::Product as ProductModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;
pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(
        &self,
        req: &CreateProductRecord,
    ) -> Result<ProductModel, RepositoryError>;
    /// Leaves `image_url` untouched when the record carries none.
    async fn update_product(
        &self,
        req: &UpdateProductRecord,
    ) -> Result<ProductModel, RepositoryError>;
    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
        image: Option<UploadedFile>,
    ) -> Result<ProductResponse, ServiceError>;
    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
        image: Option<UploadedFile>,
    ) -> Result<ProductResponse, ServiceError>;
    async fn delete_product(&self, id: i32) -> Result<(), ServiceError>;
}
