use crate::{
    abstract_trait::{DynFileStorage, DynProductCommandRepository, ProductCommandServiceTrait},
    domain::{
        requests::{
            CreateProductRecord, CreateProductRequest, UpdateProductRecord, UpdateProductRequest,
            UploadKind, UploadedFile,
        },
        responses::ProductResponse,
    },
    errors::{RepositoryError, ServiceError},
    utils::{Method, ServiceTracer, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

pub const PRODUCT_NOT_FOUND_MESSAGE: &str = "Product not found";

pub struct ProductCommandService {
    command: DynProductCommandRepository,
    storage: DynFileStorage,
    tracer: ServiceTracer,
}

pub struct ProductCommandServiceDeps {
    pub command: DynProductCommandRepository,
    pub storage: DynFileStorage,
    pub registry: Arc<Mutex<Registry>>,
}

impl ProductCommandService {
    pub async fn new(deps: ProductCommandServiceDeps) -> Self {
        let ProductCommandServiceDeps {
            command,
            storage,
            registry,
        } = deps;

        let tracer = ServiceTracer::new("product_command_service", &registry).await;

        Self {
            command,
            storage,
            tracer,
        }
    }

    /// Stores the image, if any. A file written here is not removed when the
    /// following database write fails.
    async fn store_image(
        &self,
        image: Option<UploadedFile>,
        tracing_ctx: &TracingContext,
        method: Method,
    ) -> Result<Option<String>, ServiceError> {
        let Some(image) = image else {
            return Ok(None);
        };

        match self.storage.save(UploadKind::ProductImage, &image).await {
            Ok(url) => Ok(Some(url)),
            Err(err) => {
                error!("❌ Failed to store product image: {err:?}");
                self.tracer
                    .complete_tracing_error(tracing_ctx, method, "Failed to store image");
                Err(err)
            }
        }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
        image: Option<UploadedFile>,
    ) -> Result<ProductResponse, ServiceError> {
        info!("🏗️ Creating product: {}", req.name);

        let method = Method::Post;
        let tracing_ctx = self.tracer.start_tracing("CreateProduct");

        let image_url = self
            .store_image(image, &tracing_ctx, method.clone())
            .await?;

        let record = CreateProductRecord::new(req, image_url);

        let product = match self.command.create_product(&record).await {
            Ok(product) => product,
            Err(err) => {
                error!("❌ Failed to create product: {err:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, method, "Failed to create product");
                return Err(ServiceError::Repo(err));
            }
        };

        self.tracer.complete_tracing_success(
            &tracing_ctx,
            method,
            "Product created successfully",
        );

        info!("✅ Product created: {} (ID: {})", product.name, product.product_id);
        Ok(ProductResponse::from(product))
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
        image: Option<UploadedFile>,
    ) -> Result<ProductResponse, ServiceError> {
        info!("✏️ Updating product ID {id}");

        let method = Method::Put;
        let tracing_ctx = self.tracer.start_tracing("UpdateProduct");

        let image_url = self
            .store_image(image, &tracing_ctx, method.clone())
            .await?;

        let record = UpdateProductRecord::new(id, req, image_url);

        let product = match self.command.update_product(&record).await {
            Ok(product) => product,
            Err(RepositoryError::NotFound) => {
                self.tracer.complete_tracing_error(
                    &tracing_ctx,
                    method,
                    PRODUCT_NOT_FOUND_MESSAGE,
                );
                return Err(ServiceError::NotFound(
                    PRODUCT_NOT_FOUND_MESSAGE.to_string(),
                ));
            }
            Err(err) => {
                error!("❌ Failed to update product {id}: {err:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, method, "Failed to update product");
                return Err(ServiceError::Repo(err));
            }
        };

        self.tracer.complete_tracing_success(
            &tracing_ctx,
            method,
            "Product updated successfully",
        );

        Ok(ProductResponse::from(product))
    }

    async fn delete_product(&self, id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting product ID {id}");

        let method = Method::Delete;
        let tracing_ctx = self.tracer.start_tracing("DeleteProduct");

        match self.command.delete_product(id).await {
            Ok(()) => {
                self.tracer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Product deleted successfully",
                );
                Ok(())
            }
            Err(RepositoryError::NotFound) => {
                self.tracer.complete_tracing_error(
                    &tracing_ctx,
                    method,
                    PRODUCT_NOT_FOUND_MESSAGE,
                );
                Err(ServiceError::NotFound(
                    PRODUCT_NOT_FOUND_MESSAGE.to_string(),
                ))
            }
            Err(err) => {
                error!("❌ Failed to delete product {id}: {err:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, method, "Failed to delete product");
                Err(ServiceError::Repo(err))
            }
        }
    }
}
