use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::responses::ProductResponse,
    errors::ServiceError,
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

pub struct ProductQueryService {
    query: DynProductQueryRepository,
    tracer: ServiceTracer,
}

impl ProductQueryService {
    pub async fn new(query: DynProductQueryRepository, registry: &Arc<Mutex<Registry>>) -> Self {
        let tracer = ServiceTracer::new("product_query_service", registry).await;
        Self { query, tracer }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        info!("🔍 Listing products");

        let method = Method::Get;
        let tracing_ctx = self.tracer.start_tracing("FindAllProducts");

        let products = match self.query.find_all().await {
            Ok(products) => products,
            Err(err) => {
                error!("❌ Failed to list products: {err:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, method, "Failed to list products");
                return Err(ServiceError::Repo(err));
            }
        };

        self.tracer.complete_tracing_success(
            &tracing_ctx,
            method,
            "Products retrieved successfully",
        );

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }
}
