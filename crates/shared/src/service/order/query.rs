use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::responses::OrderResponse,
    errors::ServiceError,
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    tracer: ServiceTracer,
}

impl OrderQueryService {
    pub async fn new(query: DynOrderQueryRepository, registry: &Arc<Mutex<Registry>>) -> Self {
        let tracer = ServiceTracer::new("order_query_service", registry).await;
        Self { query, tracer }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(&self) -> Result<Vec<OrderResponse>, ServiceError> {
        info!("🔍 Listing orders");

        let method = Method::Get;
        let tracing_ctx = self.tracer.start_tracing("FindAllOrders");

        match self.query.find_all().await {
            Ok(orders) => {
                self.tracer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Orders retrieved successfully",
                );
                Ok(orders.into_iter().map(OrderResponse::from).collect())
            }
            Err(err) => {
                error!("❌ Failed to list orders: {err:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, method, "Failed to list orders");
                Err(ServiceError::Repo(err))
            }
        }
    }
}
