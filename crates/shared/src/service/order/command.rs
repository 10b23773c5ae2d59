use crate::{
    abstract_trait::{DynFileStorage, DynOrderCommandRepository, OrderCommandServiceTrait},
    domain::{
        requests::{
            CreateOrderRecord, CreateOrderRequest, UpdateOrderStatusRequest, UploadKind,
            UploadedFile, order_amount, parse_line_items,
        },
        responses::{CreateOrderResponse, OrderStatusResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::OrderStatus,
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

pub const ORDER_NOT_FOUND_MESSAGE: &str = "Order not found";
pub const INVALID_STATUS_MESSAGE: &str = "Invalid status";

pub struct OrderCommandService {
    command: DynOrderCommandRepository,
    storage: DynFileStorage,
    tracer: ServiceTracer,
}

pub struct OrderCommandServiceDeps {
    pub command: DynOrderCommandRepository,
    pub storage: DynFileStorage,
    pub registry: Arc<Mutex<Registry>>,
}

impl OrderCommandService {
    pub async fn new(deps: OrderCommandServiceDeps) -> Self {
        let OrderCommandServiceDeps {
            command,
            storage,
            registry,
        } = deps;

        let tracer = ServiceTracer::new("order_command_service", &registry).await;

        Self {
            command,
            storage,
            tracer,
        }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
        payment_photo: Option<UploadedFile>,
    ) -> Result<CreateOrderResponse, ServiceError> {
        info!("🛒 Creating order for {} {}", req.first_name, req.last_name);

        let method = Method::Post;
        let tracing_ctx = self.tracer.start_tracing("CreateOrder");

        // Nothing is written until the items are known to be good.
        let (items, amount_paid) = match parse_line_items(&req.items).and_then(|items| {
            let amount = order_amount(&items)?;
            Ok((items, amount))
        }) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!("⚠️ Rejected order items payload");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, method, "Invalid items payload");
                return Err(err);
            }
        };

        let payment_photo_url = match payment_photo {
            Some(photo) => match self.storage.save(UploadKind::PaymentPhoto, &photo).await {
                Ok(url) => Some(url),
                Err(err) => {
                    error!("❌ Failed to store payment photo: {err:?}");
                    self.tracer.complete_tracing_error(
                        &tracing_ctx,
                        method,
                        "Failed to store payment photo",
                    );
                    return Err(err);
                }
            },
            None => None,
        };

        let record = CreateOrderRecord::new(req, &items, amount_paid, payment_photo_url);

        let order = match self.command.create_order(&record).await {
            Ok(order) => order,
            Err(err) => {
                error!("❌ Order transaction failed: {err:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, method, "Failed to create order");
                return Err(ServiceError::Repo(err));
            }
        };

        self.tracer.complete_tracing_success(
            &tracing_ctx,
            method,
            "Order created successfully",
        );

        info!(
            "✅ Order {} created, amount paid {}",
            order.order_id, order.amount_paid
        );
        Ok(CreateOrderResponse {
            success: true,
            order_id: order.order_id,
        })
    }

    async fn update_status(
        &self,
        id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<OrderStatusResponse, ServiceError> {
        info!("🔄 Setting status of order {id} to {:?}", req.status);

        let method = Method::Patch;
        let tracing_ctx = self.tracer.start_tracing("UpdateOrderStatus");

        let Ok(status) = req.status.parse::<OrderStatus>() else {
            self.tracer
                .complete_tracing_error(&tracing_ctx, method, INVALID_STATUS_MESSAGE);
            return Err(ServiceError::BadRequest(INVALID_STATUS_MESSAGE.to_string()));
        };

        match self.command.update_status(id, status).await {
            Ok(order) => {
                self.tracer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Order status updated successfully",
                );
                Ok(OrderStatusResponse::from(order))
            }
            Err(RepositoryError::NotFound) => {
                self.tracer
                    .complete_tracing_error(&tracing_ctx, method, ORDER_NOT_FOUND_MESSAGE);
                Err(ServiceError::NotFound(ORDER_NOT_FOUND_MESSAGE.to_string()))
            }
            Err(err) => {
                error!("❌ Failed to update order {id}: {err:?}");
                self.tracer.complete_tracing_error(
                    &tracing_ctx,
                    method,
                    "Failed to update order status",
                );
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn delete_order(&self, id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting order ID {id}");

        let method = Method::Delete;
        let tracing_ctx = self.tracer.start_tracing("DeleteOrder");

        match self.command.delete_order(id).await {
            Ok(()) => {
                self.tracer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Order deleted successfully",
                );
                Ok(())
            }
            Err(RepositoryError::NotFound) => {
                self.tracer
                    .complete_tracing_error(&tracing_ctx, method, ORDER_NOT_FOUND_MESSAGE);
                Err(ServiceError::NotFound(ORDER_NOT_FOUND_MESSAGE.to_string()))
            }
            Err(err) => {
                error!("❌ Failed to delete order {id}: {err:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, method, "Failed to delete order");
                Err(ServiceError::Repo(err))
            }
        }
    }
}
