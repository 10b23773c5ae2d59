use crate::{
    domain::{
        requests::{CreateOrderRecord, CreateOrderRequest, UpdateOrderStatusRequest, UploadedFile},
        responses::{CreateOrderResponse, OrderStatusResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Order as OrderModel, OrderStatus},
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Inserts the order and all of its items atomically.
    async fn create_order(&self, req: &CreateOrderRecord) -> Result<OrderModel, RepositoryError>;
    async fn update_status(
        &self,
        id: i32,
        status: OrderStatus,
    ) -> Result<OrderModel, RepositoryError>;
    /// Removes the order's items, then the order.
    async fn delete_order(&self, id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
        payment_photo: Option<UploadedFile>,
    ) -> Result<CreateOrderResponse, ServiceError>;
    async fn update_status(
        &self,
        id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<OrderStatusResponse, ServiceError>;
    async fn delete_order(&self, id: i32) -> Result<(), ServiceError>;
}
