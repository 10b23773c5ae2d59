use crate::{
    domain::forms::{OrderForm, PAYMENT_PHOTO_FIELD, create_order_request},
    handler::path_id,
    middleware::{multipart::MultipartForm, validate::ValidatedBody},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Multipart, Path, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch},
};
use shared::{
    domain::{
        requests::UpdateOrderStatusRequest,
        responses::{CreateOrderResponse, OrderResponse, OrderStatusResponse},
    },
    errors::{ErrorResponse, HttpError},
    service::OrderService,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Order",
    responses(
        (status = 200, description = "All orders, most recent first", body = Vec<OrderResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_orders(
    Extension(service): Extension<OrderService>,
) -> Result<impl IntoResponse, HttpError> {
    let orders = service.query.find_all().await?;
    Ok((StatusCode::OK, Json(orders)))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Order",
    request_body(content = OrderForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Order placed", body = CreateOrderResponse),
        (status = 400, description = "Invalid form or items", body = ErrorResponse)
    )
)]
pub async fn create_order(
    Extension(service): Extension<OrderService>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let form = MultipartForm::read(multipart, PAYMENT_PHOTO_FIELD).await?;
    let request = create_order_request(&form)?;

    let response = service
        .command
        .create_order(&request, form.into_file())
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/orders/{id}/status",
    tag = "Order",
    params(("id" = i32, Path, description = "Order id")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = OrderStatusResponse),
        (status = 400, description = "Invalid status", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn update_order_status(
    Extension(service): Extension<OrderService>,
    id: Result<Path<i32>, PathRejection>,
    ValidatedBody(body): ValidatedBody<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(id)?;
    let response = service.command.update_status(id, &body).await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "Order",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order and its items deleted"),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn delete_order(
    Extension(service): Extension<OrderService>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(id)?;
    service.command.delete_order(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/orders", get(get_orders).post(create_order))
        .route("/api/orders/{id}/status", patch(update_order_status))
        .route("/api/orders/{id}", delete(delete_order))
        .layer(Extension(app_state.di_container.order_service.clone()))
}
