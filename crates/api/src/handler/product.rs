use crate::{
    domain::forms::{IMAGE_FIELD, ProductForm, create_product_request, update_product_request},
    handler::path_id,
    middleware::multipart::MultipartForm,
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Multipart, Path, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use shared::{
    domain::responses::ProductResponse,
    errors::{ErrorResponse, HttpError},
    service::ProductService,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product",
    responses(
        (status = 200, description = "All products", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_products(
    Extension(service): Extension<ProductService>,
) -> Result<impl IntoResponse, HttpError> {
    let products = service.query.find_all().await?;
    Ok((StatusCode::OK, Json(products)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Product",
    request_body(content = ProductForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Invalid form", body = ErrorResponse)
    )
)]
pub async fn create_product(
    Extension(service): Extension<ProductService>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let form = MultipartForm::read(multipart, IMAGE_FIELD).await?;
    let request = create_product_request(&form)?;

    let product = service
        .command
        .create_product(&request, form.into_file())
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product id")),
    request_body(content = ProductForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Invalid form", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn update_product(
    Extension(service): Extension<ProductService>,
    id: Result<Path<i32>, PathRejection>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(id)?;
    let form = MultipartForm::read(multipart, IMAGE_FIELD).await?;
    let request = update_product_request(&form)?;

    let product = service
        .command
        .update_product(id, &request, form.into_file())
        .await?;

    Ok((StatusCode::OK, Json(product)))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<ProductService>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(id)?;
    service.command.delete_product(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products", get(get_products).post(create_product))
        .route("/api/products/{id}", put(update_product).delete(delete_product))
        .layer(Extension(app_state.di_container.product_service.clone()))
}
