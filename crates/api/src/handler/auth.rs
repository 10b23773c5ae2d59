use crate::{middleware::validate::ValidatedBody, state::AppState};
use axum::{Extension, Json, http::StatusCode, response::IntoResponse, routing::post};
use shared::{
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::{LoginResponse, UserResponse},
    },
    errors::{ErrorResponse, HttpError},
    service::AuthService,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn register_user_handler(
    Extension(service): Extension<AuthService>,
    ValidatedBody(body): ValidatedBody<RegisterRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.register.register(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login_user_handler(
    Extension(service): Extension<AuthService>,
    ValidatedBody(body): ValidatedBody<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.login.login(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/auth/register", post(register_user_handler))
        .route("/api/auth/login", post(login_user_handler))
        .layer(Extension(app_state.di_container.auth_service.clone()))
}
