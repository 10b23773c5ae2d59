mod auth;
mod health;
mod order;
mod product;

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Path, State, rejection::PathRejection},
    http::{
        HeaderValue, Method, StatusCode,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::{
    errors::{ErrorResponse, HttpError},
    utils::shutdown_signal,
};
use std::{path::PathBuf, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::health::health_routes;
pub use self::order::order_routes;
pub use self::product::product_routes;

const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register_user_handler,
        auth::login_user_handler,

        product::get_products,
        product::create_product,
        product::update_product,
        product::delete_product,

        order::get_orders,
        order::create_order,
        order::update_order_status,
        order::delete_order,

        health::health_checker_handler,
    ),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Product", description = "Product catalog"),
        (name = "Order", description = "Checkout and order management"),
        (name = "Health", description = "Liveness probe"),
    )
)]
struct ApiDoc;

/// Startup values the router needs beyond the application state.
#[derive(Debug, Clone)]
pub struct RouterSettings {
    pub frontend_url: Option<String>,
    pub upload_dir: PathBuf,
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        return HttpError::Internal(format!("Failed to encode metrics: {e}")).into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
        .into_response()
}

async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not Found")))
}

fn handle_panic(panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    HttpError::Internal(format!("Handler panicked: {detail}")).into_response()
}

/// Maps a malformed `{id}` segment to the uniform 400 body.
pub(crate) fn path_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, HttpError> {
    id.map(|Path(id)| id)
        .map_err(|_| HttpError::BadRequest("Invalid id".to_string()))
}

fn cors_layer(frontend_url: Option<&str>) -> Result<CorsLayer> {
    let layer = match frontend_url {
        Some(origin) => {
            let origin = HeaderValue::from_str(origin)
                .with_context(|| format!("FRONTEND_URL is not a valid origin: {origin}"))?;

            CorsLayer::new()
                .allow_origin(origin)
                .allow_credentials(true)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                ])
                .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        }
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    Ok(layer)
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState, settings: &RouterSettings) -> Result<Router> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(health_routes())
            .merge(auth_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES));

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .nest_service("/uploads", ServeDir::new(&settings.upload_dir))
            .fallback(not_found_handler)
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(settings.frontend_url.as_deref())?)
            .layer(CompressionLayer::new());

        Ok(app)
    }

    pub async fn serve(port: u16, app_state: AppState, settings: RouterSettings) -> Result<()> {
        let app = Self::build(app_state, &settings)?;

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        Ok(())
    }
}
