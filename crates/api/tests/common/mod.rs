#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use ecommerce_api::{
    di::DependenciesInject,
    handler::{AppRouter, RouterSettings},
    state::AppState,
};
use prometheus_client::registry::Registry;
use rust_decimal::Decimal;
use serde_json::Value;
use shared::{
    abstract_trait::{
        LoginServiceTrait, OrderCommandServiceTrait, OrderQueryServiceTrait,
        ProductCommandServiceTrait, ProductQueryServiceTrait, RegisterServiceTrait,
    },
    domain::{
        requests::{
            CreateOrderRequest, CreateProductRequest, LoginRequest, RegisterRequest,
            UpdateOrderStatusRequest, UpdateProductRequest, UploadedFile, order_amount,
            parse_line_items,
        },
        responses::{
            CreateOrderResponse, LoginResponse, OrderResponse, OrderStatusResponse,
            ProductResponse, UserResponse,
        },
    },
    errors::ServiceError,
    model::OrderStatus,
    service::{AuthService, OrderService, ProductService},
};
use std::{
    str::FromStr,
    sync::{Arc, Mutex as StdMutex},
};
use tempfile::TempDir;
use tokio::sync::Mutex;
use tower::ServiceExt;

pub const TAKEN_EMAIL: &str = "taken@example.com";
pub const BOUNDARY: &str = "XTESTBOUNDARYX";

pub struct StubAuth;

#[async_trait]
impl RegisterServiceTrait for StubAuth {
    async fn register(&self, request: &RegisterRequest) -> Result<UserResponse, ServiceError> {
        let email = request.normalized_email();
        if email == TAKEN_EMAIL {
            return Err(ServiceError::Conflict("Email already in use".into()));
        }

        Ok(UserResponse {
            id: 1,
            email,
            role: "customer".into(),
        })
    }
}

#[async_trait]
impl LoginServiceTrait for StubAuth {
    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, ServiceError> {
        Err(ServiceError::InvalidCredentials)
    }
}

#[derive(Default)]
pub struct StubProducts {
    pub last_image: StdMutex<Option<UploadedFile>>,
}

fn product_response(id: i32, req: &CreateProductRequest, image_url: Option<String>) -> ProductResponse {
    ProductResponse {
        id,
        name: req.name.clone(),
        description: req.description.clone(),
        price: req.price,
        stock_quantity: req.stock_quantity,
        category: req.category.clone(),
        image_url,
    }
}

#[async_trait]
impl ProductQueryServiceTrait for StubProducts {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        Ok(vec![ProductResponse {
            id: 1,
            name: "Linen shirt".into(),
            description: None,
            price: Decimal::from_str("49.90").unwrap(),
            stock_quantity: 3,
            category: Some("shirts".into()),
            image_url: Some("/uploads/shirt.png".into()),
        }])
    }
}

#[async_trait]
impl ProductCommandServiceTrait for StubProducts {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
        image: Option<UploadedFile>,
    ) -> Result<ProductResponse, ServiceError> {
        let image_url = image.as_ref().map(|_| "/uploads/new.png".to_string());
        *self.last_image.lock().unwrap() = image;
        Ok(product_response(2, req, image_url))
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
        _image: Option<UploadedFile>,
    ) -> Result<ProductResponse, ServiceError> {
        if id != 1 {
            return Err(ServiceError::NotFound("Product not found".into()));
        }

        let create = CreateProductRequest {
            name: req.name.clone(),
            description: req.description.clone(),
            price: req.price,
            stock_quantity: req.stock_quantity,
            category: req.category.clone(),
        };
        Ok(product_response(id, &create, Some("/uploads/shirt.png".into())))
    }

    async fn delete_product(&self, id: i32) -> Result<(), ServiceError> {
        if id == 1 {
            Ok(())
        } else {
            Err(ServiceError::NotFound("Product not found".into()))
        }
    }
}

#[derive(Default)]
pub struct StubOrders {
    pub last_request: StdMutex<Option<CreateOrderRequest>>,
    pub last_photo: StdMutex<Option<UploadedFile>>,
}

#[async_trait]
impl OrderQueryServiceTrait for StubOrders {
    async fn find_all(&self) -> Result<Vec<OrderResponse>, ServiceError> {
        panic!("order listing exploded");
    }
}

#[async_trait]
impl OrderCommandServiceTrait for StubOrders {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
        payment_photo: Option<UploadedFile>,
    ) -> Result<CreateOrderResponse, ServiceError> {
        let items = parse_line_items(&req.items)?;
        order_amount(&items)?;

        *self.last_request.lock().unwrap() = Some(req.clone());
        *self.last_photo.lock().unwrap() = payment_photo;

        Ok(CreateOrderResponse {
            success: true,
            order_id: 7,
        })
    }

    async fn update_status(
        &self,
        id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<OrderStatusResponse, ServiceError> {
        let status = OrderStatus::from_str(&req.status)
            .map_err(|_| ServiceError::BadRequest("Invalid status".into()))?;

        if id != 1 {
            return Err(ServiceError::NotFound("Order not found".into()));
        }

        Ok(OrderStatusResponse {
            id,
            status: status.to_string(),
        })
    }

    async fn delete_order(&self, id: i32) -> Result<(), ServiceError> {
        if id == 1 {
            Ok(())
        } else {
            Err(ServiceError::NotFound("Order not found".into()))
        }
    }
}

pub struct TestApp {
    pub router: Router,
    pub products: Arc<StubProducts>,
    pub orders: Arc<StubOrders>,
    pub upload_dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_frontend(None)
    }

    pub fn with_frontend(frontend_url: Option<&str>) -> Self {
        let auth = Arc::new(StubAuth);
        let products = Arc::new(StubProducts::default());
        let orders = Arc::new(StubOrders::default());

        let di_container = DependenciesInject {
            auth_service: AuthService {
                login: auth.clone(),
                register: auth,
            },
            product_service: ProductService {
                query: products.clone(),
                command: products.clone(),
            },
            order_service: OrderService {
                query: orders.clone(),
                command: orders.clone(),
            },
        };

        let state = AppState {
            di_container,
            registry: Arc::new(Mutex::new(Registry::default())),
        };

        let upload_dir = tempfile::tempdir().unwrap();
        let settings = RouterSettings {
            frontend_url: frontend_url.map(str::to_string),
            upload_dir: upload_dir.path().to_path_buf(),
        };

        let router = AppRouter::build(state, &settings).unwrap();

        Self {
            router,
            products,
            orders,
            upload_dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        bytes: &'a [u8],
    },
}

pub fn multipart_request(method: &str, uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                        .as_bytes(),
                );
            }
            Part::File {
                name,
                file_name,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}
