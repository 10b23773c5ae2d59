use crate::{
    abstract_trait::{DynHashing, DynUserCommandRepository, RegisterServiceTrait},
    domain::{requests::RegisterRequest, responses::UserResponse},
    errors::{RepositoryError, ServiceError},
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

pub const EMAIL_IN_USE_MESSAGE: &str = "Email already in use";

pub struct RegisterService {
    command: DynUserCommandRepository,
    hash: DynHashing,
    tracer: ServiceTracer,
}

pub struct RegisterServiceDeps {
    pub command: DynUserCommandRepository,
    pub hash: DynHashing,
    pub registry: Arc<Mutex<Registry>>,
}

impl RegisterService {
    pub async fn new(deps: RegisterServiceDeps) -> Self {
        let RegisterServiceDeps {
            command,
            hash,
            registry,
        } = deps;

        let tracer = ServiceTracer::new("register_service", &registry).await;

        Self {
            command,
            hash,
            tracer,
        }
    }
}

#[async_trait]
impl RegisterServiceTrait for RegisterService {
    async fn register(&self, request: &RegisterRequest) -> Result<UserResponse, ServiceError> {
        let email = request.normalized_email();
        info!("📝 Registering user: {email}");

        let method = Method::Post;
        let tracing_ctx = self.tracer.start_tracing("Register");

        let hashed = match self.hash.hash_password(&request.password).await {
            Ok(hashed) => hashed,
            Err(err) => {
                error!("❌ Failed to hash password: {err:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, method, "Failed to hash password");
                return Err(err);
            }
        };

        let user = match self.command.create_user(&email, &hashed).await {
            Ok(user) => user,
            Err(RepositoryError::AlreadyExists(_)) => {
                warn!("⚠️ Email already registered: {email}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, method, EMAIL_IN_USE_MESSAGE);
                return Err(ServiceError::Conflict(EMAIL_IN_USE_MESSAGE.to_string()));
            }
            Err(err) => {
                error!("❌ Failed to create user: {err:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, method, "Failed to create user");
                return Err(ServiceError::Repo(err));
            }
        };

        self.tracer.complete_tracing_success(
            &tracing_ctx,
            method,
            "User registered successfully",
        );

        info!("✅ Registered user ID {}", user.user_id);
        Ok(UserResponse::from(user))
    }
}
