use crate::{
    abstract_trait::{DynHashing, DynJwtService, DynUserQueryRepository, LoginServiceTrait},
    domain::{
        requests::LoginRequest,
        responses::{LoginResponse, UserResponse},
    },
    errors::ServiceError,
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

pub struct LoginService {
    hash: DynHashing,
    jwt: DynJwtService,
    query: DynUserQueryRepository,
    tracer: ServiceTracer,
}

pub struct LoginServiceDeps {
    pub hash: DynHashing,
    pub jwt: DynJwtService,
    pub query: DynUserQueryRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl LoginService {
    pub async fn new(deps: LoginServiceDeps) -> Self {
        let LoginServiceDeps {
            hash,
            jwt,
            query,
            registry,
        } = deps;

        let tracer = ServiceTracer::new("login_service", &registry).await;

        Self {
            hash,
            jwt,
            query,
            tracer,
        }
    }
}

#[async_trait]
impl LoginServiceTrait for LoginService {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ServiceError> {
        let email = request.normalized_email();
        info!("🔐 Attempting login for email: {email}");

        let method = Method::Post;
        let tracing_ctx = self.tracer.start_tracing("Login");

        let user = match self.query.find_by_email(&email).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                warn!("❌ Login failed for {email}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, method, "Invalid credentials");
                return Err(ServiceError::InvalidCredentials);
            }
            Err(err) => {
                error!("❌ Failed to look up user: {err:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, method, "Failed to look up user");
                return Err(ServiceError::Repo(err));
            }
        };

        if let Err(err) = self
            .hash
            .compare_password(&user.password, &request.password)
            .await
        {
            // Same outcome as an unknown email.
            warn!("❌ Login failed for {email}");
            self.tracer
                .complete_tracing_error(&tracing_ctx, method, "Invalid credentials");
            return Err(err);
        }

        let token = self
            .jwt
            .generate_token(user.user_id, &user.email, &user.role)
            .map_err(|err| {
                error!("❌ Failed to sign token: {err:?}");
                self.tracer.complete_tracing_error(
                    &tracing_ctx,
                    method.clone(),
                    "Failed to sign token",
                );
                ServiceError::Internal(format!("Failed to sign token: {err}"))
            })?;

        self.tracer
            .complete_tracing_success(&tracing_ctx, method, "Login successful");

        info!("✅ User {} logged in", user.user_id);
        Ok(LoginResponse {
            token,
            user: UserResponse::from(user),
        })
    }
}
