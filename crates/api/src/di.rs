use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynFileStorage, DynHashing, DynJwtService},
    config::ConnectionPool,
    repository::{OrderRepository, ProductRepository, UserRepository},
    service::{
        AuthService, AuthServiceDeps, OrderService, OrderServiceDeps, ProductService,
        ProductServiceDeps,
    },
};
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: AuthService,
    pub product_service: ProductService,
    pub order_service: OrderService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &self.auth_service)
            .field("product_service", &self.product_service)
            .field("order_service", &self.order_service)
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hash: DynHashing,
    pub jwt: DynJwtService,
    pub storage: DynFileStorage,
    pub registry: Arc<Mutex<Registry>>,
}

impl DependenciesInject {
    pub async fn new(deps: DependenciesInjectDeps) -> Result<Self> {
        let DependenciesInjectDeps {
            pool,
            hash,
            jwt,
            storage,
            registry,
        } = deps;

        let user_repository = UserRepository::new(pool.clone());
        let product_repository = ProductRepository::new(pool.clone());
        let order_repository = OrderRepository::new(pool);

        let auth_service = AuthService::new(AuthServiceDeps {
            hash,
            jwt,
            user_query: user_repository.query,
            user_command: user_repository.command,
            registry: registry.clone(),
        })
        .await
        .context("failed to initialize auth service")?;

        let product_service = ProductService::new(ProductServiceDeps {
            query: product_repository.query,
            command: product_repository.command,
            storage: storage.clone(),
            registry: registry.clone(),
        })
        .await
        .context("failed to initialize product service")?;

        let order_service = OrderService::new(OrderServiceDeps {
            query: order_repository.query,
            command: order_repository.command,
            storage,
            registry,
        })
        .await
        .context("failed to initialize order service")?;

        Ok(Self {
            auth_service,
            product_service,
            order_service,
        })
    }
}
