use crate::di::{DependenciesInject, DependenciesInjectDeps};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynFileStorage, DynHashing, DynJwtService},
    config::{Config, ConnectionPool, Hashing, JwtConfig},
};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Debug)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
}

impl AppState {
    pub async fn new(pool: ConnectionPool, config: &Config, storage: DynFileStorage) -> Result<Self> {
        let registry = Arc::new(Mutex::new(Registry::default()));

        let hash = Arc::new(Hashing::new(config.bcrypt_cost)) as DynHashing;
        let jwt = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;

        let deps = DependenciesInjectDeps {
            pool,
            hash,
            jwt,
            storage,
            registry: registry.clone(),
        };

        let di_container = DependenciesInject::new(deps)
            .await
            .context("Failed to initialize dependency injection container")?;

        Ok(Self {
            di_container,
            registry,
        })
    }
}
