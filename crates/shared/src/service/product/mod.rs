mod command;
mod query;

use self::command::{ProductCommandService, ProductCommandServiceDeps};
use self::query::ProductQueryService;
use crate::abstract_trait::{
    DynFileStorage, DynProductCommandRepository, DynProductCommandService,
    DynProductQueryRepository, DynProductQueryService,
};
use anyhow::Result;
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct ProductService {
    pub query: DynProductQueryService,
    pub command: DynProductCommandService,
}

impl fmt::Debug for ProductService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductService")
            .field("query", &"Arc<dyn ProductQueryServiceTrait>")
            .field("command", &"Arc<dyn ProductCommandServiceTrait>")
            .finish()
    }
}

pub struct ProductServiceDeps {
    pub query: DynProductQueryRepository,
    pub command: DynProductCommandRepository,
    pub storage: DynFileStorage,
    pub registry: Arc<Mutex<Registry>>,
}

impl ProductService {
    pub async fn new(deps: ProductServiceDeps) -> Result<Self> {
        let ProductServiceDeps {
            query,
            command,
            storage,
            registry,
        } = deps;

        let query_service =
            Arc::new(ProductQueryService::new(query, &registry).await) as DynProductQueryService;

        let command_deps = ProductCommandServiceDeps {
            command,
            storage,
            registry: registry.clone(),
        };

        let command_service = Arc::new(ProductCommandService::new(command_deps).await)
            as DynProductCommandService;

        Ok(Self {
            query: query_service,
            command: command_service,
        })
    }
}
