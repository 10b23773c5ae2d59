mod command;
mod query;

use self::command::{OrderCommandService, OrderCommandServiceDeps};
use self::query::OrderQueryService;
use crate::abstract_trait::{
    DynFileStorage, DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService,
};
use anyhow::Result;
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct OrderService {
    pub query: DynOrderQueryService,
    pub command: DynOrderCommandService,
}

pub struct OrderServiceDeps {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
    pub storage: DynFileStorage,
    pub registry: Arc<Mutex<Registry>>,
}

impl fmt::Debug for OrderService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderService")
            .field("query", &"Arc<dyn OrderQueryServiceTrait>")
            .field("command", &"Arc<dyn OrderCommandServiceTrait>")
            .finish()
    }
}

impl OrderService {
    pub async fn new(deps: OrderServiceDeps) -> Result<Self> {
        let OrderServiceDeps {
            query,
            command,
            storage,
            registry,
        } = deps;

        let query_service =
            Arc::new(OrderQueryService::new(query, &registry).await) as DynOrderQueryService;

        let command_deps = OrderCommandServiceDeps {
            command,
            storage,
            registry: registry.clone(),
        };

        let command_service =
            Arc::new(OrderCommandService::new(command_deps).await) as DynOrderCommandService;

        Ok(Self {
            query: query_service,
            command: command_service,
        })
    }
}
