mod login;
mod register;

use self::login::{LoginService, LoginServiceDeps};
use self::register::{RegisterService, RegisterServiceDeps};
use crate::abstract_trait::{
    DynHashing, DynJwtService, DynLoginService, DynRegisterService, DynUserCommandRepository,
    DynUserQueryRepository,
};
use anyhow::Result;
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AuthService {
    pub login: DynLoginService,
    pub register: DynRegisterService,
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthService")
            .field("login", &"Arc<dyn LoginServiceTrait>")
            .field("register", &"Arc<dyn RegisterServiceTrait>")
            .finish()
    }
}

#[derive(Clone)]
pub struct AuthServiceDeps {
    pub hash: DynHashing,
    pub jwt: DynJwtService,
    pub user_query: DynUserQueryRepository,
    pub user_command: DynUserCommandRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl AuthService {
    pub async fn new(deps: AuthServiceDeps) -> Result<Self> {
        let login_deps = LoginServiceDeps {
            hash: deps.hash.clone(),
            jwt: deps.jwt.clone(),
            query: deps.user_query.clone(),
            registry: deps.registry.clone(),
        };

        let login = Arc::new(LoginService::new(login_deps).await) as DynLoginService;

        let register_deps = RegisterServiceDeps {
            command: deps.user_command.clone(),
            hash: deps.hash.clone(),
            registry: deps.registry.clone(),
        };

        let register = Arc::new(RegisterService::new(register_deps).await) as DynRegisterService;

        Ok(Self { login, register })
    }
}
