mod auth;
mod order;
mod product;

pub use self::auth::{AuthService, AuthServiceDeps};
pub use self::order::{OrderService, OrderServiceDeps};
pub use self::product::{ProductService, ProductServiceDeps};
