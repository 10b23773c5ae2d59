mod auth;
mod order;
mod product;

pub use self::auth::{LoginResponse, UserResponse};
pub use self::order::{CreateOrderResponse, OrderResponse, OrderStatusResponse};
pub use self::product::ProductResponse;
