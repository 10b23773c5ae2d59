mod order;
mod product;
mod user;

pub use self::order::{Order, OrderItem, OrderStatus};
pub use self::product::Product;
pub use self::user::User;
