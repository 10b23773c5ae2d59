mod auth;
mod order;
mod product;
mod upload;

pub use self::auth::{LoginRequest, RegisterRequest};
pub use self::order::{
    CreateOrderRecord, CreateOrderRequest, INVALID_ITEMS_MESSAGE, LineItemRequest,
    OrderItemRecord, UpdateOrderStatusRequest, order_amount, parse_line_items,
};
pub use self::product::{
    CreateProductRecord, CreateProductRequest, UpdateProductRecord, UpdateProductRequest,
};
pub use self::upload::{UploadKind, UploadedFile};
