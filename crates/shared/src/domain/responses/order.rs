use crate::model::Order;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub phone: String,
    pub payment_method: String,
    pub payment_photo_url: Option<String>,
    #[schema(value_type = String, example = "25.50")]
    pub amount_paid: Decimal,
    #[schema(example = "pending")]
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            id: value.order_id,
            first_name: value.first_name,
            last_name: value.last_name,
            country: value.country,
            address: value.address,
            city: value.city,
            postal_code: value.postal_code,
            phone: value.phone,
            payment_method: value.payment_method,
            payment_photo_url: value.payment_photo_url,
            amount_paid: value.amount_paid,
            status: value.status,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub success: bool,
    pub order_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct OrderStatusResponse {
    pub id: i32,
    #[schema(example = "shipped")]
    pub status: String,
}

impl From<Order> for OrderStatusResponse {
    fn from(value: Order) -> Self {
        OrderStatusResponse {
            id: value.order_id,
            status: value.status,
        }
    }
}
