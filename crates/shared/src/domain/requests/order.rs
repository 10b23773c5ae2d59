use crate::{domain::requests::product::validate_price, errors::ServiceError};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const INVALID_ITEMS_MESSAGE: &str = "Invalid items payload";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,

    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,

    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    #[validate(length(min = 1, message = "Postal code is required"))]
    pub postal_code: String,

    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,

    pub save_info: bool,

    #[validate(length(min = 1, message = "Payment method is required"))]
    pub payment_method: String,

    /// JSON-encoded array of [`LineItemRequest`].
    #[schema(example = r#"[{"productId":1,"quantity":2,"price":"10.00"}]"#)]
    pub items: String,
}

/// One entry of the `items` payload. The storefront client sends `id`
/// for the product, so it is accepted as an alias.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LineItemRequest {
    #[serde(alias = "id")]
    #[validate(range(min = 1, message = "Product ID must be positive"))]
    pub product_id: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,

    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = String, example = "10.00")]
    pub price: Decimal,
}

/// Decodes and validates the raw `items` field. Every failure collapses
/// into the same `BadRequest` so nothing is written for a bad payload.
pub fn parse_line_items(raw: &str) -> Result<Vec<LineItemRequest>, ServiceError> {
    let invalid = || ServiceError::BadRequest(INVALID_ITEMS_MESSAGE.to_string());

    let items: Vec<LineItemRequest> = serde_json::from_str(raw).map_err(|_| invalid())?;

    if items.is_empty() || items.iter().any(|item| item.validate().is_err()) {
        return Err(invalid());
    }

    Ok(items)
}

/// Sum of `price * quantity`, failing instead of overflowing.
pub fn order_amount(items: &[LineItemRequest]) -> Result<Decimal, ServiceError> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |total, item| {
            item.price
                .checked_mul(Decimal::from(item.quantity))
                .and_then(|line| total.checked_add(line))
        })
        .ok_or_else(|| ServiceError::BadRequest(INVALID_ITEMS_MESSAGE.to_string()))
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateOrderStatusRequest {
    /// Missing or non-text values read as empty, which no status matches.
    #[serde(default, deserialize_with = "status_text")]
    #[schema(example = "shipped")]
    pub status: String,
}

fn status_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(status) => Ok(status),
        _ => Ok(String::new()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItemRecord {
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct CreateOrderRecord {
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub phone: String,
    pub save_info: bool,
    pub payment_method: String,
    pub payment_photo_url: Option<String>,
    pub amount_paid: Decimal,
    pub items: Vec<OrderItemRecord>,
}

impl CreateOrderRecord {
    pub fn new(
        req: &CreateOrderRequest,
        items: &[LineItemRequest],
        amount_paid: Decimal,
        payment_photo_url: Option<String>,
    ) -> Self {
        Self {
            first_name: req.first_name.clone(),
            last_name: req.last_name.clone(),
            country: req.country.clone(),
            address: req.address.clone(),
            city: req.city.clone(),
            postal_code: req.postal_code.clone(),
            phone: req.phone.clone(),
            save_info: req.save_info,
            payment_method: req.payment_method.clone(),
            payment_photo_url,
            amount_paid,
            items: items
                .iter()
                .map(|item| OrderItemRecord {
                    product_id: item.product_id,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}
