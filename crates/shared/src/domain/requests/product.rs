use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Linen shirt")]
    pub name: String,

    pub description: Option<String>,

    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = String, example = "49.90")]
    pub price: Decimal,

    #[validate(range(min = 0, message = "Stock quantity cannot be negative"))]
    #[schema(example = 10)]
    pub stock_quantity: i32,

    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Linen shirt")]
    pub name: String,

    pub description: Option<String>,

    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = String, example = "44.90")]
    pub price: Decimal,

    #[validate(range(min = 0, message = "Stock quantity cannot be negative"))]
    #[schema(example = 8)]
    pub stock_quantity: i32,

    pub category: Option<String>,
}

pub(crate) fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::new("range").with_message("Price cannot be negative".into()));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct CreateProductRecord {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

impl CreateProductRecord {
    pub fn new(req: &CreateProductRequest, image_url: Option<String>) -> Self {
        Self {
            name: req.name.clone(),
            description: req.description.clone(),
            price: req.price,
            stock_quantity: req.stock_quantity,
            category: req.category.clone(),
            image_url,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateProductRecord {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub category: Option<String>,
    /// `None` keeps the stored image.
    pub image_url: Option<String>,
}

impl UpdateProductRecord {
    pub fn new(id: i32, req: &UpdateProductRequest, image_url: Option<String>) -> Self {
        Self {
            id,
            name: req.name.clone(),
            description: req.description.clone(),
            price: req.price,
            stock_quantity: req.stock_quantity,
            category: req.category.clone(),
            image_url,
        }
    }
}
