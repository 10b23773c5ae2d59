use crate::middleware::multipart::MultipartForm;
use serde::Deserialize;
use shared::{
    domain::requests::{CreateOrderRequest, CreateProductRequest, UpdateProductRequest},
    errors::{HttpError, ServiceError},
};
use utoipa::ToSchema;
use validator::Validate;

pub const IMAGE_FIELD: &str = "image";
pub const PAYMENT_PHOTO_FIELD: &str = "paymentPhoto";

/// Multipart body of product create and update.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct ProductForm {
    #[schema(example = "Linen shirt")]
    name: String,
    description: Option<String>,
    #[schema(example = "49.90")]
    price: String,
    #[schema(example = 10)]
    stock_quantity: i32,
    category: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    image: Option<Vec<u8>>,
}

/// Multipart body of order creation.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct OrderForm {
    first_name: String,
    last_name: String,
    country: String,
    address: String,
    city: String,
    postal_code: String,
    phone: String,
    #[schema(example = "true")]
    save_info: String,
    #[schema(example = "bank_transfer")]
    payment_method: String,
    #[schema(example = r#"[{"productId":1,"quantity":2,"price":"10.00"}]"#)]
    items: String,
    #[schema(value_type = Option<String>, format = Binary)]
    payment_photo: Option<Vec<u8>>,
}

pub fn create_product_request(form: &MultipartForm) -> Result<CreateProductRequest, HttpError> {
    let request = CreateProductRequest {
        name: form.text("name"),
        description: form.optional_text("description"),
        price: form.decimal("price")?,
        stock_quantity: form.integer("stockQuantity")?,
        category: form.optional_text("category"),
    };

    request.validate().map_err(ServiceError::from)?;
    Ok(request)
}

pub fn update_product_request(form: &MultipartForm) -> Result<UpdateProductRequest, HttpError> {
    let CreateProductRequest {
        name,
        description,
        price,
        stock_quantity,
        category,
    } = create_product_request(form)?;

    Ok(UpdateProductRequest {
        name,
        description,
        price,
        stock_quantity,
        category,
    })
}

/// `items` stays raw here; the order service decodes it before any write.
pub fn create_order_request(form: &MultipartForm) -> Result<CreateOrderRequest, HttpError> {
    let request = CreateOrderRequest {
        first_name: form.text("firstName"),
        last_name: form.text("lastName"),
        country: form.text("country"),
        address: form.text("address"),
        city: form.text("city"),
        postal_code: form.text("postalCode"),
        phone: form.text("phone"),
        save_info: form.flag("saveInfo"),
        payment_method: form.text("paymentMethod"),
        items: form.text("items"),
    };

    request.validate().map_err(ServiceError::from)?;
    Ok(request)
}
