#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, Utc};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{
        FileStorageTrait, HashingTrait, OrderCommandRepositoryTrait, OrderQueryRepositoryTrait,
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait, UserCommandRepositoryTrait,
        UserQueryRepositoryTrait,
    },
    domain::requests::{
        CreateOrderRecord, CreateProductRecord, UpdateProductRecord, UploadKind, UploadedFile,
    },
    errors::{RepositoryError, ServiceError},
    model::{Order, OrderItem, OrderStatus, Product, User},
};
use std::sync::{
    Arc, Mutex as StdMutex,
    atomic::{AtomicBool, Ordering},
};
use tokio::sync::Mutex;

pub fn registry() -> Arc<Mutex<Registry>> {
    Arc::new(Mutex::new(Registry::default()))
}

/// Reversible stand-in for bcrypt so tests stay fast.
pub struct PlainHashing;

#[async_trait]
impl HashingTrait for PlainHashing {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        Ok(format!("hashed:{password}"))
    }

    async fn compare_password(
        &self,
        hashed_password: &str,
        password: &str,
    ) -> Result<(), ServiceError> {
        if hashed_password == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ServiceError::InvalidCredentials)
        }
    }
}

#[derive(Default)]
pub struct InMemoryUsers {
    pub users: StdMutex<Vec<User>>,
}

#[async_trait]
impl UserCommandRepositoryTrait for InMemoryUsers {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == email) {
            return Err(RepositoryError::AlreadyExists("users_email_key".into()));
        }

        let user = User {
            user_id: users.len() as i32 + 1,
            email: email.to_string(),
            password: password_hash.to_string(),
            role: "customer".to_string(),
        };
        users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for InMemoryUsers {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
}

/// Records every save instead of touching the filesystem.
#[derive(Default)]
pub struct RecordingStorage {
    pub saved: StdMutex<Vec<(UploadKind, Option<String>)>>,
    pub fail: AtomicBool,
}

#[async_trait]
impl FileStorageTrait for RecordingStorage {
    async fn save(&self, kind: UploadKind, file: &UploadedFile) -> Result<String, ServiceError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ServiceError::Storage(std::io::Error::other("disk full")));
        }

        let mut saved = self.saved.lock().unwrap();
        saved.push((kind, file.file_name.clone()));
        let url = match kind {
            UploadKind::ProductImage => format!("/uploads/image_{}.png", saved.len()),
            UploadKind::PaymentPhoto => format!("/uploads/payments/payment_{}.jpg", saved.len()),
        };
        Ok(url)
    }
}

#[derive(Default)]
pub struct InMemoryProducts {
    pub products: StdMutex<Vec<Product>>,
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryProducts {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut products = self.products.lock().unwrap().clone();
        products.sort_by_key(|p| p.product_id);
        Ok(products)
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryProducts {
    async fn create_product(&self, req: &CreateProductRecord) -> Result<Product, RepositoryError> {
        let mut products = self.products.lock().unwrap();
        let product = Product {
            product_id: products.iter().map(|p| p.product_id).max().unwrap_or(0) + 1,
            name: req.name.clone(),
            description: req.description.clone(),
            price: req.price,
            stock_quantity: req.stock_quantity,
            category: req.category.clone(),
            image_url: req.image_url.clone(),
        };
        products.push(product.clone());
        Ok(product)
    }

    async fn update_product(&self, req: &UpdateProductRecord) -> Result<Product, RepositoryError> {
        let mut products = self.products.lock().unwrap();
        let product = products
            .iter_mut()
            .find(|p| p.product_id == req.id)
            .ok_or(RepositoryError::NotFound)?;

        product.name = req.name.clone();
        product.description = req.description.clone();
        product.price = req.price;
        product.stock_quantity = req.stock_quantity;
        product.category = req.category.clone();
        if let Some(url) = &req.image_url {
            product.image_url = Some(url.clone());
        }
        Ok(product.clone())
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.product_id != id);
        if products.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryOrders {
    pub orders: StdMutex<Vec<Order>>,
    pub items: StdMutex<Vec<OrderItem>>,
    /// Makes the next `create_order` fail as if the transaction aborted.
    pub fail_create: AtomicBool,
}

#[async_trait]
impl OrderQueryRepositoryTrait for InMemoryOrders {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let mut orders = self.orders.lock().unwrap().clone();
        orders.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.order_id.cmp(&a.order_id))
        });
        Ok(orders)
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for InMemoryOrders {
    async fn create_order(&self, req: &CreateOrderRecord) -> Result<Order, RepositoryError> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(RepositoryError::Custom("connection reset".into()));
        }

        let mut orders = self.orders.lock().unwrap();
        let order_id = orders.len() as i32 + 1;
        let order = Order {
            order_id,
            first_name: req.first_name.clone(),
            last_name: req.last_name.clone(),
            country: req.country.clone(),
            address: req.address.clone(),
            city: req.city.clone(),
            postal_code: req.postal_code.clone(),
            phone: req.phone.clone(),
            save_info: req.save_info,
            payment_method: req.payment_method.clone(),
            payment_photo_url: req.payment_photo_url.clone(),
            amount_paid: req.amount_paid,
            status: OrderStatus::Pending.to_string(),
            created_at: Utc::now() + Duration::seconds(order_id as i64),
        };
        orders.push(order.clone());

        let mut items = self.items.lock().unwrap();
        for item in &req.items {
            let order_item_id = items.len() as i32 + 1;
            items.push(OrderItem {
                order_item_id,
                order_id,
                product_id: item.product_id,
                quantity: item.quantity,
            });
        }

        Ok(order)
    }

    async fn update_status(&self, id: i32, status: OrderStatus) -> Result<Order, RepositoryError> {
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .iter_mut()
            .find(|o| o.order_id == id)
            .ok_or(RepositoryError::NotFound)?;
        order.status = status.to_string();
        Ok(order.clone())
    }

    async fn delete_order(&self, id: i32) -> Result<(), RepositoryError> {
        self.items.lock().unwrap().retain(|i| i.order_id != id);

        let mut orders = self.orders.lock().unwrap();
        let before = orders.len();
        orders.retain(|o| o.order_id != id);
        if orders.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
