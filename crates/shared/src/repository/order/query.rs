use crate::{
    abstract_trait::OrderQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::Order as OrderModel,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self) -> Result<Vec<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let orders = sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT
                order_id, first_name, last_name, country, address, city,
                postal_code, phone, save_info, payment_method, payment_photo_url,
                amount_paid, status, created_at
            FROM orders
            ORDER BY created_at DESC, order_id DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch orders: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Found {} orders", orders.len());
        Ok(orders)
    }
}
