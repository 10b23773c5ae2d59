use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::CreateOrderRecord,
    errors::RepositoryError,
    model::{Order as OrderModel, OrderStatus},
};
use async_trait::async_trait;
use tracing::{error, info};

const ORDER_COLUMNS: &str = "order_id, first_name, last_name, country, address, city, \
     postal_code, phone, save_info, payment_method, payment_photo_url, \
     amount_paid, status, created_at";

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(&self, req: &CreateOrderRecord) -> Result<OrderModel, RepositoryError> {
        // An early return drops `tx` uncommitted, which rolls everything back.
        let mut tx = self.db.begin().await.map_err(|err| {
            error!("❌ Failed to begin order transaction: {err:?}");
            RepositoryError::from(err)
        })?;

        let order = sqlx::query_as::<_, OrderModel>(&format!(
            r#"
            INSERT INTO orders (
                first_name, last_name, country, address, city, postal_code,
                phone, save_info, payment_method, payment_photo_url, amount_paid
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.country)
        .bind(&req.address)
        .bind(&req.city)
        .bind(&req.postal_code)
        .bind(&req.phone)
        .bind(req.save_info)
        .bind(&req.payment_method)
        .bind(&req.payment_photo_url)
        .bind(req.amount_paid)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to insert order: {err:?}");
            RepositoryError::from(err)
        })?;

        for item in &req.items {
            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, product_id, quantity)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(order.order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to insert item for product {} on order {}: {err:?}",
                    item.product_id, order.order_id
                );
                RepositoryError::from(err)
            })?;
        }

        tx.commit().await.map_err(|err| {
            error!("❌ Failed to commit order {}: {err:?}", order.order_id);
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created order ID {} with {} items, amount {}",
            order.order_id,
            req.items.len(),
            order.amount_paid
        );
        Ok(order)
    }

    async fn update_status(
        &self,
        id: i32,
        status: OrderStatus,
    ) -> Result<OrderModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, OrderModel>(&format!(
            r#"
            UPDATE orders
            SET status = $1
            WHERE order_id = $2
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(status.as_str())
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update status of order {id}: {err:?}");
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Order {id} is now {status}");
        Ok(order)
    }

    async fn delete_order(&self, id: i32) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let items = sqlx::query("DELETE FROM order_items WHERE order_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete items of order {id}: {err:?}");
                RepositoryError::from(err)
            })?;

        let result = sqlx::query("DELETE FROM orders WHERE order_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete order {id}: {err:?}");
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "🗑️ Deleted order ID {id} and {} items",
            items.rows_affected()
        );
        Ok(())
    }
}
