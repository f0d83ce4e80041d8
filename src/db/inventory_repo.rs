// src/db/inventory_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::inventory::InventoryItem};

#[derive(Clone)]
pub struct InventoryRepository {
    pool: PgPool,
}

impl InventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<InventoryItem>, AppError> {
        let items = sqlx::query_as::<_, InventoryItem>(
            "SELECT id, name, purchase_price, selling_price, stock, min_stock
             FROM inventory_items ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn insert<'e, E>(&self, executor: E, item: &InventoryItem) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            r#"
            INSERT INTO inventory_items (id, name, purchase_price, selling_price, stock, min_stock)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(item.purchase_price)
        .bind(item.selling_price)
        .bind(item.stock)
        .bind(item.min_stock)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn update<'e, E>(&self, executor: E, item: &InventoryItem) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            r#"
            UPDATE inventory_items SET
                name = $2, purchase_price = $3, selling_price = $4, stock = $5, min_stock = $6
            WHERE id = $1
            "#,
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(item.purchase_price)
        .bind(item.selling_price)
        .bind(item.stock)
        .bind(item.min_stock)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM inventory_items WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(())
    }
}
