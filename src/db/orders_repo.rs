// src/db/orders_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::orders::{Part, ServiceOrder},
};

// As colunas do veículo são achatadas na tabela; os aliases reconstituem
// o struct VehicleRef no FromRow.
const ORDER_COLUMNS: &str = "id, client_name, vehicle_model AS model, vehicle_year AS year, \
     vehicle_plate AS plate, service_type, labor_cost, total, status, \
     created_at, updated_at, completed_at";

#[derive(Clone)]
pub struct OrdersRepository {
    pool: PgPool,
}

impl OrdersRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ---
    // Leitura: busca as ordens e costura as peças em memória
    // ---
    pub async fn list_all(&self) -> Result<Vec<ServiceOrder>, AppError> {
        let mut orders = sqlx::query_as::<_, ServiceOrder>(&format!(
            "SELECT {ORDER_COLUMNS} FROM service_orders ORDER BY created_at ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        let parts = sqlx::query_as::<_, Part>(
            "SELECT id, service_order_id, name, price, quantity, inventory_item_id
             FROM service_order_parts",
        )
        .fetch_all(&self.pool)
        .await?;

        for order in orders.iter_mut() {
            order.parts = parts
                .iter()
                .filter(|p| p.service_order_id == order.id)
                .cloned()
                .collect();
        }

        Ok(orders)
    }

    // ---
    // Escrita (transacional via Executor, como nas demais rotinas de gravação)
    // ---
    pub async fn insert<'e, E>(&self, executor: E, order: &ServiceOrder) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            r#"
            INSERT INTO service_orders
                (id, client_name, vehicle_model, vehicle_year, vehicle_plate, service_type,
                 labor_cost, total, status, created_at, updated_at, completed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(order.id)
        .bind(&order.client_name)
        .bind(&order.vehicle.model)
        .bind(&order.vehicle.year)
        .bind(&order.vehicle.plate)
        .bind(&order.service_type)
        .bind(order.labor_cost)
        .bind(order.total)
        .bind(order.status)
        .bind(order.created_at)
        .bind(order.updated_at)
        .bind(order.completed_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn update<'e, E>(&self, executor: E, order: &ServiceOrder) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            r#"
            UPDATE service_orders SET
                client_name = $2, vehicle_model = $3, vehicle_year = $4, vehicle_plate = $5,
                service_type = $6, labor_cost = $7, total = $8, status = $9,
                updated_at = $10, completed_at = $11
            WHERE id = $1
            "#,
        )
        .bind(order.id)
        .bind(&order.client_name)
        .bind(&order.vehicle.model)
        .bind(&order.vehicle.year)
        .bind(&order.vehicle.plate)
        .bind(&order.service_type)
        .bind(order.labor_cost)
        .bind(order.total)
        .bind(order.status)
        .bind(order.updated_at)
        .bind(order.completed_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        // ON DELETE CASCADE leva as peças junto
        sqlx::query("DELETE FROM service_orders WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn insert_part<'e, E>(&self, executor: E, part: &Part) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            r#"
            INSERT INTO service_order_parts
                (id, service_order_id, name, price, quantity, inventory_item_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(part.id)
        .bind(part.service_order_id)
        .bind(&part.name)
        .bind(part.price)
        .bind(part.quantity)
        .bind(part.inventory_item_id)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete_parts_for_order<'e, E>(
        &self,
        executor: E,
        order_id: Uuid,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM service_order_parts WHERE service_order_id = $1")
            .bind(order_id)
            .execute(executor)
            .await?;

        Ok(())
    }
}
