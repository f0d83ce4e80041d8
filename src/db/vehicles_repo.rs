// src/db/vehicles_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::vehicles::{Vehicle, VehicleService},
};

#[derive(Clone)]
pub struct VehiclesRepository {
    pool: PgPool,
}

impl VehiclesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT id, plate, model, year, created_at FROM vehicles ORDER BY plate ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn insert<'e, E>(&self, executor: E, vehicle: &Vehicle) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        // A placa é chave natural: se dois fluxos cadastrarem o mesmo veículo,
        // o segundo insert vira no-op em vez de violação de unicidade.
        sqlx::query(
            r#"
            INSERT INTO vehicles (id, plate, model, year, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (plate) DO NOTHING
            "#,
        )
        .bind(vehicle.id)
        .bind(&vehicle.plate)
        .bind(&vehicle.model)
        .bind(&vehicle.year)
        .bind(vehicle.created_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    // ---
    // Histórico de serviços (vehicle_id = placa)
    // ---

    pub async fn list_services(&self) -> Result<Vec<VehicleService>, AppError> {
        let entries = sqlx::query_as::<_, VehicleService>(
            "SELECT id, vehicle_id, service_type, description, notes, service_date,
                    price, mechanic_name, client_name, created_at
             FROM vehicle_services ORDER BY service_date DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    pub async fn insert_service<'e, E>(
        &self,
        executor: E,
        entry: &VehicleService,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            r#"
            INSERT INTO vehicle_services
                (id, vehicle_id, service_type, description, notes, service_date,
                 price, mechanic_name, client_name, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(entry.id)
        .bind(&entry.vehicle_id)
        .bind(&entry.service_type)
        .bind(&entry.description)
        .bind(&entry.notes)
        .bind(entry.service_date)
        .bind(entry.price)
        .bind(&entry.mechanic_name)
        .bind(&entry.client_name)
        .bind(entry.created_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn update_service<'e, E>(
        &self,
        executor: E,
        entry: &VehicleService,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            r#"
            UPDATE vehicle_services SET
                vehicle_id = $2, service_type = $3, description = $4, notes = $5,
                service_date = $6, price = $7, mechanic_name = $8, client_name = $9
            WHERE id = $1
            "#,
        )
        .bind(entry.id)
        .bind(&entry.vehicle_id)
        .bind(&entry.service_type)
        .bind(&entry.description)
        .bind(&entry.notes)
        .bind(entry.service_date)
        .bind(entry.price)
        .bind(&entry.mechanic_name)
        .bind(&entry.client_name)
        .execute(executor)
        .await?;

        Ok(())
    }
}
