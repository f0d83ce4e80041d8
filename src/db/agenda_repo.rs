// src/db/agenda_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::agenda::Appointment};

const APPOINTMENT_COLUMNS: &str = "id, client_name, vehicle_model AS model, vehicle_year AS year, \
     vehicle_plate AS plate, service_type, date, time, notes, status, created_at";

#[derive(Clone)]
pub struct AgendaRepository {
    pool: PgPool,
}

impl AgendaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Appointment>, AppError> {
        let appointments = sqlx::query_as::<_, Appointment>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments ORDER BY date ASC, time ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(appointments)
    }

    pub async fn insert<'e, E>(&self, executor: E, appointment: &Appointment) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            r#"
            INSERT INTO appointments
                (id, client_name, vehicle_model, vehicle_year, vehicle_plate, service_type,
                 date, time, notes, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(appointment.id)
        .bind(&appointment.client_name)
        .bind(&appointment.vehicle.model)
        .bind(&appointment.vehicle.year)
        .bind(&appointment.vehicle.plate)
        .bind(&appointment.service_type)
        .bind(appointment.date)
        .bind(&appointment.time)
        .bind(&appointment.notes)
        .bind(appointment.status)
        .bind(appointment.created_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn update<'e, E>(&self, executor: E, appointment: &Appointment) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            r#"
            UPDATE appointments SET
                client_name = $2, vehicle_model = $3, vehicle_year = $4, vehicle_plate = $5,
                service_type = $6, date = $7, time = $8, notes = $9, status = $10
            WHERE id = $1
            "#,
        )
        .bind(appointment.id)
        .bind(&appointment.client_name)
        .bind(&appointment.vehicle.model)
        .bind(&appointment.vehicle.year)
        .bind(&appointment.vehicle.plate)
        .bind(&appointment.service_type)
        .bind(appointment.date)
        .bind(&appointment.time)
        .bind(&appointment.notes)
        .bind(appointment.status)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(())
    }
}
