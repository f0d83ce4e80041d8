// src/models/agenda.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::vehicles::VehicleRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "appointment_status", rename_all = "SCREAMING_SNAKE_CASE")] // Banco
#[serde(rename_all = "SCREAMING_SNAKE_CASE")] // JSON
pub enum AppointmentStatus {
    Agendado,
    EmAndamento, // Uma OS foi aberta a partir do agendamento
    Finalizado,
    Cancelado,
    Atrasado,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    #[schema(example = "Roberto Campos")]
    pub client_name: String,
    #[sqlx(flatten)]
    pub vehicle: VehicleRef,
    #[schema(example = "Troca de óleo")]
    pub service_type: String,
    #[schema(value_type = String, format = Date, example = "2025-07-15")]
    pub date: NaiveDate,
    #[schema(example = "09:30")]
    pub time: String,
    pub notes: Option<String>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}
