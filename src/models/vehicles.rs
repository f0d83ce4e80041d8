// src/models/vehicles.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Dados do veículo embutidos em ordens e agendamentos.
// No banco as colunas são achatadas (vehicle_model etc.) e lidas via alias.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct VehicleRef {
    #[schema(example = "Fiat Uno")]
    pub model: String,
    #[schema(example = "2018")]
    pub year: String,
    #[schema(example = "ABC-1234")]
    pub plate: String,
}

// Cadastro de veículos, deduplicado pela placa (chave natural).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: Uuid,
    #[schema(example = "ABC-1234")]
    pub plate: String,
    pub model: String,
    pub year: String,
    pub created_at: DateTime<Utc>,
}

// Linha imutável do histórico de serviços de um veículo.
// vehicle_id é a placa, como no esquema original.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleService {
    pub id: Uuid,
    #[schema(example = "ABC-1234")]
    pub vehicle_id: String,
    #[schema(example = "Troca de óleo")]
    pub service_type: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    #[schema(value_type = String, format = Date, example = "2025-07-12")]
    pub service_date: NaiveDate,
    pub price: Option<Decimal>,
    pub mechanic_name: Option<String>,
    pub client_name: String,
    pub created_at: DateTime<Utc>,
}
