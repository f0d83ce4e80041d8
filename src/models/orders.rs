// src/models/orders.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::vehicles::VehicleRef;

// --- Enums ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "service_status", rename_all = "SCREAMING_SNAKE_CASE")] // Banco
#[serde(rename_all = "SCREAMING_SNAKE_CASE")] // JSON
pub enum ServiceStatus {
    Rascunho,    // Vira "RASCUNHO"
    EmAndamento, // Vira "EM_ANDAMENTO"
    Concluido,   // Vira "CONCLUIDO"
    Cancelado,   // Vira "CANCELADO"
}

// --- Peça aplicada em uma OS ---
// Pertence exclusivamente à sua ordem; excluir a ordem exclui as peças.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: Uuid,
    #[schema(ignore)]
    pub service_order_id: Uuid,
    #[schema(example = "Óleo 5W30")]
    pub name: String,
    #[schema(example = "35.00")]
    pub price: Decimal,
    #[schema(example = 4)]
    pub quantity: i32,
    // Referência opcional ao item de estoque que originou a peça
    pub inventory_item_id: Option<Uuid>,
}

// --- Ordem de Serviço ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrder {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "João Silva")]
    pub client_name: String,
    #[sqlx(flatten)]
    pub vehicle: VehicleRef,
    #[schema(example = "Troca de óleo e filtros")]
    pub service_type: String,
    // Carregadas em consulta separada, nunca vêm da própria linha
    #[sqlx(skip)]
    pub parts: Vec<Part>,
    #[schema(example = "80.00")]
    pub labor_cost: Decimal,
    // total = labor_cost + soma(price * quantity), recalculado a cada gravação
    #[schema(example = "245.00")]
    pub total: Decimal,
    pub status: ServiceStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    // Preenchido somente quando status = CONCLUIDO
    pub completed_at: Option<DateTime<Utc>>,
}
