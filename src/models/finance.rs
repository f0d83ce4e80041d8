// src/models/finance.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Lançamento avulso do livro de despesas. Sem vínculos com outras entidades.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,
    #[schema(example = "Conta de energia")]
    pub description: String,
    #[schema(example = "380.00")]
    pub amount: Decimal,
    #[schema(value_type = String, format = Date, example = "2025-07-10")]
    pub date: NaiveDate,
    #[schema(example = "Utilidades")]
    pub category: String,
    pub created_at: DateTime<Utc>,
}
