// src/handlers/finance.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    handlers::validate_not_negative,
    models::finance::Expense,
    services::finance_service::{ExpenseChanges, ExpenseDraft},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpensePayload {
    #[validate(length(min = 1, message = "A descrição é obrigatória."))]
    #[schema(example = "Conta de energia")]
    pub description: String,

    #[validate(custom(function = "validate_not_negative"))]
    #[schema(example = "380.00")]
    pub amount: Decimal,

    #[schema(value_type = String, format = Date, example = "2025-07-10")]
    pub date: NaiveDate,

    #[validate(length(min = 1, message = "A categoria é obrigatória."))]
    #[schema(example = "Utilidades")]
    pub category: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpensePayload {
    pub description: Option<String>,
    #[validate(custom(function = "validate_not_negative"))]
    pub amount: Option<Decimal>,
    #[schema(value_type = Option<String>, format = Date)]
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
}

// GET /api/expenses
#[utoipa::path(
    get,
    path = "/api/expenses",
    tag = "Despesas",
    responses(
        (status = 200, description = "Todas as despesas", body = Vec<Expense>)
    )
)]
pub async fn list_expenses(State(app_state): State<AppState>) -> impl IntoResponse {
    let expenses = app_state.finance_service.list_expenses().await;
    (StatusCode::OK, Json(expenses))
}

// POST /api/expenses
#[utoipa::path(
    post,
    path = "/api/expenses",
    tag = "Despesas",
    request_body = CreateExpensePayload,
    responses(
        (status = 201, description = "Despesa criada", body = Expense),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn create_expense(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateExpensePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let expense = app_state
        .finance_service
        .add_expense(ExpenseDraft {
            description: payload.description,
            amount: payload.amount,
            date: payload.date,
            category: payload.category,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(expense)))
}

// PUT /api/expenses/{id}
#[utoipa::path(
    put,
    path = "/api/expenses/{id}",
    tag = "Despesas",
    request_body = UpdateExpensePayload,
    params(("id" = Uuid, Path, description = "ID da despesa")),
    responses(
        (status = 200, description = "Despesa atualizada", body = Expense),
        (status = 404, description = "Despesa não encontrada")
    )
)]
pub async fn update_expense(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateExpensePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let expense = app_state
        .finance_service
        .update_expense(
            id,
            ExpenseChanges {
                description: payload.description,
                amount: payload.amount,
                date: payload.date,
                category: payload.category,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(expense)))
}

// DELETE /api/expenses/{id}
#[utoipa::path(
    delete,
    path = "/api/expenses/{id}",
    tag = "Despesas",
    params(("id" = Uuid, Path, description = "ID da despesa")),
    responses(
        (status = 204, description = "Despesa excluída"),
        (status = 404, description = "Despesa não encontrada")
    )
)]
pub async fn delete_expense(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.finance_service.delete_expense(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
