// src/handlers/inventory.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    handlers::validate_not_negative,
    models::inventory::{InventoryItem, StockStatus},
    services::inventory_service::{ItemChanges, ItemDraft},
};

// ---
// Payloads
// ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    #[schema(example = "Óleo 5W30 (1L)")]
    pub name: String,

    #[validate(custom(function = "validate_not_negative"))]
    #[schema(example = "25.00")]
    pub purchase_price: Decimal,

    #[validate(custom(function = "validate_not_negative"))]
    #[schema(example = "35.00")]
    pub selling_price: Decimal,

    #[validate(range(min = 0, message = "O estoque não pode ser negativo."))]
    #[serde(default)]
    #[schema(example = 20)]
    pub stock: i32,

    #[validate(range(min = 0, message = "O estoque mínimo não pode ser negativo."))]
    #[serde(default)]
    #[schema(example = 5)]
    pub min_stock: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemPayload {
    pub name: Option<String>,
    #[validate(custom(function = "validate_not_negative"))]
    pub purchase_price: Option<Decimal>,
    #[validate(custom(function = "validate_not_negative"))]
    pub selling_price: Option<Decimal>,
    #[validate(range(min = 0, message = "O estoque não pode ser negativo."))]
    pub stock: Option<i32>,
    #[validate(range(min = 0, message = "O estoque mínimo não pode ser negativo."))]
    pub min_stock: Option<i32>,
}

// Item + indicadores derivados, como a tela de estoque exibe.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub stock_status: StockStatus,
    #[schema(example = "40.0")]
    pub profit_margin: Decimal,
}

impl From<InventoryItem> for ItemSummary {
    fn from(item: InventoryItem) -> Self {
        Self {
            stock_status: item.stock_status(),
            profit_margin: item.profit_margin(),
            item,
        }
    }
}

// ---
// Handlers
// ---

// GET /api/inventory/items
#[utoipa::path(
    get,
    path = "/api/inventory/items",
    tag = "Estoque",
    responses(
        (status = 200, description = "Itens com situação de estoque e margem", body = Vec<ItemSummary>)
    )
)]
pub async fn list_items(State(app_state): State<AppState>) -> impl IntoResponse {
    let items: Vec<ItemSummary> = app_state
        .inventory_service
        .list_items()
        .await
        .into_iter()
        .map(ItemSummary::from)
        .collect();

    (StatusCode::OK, Json(items))
}

// POST /api/inventory/items
#[utoipa::path(
    post,
    path = "/api/inventory/items",
    tag = "Estoque",
    request_body = CreateItemPayload,
    responses(
        (status = 201, description = "Item criado", body = ItemSummary),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn create_item(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let item = app_state
        .inventory_service
        .add_item(ItemDraft {
            name: payload.name,
            purchase_price: payload.purchase_price,
            selling_price: payload.selling_price,
            stock: payload.stock,
            min_stock: payload.min_stock,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ItemSummary::from(item))))
}

// PUT /api/inventory/items/{id}
#[utoipa::path(
    put,
    path = "/api/inventory/items/{id}",
    tag = "Estoque",
    request_body = UpdateItemPayload,
    params(("id" = Uuid, Path, description = "ID do item")),
    responses(
        (status = 200, description = "Item atualizado", body = ItemSummary),
        (status = 404, description = "Item não encontrado")
    )
)]
pub async fn update_item(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let item = app_state
        .inventory_service
        .update_item(
            id,
            ItemChanges {
                name: payload.name,
                purchase_price: payload.purchase_price,
                selling_price: payload.selling_price,
                stock: payload.stock,
                min_stock: payload.min_stock,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(ItemSummary::from(item))))
}

// DELETE /api/inventory/items/{id}
#[utoipa::path(
    delete,
    path = "/api/inventory/items/{id}",
    tag = "Estoque",
    params(("id" = Uuid, Path, description = "ID do item")),
    responses(
        (status = 204, description = "Item excluído"),
        (status = 404, description = "Item não encontrado")
    )
)]
pub async fn delete_item(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.inventory_service.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
