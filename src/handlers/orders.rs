// src/handlers/orders.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    handlers::validate_not_negative,
    models::{
        orders::{ServiceOrder, ServiceStatus},
        vehicles::VehicleRef,
    },
    services::orders_service::{OrderChanges, OrderDraft, PartDraft},
};

// ---
// Payloads
// ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartPayload {
    #[validate(length(min = 1, message = "O nome da peça é obrigatório."))]
    #[schema(example = "Óleo 5W30")]
    pub name: String,

    #[validate(custom(function = "validate_not_negative"))]
    #[schema(example = "35.00")]
    pub price: Decimal,

    #[validate(range(min = 1, message = "A quantidade mínima é 1."))]
    #[schema(example = 4)]
    pub quantity: i32,

    pub inventory_item_id: Option<Uuid>,
}

impl PartPayload {
    fn into_draft(self) -> PartDraft {
        PartDraft {
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            inventory_item_id: self.inventory_item_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderPayload {
    #[validate(length(min = 1, message = "O nome do cliente é obrigatório."))]
    #[schema(example = "João Silva")]
    pub client_name: String,

    pub vehicle: VehicleRef,

    #[validate(length(min = 1, message = "O tipo de serviço é obrigatório."))]
    #[schema(example = "Troca de óleo e filtros")]
    pub service_type: String,

    #[validate(nested)]
    #[serde(default)]
    pub parts: Vec<PartPayload>,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    #[schema(example = "80.00")]
    pub labor_cost: Decimal,

    // O modal de "Iniciar Serviço" cria direto em EM_ANDAMENTO
    #[serde(default = "default_status")]
    pub status: ServiceStatus,
}

fn default_status() -> ServiceStatus {
    ServiceStatus::Rascunho
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderPayload {
    pub client_name: Option<String>,
    pub vehicle: Option<VehicleRef>,
    pub service_type: Option<String>,
    #[validate(nested)]
    pub parts: Option<Vec<PartPayload>>,
    #[validate(custom(function = "validate_not_negative"))]
    pub labor_cost: Option<Decimal>,
    pub status: Option<ServiceStatus>,
}

// ---
// Handlers
// ---

// GET /api/orders
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Ordens de Serviço",
    responses(
        (status = 200, description = "Todas as ordens de serviço", body = Vec<ServiceOrder>)
    )
)]
pub async fn list_orders(State(app_state): State<AppState>) -> impl IntoResponse {
    let orders = app_state.orders_service.list_orders().await;
    (StatusCode::OK, Json(orders))
}

// POST /api/orders
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Ordens de Serviço",
    request_body = CreateOrderPayload,
    responses(
        (status = 201, description = "Ordem criada", body = ServiceOrder),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn create_order(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateOrderPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let order = app_state
        .orders_service
        .add_order(OrderDraft {
            client_name: payload.client_name,
            vehicle: payload.vehicle,
            service_type: payload.service_type,
            parts: payload.parts.into_iter().map(PartPayload::into_draft).collect(),
            labor_cost: payload.labor_cost,
            status: payload.status,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(order)))
}

// PUT /api/orders/{id}
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = "Ordens de Serviço",
    request_body = UpdateOrderPayload,
    params(("id" = Uuid, Path, description = "ID da ordem")),
    responses(
        (status = 200, description = "Ordem atualizada", body = ServiceOrder),
        (status = 404, description = "Ordem não encontrada")
    )
)]
pub async fn update_order(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateOrderPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let order = app_state
        .orders_service
        .update_order(
            id,
            OrderChanges {
                client_name: payload.client_name,
                vehicle: payload.vehicle,
                service_type: payload.service_type,
                parts: payload
                    .parts
                    .map(|parts| parts.into_iter().map(PartPayload::into_draft).collect()),
                labor_cost: payload.labor_cost,
                status: payload.status,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(order)))
}

// POST /api/orders/{id}/complete
#[utoipa::path(
    post,
    path = "/api/orders/{id}/complete",
    tag = "Ordens de Serviço",
    params(("id" = Uuid, Path, description = "ID da ordem")),
    responses(
        (status = 200, description = "Ordem finalizada (idempotente)", body = ServiceOrder),
        (status = 404, description = "Ordem não encontrada"),
        (status = 422, description = "Transição de status inválida")
    )
)]
pub async fn complete_order(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let order = app_state.orders_service.complete_order(id).await?;
    Ok((StatusCode::OK, Json(order)))
}

// DELETE /api/orders/{id}
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "Ordens de Serviço",
    params(("id" = Uuid, Path, description = "ID da ordem")),
    responses(
        (status = 204, description = "Ordem excluída junto com as peças"),
        (status = 404, description = "Ordem não encontrada")
    )
)]
pub async fn delete_order(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.orders_service.delete_order(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
