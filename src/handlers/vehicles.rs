// src/handlers/vehicles.rs

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
    models::vehicles::{Vehicle, VehicleService},
    services::vehicles_service::{ServiceEntryChanges, ServiceEntryDraft},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceEntryPayload {
    #[validate(length(min = 1, message = "A placa é obrigatória."))]
    #[schema(example = "ABC-1234")]
    pub plate: String,

    #[validate(length(min = 1, message = "O tipo de serviço é obrigatório."))]
    #[schema(example = "Troca de óleo")]
    pub service_type: String,

    pub description: Option<String>,
    pub notes: Option<String>,

    #[schema(value_type = String, format = Date, example = "2025-07-12")]
    pub service_date: NaiveDate,

    #[validate(custom(function = "validate_not_negative"))]
    pub price: Option<Decimal>,

    pub mechanic_name: Option<String>,

    #[validate(length(min = 1, message = "O nome do cliente é obrigatório."))]
    #[schema(example = "João Silva")]
    pub client_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceEntryPayload {
    pub service_type: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub service_date: Option<NaiveDate>,
    #[validate(custom(function = "validate_not_negative"))]
    pub price: Option<Decimal>,
    pub mechanic_name: Option<String>,
    pub client_name: Option<String>,
}

// GET /api/vehicles
#[utoipa::path(
    get,
    path = "/api/vehicles",
    tag = "Veículos",
    responses(
        (status = 200, description = "Veículos cadastrados (deduplicados pela placa)", body = Vec<Vehicle>)
    )
)]
pub async fn list_vehicles(State(app_state): State<AppState>) -> impl IntoResponse {
    let vehicles = app_state.vehicles_service.list_vehicles().await;
    (StatusCode::OK, Json(vehicles))
}

// GET /api/vehicles/{plate}/services
#[utoipa::path(
    get,
    path = "/api/vehicles/{plate}/services",
    tag = "Veículos",
    params(("plate" = String, Path, description = "Placa do veículo")),
    responses(
        (status = 200, description = "Histórico de serviços do veículo", body = Vec<VehicleService>)
    )
)]
pub async fn list_vehicle_services(
    State(app_state): State<AppState>,
    Path(plate): Path<String>,
) -> impl IntoResponse {
    let entries = app_state.vehicles_service.vehicle_services(&plate).await;
    (StatusCode::OK, Json(entries))
}

// POST /api/vehicles/services
#[utoipa::path(
    post,
    path = "/api/vehicles/services",
    tag = "Veículos",
    request_body = CreateServiceEntryPayload,
    responses(
        (status = 201, description = "Registro manual adicionado ao histórico", body = VehicleService),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn create_vehicle_service(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateServiceEntryPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let entry = app_state
        .vehicles_service
        .add_vehicle_service(ServiceEntryDraft {
            plate: payload.plate,
            service_type: payload.service_type,
            description: payload.description,
            notes: payload.notes,
            service_date: payload.service_date,
            price: payload.price,
            mechanic_name: payload.mechanic_name,
            client_name: payload.client_name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

// PUT /api/vehicles/services/{id}
#[utoipa::path(
    put,
    path = "/api/vehicles/services/{id}",
    tag = "Veículos",
    request_body = UpdateServiceEntryPayload,
    params(("id" = Uuid, Path, description = "ID do registro de histórico")),
    responses(
        (status = 200, description = "Registro atualizado", body = VehicleService),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn update_vehicle_service(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateServiceEntryPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let entry = app_state
        .vehicles_service
        .update_vehicle_service(
            id,
            ServiceEntryChanges {
                service_type: payload.service_type,
                description: payload.description,
                notes: payload.notes,
                service_date: payload.service_date,
                price: payload.price,
                mechanic_name: payload.mechanic_name,
                client_name: payload.client_name,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(entry)))
}
