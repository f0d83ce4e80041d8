// src/handlers/agenda.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        agenda::{Appointment, AppointmentStatus},
        vehicles::VehicleRef,
    },
    services::agenda_service::{AppointmentChanges, AppointmentDraft},
};

// ---
// Payloads
// ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentPayload {
    #[validate(length(min = 1, message = "O nome do cliente é obrigatório."))]
    #[schema(example = "Roberto Campos")]
    pub client_name: String,

    pub vehicle: VehicleRef,

    #[validate(length(min = 1, message = "O tipo de serviço é obrigatório."))]
    #[schema(example = "Troca de óleo")]
    pub service_type: String,

    #[schema(value_type = String, format = Date, example = "2025-07-15")]
    pub date: NaiveDate,

    #[validate(length(min = 1, message = "O horário é obrigatório."))]
    #[schema(example = "09:30")]
    pub time: String,

    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentPayload {
    pub client_name: Option<String>,
    pub vehicle: Option<VehicleRef>,
    pub service_type: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusPayload {
    #[schema(example = "FINALIZADO")]
    pub status: AppointmentStatus,
}

// ---
// Handlers
// ---

// GET /api/appointments
#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = "Agenda",
    responses(
        (status = 200, description = "Todos os agendamentos", body = Vec<Appointment>)
    )
)]
pub async fn list_appointments(State(app_state): State<AppState>) -> impl IntoResponse {
    let appointments = app_state.agenda_service.list_appointments().await;
    (StatusCode::OK, Json(appointments))
}

// POST /api/appointments
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = "Agenda",
    request_body = CreateAppointmentPayload,
    responses(
        (status = 201, description = "Agendamento criado com status AGENDADO", body = Appointment),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn create_appointment(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateAppointmentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let appointment = app_state
        .agenda_service
        .add_appointment(AppointmentDraft {
            client_name: payload.client_name,
            vehicle: payload.vehicle,
            service_type: payload.service_type,
            date: payload.date,
            time: payload.time,
            notes: payload.notes,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

// PUT /api/appointments/{id}
#[utoipa::path(
    put,
    path = "/api/appointments/{id}",
    tag = "Agenda",
    request_body = UpdateAppointmentPayload,
    params(("id" = Uuid, Path, description = "ID do agendamento")),
    responses(
        (status = 200, description = "Agendamento atualizado", body = Appointment),
        (status = 404, description = "Agendamento não encontrado")
    )
)]
pub async fn update_appointment(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAppointmentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let appointment = app_state
        .agenda_service
        .update_appointment(
            id,
            AppointmentChanges {
                client_name: payload.client_name,
                vehicle: payload.vehicle,
                service_type: payload.service_type,
                date: payload.date,
                time: payload.time,
                notes: payload.notes,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(appointment)))
}

// PATCH /api/appointments/{id}/status
#[utoipa::path(
    patch,
    path = "/api/appointments/{id}/status",
    tag = "Agenda",
    request_body = UpdateStatusPayload,
    params(("id" = Uuid, Path, description = "ID do agendamento")),
    responses(
        (status = 200, description = "Somente o status é alterado", body = Appointment),
        (status = 404, description = "Agendamento não encontrado")
    )
)]
pub async fn update_appointment_status(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let appointment = app_state
        .agenda_service
        .update_appointment_status(id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(appointment)))
}

// DELETE /api/appointments/{id}
#[utoipa::path(
    delete,
    path = "/api/appointments/{id}",
    tag = "Agenda",
    params(("id" = Uuid, Path, description = "ID do agendamento")),
    responses(
        (status = 204, description = "Agendamento excluído"),
        (status = 404, description = "Agendamento não encontrado")
    )
)]
pub async fn delete_appointment(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.agenda_service.delete_appointment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
