// src/handlers/dashboard.rs

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    config::AppState,
    models::dashboard::{FinancialSummary, RevenueChartEntry},
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ChartParams {
    // Janela em dias; o padrão é a última semana
    #[param(example = 7)]
    pub days: Option<i64>,
}

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Receitas e despesas do dia, da semana e do mês", body = FinancialSummary)
    )
)]
pub async fn get_summary(State(app_state): State<AppState>) -> impl IntoResponse {
    let summary = app_state.dashboard_service.summary().await;
    (StatusCode::OK, Json(summary))
}

// GET /api/dashboard/revenue-chart
#[utoipa::path(
    get,
    path = "/api/dashboard/revenue-chart",
    tag = "Dashboard",
    params(ChartParams),
    responses(
        (status = 200, description = "Receita x despesa por dia da janela", body = Vec<RevenueChartEntry>)
    )
)]
pub async fn get_revenue_chart(
    State(app_state): State<AppState>,
    Query(params): Query<ChartParams>,
) -> impl IntoResponse {
    let chart = app_state
        .dashboard_service
        .revenue_chart(params.days.unwrap_or(7))
        .await;

    (StatusCode::OK, Json(chart))
}
