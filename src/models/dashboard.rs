// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

// 1. Resumo financeiro (os cards do topo)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub daily_revenue: Decimal,   // OS concluídas hoje
    pub weekly_revenue: Decimal,  // Últimos 7 dias
    pub monthly_revenue: Decimal, // Mês calendário corrente
    pub daily_expenses: Decimal,
    pub monthly_expenses: Decimal,
}

// 2. Gráfico de tendência (um balde por dia)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevenueChartEntry {
    #[schema(example = "12/07")]
    pub date: String, // dd/MM, como o frontend exibe
    pub revenue: Decimal,
    pub expenses: Decimal,
}
