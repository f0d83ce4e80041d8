// src/services/dashboard_service.rs

// Agregador derivado: funções puras sobre os retratos em memória. Nada é
// cacheado; cada chamada revarre as coleções e por isso sempre reflete a
// última mutação aplicada.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::{
    models::{
        dashboard::{FinancialSummary, RevenueChartEntry},
        finance::Expense,
        orders::{Part, ServiceOrder, ServiceStatus},
    },
    state::AppSnapshots,
};

/// total = mão de obra + soma(preço unitário * quantidade)
pub fn order_total(labor_cost: Decimal, parts: &[Part]) -> Decimal {
    labor_cost
        + parts
            .iter()
            .map(|p| p.price * Decimal::from(p.quantity))
            .sum::<Decimal>()
}

// Dia em que a ordem foi concluída; None para qualquer status != CONCLUIDO.
fn completed_on(order: &ServiceOrder) -> Option<NaiveDate> {
    if order.status != ServiceStatus::Concluido {
        return None;
    }
    order.completed_at.map(|t| t.date_naive())
}

pub fn daily_revenue(orders: &[ServiceOrder], now: DateTime<Utc>) -> Decimal {
    let today = now.date_naive();
    orders
        .iter()
        .filter(|o| completed_on(o) == Some(today))
        .map(|o| o.total)
        .sum()
}

/// Janela móvel dos últimos 7 dias.
pub fn weekly_revenue(orders: &[ServiceOrder], now: DateTime<Utc>) -> Decimal {
    let cutoff = now - Duration::days(7);
    orders
        .iter()
        .filter(|o| o.status == ServiceStatus::Concluido)
        .filter(|o| o.completed_at.is_some_and(|t| t >= cutoff))
        .map(|o| o.total)
        .sum()
}

/// Mês calendário corrente, não janela móvel de 30 dias.
pub fn monthly_revenue(orders: &[ServiceOrder], now: DateTime<Utc>) -> Decimal {
    let today = now.date_naive();
    orders
        .iter()
        .filter(|o| {
            matches!(completed_on(o), Some(d) if d.month() == today.month() && d.year() == today.year())
        })
        .map(|o| o.total)
        .sum()
}

pub fn daily_expenses(expenses: &[Expense], now: DateTime<Utc>) -> Decimal {
    let today = now.date_naive();
    expenses
        .iter()
        .filter(|e| e.date == today)
        .map(|e| e.amount)
        .sum()
}

pub fn monthly_expenses(expenses: &[Expense], now: DateTime<Utc>) -> Decimal {
    let today = now.date_naive();
    expenses
        .iter()
        .filter(|e| e.date.month() == today.month() && e.date.year() == today.year())
        .map(|e| e.amount)
        .sum()
}

/// Um balde por dia calendário da janela, do mais antigo para hoje, com a
/// chave dd/MM que o gráfico do frontend usa.
pub fn revenue_chart(
    orders: &[ServiceOrder],
    expenses: &[Expense],
    now: DateTime<Utc>,
    days: i64,
) -> Vec<RevenueChartEntry> {
    let today = now.date_naive();
    (0..days)
        .map(|i| {
            let day = today - Duration::days(days - 1 - i);
            RevenueChartEntry {
                date: day.format("%d/%m").to_string(),
                revenue: orders
                    .iter()
                    .filter(|o| completed_on(o) == Some(day))
                    .map(|o| o.total)
                    .sum(),
                expenses: expenses
                    .iter()
                    .filter(|e| e.date == day)
                    .map(|e| e.amount)
                    .sum(),
            }
        })
        .collect()
}

#[derive(Clone)]
pub struct DashboardService {
    snapshots: Arc<AppSnapshots>,
}

impl DashboardService {
    pub fn new(snapshots: Arc<AppSnapshots>) -> Self {
        Self { snapshots }
    }

    pub async fn summary(&self) -> FinancialSummary {
        let orders = self.snapshots.service_orders.read().await;
        let expenses = self.snapshots.expenses.read().await;
        let now = Utc::now();

        FinancialSummary {
            daily_revenue: daily_revenue(&orders, now),
            weekly_revenue: weekly_revenue(&orders, now),
            monthly_revenue: monthly_revenue(&orders, now),
            daily_expenses: daily_expenses(&expenses, now),
            monthly_expenses: monthly_expenses(&expenses, now),
        }
    }

    pub async fn revenue_chart(&self, days: i64) -> Vec<RevenueChartEntry> {
        // Janela limitada para o gráfico continuar legível
        let days = days.clamp(1, 90);
        let orders = self.snapshots.service_orders.read().await;
        let expenses = self.snapshots.expenses.read().await;
        revenue_chart(&orders, &expenses, Utc::now(), days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicles::VehicleRef;
    use uuid::Uuid;

    fn order(status: ServiceStatus, completed_at: Option<DateTime<Utc>>, total: i64) -> ServiceOrder {
        let now = Utc::now();
        ServiceOrder {
            id: Uuid::new_v4(),
            client_name: "Maria Oliveira".to_string(),
            vehicle: VehicleRef {
                model: "Honda Fit".to_string(),
                year: "2020".to_string(),
                plate: "DEF-5678".to_string(),
            },
            service_type: "Revisão completa".to_string(),
            parts: vec![],
            labor_cost: Decimal::from(total),
            total: Decimal::from(total),
            status,
            created_at: now - Duration::days(3),
            updated_at: now,
            completed_at,
        }
    }

    fn expense(amount: i64, date: NaiveDate) -> Expense {
        Expense {
            id: Uuid::new_v4(),
            description: "Reposição de estoque".to_string(),
            amount: Decimal::from(amount),
            date,
            category: "Peças".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn receita_diaria_conta_somente_concluidas_de_hoje() {
        let now = Utc::now();
        let orders = vec![
            order(ServiceStatus::Concluido, Some(now), 460),
            // Concluída ontem: fora do dia
            order(ServiceStatus::Concluido, Some(now - Duration::days(1)), 340),
            // Em andamento hoje: status errado
            order(ServiceStatus::EmAndamento, None, 290),
            // Cancelada nunca conta, mesmo com completed_at residual
            order(ServiceStatus::Cancelado, Some(now), 150),
        ];

        assert_eq!(daily_revenue(&orders, now), Decimal::from(460));
    }

    #[test]
    fn receita_semanal_sem_ordens_concluidas_e_zero() {
        let now = Utc::now();
        let orders = vec![
            order(ServiceStatus::EmAndamento, None, 290),
            order(ServiceStatus::Rascunho, None, 150),
        ];

        assert_eq!(weekly_revenue(&orders, now), Decimal::ZERO);
    }

    #[test]
    fn receita_semanal_respeita_a_janela_de_sete_dias() {
        let now = Utc::now();
        let orders = vec![
            order(ServiceStatus::Concluido, Some(now - Duration::days(2)), 460),
            order(ServiceStatus::Concluido, Some(now - Duration::days(6)), 340),
            // Oito dias atrás: fora da janela
            order(ServiceStatus::Concluido, Some(now - Duration::days(8)), 500),
        ];

        assert_eq!(weekly_revenue(&orders, now), Decimal::from(800));
    }

    #[test]
    fn despesas_do_mes_ignoram_outros_meses() {
        let now = Utc::now();
        let today = now.date_naive();
        let expenses = vec![
            expense(380, today),
            expense(1200, today - Duration::days(400)),
        ];

        assert_eq!(monthly_expenses(&expenses, now), Decimal::from(380));
    }

    #[test]
    fn grafico_tem_um_balde_por_dia_da_janela() {
        let now = Utc::now();
        let today = now.date_naive();
        let orders = vec![
            order(ServiceStatus::Concluido, Some(now), 460),
            order(ServiceStatus::Concluido, Some(now - Duration::days(1)), 340),
        ];
        let expenses = vec![expense(380, today - Duration::days(1))];

        let chart = revenue_chart(&orders, &expenses, now, 7);

        assert_eq!(chart.len(), 7);
        assert_eq!(chart[0].date, (today - Duration::days(6)).format("%d/%m").to_string());
        assert_eq!(chart[6].date, today.format("%d/%m").to_string());
        assert_eq!(chart[6].revenue, Decimal::from(460));
        assert_eq!(chart[5].revenue, Decimal::from(340));
        assert_eq!(chart[5].expenses, Decimal::from(380));
        assert_eq!(chart[0].revenue, Decimal::ZERO);
    }

    #[test]
    fn total_do_cenario_padrao() {
        let parts = vec![
            Part {
                id: Uuid::new_v4(),
                service_order_id: Uuid::new_v4(),
                name: "Óleo 5W30".to_string(),
                price: Decimal::from(35),
                quantity: 4,
                inventory_item_id: None,
            },
            Part {
                id: Uuid::new_v4(),
                service_order_id: Uuid::new_v4(),
                name: "Filtro de óleo".to_string(),
                price: Decimal::from(25),
                quantity: 1,
                inventory_item_id: None,
            },
        ];

        assert_eq!(order_total(Decimal::from(80), &parts), Decimal::from(245));
    }
}
