// src/config.rs

use std::{env, sync::Arc, time::Duration};

use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{
    common::notify::{Notifier, TracingNotifier},
    db::{PgRecordStore, RecordStore},
    services::{
        AgendaService, DashboardService, FinanceService, InventoryService, OrdersService,
        VehiclesService,
    },
    state::AppSnapshots,
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub store: Arc<dyn RecordStore>,
    pub snapshots: Arc<AppSnapshots>,
    pub orders_service: OrdersService,
    pub agenda_service: AgendaService,
    pub inventory_service: InventoryService,
    pub finance_service: FinanceService,
    pub vehicles_service: VehiclesService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    // A assinatura retorna um Result: se a configuração falhar, quem decide
    // o que fazer é o main.
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let store: Arc<dyn RecordStore> = Arc::new(PgRecordStore::new(db_pool.clone()));
        let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);
        let snapshots = Arc::new(AppSnapshots::new());

        let inventory_service =
            InventoryService::new(snapshots.clone(), store.clone(), notifier.clone());
        let vehicles_service =
            VehiclesService::new(snapshots.clone(), store.clone(), notifier.clone());
        let finance_service =
            FinanceService::new(snapshots.clone(), store.clone(), notifier.clone());
        let agenda_service = AgendaService::new(
            snapshots.clone(),
            store.clone(),
            notifier.clone(),
            vehicles_service.clone(),
        );
        let orders_service = OrdersService::new(
            snapshots.clone(),
            store.clone(),
            notifier.clone(),
            inventory_service.clone(),
            vehicles_service.clone(),
        );
        let dashboard_service = DashboardService::new(snapshots.clone());

        // Retorna Ok com o estado montado
        Ok(Self {
            db_pool,
            store,
            snapshots,
            orders_service,
            agenda_service,
            inventory_service,
            finance_service,
            vehicles_service,
            dashboard_service,
        })
    }
}
