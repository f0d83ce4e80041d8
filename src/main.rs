//src/main.rs

use axum::{
    Router,
    routing::{get, patch, post, put},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;
mod state;

use crate::config::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Carga inicial best-effort das seis coleções (coleção que falhar cai no seed)
    app_state
        .snapshots
        .load_from(app_state.store.as_ref())
        .await;

    let orders_routes = Router::new()
        .route(
            "/",
            post(handlers::orders::create_order).get(handlers::orders::list_orders),
        )
        .route(
            "/{id}",
            put(handlers::orders::update_order).delete(handlers::orders::delete_order),
        )
        .route("/{id}/complete", post(handlers::orders::complete_order));

    let agenda_routes = Router::new()
        .route(
            "/",
            post(handlers::agenda::create_appointment).get(handlers::agenda::list_appointments),
        )
        .route(
            "/{id}",
            put(handlers::agenda::update_appointment)
                .delete(handlers::agenda::delete_appointment),
        )
        .route(
            "/{id}/status",
            patch(handlers::agenda::update_appointment_status),
        );

    let inventory_routes = Router::new()
        .route(
            "/items",
            post(handlers::inventory::create_item).get(handlers::inventory::list_items),
        )
        .route(
            "/items/{id}",
            put(handlers::inventory::update_item).delete(handlers::inventory::delete_item),
        );

    let expenses_routes = Router::new()
        .route(
            "/",
            post(handlers::finance::create_expense).get(handlers::finance::list_expenses),
        )
        .route(
            "/{id}",
            put(handlers::finance::update_expense).delete(handlers::finance::delete_expense),
        );

    let vehicles_routes = Router::new()
        .route("/", get(handlers::vehicles::list_vehicles))
        .route("/services", post(handlers::vehicles::create_vehicle_service))
        .route(
            "/services/{id}",
            put(handlers::vehicles::update_vehicle_service),
        )
        .route(
            "/{plate}/services",
            get(handlers::vehicles::list_vehicle_services),
        );

    let dashboard_routes = Router::new()
        .route("/summary", get(handlers::dashboard::get_summary))
        .route(
            "/revenue-chart",
            get(handlers::dashboard::get_revenue_chart),
        );

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/orders", orders_routes)
        .nest("/api/appointments", agenda_routes)
        .nest("/api/inventory", inventory_routes)
        .nest("/api/expenses", expenses_routes)
        .nest("/api/vehicles", vehicles_routes)
        .nest("/api/dashboard", dashboard_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        // O frontend roda em outra origem; sem credenciais, CORS aberto
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
