// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Ordens de Serviço ---
        handlers::orders::list_orders,
        handlers::orders::create_order,
        handlers::orders::update_order,
        handlers::orders::complete_order,
        handlers::orders::delete_order,

        // --- Agenda ---
        handlers::agenda::list_appointments,
        handlers::agenda::create_appointment,
        handlers::agenda::update_appointment,
        handlers::agenda::update_appointment_status,
        handlers::agenda::delete_appointment,

        // --- Estoque ---
        handlers::inventory::list_items,
        handlers::inventory::create_item,
        handlers::inventory::update_item,
        handlers::inventory::delete_item,

        // --- Despesas ---
        handlers::finance::list_expenses,
        handlers::finance::create_expense,
        handlers::finance::update_expense,
        handlers::finance::delete_expense,

        // --- Veículos ---
        handlers::vehicles::list_vehicles,
        handlers::vehicles::list_vehicle_services,
        handlers::vehicles::create_vehicle_service,
        handlers::vehicles::update_vehicle_service,

        // --- Dashboard ---
        handlers::dashboard::get_summary,
        handlers::dashboard::get_revenue_chart,
    ),
    components(
        schemas(
            // --- Ordens de Serviço ---
            models::orders::ServiceStatus,
            models::orders::Part,
            models::orders::ServiceOrder,

            // --- Agenda ---
            models::agenda::AppointmentStatus,
            models::agenda::Appointment,

            // --- Estoque ---
            models::inventory::InventoryItem,
            models::inventory::StockStatus,

            // --- Despesas ---
            models::finance::Expense,

            // --- Veículos ---
            models::vehicles::VehicleRef,
            models::vehicles::Vehicle,
            models::vehicles::VehicleService,

            // --- Dashboard ---
            models::dashboard::FinancialSummary,
            models::dashboard::RevenueChartEntry,

            // --- Payloads ---
            handlers::orders::PartPayload,
            handlers::orders::CreateOrderPayload,
            handlers::orders::UpdateOrderPayload,
            handlers::agenda::CreateAppointmentPayload,
            handlers::agenda::UpdateAppointmentPayload,
            handlers::agenda::UpdateStatusPayload,
            handlers::inventory::CreateItemPayload,
            handlers::inventory::UpdateItemPayload,
            handlers::inventory::ItemSummary,
            handlers::finance::CreateExpensePayload,
            handlers::finance::UpdateExpensePayload,
            handlers::vehicles::CreateServiceEntryPayload,
            handlers::vehicles::UpdateServiceEntryPayload,
        )
    ),
    tags(
        (name = "Ordens de Serviço", description = "Ciclo de vida das OS, com peças e conclusão"),
        (name = "Agenda", description = "Agendamentos e transições de status"),
        (name = "Estoque", description = "Itens de estoque, situação e margem"),
        (name = "Despesas", description = "Livro de despesas da oficina"),
        (name = "Veículos", description = "Cadastro por placa e histórico de serviços"),
        (name = "Dashboard", description = "Indicadores financeiros derivados")
    )
)]
pub struct ApiDoc;
