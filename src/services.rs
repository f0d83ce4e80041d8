pub mod agenda_service;
pub use agenda_service::AgendaService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod finance_service;
pub use finance_service::FinanceService;
pub mod inventory_service;
pub use inventory_service::InventoryService;
pub mod orders_service;
pub use orders_service::OrdersService;
pub mod vehicles_service;
pub use vehicles_service::VehiclesService;
