pub mod record_store;
pub use record_store::RecordStore;
pub mod orders_repo;
pub use orders_repo::OrdersRepository;
pub mod agenda_repo;
pub use agenda_repo::AgendaRepository;
pub mod inventory_repo;
pub use inventory_repo::InventoryRepository;
pub mod finance_repo;
pub use finance_repo::FinanceRepository;
pub mod vehicles_repo;
pub use vehicles_repo::VehiclesRepository;
pub mod pg_store;
pub use pg_store::PgRecordStore;
pub mod seed;

#[cfg(test)]
pub mod mem_store;
