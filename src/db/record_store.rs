// src/db/record_store.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        agenda::Appointment,
        finance::Expense,
        inventory::InventoryItem,
        orders::ServiceOrder,
        vehicles::{Vehicle, VehicleService},
    },
};

// A fronteira com o armazenamento durável: uma coleção de registros por
// entidade, com list/insert/update/delete. Toda chamada é falível e nunca
// é repetida automaticamente; quem decide o que fazer com a falha é o
// serviço que chamou.
#[async_trait]
pub trait RecordStore: Send + Sync {
    // ---
    // Ordens de serviço (as peças viajam junto com a ordem)
    // ---
    async fn list_orders(&self) -> Result<Vec<ServiceOrder>, AppError>;
    async fn insert_order(&self, order: &ServiceOrder) -> Result<(), AppError>;
    /// Substitui a linha da ordem e o conjunto de peças pelo conteúdo recebido.
    async fn update_order(&self, order: &ServiceOrder) -> Result<(), AppError>;
    /// Remove a ordem e, em cascata, as peças dela.
    async fn delete_order(&self, id: Uuid) -> Result<(), AppError>;

    // ---
    // Agendamentos
    // ---
    async fn list_appointments(&self) -> Result<Vec<Appointment>, AppError>;
    async fn insert_appointment(&self, appointment: &Appointment) -> Result<(), AppError>;
    async fn update_appointment(&self, appointment: &Appointment) -> Result<(), AppError>;
    async fn delete_appointment(&self, id: Uuid) -> Result<(), AppError>;

    // ---
    // Estoque
    // ---
    async fn list_inventory(&self) -> Result<Vec<InventoryItem>, AppError>;
    async fn insert_inventory_item(&self, item: &InventoryItem) -> Result<(), AppError>;
    async fn update_inventory_item(&self, item: &InventoryItem) -> Result<(), AppError>;
    async fn delete_inventory_item(&self, id: Uuid) -> Result<(), AppError>;

    // ---
    // Despesas
    // ---
    async fn list_expenses(&self) -> Result<Vec<Expense>, AppError>;
    async fn insert_expense(&self, expense: &Expense) -> Result<(), AppError>;
    async fn update_expense(&self, expense: &Expense) -> Result<(), AppError>;
    async fn delete_expense(&self, id: Uuid) -> Result<(), AppError>;

    // ---
    // Veículos (cadastro deduplicado por placa)
    // ---
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, AppError>;
    async fn insert_vehicle(&self, vehicle: &Vehicle) -> Result<(), AppError>;

    // ---
    // Histórico de serviços por veículo
    // ---
    async fn list_vehicle_services(&self) -> Result<Vec<VehicleService>, AppError>;
    async fn insert_vehicle_service(&self, entry: &VehicleService) -> Result<(), AppError>;
    async fn update_vehicle_service(&self, entry: &VehicleService) -> Result<(), AppError>;
}
