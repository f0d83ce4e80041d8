// src/db/pg_store.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{
        AgendaRepository, FinanceRepository, InventoryRepository, OrdersRepository, RecordStore,
        VehiclesRepository,
    },
    models::{
        agenda::Appointment,
        finance::Expense,
        inventory::InventoryItem,
        orders::ServiceOrder,
        vehicles::{Vehicle, VehicleService},
    },
};

// Implementação Postgres do RecordStore: delega para os repositórios e
// amarra ordem + peças na mesma transação.
#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
    orders: OrdersRepository,
    agenda: AgendaRepository,
    inventory: InventoryRepository,
    finance: FinanceRepository,
    vehicles: VehiclesRepository,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            orders: OrdersRepository::new(pool.clone()),
            agenda: AgendaRepository::new(pool.clone()),
            inventory: InventoryRepository::new(pool.clone()),
            finance: FinanceRepository::new(pool.clone()),
            vehicles: VehiclesRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    // --- Ordens de serviço ---

    async fn list_orders(&self) -> Result<Vec<ServiceOrder>, AppError> {
        self.orders.list_all().await
    }

    async fn insert_order(&self, order: &ServiceOrder) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        self.orders.insert(&mut *tx, order).await?;
        for part in &order.parts {
            self.orders.insert_part(&mut *tx, part).await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn update_order(&self, order: &ServiceOrder) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        self.orders.update(&mut *tx, order).await?;

        // Substituição integral do conjunto de peças
        self.orders.delete_parts_for_order(&mut *tx, order.id).await?;
        for part in &order.parts {
            self.orders.insert_part(&mut *tx, part).await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn delete_order(&self, id: Uuid) -> Result<(), AppError> {
        self.orders.delete(&self.pool, id).await
    }

    // --- Agendamentos ---

    async fn list_appointments(&self) -> Result<Vec<Appointment>, AppError> {
        self.agenda.list_all().await
    }

    async fn insert_appointment(&self, appointment: &Appointment) -> Result<(), AppError> {
        self.agenda.insert(&self.pool, appointment).await
    }

    async fn update_appointment(&self, appointment: &Appointment) -> Result<(), AppError> {
        self.agenda.update(&self.pool, appointment).await
    }

    async fn delete_appointment(&self, id: Uuid) -> Result<(), AppError> {
        self.agenda.delete(&self.pool, id).await
    }

    // --- Estoque ---

    async fn list_inventory(&self) -> Result<Vec<InventoryItem>, AppError> {
        self.inventory.list_all().await
    }

    async fn insert_inventory_item(&self, item: &InventoryItem) -> Result<(), AppError> {
        self.inventory.insert(&self.pool, item).await
    }

    async fn update_inventory_item(&self, item: &InventoryItem) -> Result<(), AppError> {
        self.inventory.update(&self.pool, item).await
    }

    async fn delete_inventory_item(&self, id: Uuid) -> Result<(), AppError> {
        self.inventory.delete(&self.pool, id).await
    }

    // --- Despesas ---

    async fn list_expenses(&self) -> Result<Vec<Expense>, AppError> {
        self.finance.list_all().await
    }

    async fn insert_expense(&self, expense: &Expense) -> Result<(), AppError> {
        self.finance.insert(&self.pool, expense).await
    }

    async fn update_expense(&self, expense: &Expense) -> Result<(), AppError> {
        self.finance.update(&self.pool, expense).await
    }

    async fn delete_expense(&self, id: Uuid) -> Result<(), AppError> {
        self.finance.delete(&self.pool, id).await
    }

    // --- Veículos ---

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, AppError> {
        self.vehicles.list_all().await
    }

    async fn insert_vehicle(&self, vehicle: &Vehicle) -> Result<(), AppError> {
        self.vehicles.insert(&self.pool, vehicle).await
    }

    // --- Histórico por veículo ---

    async fn list_vehicle_services(&self) -> Result<Vec<VehicleService>, AppError> {
        self.vehicles.list_services().await
    }

    async fn insert_vehicle_service(&self, entry: &VehicleService) -> Result<(), AppError> {
        self.vehicles.insert_service(&self.pool, entry).await
    }

    async fn update_vehicle_service(&self, entry: &VehicleService) -> Result<(), AppError> {
        self.vehicles.update_service(&self.pool, entry).await
    }
}
