// src/db/mem_store.rs

// RecordStore em memória para os testes: mesmo contrato do Postgres, com
// interruptores de falha para exercitar os caminhos de erro dos serviços.

use std::sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::RecordStore,
    models::{
        agenda::Appointment,
        finance::Expense,
        inventory::InventoryItem,
        orders::ServiceOrder,
        vehicles::{Vehicle, VehicleService},
    },
};

#[derive(Default)]
pub struct MemRecordStore {
    pub orders: Mutex<Vec<ServiceOrder>>,
    pub appointments: Mutex<Vec<Appointment>>,
    pub inventory: Mutex<Vec<InventoryItem>>,
    pub expenses: Mutex<Vec<Expense>>,
    pub vehicles: Mutex<Vec<Vehicle>>,
    pub vehicle_services: Mutex<Vec<VehicleService>>,
    fail_all: AtomicBool,
    fail_history: AtomicBool,
}

impl MemRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Faz toda chamada ao store falhar (simula o backend fora do ar).
    pub fn fail_all_calls(&self, fail: bool) {
        self.fail_all.store(fail, Ordering::SeqCst);
    }

    /// Faz falhar apenas as gravações de histórico de veículo.
    pub fn fail_history_writes(&self, fail: bool) {
        self.fail_history.store(fail, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), AppError> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(AppError::InternalServerError(anyhow::anyhow!(
                "loja de registros indisponível"
            )));
        }
        Ok(())
    }

    fn check_history(&self) -> Result<(), AppError> {
        self.check()?;
        if self.fail_history.load(Ordering::SeqCst) {
            return Err(AppError::InternalServerError(anyhow::anyhow!(
                "falha ao gravar histórico"
            )));
        }
        Ok(())
    }

    fn replace_by_id<T, F>(records: &Mutex<Vec<T>>, id: Uuid, get_id: F, record: T) -> Result<(), AppError>
    where
        T: Clone,
        F: Fn(&T) -> Uuid,
    {
        let mut guard = records.lock().unwrap();
        match guard.iter_mut().find(|r| get_id(r) == id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(AppError::InternalServerError(anyhow::anyhow!(
                "registro inexistente no store"
            ))),
        }
    }
}

#[async_trait]
impl RecordStore for MemRecordStore {
    async fn list_orders(&self) -> Result<Vec<ServiceOrder>, AppError> {
        self.check()?;
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn insert_order(&self, order: &ServiceOrder) -> Result<(), AppError> {
        self.check()?;
        self.orders.lock().unwrap().push(order.clone());
        Ok(())
    }

    async fn update_order(&self, order: &ServiceOrder) -> Result<(), AppError> {
        self.check()?;
        Self::replace_by_id(&self.orders, order.id, |o| o.id, order.clone())
    }

    async fn delete_order(&self, id: Uuid) -> Result<(), AppError> {
        self.check()?;
        self.orders.lock().unwrap().retain(|o| o.id != id);
        Ok(())
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, AppError> {
        self.check()?;
        Ok(self.appointments.lock().unwrap().clone())
    }

    async fn insert_appointment(&self, appointment: &Appointment) -> Result<(), AppError> {
        self.check()?;
        self.appointments.lock().unwrap().push(appointment.clone());
        Ok(())
    }

    async fn update_appointment(&self, appointment: &Appointment) -> Result<(), AppError> {
        self.check()?;
        Self::replace_by_id(
            &self.appointments,
            appointment.id,
            |a| a.id,
            appointment.clone(),
        )
    }

    async fn delete_appointment(&self, id: Uuid) -> Result<(), AppError> {
        self.check()?;
        self.appointments.lock().unwrap().retain(|a| a.id != id);
        Ok(())
    }

    async fn list_inventory(&self) -> Result<Vec<InventoryItem>, AppError> {
        self.check()?;
        Ok(self.inventory.lock().unwrap().clone())
    }

    async fn insert_inventory_item(&self, item: &InventoryItem) -> Result<(), AppError> {
        self.check()?;
        self.inventory.lock().unwrap().push(item.clone());
        Ok(())
    }

    async fn update_inventory_item(&self, item: &InventoryItem) -> Result<(), AppError> {
        self.check()?;
        Self::replace_by_id(&self.inventory, item.id, |i| i.id, item.clone())
    }

    async fn delete_inventory_item(&self, id: Uuid) -> Result<(), AppError> {
        self.check()?;
        self.inventory.lock().unwrap().retain(|i| i.id != id);
        Ok(())
    }

    async fn list_expenses(&self) -> Result<Vec<Expense>, AppError> {
        self.check()?;
        Ok(self.expenses.lock().unwrap().clone())
    }

    async fn insert_expense(&self, expense: &Expense) -> Result<(), AppError> {
        self.check()?;
        self.expenses.lock().unwrap().push(expense.clone());
        Ok(())
    }

    async fn update_expense(&self, expense: &Expense) -> Result<(), AppError> {
        self.check()?;
        Self::replace_by_id(&self.expenses, expense.id, |e| e.id, expense.clone())
    }

    async fn delete_expense(&self, id: Uuid) -> Result<(), AppError> {
        self.check()?;
        self.expenses.lock().unwrap().retain(|e| e.id != id);
        Ok(())
    }

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, AppError> {
        self.check()?;
        Ok(self.vehicles.lock().unwrap().clone())
    }

    async fn insert_vehicle(&self, vehicle: &Vehicle) -> Result<(), AppError> {
        self.check()?;
        let mut guard = self.vehicles.lock().unwrap();
        // Mesma semântica do ON CONFLICT (plate) DO NOTHING
        if !guard.iter().any(|v| v.plate == vehicle.plate) {
            guard.push(vehicle.clone());
        }
        Ok(())
    }

    async fn list_vehicle_services(&self) -> Result<Vec<VehicleService>, AppError> {
        self.check()?;
        Ok(self.vehicle_services.lock().unwrap().clone())
    }

    async fn insert_vehicle_service(&self, entry: &VehicleService) -> Result<(), AppError> {
        self.check_history()?;
        self.vehicle_services.lock().unwrap().push(entry.clone());
        Ok(())
    }

    async fn update_vehicle_service(&self, entry: &VehicleService) -> Result<(), AppError> {
        self.check_history()?;
        Self::replace_by_id(&self.vehicle_services, entry.id, |e| e.id, entry.clone())
    }
}
