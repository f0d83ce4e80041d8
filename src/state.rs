// src/state.rs

use tokio::sync::RwLock;

use crate::{
    db::{RecordStore, seed},
    models::{
        agenda::Appointment,
        finance::Expense,
        inventory::InventoryItem,
        orders::ServiceOrder,
        vehicles::{Vehicle, VehicleService},
    },
};

// O retrato em memória das seis coleções. Toda leitura da API sai daqui;
// toda mutação grava primeiro no RecordStore e só então atualiza o retrato.
// Não há rollback otimista: se a gravação falha, o retrato fica como estava.
#[derive(Default)]
pub struct AppSnapshots {
    pub service_orders: RwLock<Vec<ServiceOrder>>,
    pub appointments: RwLock<Vec<Appointment>>,
    pub inventory: RwLock<Vec<InventoryItem>>,
    pub expenses: RwLock<Vec<Expense>>,
    pub vehicles: RwLock<Vec<Vehicle>>,
    pub vehicle_services: RwLock<Vec<VehicleService>>,
}

impl AppSnapshots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Carga inicial best-effort. Coleção que falhar cai no catálogo de
    /// exemplo para a interface não abrir vazia; veículos e histórico não
    /// têm seed e ficam vazios.
    pub async fn load_from(&self, store: &dyn RecordStore) {
        match store.list_orders().await {
            Ok(orders) => *self.service_orders.write().await = orders,
            Err(e) => {
                tracing::warn!("Falha ao carregar ordens de serviço, usando dados de exemplo: {e}");
                *self.service_orders.write().await = seed::service_orders();
            }
        }

        match store.list_appointments().await {
            Ok(appointments) => *self.appointments.write().await = appointments,
            Err(e) => {
                tracing::warn!("Falha ao carregar agendamentos, usando dados de exemplo: {e}");
                *self.appointments.write().await = seed::appointments();
            }
        }

        match store.list_inventory().await {
            Ok(items) => *self.inventory.write().await = items,
            Err(e) => {
                tracing::warn!("Falha ao carregar estoque, usando dados de exemplo: {e}");
                *self.inventory.write().await = seed::inventory();
            }
        }

        match store.list_expenses().await {
            Ok(expenses) => *self.expenses.write().await = expenses,
            Err(e) => {
                tracing::warn!("Falha ao carregar despesas, usando dados de exemplo: {e}");
                *self.expenses.write().await = seed::expenses();
            }
        }

        match store.list_vehicles().await {
            Ok(vehicles) => *self.vehicles.write().await = vehicles,
            Err(e) => tracing::warn!("Falha ao carregar veículos: {e}"),
        }

        match store.list_vehicle_services().await {
            Ok(entries) => *self.vehicle_services.write().await = entries,
            Err(e) => tracing::warn!("Falha ao carregar histórico de veículos: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::mem_store::MemRecordStore;

    #[tokio::test]
    async fn carga_inicial_usa_o_store_quando_disponivel() {
        let store = MemRecordStore::new();
        store
            .inventory
            .lock()
            .unwrap()
            .extend(seed::inventory().into_iter().take(2));

        let snapshots = AppSnapshots::new();
        snapshots.load_from(&store).await;

        assert_eq!(snapshots.inventory.read().await.len(), 2);
        // O store respondeu vazio para as demais coleções: nada de seed
        assert!(snapshots.service_orders.read().await.is_empty());
    }

    #[tokio::test]
    async fn carga_inicial_cai_no_seed_quando_o_store_falha() {
        let store = MemRecordStore::new();
        store.fail_all_calls(true);

        let snapshots = AppSnapshots::new();
        snapshots.load_from(&store).await;

        assert_eq!(snapshots.service_orders.read().await.len(), 4);
        assert_eq!(snapshots.appointments.read().await.len(), 3);
        assert_eq!(snapshots.inventory.read().await.len(), 5);
        assert_eq!(snapshots.expenses.read().await.len(), 3);
        // Sem seed para veículos e histórico
        assert!(snapshots.vehicles.read().await.is_empty());
        assert!(snapshots.vehicle_services.read().await.is_empty());
    }
}
