// src/services/vehicles_service.rs

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::{error::AppError, notify::Notifier},
    db::RecordStore,
    models::vehicles::{Vehicle, VehicleRef, VehicleService},
    state::AppSnapshots,
};

// Entrada manual do formulário de histórico.
pub struct ServiceEntryDraft {
    pub plate: String,
    pub service_type: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub service_date: NaiveDate,
    pub price: Option<Decimal>,
    pub mechanic_name: Option<String>,
    pub client_name: String,
}

pub struct ServiceEntryChanges {
    pub service_type: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub service_date: Option<NaiveDate>,
    pub price: Option<Decimal>,
    pub mechanic_name: Option<String>,
    pub client_name: Option<String>,
}

#[derive(Clone)]
pub struct VehiclesService {
    snapshots: Arc<AppSnapshots>,
    store: Arc<dyn RecordStore>,
    notifier: Arc<dyn Notifier>,
}

impl VehiclesService {
    pub fn new(
        snapshots: Arc<AppSnapshots>,
        store: Arc<dyn RecordStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            snapshots,
            store,
            notifier,
        }
    }

    /// Get-or-create pela placa. Passo explícito chamado antes da gravação
    /// principal de ordens e agendamentos.
    pub async fn ensure_vehicle(&self, vehicle: &VehicleRef) -> Result<(), AppError> {
        let known = self
            .snapshots
            .vehicles
            .read()
            .await
            .iter()
            .any(|v| v.plate == vehicle.plate);
        if known {
            return Ok(());
        }

        let record = Vehicle {
            id: Uuid::new_v4(),
            plate: vehicle.plate.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year.clone(),
            created_at: Utc::now(),
        };

        self.store.insert_vehicle(&record).await?;
        self.snapshots.vehicles.write().await.push(record);
        Ok(())
    }

    pub async fn list_vehicles(&self) -> Vec<Vehicle> {
        self.snapshots.vehicles.read().await.clone()
    }

    /// Filtro puro do histórico pela placa (vehicle_id = placa).
    pub async fn vehicle_services(&self, plate: &str) -> Vec<VehicleService> {
        self.snapshots
            .vehicle_services
            .read()
            .await
            .iter()
            .filter(|entry| entry.vehicle_id == plate)
            .cloned()
            .collect()
    }

    pub async fn add_vehicle_service(
        &self,
        draft: ServiceEntryDraft,
    ) -> Result<VehicleService, AppError> {
        let entry = VehicleService {
            id: Uuid::new_v4(),
            vehicle_id: draft.plate,
            service_type: draft.service_type,
            description: draft.description,
            notes: draft.notes,
            service_date: draft.service_date,
            price: draft.price,
            mechanic_name: draft.mechanic_name,
            client_name: draft.client_name,
            created_at: Utc::now(),
        };

        if let Err(e) = self.store.insert_vehicle_service(&entry).await {
            self.notifier
                .failure(&format!("Erro ao registrar serviço no histórico: {e}"));
            return Err(e);
        }

        self.snapshots
            .vehicle_services
            .write()
            .await
            .push(entry.clone());
        self.notifier.success("Serviço registrado no histórico!");
        Ok(entry)
    }

    pub async fn update_vehicle_service(
        &self,
        id: Uuid,
        changes: ServiceEntryChanges,
    ) -> Result<VehicleService, AppError> {
        let current = self
            .snapshots
            .vehicle_services
            .read()
            .await
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
            .ok_or(AppError::ServiceEntryNotFound)?;

        let mut entry = current;
        if let Some(v) = changes.service_type {
            entry.service_type = v;
        }
        if let Some(v) = changes.description {
            entry.description = Some(v);
        }
        if let Some(v) = changes.notes {
            entry.notes = Some(v);
        }
        if let Some(v) = changes.service_date {
            entry.service_date = v;
        }
        if let Some(v) = changes.price {
            entry.price = Some(v);
        }
        if let Some(v) = changes.mechanic_name {
            entry.mechanic_name = Some(v);
        }
        if let Some(v) = changes.client_name {
            entry.client_name = v;
        }

        if let Err(e) = self.store.update_vehicle_service(&entry).await {
            self.notifier
                .failure(&format!("Erro ao atualizar o histórico: {e}"));
            return Err(e);
        }

        {
            let mut entries = self.snapshots.vehicle_services.write().await;
            if let Some(slot) = entries.iter_mut().find(|e| e.id == id) {
                *slot = entry.clone();
            }
        }

        self.notifier.success("Histórico atualizado!");
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{common::notify::RecordingNotifier, db::mem_store::MemRecordStore};

    fn setup() -> (VehiclesService, Arc<MemRecordStore>, Arc<AppSnapshots>) {
        let store = Arc::new(MemRecordStore::new());
        let snapshots = Arc::new(AppSnapshots::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let service = VehiclesService::new(snapshots.clone(), store.clone(), notifier);
        (service, store, snapshots)
    }

    fn vehicle_ref(plate: &str) -> VehicleRef {
        VehicleRef {
            model: "Fiat Uno".to_string(),
            year: "2018".to_string(),
            plate: plate.to_string(),
        }
    }

    #[tokio::test]
    async fn ensure_vehicle_deduplica_pela_placa() {
        let (service, store, snapshots) = setup();

        service.ensure_vehicle(&vehicle_ref("ABC-1234")).await.unwrap();
        service.ensure_vehicle(&vehicle_ref("ABC-1234")).await.unwrap();
        service.ensure_vehicle(&vehicle_ref("DEF-5678")).await.unwrap();

        assert_eq!(snapshots.vehicles.read().await.len(), 2);
        assert_eq!(store.vehicles.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn historico_filtra_pela_placa() {
        let (service, _store, _snapshots) = setup();

        for plate in ["ABC-1234", "ABC-1234", "DEF-5678"] {
            service
                .add_vehicle_service(ServiceEntryDraft {
                    plate: plate.to_string(),
                    service_type: "Troca de óleo".to_string(),
                    description: None,
                    notes: None,
                    service_date: Utc::now().date_naive(),
                    price: Some(Decimal::from(150)),
                    mechanic_name: Some("Pedro".to_string()),
                    client_name: "João Silva".to_string(),
                })
                .await
                .unwrap();
        }

        assert_eq!(service.vehicle_services("ABC-1234").await.len(), 2);
        assert_eq!(service.vehicle_services("DEF-5678").await.len(), 1);
        assert!(service.vehicle_services("ZZZ-0000").await.is_empty());
    }

    #[tokio::test]
    async fn atualizacao_de_historico_mescla_somente_os_campos_enviados() {
        let (service, _store, _snapshots) = setup();

        let entry = service
            .add_vehicle_service(ServiceEntryDraft {
                plate: "ABC-1234".to_string(),
                service_type: "Troca de óleo".to_string(),
                description: Some("Óleo sintético".to_string()),
                notes: None,
                service_date: Utc::now().date_naive(),
                price: Some(Decimal::from(150)),
                mechanic_name: None,
                client_name: "João Silva".to_string(),
            })
            .await
            .unwrap();

        let updated = service
            .update_vehicle_service(
                entry.id,
                ServiceEntryChanges {
                    service_type: None,
                    description: None,
                    notes: Some("Cliente pediu nota fiscal".to_string()),
                    service_date: None,
                    price: None,
                    mechanic_name: None,
                    client_name: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.service_type, "Troca de óleo");
        assert_eq!(updated.description.as_deref(), Some("Óleo sintético"));
        assert_eq!(updated.notes.as_deref(), Some("Cliente pediu nota fiscal"));
    }
}
