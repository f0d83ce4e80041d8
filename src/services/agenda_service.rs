// src/services/agenda_service.rs

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    common::{error::AppError, notify::Notifier},
    db::RecordStore,
    models::{
        agenda::{Appointment, AppointmentStatus},
        vehicles::{VehicleRef, VehicleService},
    },
    services::VehiclesService,
    state::AppSnapshots,
};

pub struct AppointmentDraft {
    pub client_name: String,
    pub vehicle: VehicleRef,
    pub service_type: String,
    pub date: NaiveDate,
    pub time: String,
    pub notes: Option<String>,
}

pub struct AppointmentChanges {
    pub client_name: Option<String>,
    pub vehicle: Option<VehicleRef>,
    pub service_type: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone)]
pub struct AgendaService {
    snapshots: Arc<AppSnapshots>,
    store: Arc<dyn RecordStore>,
    notifier: Arc<dyn Notifier>,
    vehicles: VehiclesService,
}

impl AgendaService {
    pub fn new(
        snapshots: Arc<AppSnapshots>,
        store: Arc<dyn RecordStore>,
        notifier: Arc<dyn Notifier>,
        vehicles: VehiclesService,
    ) -> Self {
        Self {
            snapshots,
            store,
            notifier,
            vehicles,
        }
    }

    pub async fn list_appointments(&self) -> Vec<Appointment> {
        self.snapshots.appointments.read().await.clone()
    }

    /// Todo agendamento nasce AGENDADO, cadastra o veículo pela placa e
    /// deixa um rastro "Agendamento: ..." no histórico do veículo.
    pub async fn add_appointment(&self, draft: AppointmentDraft) -> Result<Appointment, AppError> {
        let now = Utc::now();
        let appointment = Appointment {
            id: Uuid::new_v4(),
            client_name: draft.client_name,
            vehicle: draft.vehicle,
            service_type: draft.service_type,
            date: draft.date,
            time: draft.time,
            notes: draft.notes,
            status: AppointmentStatus::Agendado,
            created_at: now,
        };

        // O cadastro do veículo é derivado: falha não bloqueia o agendamento
        if let Err(e) = self.vehicles.ensure_vehicle(&appointment.vehicle).await {
            tracing::warn!("Falha ao cadastrar veículo {}: {e}", appointment.vehicle.plate);
            self.notifier
                .failure("Não foi possível cadastrar o veículo.");
        }

        if let Err(e) = self.store.insert_appointment(&appointment).await {
            self.notifier
                .failure(&format!("Erro ao criar agendamento: {e}"));
            return Err(e);
        }

        let entry = VehicleService {
            id: Uuid::new_v4(),
            vehicle_id: appointment.vehicle.plate.clone(),
            service_type: format!("Agendamento: {}", appointment.service_type),
            description: None,
            notes: appointment.notes.clone(),
            service_date: appointment.date,
            price: None,
            mechanic_name: None,
            client_name: appointment.client_name.clone(),
            created_at: now,
        };
        match self.store.insert_vehicle_service(&entry).await {
            Ok(()) => self.snapshots.vehicle_services.write().await.push(entry),
            Err(e) => {
                // O agendamento já está gravado; o histórico só gera aviso
                tracing::warn!("Agendamento gravado, mas o histórico do veículo falhou: {e}");
                self.notifier
                    .failure("Não foi possível registrar o histórico do veículo.");
            }
        }

        self.snapshots
            .appointments
            .write()
            .await
            .push(appointment.clone());
        self.notifier.success("Agendamento criado com sucesso!");
        Ok(appointment)
    }

    pub async fn update_appointment(
        &self,
        id: Uuid,
        changes: AppointmentChanges,
    ) -> Result<Appointment, AppError> {
        let current = self
            .snapshots
            .appointments
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(AppError::AppointmentNotFound)?;

        let mut appointment = current;
        if let Some(v) = changes.client_name {
            appointment.client_name = v;
        }
        if let Some(v) = changes.vehicle {
            appointment.vehicle = v;
        }
        if let Some(v) = changes.service_type {
            appointment.service_type = v;
        }
        if let Some(v) = changes.date {
            appointment.date = v;
        }
        if let Some(v) = changes.time {
            appointment.time = v;
        }
        if let Some(v) = changes.notes {
            appointment.notes = Some(v);
        }

        if let Err(e) = self.store.update_appointment(&appointment).await {
            self.notifier
                .failure(&format!("Erro ao atualizar agendamento: {e}"));
            return Err(e);
        }

        self.replace_in_snapshot(&appointment).await;
        self.notifier.success("Agendamento atualizado!");
        Ok(appointment)
    }

    /// Transição de status isolada: nenhum outro campo é tocado.
    pub async fn update_appointment_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<Appointment, AppError> {
        let current = self
            .snapshots
            .appointments
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(AppError::AppointmentNotFound)?;

        let mut appointment = current;
        appointment.status = status;

        if let Err(e) = self.store.update_appointment(&appointment).await {
            self.notifier
                .failure(&format!("Erro ao atualizar agendamento: {e}"));
            return Err(e);
        }

        self.replace_in_snapshot(&appointment).await;
        self.notifier.success("Agendamento atualizado!");
        Ok(appointment)
    }

    pub async fn delete_appointment(&self, id: Uuid) -> Result<(), AppError> {
        let exists = self
            .snapshots
            .appointments
            .read()
            .await
            .iter()
            .any(|a| a.id == id);
        if !exists {
            return Err(AppError::AppointmentNotFound);
        }

        if let Err(e) = self.store.delete_appointment(id).await {
            self.notifier
                .failure(&format!("Erro ao excluir agendamento: {e}"));
            return Err(e);
        }

        self.snapshots.appointments.write().await.retain(|a| a.id != id);
        self.notifier.success("Agendamento excluído!");
        Ok(())
    }

    async fn replace_in_snapshot(&self, appointment: &Appointment) {
        let mut appointments = self.snapshots.appointments.write().await;
        if let Some(slot) = appointments.iter_mut().find(|a| a.id == appointment.id) {
            *slot = appointment.clone();
        }
    }
}
