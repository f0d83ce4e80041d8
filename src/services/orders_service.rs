// src/services/orders_service.rs

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::{error::AppError, notify::Notifier},
    db::RecordStore,
    models::{
        orders::{Part, ServiceOrder, ServiceStatus},
        vehicles::{VehicleRef, VehicleService},
    },
    services::{InventoryService, VehiclesService, dashboard_service},
    state::AppSnapshots,
};

// Peça vinda do formulário, ainda sem id.
pub struct PartDraft {
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
    pub inventory_item_id: Option<Uuid>,
}

pub struct OrderDraft {
    pub client_name: String,
    pub vehicle: VehicleRef,
    pub service_type: String,
    pub parts: Vec<PartDraft>,
    pub labor_cost: Decimal,
    pub status: ServiceStatus,
}

pub struct OrderChanges {
    pub client_name: Option<String>,
    pub vehicle: Option<VehicleRef>,
    pub service_type: Option<String>,
    pub parts: Option<Vec<PartDraft>>,
    pub labor_cost: Option<Decimal>,
    pub status: Option<ServiceStatus>,
}

#[derive(Clone)]
pub struct OrdersService {
    snapshots: Arc<AppSnapshots>,
    store: Arc<dyn RecordStore>,
    notifier: Arc<dyn Notifier>,
    inventory: InventoryService,
    vehicles: VehiclesService,
}

impl OrdersService {
    pub fn new(
        snapshots: Arc<AppSnapshots>,
        store: Arc<dyn RecordStore>,
        notifier: Arc<dyn Notifier>,
        inventory: InventoryService,
        vehicles: VehiclesService,
    ) -> Self {
        Self {
            snapshots,
            store,
            notifier,
            inventory,
            vehicles,
        }
    }

    pub async fn list_orders(&self) -> Vec<ServiceOrder> {
        self.snapshots.service_orders.read().await.clone()
    }

    pub async fn add_order(&self, draft: OrderDraft) -> Result<ServiceOrder, AppError> {
        let now = Utc::now();
        let id = Uuid::new_v4();

        let parts: Vec<Part> = draft
            .parts
            .into_iter()
            .map(|p| Part {
                id: Uuid::new_v4(),
                service_order_id: id,
                name: p.name,
                price: p.price,
                quantity: p.quantity,
                inventory_item_id: p.inventory_item_id,
            })
            .collect();

        let order = ServiceOrder {
            id,
            client_name: draft.client_name,
            vehicle: draft.vehicle,
            service_type: draft.service_type,
            total: dashboard_service::order_total(draft.labor_cost, &parts),
            parts,
            labor_cost: draft.labor_cost,
            status: draft.status,
            created_at: now,
            updated_at: now,
            completed_at: match draft.status {
                ServiceStatus::Concluido => Some(now),
                _ => None,
            },
        };

        // O cadastro do veículo é derivado: falha não bloqueia a ordem
        if let Err(e) = self.vehicles.ensure_vehicle(&order.vehicle).await {
            tracing::warn!("Falha ao cadastrar veículo {}: {e}", order.vehicle.plate);
            self.notifier.failure("Não foi possível cadastrar o veículo.");
        }

        if let Err(e) = self.store.insert_order(&order).await {
            self.notifier
                .failure(&format!("Erro ao criar ordem de serviço: {e}"));
            return Err(e);
        }

        // Baixa de estoque das peças vinculadas. O consumo não é devolvido
        // em exclusão nem em cancelamento.
        for part in &order.parts {
            if let Some(item_id) = part.inventory_item_id {
                if let Err(e) = self.inventory.consume_stock(item_id, part.quantity).await {
                    tracing::warn!("Falha na baixa de estoque do item {item_id}: {e}");
                }
            }
        }

        self.snapshots.service_orders.write().await.push(order.clone());
        self.notifier.success("Ordem de serviço criada com sucesso!");
        Ok(order)
    }

    pub async fn update_order(
        &self,
        id: Uuid,
        changes: OrderChanges,
    ) -> Result<ServiceOrder, AppError> {
        let current = self
            .snapshots
            .service_orders
            .read()
            .await
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or(AppError::OrderNotFound)?;

        let now = Utc::now();
        let mut order = current;
        if let Some(v) = changes.client_name {
            order.client_name = v;
        }
        if let Some(v) = changes.vehicle {
            order.vehicle = v;
        }
        if let Some(v) = changes.service_type {
            order.service_type = v;
        }
        if let Some(parts) = changes.parts {
            order.parts = parts
                .into_iter()
                .map(|p| Part {
                    id: Uuid::new_v4(),
                    service_order_id: id,
                    name: p.name,
                    price: p.price,
                    quantity: p.quantity,
                    inventory_item_id: p.inventory_item_id,
                })
                .collect();
        }
        if let Some(v) = changes.labor_cost {
            order.labor_cost = v;
        }
        if let Some(v) = changes.status {
            order.status = v;
            // completed_at acompanha o status
            order.completed_at = match v {
                ServiceStatus::Concluido => order.completed_at.or(Some(now)),
                _ => None,
            };
        }

        order.total = dashboard_service::order_total(order.labor_cost, &order.parts);
        order.updated_at = now;

        if let Err(e) = self.store.update_order(&order).await {
            self.notifier
                .failure(&format!("Erro ao atualizar ordem de serviço: {e}"));
            return Err(e);
        }

        self.replace_in_snapshot(&order).await;
        self.notifier.success("Ordem de serviço atualizada!");
        Ok(order)
    }

    /// Exclui a ordem e, em cascata, as peças. O estoque consumido na
    /// criação não volta.
    pub async fn delete_order(&self, id: Uuid) -> Result<(), AppError> {
        let exists = self
            .snapshots
            .service_orders
            .read()
            .await
            .iter()
            .any(|o| o.id == id);
        if !exists {
            return Err(AppError::OrderNotFound);
        }

        if let Err(e) = self.store.delete_order(id).await {
            self.notifier
                .failure(&format!("Erro ao excluir ordem de serviço: {e}"));
            return Err(e);
        }

        self.snapshots
            .service_orders
            .write()
            .await
            .retain(|o| o.id != id);
        self.notifier.success("Ordem de serviço excluída!");
        Ok(())
    }

    /// Conclusão com guarda de máquina de estados: RASCUNHO e EM_ANDAMENTO
    /// concluem; CONCLUIDO é no-op idempotente; CANCELADO é rejeitado.
    /// O registro no histórico do veículo é efeito derivado e a falha dele
    /// não desfaz a conclusão.
    pub async fn complete_order(&self, id: Uuid) -> Result<ServiceOrder, AppError> {
        let current = self
            .snapshots
            .service_orders
            .read()
            .await
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or(AppError::OrderNotFound)?;

        match current.status {
            // Concluir duas vezes não muda datas nem duplica histórico
            ServiceStatus::Concluido => return Ok(current),
            ServiceStatus::Cancelado => {
                return Err(AppError::InvalidTransition(
                    "Uma ordem cancelada não pode ser finalizada.".to_string(),
                ));
            }
            ServiceStatus::Rascunho | ServiceStatus::EmAndamento => {}
        }

        let now = Utc::now();
        let mut order = current;
        order.status = ServiceStatus::Concluido;
        order.updated_at = now;
        order.completed_at = Some(now);

        if let Err(e) = self.store.update_order(&order).await {
            self.notifier
                .failure(&format!("Erro ao finalizar ordem de serviço: {e}"));
            return Err(e);
        }

        self.replace_in_snapshot(&order).await;

        let entry = history_entry(&order, now);
        match self.store.insert_vehicle_service(&entry).await {
            Ok(()) => self.snapshots.vehicle_services.write().await.push(entry),
            Err(e) => {
                tracing::warn!("Conclusão gravada, mas o histórico do veículo falhou: {e}");
                self.notifier
                    .failure("Não foi possível registrar o histórico do veículo.");
            }
        }

        self.notifier
            .success("Ordem de serviço finalizada com sucesso!");
        Ok(order)
    }

    async fn replace_in_snapshot(&self, order: &ServiceOrder) {
        let mut orders = self.snapshots.service_orders.write().await;
        if let Some(slot) = orders.iter_mut().find(|o| o.id == order.id) {
            *slot = order.clone();
        }
    }
}

// Resumo de mão de obra e peças que vai para o histórico do veículo.
fn history_entry(order: &ServiceOrder, now: DateTime<Utc>) -> VehicleService {
    let description = if order.parts.is_empty() {
        format!("Mão de obra: R$ {}", order.labor_cost)
    } else {
        let names: Vec<&str> = order.parts.iter().map(|p| p.name.as_str()).collect();
        format!(
            "Mão de obra: R$ {}. Peças: {}",
            order.labor_cost,
            names.join(", ")
        )
    };

    VehicleService {
        id: Uuid::new_v4(),
        vehicle_id: order.vehicle.plate.clone(),
        service_type: order.service_type.clone(),
        description: Some(description),
        notes: None,
        service_date: now.date_naive(),
        price: Some(order.total),
        mechanic_name: None,
        client_name: order.client_name.clone(),
        created_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::notify::RecordingNotifier,
        db::mem_store::MemRecordStore,
        services::inventory_service::ItemDraft,
    };

    struct TestCtx {
        orders: OrdersService,
        inventory: InventoryService,
        store: Arc<MemRecordStore>,
        notifier: Arc<RecordingNotifier>,
        snapshots: Arc<AppSnapshots>,
    }

    fn setup() -> TestCtx {
        let store = Arc::new(MemRecordStore::new());
        let snapshots = Arc::new(AppSnapshots::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let inventory =
            InventoryService::new(snapshots.clone(), store.clone(), notifier.clone());
        let vehicles = VehiclesService::new(snapshots.clone(), store.clone(), notifier.clone());
        let orders = OrdersService::new(
            snapshots.clone(),
            store.clone(),
            notifier.clone(),
            inventory.clone(),
            vehicles,
        );
        TestCtx {
            orders,
            inventory,
            store,
            notifier,
            snapshots,
        }
    }

    fn draft(parts: Vec<PartDraft>, labor_cost: i64) -> OrderDraft {
        OrderDraft {
            client_name: "João Silva".to_string(),
            vehicle: VehicleRef {
                model: "Fiat Uno".to_string(),
                year: "2018".to_string(),
                plate: "ABC-1234".to_string(),
            },
            service_type: "Troca de óleo e filtros".to_string(),
            parts,
            labor_cost: Decimal::from(labor_cost),
            status: ServiceStatus::EmAndamento,
        }
    }

    fn part(name: &str, price: i64, quantity: i32) -> PartDraft {
        PartDraft {
            name: name.to_string(),
            price: Decimal::from(price),
            quantity,
            inventory_item_id: None,
        }
    }

    #[tokio::test]
    async fn total_e_mao_de_obra_mais_pecas() {
        let ctx = setup();

        let order = ctx
            .orders
            .add_order(draft(
                vec![part("Óleo 5W30", 35, 4), part("Filtro de óleo", 25, 1)],
                80,
            ))
            .await
            .unwrap();

        // 80 + 140 + 25
        assert_eq!(order.total, Decimal::from(245));
        assert_eq!(ctx.store.orders.lock().unwrap().len(), 1);
        // O veículo foi cadastrado pela placa no mesmo fluxo
        assert_eq!(ctx.snapshots.vehicles.read().await.len(), 1);
    }

    #[tokio::test]
    async fn atualizacao_recalcula_o_total() {
        let ctx = setup();
        let order = ctx
            .orders
            .add_order(draft(vec![part("Óleo 5W30", 35, 4)], 80))
            .await
            .unwrap();

        let updated = ctx
            .orders
            .update_order(
                order.id,
                OrderChanges {
                    client_name: None,
                    vehicle: None,
                    service_type: None,
                    parts: Some(vec![part("Óleo 5W30", 35, 4), part("Filtro de ar", 45, 1)]),
                    labor_cost: Some(Decimal::from(100)),
                    status: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.total, Decimal::from(285));
        assert!(updated.updated_at >= order.updated_at);
    }

    #[tokio::test]
    async fn criar_ordem_baixa_o_estoque_vinculado() {
        let ctx = setup();
        let item = ctx
            .inventory
            .add_item(ItemDraft {
                name: "Óleo 5W30 (1L)".to_string(),
                purchase_price: Decimal::from(25),
                selling_price: Decimal::from(35),
                stock: 20,
                min_stock: 5,
            })
            .await
            .unwrap();

        ctx.orders
            .add_order(draft(
                vec![PartDraft {
                    name: "Óleo 5W30".to_string(),
                    price: Decimal::from(35),
                    quantity: 4,
                    inventory_item_id: Some(item.id),
                }],
                80,
            ))
            .await
            .unwrap();

        assert_eq!(ctx.inventory.list_items().await[0].stock, 16);
    }

    #[tokio::test]
    async fn excluir_ordem_remove_as_pecas_e_nao_devolve_estoque() {
        let ctx = setup();
        let item = ctx
            .inventory
            .add_item(ItemDraft {
                name: "Óleo 5W30 (1L)".to_string(),
                purchase_price: Decimal::from(25),
                selling_price: Decimal::from(35),
                stock: 20,
                min_stock: 5,
            })
            .await
            .unwrap();

        let order = ctx
            .orders
            .add_order(draft(
                vec![PartDraft {
                    name: "Óleo 5W30".to_string(),
                    price: Decimal::from(35),
                    quantity: 4,
                    inventory_item_id: Some(item.id),
                }],
                80,
            ))
            .await
            .unwrap();

        ctx.orders.delete_order(order.id).await.unwrap();

        assert!(ctx.snapshots.service_orders.read().await.is_empty());
        assert!(ctx.store.orders.lock().unwrap().is_empty());
        // Consumo irreversível: o saldo permanece em 16
        assert_eq!(ctx.inventory.list_items().await[0].stock, 16);
    }

    #[tokio::test]
    async fn concluir_define_datas_e_gera_historico() {
        let ctx = setup();
        let order = ctx
            .orders
            .add_order(draft(vec![part("Óleo 5W30", 35, 4)], 80))
            .await
            .unwrap();

        let completed = ctx.orders.complete_order(order.id).await.unwrap();

        assert_eq!(completed.status, ServiceStatus::Concluido);
        assert!(completed.completed_at.is_some());
        assert_eq!(completed.completed_at, Some(completed.updated_at));

        let history = ctx.store.vehicle_services.lock().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].vehicle_id, "ABC-1234");
        assert_eq!(history[0].price, Some(completed.total));
        let description = history[0].description.as_deref().unwrap();
        assert!(description.contains("Óleo 5W30"));
    }

    #[tokio::test]
    async fn concluir_duas_vezes_e_idempotente() {
        let ctx = setup();
        let order = ctx
            .orders
            .add_order(draft(vec![], 150))
            .await
            .unwrap();

        let first = ctx.orders.complete_order(order.id).await.unwrap();
        let second = ctx.orders.complete_order(order.id).await.unwrap();

        assert_eq!(second.status, ServiceStatus::Concluido);
        assert_eq!(second.completed_at, first.completed_at);
        // Sem linha duplicada no histórico
        assert_eq!(ctx.store.vehicle_services.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn ordem_cancelada_nao_conclui() {
        let ctx = setup();
        let order = ctx
            .orders
            .add_order(draft(vec![], 150))
            .await
            .unwrap();
        ctx.orders
            .update_order(
                order.id,
                OrderChanges {
                    client_name: None,
                    vehicle: None,
                    service_type: None,
                    parts: None,
                    labor_cost: None,
                    status: Some(ServiceStatus::Cancelado),
                },
            )
            .await
            .unwrap();

        let result = ctx.orders.complete_order(order.id).await;
        assert!(matches!(result, Err(AppError::InvalidTransition(_))));
    }

    #[tokio::test]
    async fn falha_do_store_nao_aplica_a_ordem() {
        let ctx = setup();
        ctx.store.fail_all_calls(true);

        let result = ctx.orders.add_order(draft(vec![], 80)).await;

        assert!(result.is_err());
        assert!(ctx.snapshots.service_orders.read().await.is_empty());
        assert!(!ctx.notifier.failures.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn falha_no_historico_nao_desfaz_a_conclusao() {
        let ctx = setup();
        let order = ctx
            .orders
            .add_order(draft(vec![], 150))
            .await
            .unwrap();

        ctx.store.fail_history_writes(true);
        let completed = ctx.orders.complete_order(order.id).await.unwrap();

        // A conclusão vale mesmo sem a linha de histórico
        assert_eq!(completed.status, ServiceStatus::Concluido);
        assert!(ctx.store.vehicle_services.lock().unwrap().is_empty());
        assert!(
            ctx.notifier
                .failures
                .lock()
                .unwrap()
                .iter()
                .any(|m| m.contains("histórico"))
        );
    }
}
