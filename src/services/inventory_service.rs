// src/services/inventory_service.rs

use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::{error::AppError, notify::Notifier},
    db::RecordStore,
    models::inventory::InventoryItem,
    state::AppSnapshots,
};

pub struct ItemDraft {
    pub name: String,
    pub purchase_price: Decimal,
    pub selling_price: Decimal,
    pub stock: i32,
    pub min_stock: i32,
}

pub struct ItemChanges {
    pub name: Option<String>,
    pub purchase_price: Option<Decimal>,
    pub selling_price: Option<Decimal>,
    pub stock: Option<i32>,
    pub min_stock: Option<i32>,
}

#[derive(Clone)]
pub struct InventoryService {
    snapshots: Arc<AppSnapshots>,
    store: Arc<dyn RecordStore>,
    notifier: Arc<dyn Notifier>,
}

impl InventoryService {
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

    pub async fn list_items(&self) -> Vec<InventoryItem> {
        self.snapshots.inventory.read().await.clone()
    }

    pub async fn add_item(&self, draft: ItemDraft) -> Result<InventoryItem, AppError> {
        let item = InventoryItem {
            id: Uuid::new_v4(),
            name: draft.name,
            purchase_price: draft.purchase_price,
            selling_price: draft.selling_price,
            stock: draft.stock,
            min_stock: draft.min_stock,
        };

        if let Err(e) = self.store.insert_inventory_item(&item).await {
            self.notifier
                .failure(&format!("Erro ao adicionar item de estoque: {e}"));
            return Err(e);
        }

        self.snapshots.inventory.write().await.push(item.clone());
        self.notifier.success("Item de estoque adicionado!");
        Ok(item)
    }

    pub async fn update_item(
        &self,
        id: Uuid,
        changes: ItemChanges,
    ) -> Result<InventoryItem, AppError> {
        let current = self
            .snapshots
            .inventory
            .read()
            .await
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or(AppError::ItemNotFound)?;

        let mut item = current;
        if let Some(v) = changes.name {
            item.name = v;
        }
        if let Some(v) = changes.purchase_price {
            item.purchase_price = v;
        }
        if let Some(v) = changes.selling_price {
            item.selling_price = v;
        }
        if let Some(v) = changes.stock {
            item.stock = v;
        }
        if let Some(v) = changes.min_stock {
            item.min_stock = v;
        }

        if let Err(e) = self.store.update_inventory_item(&item).await {
            self.notifier
                .failure(&format!("Erro ao atualizar item de estoque: {e}"));
            return Err(e);
        }

        self.replace_in_snapshot(&item).await;
        self.notifier.success("Item de estoque atualizado!");
        Ok(item)
    }

    pub async fn delete_item(&self, id: Uuid) -> Result<(), AppError> {
        let exists = self
            .snapshots
            .inventory
            .read()
            .await
            .iter()
            .any(|i| i.id == id);
        if !exists {
            return Err(AppError::ItemNotFound);
        }

        if let Err(e) = self.store.delete_inventory_item(id).await {
            self.notifier
                .failure(&format!("Erro ao excluir item de estoque: {e}"));
            return Err(e);
        }

        self.snapshots.inventory.write().await.retain(|i| i.id != id);
        self.notifier.success("Item de estoque excluído!");
        Ok(())
    }

    /// Baixa de estoque disparada pela criação de uma OS com peça vinculada.
    /// O saldo nunca fica negativo; o consumo não é devolvido depois.
    pub async fn consume_stock(&self, item_id: Uuid, quantity: i32) -> Result<(), AppError> {
        let current = self
            .snapshots
            .inventory
            .read()
            .await
            .iter()
            .find(|i| i.id == item_id)
            .cloned()
            .ok_or(AppError::ItemNotFound)?;

        let mut item = current;
        item.stock = (item.stock - quantity).max(0);

        self.store.update_inventory_item(&item).await?;
        self.replace_in_snapshot(&item).await;
        Ok(())
    }

    async fn replace_in_snapshot(&self, item: &InventoryItem) {
        let mut items = self.snapshots.inventory.write().await;
        if let Some(slot) = items.iter_mut().find(|i| i.id == item.id) {
            *slot = item.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{common::notify::RecordingNotifier, db::mem_store::MemRecordStore};

    fn setup() -> (InventoryService, Arc<MemRecordStore>, Arc<RecordingNotifier>) {
        let store = Arc::new(MemRecordStore::new());
        let snapshots = Arc::new(AppSnapshots::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let service = InventoryService::new(snapshots, store.clone(), notifier.clone());
        (service, store, notifier)
    }

    fn oil() -> ItemDraft {
        ItemDraft {
            name: "Óleo 5W30 (1L)".to_string(),
            purchase_price: Decimal::from(25),
            selling_price: Decimal::from(35),
            stock: 20,
            min_stock: 5,
        }
    }

    #[tokio::test]
    async fn adicionar_item_grava_no_store_e_no_retrato() {
        let (service, store, notifier) = setup();

        let item = service.add_item(oil()).await.unwrap();

        assert_eq!(item.profit_margin(), Decimal::new(400, 1));
        assert_eq!(store.inventory.lock().unwrap().len(), 1);
        assert_eq!(service.list_items().await.len(), 1);
        assert_eq!(notifier.successes.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn consumo_de_estoque_nao_fica_negativo() {
        let (service, _store, _notifier) = setup();
        let item = service.add_item(oil()).await.unwrap();

        service.consume_stock(item.id, 4).await.unwrap();
        assert_eq!(service.list_items().await[0].stock, 16);

        service.consume_stock(item.id, 100).await.unwrap();
        assert_eq!(service.list_items().await[0].stock, 0);
    }

    #[tokio::test]
    async fn falha_do_store_nao_toca_o_retrato() {
        let (service, store, notifier) = setup();
        let item = service.add_item(oil()).await.unwrap();

        store.fail_all_calls(true);
        let result = service
            .update_item(
                item.id,
                ItemChanges {
                    name: None,
                    purchase_price: None,
                    selling_price: None,
                    stock: Some(1),
                    min_stock: None,
                },
            )
            .await;

        assert!(result.is_err());
        store.fail_all_calls(false);
        assert_eq!(service.list_items().await[0].stock, 20);
        assert_eq!(notifier.failures.lock().unwrap().len(), 1);
    }
}
