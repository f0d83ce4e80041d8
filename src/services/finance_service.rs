// src/services/finance_service.rs

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::{error::AppError, notify::Notifier},
    db::RecordStore,
    models::finance::Expense,
    state::AppSnapshots,
};

pub struct ExpenseDraft {
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: String,
}

pub struct ExpenseChanges {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
}

#[derive(Clone)]
pub struct FinanceService {
    snapshots: Arc<AppSnapshots>,
    store: Arc<dyn RecordStore>,
    notifier: Arc<dyn Notifier>,
}

impl FinanceService {
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

    pub async fn list_expenses(&self) -> Vec<Expense> {
        self.snapshots.expenses.read().await.clone()
    }

    pub async fn add_expense(&self, draft: ExpenseDraft) -> Result<Expense, AppError> {
        let expense = Expense {
            id: Uuid::new_v4(),
            description: draft.description,
            amount: draft.amount,
            date: draft.date,
            category: draft.category,
            created_at: Utc::now(),
        };

        if let Err(e) = self.store.insert_expense(&expense).await {
            self.notifier
                .failure(&format!("Erro ao adicionar despesa: {e}"));
            return Err(e);
        }

        self.snapshots.expenses.write().await.push(expense.clone());
        self.notifier.success("Despesa adicionada com sucesso!");
        Ok(expense)
    }

    pub async fn update_expense(
        &self,
        id: Uuid,
        changes: ExpenseChanges,
    ) -> Result<Expense, AppError> {
        let current = self
            .snapshots
            .expenses
            .read()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(AppError::ExpenseNotFound)?;

        let mut expense = current;
        if let Some(v) = changes.description {
            expense.description = v;
        }
        if let Some(v) = changes.amount {
            expense.amount = v;
        }
        if let Some(v) = changes.date {
            expense.date = v;
        }
        if let Some(v) = changes.category {
            expense.category = v;
        }

        if let Err(e) = self.store.update_expense(&expense).await {
            self.notifier
                .failure(&format!("Erro ao atualizar despesa: {e}"));
            return Err(e);
        }

        {
            let mut expenses = self.snapshots.expenses.write().await;
            if let Some(slot) = expenses.iter_mut().find(|e| e.id == id) {
                *slot = expense.clone();
            }
        }

        self.notifier.success("Despesa atualizada!");
        Ok(expense)
    }

    pub async fn delete_expense(&self, id: Uuid) -> Result<(), AppError> {
        let exists = self
            .snapshots
            .expenses
            .read()
            .await
            .iter()
            .any(|e| e.id == id);
        if !exists {
            return Err(AppError::ExpenseNotFound);
        }

        if let Err(e) = self.store.delete_expense(id).await {
            self.notifier
                .failure(&format!("Erro ao excluir despesa: {e}"));
            return Err(e);
        }

        self.snapshots.expenses.write().await.retain(|e| e.id != id);
        self.notifier.success("Despesa excluída!");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{common::notify::RecordingNotifier, db::mem_store::MemRecordStore};

    fn setup() -> (FinanceService, Arc<MemRecordStore>) {
        let store = Arc::new(MemRecordStore::new());
        let snapshots = Arc::new(AppSnapshots::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let service = FinanceService::new(snapshots, store.clone(), notifier);
        (service, store)
    }

    #[tokio::test]
    async fn despesa_passa_pelo_ciclo_completo() {
        let (service, store) = setup();

        let expense = service
            .add_expense(ExpenseDraft {
                description: "Conta de energia".to_string(),
                amount: Decimal::from(380),
                date: Utc::now().date_naive(),
                category: "Utilidades".to_string(),
            })
            .await
            .unwrap();

        let updated = service
            .update_expense(
                expense.id,
                ExpenseChanges {
                    description: None,
                    amount: Some(Decimal::from(420)),
                    date: None,
                    category: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.amount, Decimal::from(420));
        assert_eq!(updated.description, "Conta de energia");

        service.delete_expense(expense.id).await.unwrap();
        assert!(service.list_expenses().await.is_empty());
        assert!(store.expenses.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn excluir_despesa_inexistente_nao_chama_o_store() {
        let (service, store) = setup();

        let result = service.delete_expense(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::ExpenseNotFound)));
        assert!(store.expenses.lock().unwrap().is_empty());
    }
}
