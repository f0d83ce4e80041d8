// src/db/finance_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::finance::Expense};

#[derive(Clone)]
pub struct FinanceRepository {
    pool: PgPool,
}

impl FinanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Expense>, AppError> {
        let expenses = sqlx::query_as::<_, Expense>(
            "SELECT id, description, amount, date, category, created_at
             FROM expenses ORDER BY date DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    pub async fn insert<'e, E>(&self, executor: E, expense: &Expense) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            r#"
            INSERT INTO expenses (id, description, amount, date, category, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(expense.id)
        .bind(&expense.description)
        .bind(expense.amount)
        .bind(expense.date)
        .bind(&expense.category)
        .bind(expense.created_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn update<'e, E>(&self, executor: E, expense: &Expense) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            r#"
            UPDATE expenses SET description = $2, amount = $3, date = $4, category = $5
            WHERE id = $1
            "#,
        )
        .bind(expense.id)
        .bind(&expense.description)
        .bind(expense.amount)
        .bind(expense.date)
        .bind(&expense.category)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(())
    }
}
