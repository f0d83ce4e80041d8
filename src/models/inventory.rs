// src/models/inventory.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Situação do estoque derivada de stock vs. min_stock.
// stock == min_stock ainda conta como DISPONIVEL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    Esgotado,
    Baixo,
    Disponivel,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: Uuid,
    #[schema(example = "Óleo 5W30 (1L)")]
    pub name: String,
    #[schema(example = "25.00")]
    pub purchase_price: Decimal,
    #[schema(example = "35.00")]
    pub selling_price: Decimal,
    #[schema(example = 20)]
    pub stock: i32,
    #[schema(example = 5)]
    pub min_stock: i32,
}

impl InventoryItem {
    pub fn stock_status(&self) -> StockStatus {
        if self.stock == 0 {
            StockStatus::Esgotado
        } else if self.stock < self.min_stock {
            StockStatus::Baixo
        } else {
            StockStatus::Disponivel
        }
    }

    /// Margem de lucro em %, arredondada em 1 casa. Zero se o custo for inválido.
    pub fn profit_margin(&self) -> Decimal {
        if self.purchase_price <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        ((self.selling_price - self.purchase_price) / self.purchase_price * Decimal::from(100))
            .round_dp(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(stock: i32, min_stock: i32) -> InventoryItem {
        InventoryItem {
            id: Uuid::new_v4(),
            name: "Óleo 5W30 (1L)".to_string(),
            purchase_price: Decimal::from(25),
            selling_price: Decimal::from(35),
            stock,
            min_stock,
        }
    }

    #[test]
    fn stock_status_cobre_as_fronteiras() {
        assert_eq!(item(0, 5).stock_status(), StockStatus::Esgotado);
        assert_eq!(item(1, 5).stock_status(), StockStatus::Baixo);
        assert_eq!(item(4, 5).stock_status(), StockStatus::Baixo);
        // No limiar exato o item ainda está disponível
        assert_eq!(item(5, 5).stock_status(), StockStatus::Disponivel);
        assert_eq!(item(20, 5).stock_status(), StockStatus::Disponivel);
    }

    #[test]
    fn margem_de_lucro_do_oleo() {
        // compra 25, venda 35 => 40.0%
        assert_eq!(item(20, 5).profit_margin(), Decimal::new(400, 1));
    }

    #[test]
    fn margem_zera_com_custo_invalido() {
        let mut i = item(10, 2);
        i.purchase_price = Decimal::ZERO;
        assert_eq!(i.profit_margin(), Decimal::ZERO);

        i.purchase_price = Decimal::from(-5);
        assert_eq!(i.profit_margin(), Decimal::ZERO);
    }

    #[test]
    fn margem_arredonda_em_uma_casa() {
        let mut i = item(10, 2);
        i.purchase_price = Decimal::from(30);
        i.selling_price = Decimal::from(40);
        // 33.333...% => 33.3
        assert_eq!(i.profit_margin(), Decimal::new(333, 1));
    }
}
