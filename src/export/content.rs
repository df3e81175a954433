//! Conteúdos exportáveis.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::budget::{Budget, Valued};
use crate::order::Order;

/// Conteúdo que pode ser exportado como pares chave/valor.
pub trait ExportedContent {
    fn content(&self) -> BTreeMap<String, String>;
}

/// Retrato de um orçamento no momento da exportação.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetExport {
    pub value: Decimal,
    pub item_count: usize,
}

impl BudgetExport {
    pub fn from_budget(budget: &Budget) -> Self {
        Self {
            value: budget.value(),
            item_count: budget.item_count(),
        }
    }
}

impl ExportedContent for BudgetExport {
    fn content(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("valor".to_string(), self.value.to_string()),
            ("quantidade_itens".to_string(), self.item_count.to_string()),
        ])
    }
}

/// Retrato de um pedido no momento da exportação.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderExport {
    pub client_name: String,
    pub finished_at: DateTime<Utc>,
}

impl OrderExport {
    pub fn from_order(order: &Order) -> Self {
        Self {
            client_name: order.client_name().to_string(),
            finished_at: order.finished_at(),
        }
    }
}

impl ExportedContent for OrderExport {
    fn content(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (
                "data_finalizacao".to_string(),
                self.finished_at.format("%d/%m/%Y").to_string(),
            ),
            ("nome_cliente".to_string(), self.client_name.clone()),
        ])
    }
}
