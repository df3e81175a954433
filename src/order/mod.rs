//! Pedidos com dados extrínsecos compartilhados (flyweight).
//!
//! Milhares de pedidos do mesmo cliente, finalizados no mesmo momento,
//! apontam para uma única instância de [`OrderData`].

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::budget::Budget;

/// Dados extrínsecos de um pedido.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderData {
    /// Nome do cliente.
    pub client_name: String,

    /// Momento de finalização.
    pub finished_at: DateTime<Utc>,
}

/// Pedido: dados compartilhados + orçamento próprio.
#[derive(Debug)]
pub struct Order {
    pub data: Arc<OrderData>,
    pub budget: Budget,
}

impl Order {
    pub fn client_name(&self) -> &str {
        &self.data.client_name
    }

    pub fn finished_at(&self) -> DateTime<Utc> {
        self.data.finished_at
    }

    /// Orçamento próprio do pedido.
    pub fn budget(&self) -> &Budget {
        &self.budget
    }
}

/// Fábrica de pedidos que reaproveita [`OrderData`] idênticos.
#[derive(Debug, Default)]
pub struct OrderFactory {
    shared: HashMap<OrderData, Arc<OrderData>>,
}

impl OrderFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cria um pedido, reutilizando os dados extrínsecos se já existirem.
    pub fn create(
        &mut self,
        client_name: impl Into<String>,
        finished_at: DateTime<Utc>,
        budget: Budget,
    ) -> Order {
        let key = OrderData {
            client_name: client_name.into(),
            finished_at,
        };

        let data = self
            .shared
            .entry(key)
            .or_insert_with_key(|k| {
                tracing::debug!(client = %k.client_name, "New shared order data");
                Arc::new(k.clone())
            })
            .clone();

        Order { data, budget }
    }

    /// Quantidade de instâncias de [`OrderData`] distintas.
    pub fn shared_count(&self) -> usize {
        self.shared.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_data_is_shared() {
        let mut factory = OrderFactory::new();
        let now = Utc::now();

        let orders: Vec<Order> = (0..1000)
            .map(|_| factory.create("Maria", now, Budget::new()))
            .collect();

        assert_eq!(factory.shared_count(), 1);
        assert!(Arc::ptr_eq(&orders[0].data, &orders[999].data));
        // 1000 pedidos + a entrada da fábrica
        assert_eq!(Arc::strong_count(&orders[0].data), 1001);
    }

    #[test]
    fn test_distinct_data_is_not_shared() {
        let mut factory = OrderFactory::new();
        let now = Utc::now();

        let a = factory.create("Maria", now, Budget::new());
        let b = factory.create("João", now, Budget::new());

        assert_eq!(factory.shared_count(), 2);
        assert!(!Arc::ptr_eq(&a.data, &b.data));
        assert_eq!(b.client_name(), "João");
        assert_eq!(a.finished_at(), now);
    }

    #[test]
    fn test_order_keeps_its_own_budget() {
        use crate::budget::{BudgetItem, Valued};
        use rust_decimal::Decimal;

        let mut factory = OrderFactory::new();
        let now = Utc::now();

        let mut budget = Budget::new();
        budget.add_item(BudgetItem::new(Decimal::from(40)));

        let a = factory.create("Maria", now, budget);
        let b = factory.create("Maria", now, Budget::new());

        assert!(Arc::ptr_eq(&a.data, &b.data));
        assert_eq!(a.budget().value(), Decimal::from(40));
        assert_eq!(b.budget().value(), Decimal::ZERO);
    }
}
