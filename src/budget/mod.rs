//! Composite de orçamentos.
//!
//! Um [`Budget`] agrega entradas ordenadas que podem ser itens simples
//! ([`BudgetItem`]) ou outros orçamentos. Tudo que tem valor implementa
//! [`Valued`], de modo que itens, orçamentos e o proxy de cache são
//! intercambiáveis.
//!
//! ## Exemplo
//!
//! ```rust
//! use orcamento::budget::{Budget, BudgetItem, Valued};
//! use rust_decimal::Decimal;
//!
//! let mut old = Budget::new();
//! old.add_item(BudgetItem::new(Decimal::from(150)));
//!
//! let mut budget = Budget::new();
//! budget.add_item(BudgetItem::new(Decimal::from(300)));
//! budget.add_item(old);
//!
//! assert_eq!(budget.value(), Decimal::from(450));
//! ```

mod composite;
mod item;

pub use composite::{Budget, SharedBudget};
pub use item::BudgetItem;

use std::sync::{Arc, RwLock};

use rust_decimal::Decimal;

/// Capacidade comum a tudo que possui valor monetário.
pub trait Valued: Send + Sync {
    /// Valor total da entidade.
    fn value(&self) -> Decimal;
}

impl<T: Valued + ?Sized> Valued for &T {
    fn value(&self) -> Decimal {
        (**self).value()
    }
}

impl<T: Valued + ?Sized> Valued for Box<T> {
    fn value(&self) -> Decimal {
        (**self).value()
    }
}

impl<T: Valued + ?Sized> Valued for Arc<T> {
    fn value(&self) -> Decimal {
        (**self).value()
    }
}

impl<T: Valued> Valued for RwLock<T> {
    fn value(&self) -> Decimal {
        // Um writer que entrou em pânico não invalida a soma.
        self.read().unwrap_or_else(|e| e.into_inner()).value()
    }
}
