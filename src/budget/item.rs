//! Item de orçamento (folha do composite).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Valued;

/// Item de orçamento com valor monetário.
///
/// O valor não é validado; por convenção é não negativo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Valor do item.
    pub value: Decimal,
}

impl BudgetItem {
    /// Cria um novo item.
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }
}

impl Valued for BudgetItem {
    fn value(&self) -> Decimal {
        self.value
    }
}
