//! Orçamento composto.

use std::sync::{Arc, RwLock};

use rust_decimal::Decimal;

use super::Valued;
use crate::states::{ApprovalAction, ApprovalState};
use crate::BudgetResult;

/// Orçamento compartilhado: pode ser embrulhado por um proxy e ainda
/// assim alterado pelo dono.
pub type SharedBudget = Arc<RwLock<Budget>>;

/// Orçamento composto por entradas que também têm valor.
///
/// # Ciclos
///
/// Um orçamento nunca deve conter a si mesmo, direta ou indiretamente
/// (possível apenas via [`SharedBudget`]). Nesse caso [`Budget::value`]
/// não termina. Não há detecção em tempo de execução.
#[derive(Default)]
pub struct Budget {
    entries: Vec<Arc<dyn Valued>>,
    state: ApprovalState,
}

impl Budget {
    /// Cria um orçamento vazio, aguardando aprovação.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adiciona uma entrada ao final do orçamento.
    pub fn add_item<V: Valued + 'static>(&mut self, entry: V) {
        self.entries.push(Arc::new(entry));
    }

    /// Adiciona uma entrada já compartilhada.
    ///
    /// A mesma entrada pode pertencer a vários orçamentos; seu valor
    /// é somado em cada um deles.
    pub fn add_shared(&mut self, entry: Arc<dyn Valued>) {
        self.entries.push(entry);
    }

    /// Quantidade de entradas diretas.
    pub fn item_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Itera sobre as entradas diretas, na ordem de inserção.
    pub fn entries(&self) -> impl Iterator<Item = &Arc<dyn Valued>> {
        self.entries.iter()
    }

    /// Estado de aprovação atual.
    pub fn state(&self) -> ApprovalState {
        self.state
    }

    pub fn approve(&mut self) -> BudgetResult<()> {
        self.apply(ApprovalAction::Approve)
    }

    pub fn reject(&mut self) -> BudgetResult<()> {
        self.apply(ApprovalAction::Reject)
    }

    pub fn finalize(&mut self) -> BudgetResult<()> {
        self.apply(ApprovalAction::Finalize)
    }

    fn apply(&mut self, action: ApprovalAction) -> BudgetResult<()> {
        let next = self.state.transition(action)?;
        tracing::debug!(from = %self.state, to = %next, %action, "Budget state changed");
        self.state = next;
        Ok(())
    }

    /// Desconto extra permitido pelo estado atual, sobre o valor total.
    pub fn extra_discount(&self) -> BudgetResult<Decimal> {
        let rate = self.state.extra_discount_rate()?;
        Ok(self.value() * rate)
    }

    /// Converte em [`SharedBudget`].
    pub fn into_shared(self) -> SharedBudget {
        Arc::new(RwLock::new(self))
    }
}

impl Valued for Budget {
    /// Soma recursiva de todas as entradas, recalculada a cada chamada.
    fn value(&self) -> Decimal {
        tracing::trace!(entries = self.entries.len(), "Computing budget value");
        self.entries.iter().map(|entry| entry.value()).sum()
    }
}

impl std::fmt::Debug for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Budget")
            .field("item_count", &self.entries.len())
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::BudgetItem;
    use crate::BudgetError;

    fn item(value: i64) -> BudgetItem {
        BudgetItem::new(Decimal::from(value))
    }

    #[test]
    fn test_empty_budget() {
        let budget = Budget::new();
        assert_eq!(budget.value(), Decimal::ZERO);
        assert!(budget.is_empty());
        assert_eq!(budget.state(), ApprovalState::UnderApproval);
    }

    #[test]
    fn test_nested_sum() {
        let mut budget = Budget::new();
        budget.add_item(item(300));
        budget.add_item(item(500));

        let mut older = Budget::new();
        older.add_item(item(150));

        let mut oldest = Budget::new();
        oldest.add_item(item(50));
        oldest.add_item(item(100));

        budget.add_item(older);
        budget.add_item(oldest);

        assert_eq!(budget.item_count(), 4);
        assert_eq!(budget.value(), Decimal::from(1100));
        assert_eq!(budget.value(), budget.value());
    }

    #[test]
    fn test_shared_entry_counts_in_each_parent() {
        let shared: Arc<dyn Valued> = Arc::new(item(10));

        let mut a = Budget::new();
        a.add_shared(shared.clone());
        let mut b = Budget::new();
        b.add_shared(shared);

        let mut root = Budget::new();
        root.add_item(a);
        root.add_item(b);

        assert_eq!(root.value(), Decimal::from(20));
    }

    #[test]
    fn test_recomputes_after_mutation() {
        let shared = Budget::new().into_shared();
        assert_eq!(shared.value(), Decimal::ZERO);

        shared.write().unwrap().add_item(item(25));
        assert_eq!(shared.value(), Decimal::from(25));
    }

    #[test]
    fn test_entries_keep_order() {
        let mut budget = Budget::new();
        budget.add_item(item(1));
        budget.add_item(item(2));
        budget.add_item(item(3));

        let values: Vec<Decimal> = budget.entries().map(|e| e.value()).collect();
        assert_eq!(
            values,
            vec![Decimal::from(1), Decimal::from(2), Decimal::from(3)]
        );
    }

    #[test]
    fn test_extra_discount_by_state() {
        let mut budget = Budget::new();
        budget.add_item(item(1000));

        assert_eq!(budget.extra_discount().unwrap(), Decimal::from(50));

        budget.approve().unwrap();
        assert_eq!(budget.extra_discount().unwrap(), Decimal::from(20));

        budget.finalize().unwrap();
        assert!(matches!(
            budget.extra_discount(),
            Err(BudgetError::DiscountNotAllowed(ApprovalState::Finalized))
        ));
    }

    #[test]
    fn test_invalid_transition_keeps_state() {
        let mut budget = Budget::new();
        budget.reject().unwrap();

        assert!(budget.approve().is_err());
        assert_eq!(budget.state(), ApprovalState::Rejected);
    }
}
