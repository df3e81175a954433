//! Registro de orçamentos finalizados em uma API externa.

use serde_json::Value;

use super::{HttpAdapter, PostData};
use crate::budget::{Budget, Valued};
use crate::states::ApprovalState;
use crate::{BudgetError, BudgetResult};

/// Envia orçamentos finalizados através de um [`HttpAdapter`].
pub struct BudgetRegistry<A> {
    adapter: A,
    endpoint: String,
}

impl<A: HttpAdapter> BudgetRegistry<A> {
    pub fn new(adapter: A, endpoint: impl Into<String>) -> Self {
        Self {
            adapter,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Registra o orçamento.
    ///
    /// Apenas orçamentos no estado [`ApprovalState::Finalized`] são aceitos.
    pub async fn register(&self, budget: &Budget) -> BudgetResult<()> {
        if budget.state() != ApprovalState::Finalized {
            return Err(BudgetError::RegistrationNotAllowed(budget.state()));
        }

        let data = PostData::from([
            ("valor".to_string(), Value::String(budget.value().to_string())),
            (
                "quantidade_itens".to_string(),
                Value::from(budget.item_count()),
            ),
        ]);

        tracing::debug!(
            adapter = self.adapter.name(),
            endpoint = %self.endpoint,
            "Registering budget"
        );

        self.adapter.post(&self.endpoint, &data).await
    }
}
