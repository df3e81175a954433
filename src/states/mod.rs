//! Máquina de estados de aprovação de orçamentos.
//!
//! ```text
//! UnderApproval ──approve──▶ Approved ──finalize──▶ Finalized
//!       │                                              ▲
//!       └────reject────▶ Rejected ─────finalize────────┘
//! ```
//!
//! Qualquer outra combinação de estado e ação resulta em
//! [`BudgetError::InvalidTransition`] e o estado não muda.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{BudgetError, BudgetResult};

/// Estado de aprovação de um orçamento.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalState {
    /// Aguardando aprovação (estado inicial).
    #[default]
    UnderApproval,
    /// Aprovado.
    Approved,
    /// Reprovado.
    Rejected,
    /// Finalizado.
    Finalized,
}

impl std::fmt::Display for ApprovalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApprovalState::UnderApproval => write!(f, "under_approval"),
            ApprovalState::Approved => write!(f, "approved"),
            ApprovalState::Rejected => write!(f, "rejected"),
            ApprovalState::Finalized => write!(f, "finalized"),
        }
    }
}

/// Ação que provoca uma transição de estado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalAction {
    Approve,
    Reject,
    Finalize,
}

impl std::fmt::Display for ApprovalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApprovalAction::Approve => write!(f, "approve"),
            ApprovalAction::Reject => write!(f, "reject"),
            ApprovalAction::Finalize => write!(f, "finalize"),
        }
    }
}

impl ApprovalState {
    /// Aplica uma ação e retorna o próximo estado.
    pub fn transition(self, action: ApprovalAction) -> BudgetResult<Self> {
        use ApprovalAction::*;
        use ApprovalState::*;

        match (self, action) {
            (UnderApproval, Approve) => Ok(Approved),
            (UnderApproval, Reject) => Ok(Rejected),
            (Approved, Finalize) | (Rejected, Finalize) => Ok(Finalized),
            (from, action) => Err(BudgetError::InvalidTransition { from, action }),
        }
    }

    /// Percentual de desconto extra permitido neste estado.
    ///
    /// Orçamentos reprovados ou finalizados não recebem desconto.
    pub fn extra_discount_rate(self) -> BudgetResult<Decimal> {
        match self {
            ApprovalState::UnderApproval => Ok(Decimal::new(5, 2)),
            ApprovalState::Approved => Ok(Decimal::new(2, 2)),
            state => Err(BudgetError::DiscountNotAllowed(state)),
        }
    }

    /// Indica se nenhuma transição sai deste estado.
    pub fn is_terminal(self) -> bool {
        matches!(self, ApprovalState::Finalized)
    }
}
