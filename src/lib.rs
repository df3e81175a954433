//! # Orçamento
//!
//! Orçamentos compostos com proxy de cache para o cálculo do valor total.
//!
//! Um orçamento agrega itens e outros orçamentos; seu valor é a soma
//! recursiva das entradas. O proxy de cache calcula esse valor uma única
//! vez e responde as leituras seguintes sem percorrer a árvore.
//!
//! ## Módulos
//!
//! - [`budget`] - Itens, orçamentos compostos e a capacidade [`budget::Valued`]
//! - [`proxy`] - Proxy de cache e latência simulada
//! - [`states`] - Máquina de estados de aprovação
//! - [`export`] - Exportação em XML e ZIP
//! - [`http`] - Adaptadores HTTP e registro de orçamentos
//! - [`order`] - Pedidos com dados compartilhados (flyweight)
//! - [`cli`] - Interface de linha de comando
//! - [`types`] - Configuração e erros

pub mod budget;
#[cfg(feature = "cli")]
pub mod cli;
pub mod export;
pub mod http;
pub mod order;
pub mod proxy;
pub mod states;
pub mod types;

pub use types::config::Config;
pub use types::errors::{BudgetError, BudgetResult};
