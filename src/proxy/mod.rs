//! Proxy de cache para o valor de orçamentos.
//!
//! O cálculo de [`Budget::value`](crate::budget::Budget) percorre toda a
//! árvore a cada chamada. [`BudgetCacheProxy`] expõe o mesmo contrato
//! [`Valued`](crate::budget::Valued), calcula o valor uma única vez e
//! responde as chamadas seguintes a partir do cache.
//!
//! O cache nunca é invalidado: o orçamento embrulhado deve ser tratado
//! como imutável depois da primeira leitura pelo proxy.

mod cache;
mod latency;

pub use cache::{BudgetCacheProxy, ProxyStats};
pub use latency::SimulatedLatency;
