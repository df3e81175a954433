//! Envio HTTP como capacidade plugável.
//!
//! O registro de orçamentos depende apenas de [`HttpAdapter`]; trocar a
//! biblioteca de transporte significa trocar o adaptador.

mod registry;

pub use registry::BudgetRegistry;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::BudgetResult;

/// Dados enviados em um POST.
pub type PostData = BTreeMap<String, Value>;

/// Trait para adaptadores de envio HTTP.
#[async_trait]
pub trait HttpAdapter: Send + Sync {
    /// Nome do adaptador.
    fn name(&self) -> &str;

    /// Envia `data` para `url`.
    async fn post(&self, url: &str, data: &PostData) -> BudgetResult<()>;
}

/// Adaptador que apenas registra o envio no log.
#[derive(Debug, Default)]
pub struct LoggingHttpAdapter;

impl LoggingHttpAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HttpAdapter for LoggingHttpAdapter {
    fn name(&self) -> &str {
        "logging"
    }

    async fn post(&self, url: &str, data: &PostData) -> BudgetResult<()> {
        let body = serde_json::to_string(data)?;
        tracing::info!(%url, %body, "POST (not sent)");
        Ok(())
    }
}
