//! Tipos de erro do Orçamento.

use thiserror::Error;

use crate::states::{ApprovalAction, ApprovalState};

/// Tipo de resultado padrão do Orçamento.
pub type BudgetResult<T> = Result<T, BudgetError>;

/// Erros possíveis no Orçamento.
#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Erro ao gerar ZIP: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Transição inválida: não é possível {action} um orçamento no estado '{from}'")]
    InvalidTransition {
        from: ApprovalState,
        action: ApprovalAction,
    },

    #[error("Orçamento no estado '{0}' não pode receber desconto extra")]
    DiscountNotAllowed(ApprovalState),

    #[error("Apenas orçamentos finalizados podem ser registrados (estado atual: '{0}')")]
    RegistrationNotAllowed(ApprovalState),

    #[error("Erro HTTP ao enviar para '{0}': {1}")]
    Http(String, String),

    #[error("{0}")]
    Other(String),
}

impl BudgetError {
    /// Cria um erro genérico.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
