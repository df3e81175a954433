//! Exportação de orçamentos e pedidos.
//!
//! O conteúdo ([`ExportedContent`]) é separado do formato do arquivo
//! ([`FileExporter`]): qualquer conteúdo pode ser salvo em qualquer
//! formato.
//!
//! ## Exemplo
//!
//! ```rust,ignore
//! use orcamento::export::{BudgetExport, FileExporter, XmlExporter};
//!
//! let exporter = XmlExporter::new("orcamento", "/tmp");
//! let path = exporter.save(&BudgetExport::from_budget(&budget))?;
//! ```

mod archive;
mod content;
mod xml;

pub use archive::ZipExporter;
pub use content::{BudgetExport, ExportedContent, OrderExport};
pub use xml::{budget_to_xml, render_xml, XmlExporter};

use crate::BudgetResult;

/// Formato de arquivo de exportação.
pub trait FileExporter {
    /// Salva o conteúdo e retorna o caminho do arquivo gerado.
    fn save(&self, content: &dyn ExportedContent) -> BudgetResult<String>;
}
