//! Exportação em XML.

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::{BudgetExport, ExportedContent, FileExporter};
use crate::budget::Budget;
use crate::{BudgetError, BudgetResult};

/// Gera `<root><chave>valor</chave>...</root>` a partir do conteúdo.
///
/// A raiz e as chaves precisam ser nomes de elemento válidos; os valores
/// são escapados.
pub fn render_xml(root: &str, content: &BTreeMap<String, String>) -> BudgetResult<String> {
    ensure_element_name(root)?;

    let mut xml = String::from("<?xml version=\"1.0\"?>\n");
    xml.push_str(&format!("<{}>", root));
    for (key, value) in content {
        ensure_element_name(key)?;
        xml.push_str(&format!("<{key}>{}</{key}>", escape(value)));
    }
    xml.push_str(&format!("</{}>\n", root));
    Ok(xml)
}

/// XML de um orçamento, sem gravar arquivo.
pub fn budget_to_xml(budget: &Budget) -> BudgetResult<String> {
    render_xml("orcamento", &BudgetExport::from_budget(budget).content())
}

/// Aceita apenas nomes ASCII: letra ou `_` seguidos de letras, dígitos,
/// `_`, `-` ou `.`.
fn ensure_element_name(name: &str) -> BudgetResult<()> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid_start && valid_rest {
        Ok(())
    } else {
        Err(BudgetError::other(format!(
            "Nome de elemento XML inválido: '{}'",
            name
        )))
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Grava o conteúdo como arquivo XML.
#[derive(Debug, Clone)]
pub struct XmlExporter {
    root: String,
    output_dir: PathBuf,
}

impl XmlExporter {
    pub fn new(root: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output_dir: output_dir.into(),
        }
    }
}

impl FileExporter for XmlExporter {
    fn save(&self, content: &dyn ExportedContent) -> BudgetResult<String> {
        let xml = render_xml(&self.root, &content.content())?;

        std::fs::create_dir_all(&self.output_dir)?;
        let path = self
            .output_dir
            .join(format!("{}.xml", uuid::Uuid::new_v4()));
        std::fs::write(&path, xml)?;

        tracing::info!(path = %path.display(), root = %self.root, "XML exported");

        Ok(path.display().to_string())
    }
}
