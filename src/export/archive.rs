//! Exportação em arquivo ZIP.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use zip::write::SimpleFileOptions;

use super::{ExportedContent, FileExporter};
use crate::BudgetResult;

/// Grava o conteúdo, serializado em JSON, como uma entrada de um ZIP.
#[derive(Debug, Clone)]
pub struct ZipExporter {
    entry_name: String,
    output_dir: PathBuf,
}

impl ZipExporter {
    pub fn new(entry_name: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            entry_name: entry_name.into(),
            output_dir: output_dir.into(),
        }
    }
}

impl FileExporter for ZipExporter {
    fn save(&self, content: &dyn ExportedContent) -> BudgetResult<String> {
        std::fs::create_dir_all(&self.output_dir)?;

        let path = self
            .output_dir
            .join(format!("{}.zip", uuid::Uuid::new_v4()));
        let payload = serde_json::to_string_pretty(&content.content())?;

        let mut writer = zip::ZipWriter::new(File::create(&path)?);
        writer.start_file(self.entry_name.as_str(), SimpleFileOptions::default())?;
        writer.write_all(payload.as_bytes())?;
        writer.finish()?;

        tracing::info!(
            path = %path.display(),
            entry = %self.entry_name,
            "ZIP exported"
        );

        Ok(path.display().to_string())
    }
}
