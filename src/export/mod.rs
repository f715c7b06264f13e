pub mod json_export;
pub mod markdown_export;
pub mod text_export;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::core::model::Table;

pub use json_export::JsonExporter;
pub use markdown_export::MarkdownExporter;
pub use text_export::TextExporter;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    Json,
    #[default]
    Markdown,
    Text,
}

impl OutputFormat {
    pub fn exporter(self) -> Box<dyn Exporter> {
        match self {
            OutputFormat::Json => Box::new(JsonExporter::new()),
            OutputFormat::Markdown => Box::new(MarkdownExporter::new()),
            OutputFormat::Text => Box::new(TextExporter::new()),
        }
    }
}

pub trait Exporter {
    fn render(&self, table: &Table) -> Result<String>;

    /// File name used when the table is written into an output directory.
    fn file_name(&self) -> &'static str;

    fn export(&self, table: &Table, out_dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("failed to create {}", out_dir.display()))?;
        let path = out_dir.join(self.file_name());
        fs::write(&path, self.render(table)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}
