use anyhow::Result;

use crate::core::model::Table;
use crate::export::Exporter;

/// Tab-separated rows, one line per table row.
#[derive(Debug, Clone, Default)]
pub struct TextExporter;

impl TextExporter {
    pub fn new() -> Self {
        Self
    }

    fn clean(cell: &str) -> String {
        cell.replace(['\t', '\n', '\r'], " ")
    }
}

impl Exporter for TextExporter {
    fn render(&self, table: &Table) -> Result<String> {
        let mut text = String::new();
        for row in table.rows() {
            let line = row
                .iter()
                .map(|cell| Self::clean(cell))
                .collect::<Vec<_>>()
                .join("\t");
            text.push_str(&line);
            text.push('\n');
        }
        Ok(text)
    }

    fn file_name(&self) -> &'static str {
        "table.tsv"
    }
}
