use anyhow::Result;

use crate::core::model::Table;
use crate::export::Exporter;

/// Pipe table with the first grid row as the header.
#[derive(Debug, Clone, Default)]
pub struct MarkdownExporter;

impl MarkdownExporter {
    pub fn new() -> Self {
        Self
    }

    fn escape(cell: &str) -> String {
        cell.replace('|', "\\|").replace('\n', " ")
    }

    fn format_row(row: &[String]) -> String {
        let cells = row
            .iter()
            .map(|cell| Self::escape(cell))
            .collect::<Vec<_>>()
            .join(" | ");
        format!("| {cells} |\n")
    }
}

impl Exporter for MarkdownExporter {
    fn render(&self, table: &Table) -> Result<String> {
        let Some((header, body)) = table.rows().split_first() else {
            return Ok(String::new());
        };

        let mut markdown = Self::format_row(header);
        markdown.push_str(&format!("|{}\n", " --- |".repeat(header.len())));
        for row in body {
            markdown.push_str(&Self::format_row(row));
        }
        Ok(markdown)
    }

    fn file_name(&self) -> &'static str {
        "table.md"
    }
}
