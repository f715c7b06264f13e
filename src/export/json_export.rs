use anyhow::Result;

use crate::core::model::Table;
use crate::export::Exporter;

/// Grid as a JSON array of row arrays.
#[derive(Debug, Clone)]
pub struct JsonExporter {
    pretty: bool,
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonExporter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl Exporter for JsonExporter {
    fn render(&self, table: &Table) -> Result<String> {
        let data = if self.pretty {
            serde_json::to_string_pretty(table)?
        } else {
            serde_json::to_string(table)?
        };
        Ok(data)
    }

    fn file_name(&self) -> &'static str {
        "table.json"
    }
}
