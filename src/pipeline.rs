use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::core::error::TableError;
use crate::core::model::{ingest, Detection, Table, TableConfig, TableStructure};
use crate::export::OutputFormat;
use crate::grid::assemble_grid;
use crate::ocr::{load_detections, TextDetector};
use crate::structure::infer_structure;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Detections file, or the page image when scanning.
    pub input: PathBuf,
    /// Destination file; `None` writes to the caller's stream.
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub table: TableConfig,
}

impl PipelineConfig {
    pub fn new(input: PathBuf, table: TableConfig) -> Self {
        Self {
            input,
            output: None,
            format: OutputFormat::default(),
            table,
        }
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Infers the grid layout of a set of detections without attaching text.
pub fn detect_structure(
    detections: &[Detection],
    config: &TableConfig,
) -> Result<TableStructure, TableError> {
    if detections.is_empty() {
        return Err(TableError::EmptyInput);
    }
    infer_structure(ingest(detections), config)
}

/// Turns detector output into a grid of cell texts.
pub fn extract_table(detections: &[Detection], config: &TableConfig) -> Result<Table, TableError> {
    let structure = detect_structure(detections, config)?;
    assemble_grid(&structure, detections)
}

/// Runs `detector` on an image and extracts the table it contains.
pub fn scan_table(
    detector: &dyn TextDetector,
    image: &Path,
    config: &TableConfig,
) -> Result<Table> {
    let detections = detector
        .detect(image)
        .with_context(|| format!("text detection failed for {}", image.display()))?;
    info!(image = %image.display(), detections = detections.len(), "detected text");
    let table = extract_table(&detections, config)
        .with_context(|| format!("no table recovered from {}", image.display()))?;
    Ok(table)
}

/// Reads a detections file and extracts its table.
pub fn build_table(config: &PipelineConfig) -> Result<Table> {
    let detections = load_detections(&config.input)?;
    info!(input = %config.input.display(), detections = detections.len(), "loaded detections");
    let table = extract_table(&detections, &config.table)
        .with_context(|| format!("no table recovered from {}", config.input.display()))?;
    Ok(table)
}

/// Renders `table` in the configured format, into the output file when one
/// is set and into `fallback` otherwise.
pub fn write_table(table: &Table, config: &PipelineConfig, fallback: &mut dyn Write) -> Result<()> {
    let rendered = config.format.exporter().render(table)?;
    match &config.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write table to: {}", path.display())),
        None => fallback
            .write_all(rendered.as_bytes())
            .context("Failed to write table to output stream"),
    }
}
