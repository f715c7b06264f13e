use serde::{Deserialize, Serialize};

use crate::core::error::TableError;
use crate::core::geometry::BBox;

/// One region reported by the text detector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Detection {
    pub bbox: BBox,
    pub text: String,
}

impl Detection {
    pub fn new(bbox: BBox, text: impl Into<String>) -> Self {
        Self {
            bbox,
            text: text.into(),
        }
    }

    /// Builds a detection from a four-corner polygon ordered clockwise from
    /// the top-left corner. Only the first and third corners are used; a
    /// third corner above or left of the first fails with `InvertedQuad`.
    pub fn from_quad(quad: [[f32; 2]; 4], text: impl Into<String>) -> Result<Self, TableError> {
        let [x0, y0] = quad[0];
        let [x1, y1] = quad[2];
        if x1 < x0 || y1 < y0 {
            return Err(TableError::InvertedQuad { quad });
        }
        Ok(Self::new(BBox::new(x0, y0, x1 - x0, y1 - y0), text))
    }
}

/// A box tagged with the index of the detection it came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TextBox {
    pub id: usize,
    pub bbox: BBox,
}

impl TextBox {
    pub fn new(id: usize, bbox: BBox) -> Self {
        Self { id, bbox }
    }
}

pub fn ingest(detections: &[Detection]) -> Vec<TextBox> {
    detections
        .iter()
        .enumerate()
        .map(|(id, detection)| TextBox::new(id, detection.bbox))
        .collect()
}

/// Closed x-interval admitted by one column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ColumnBoundary {
    pub low: f32,
    pub high: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Cell {
    pub column: usize,
    pub text_box: TextBox,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

/// Inferred layout of a table, before text is attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableStructure {
    pub num_rows: usize,
    pub num_cols: usize,
    pub boundaries: Vec<ColumnBoundary>,
    pub rows: Vec<Row>,
}

/// Row-major grid of cell texts. Every row has exactly `num_cols` entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Table {
    cells: Vec<Vec<String>>,
}

impl Table {
    pub(crate) fn from_cells(cells: Vec<Vec<String>>) -> Self {
        Self { cells }
    }

    pub fn num_rows(&self) -> usize {
        self.cells.len()
    }

    pub fn num_cols(&self) -> usize {
        self.cells.first().map(Vec::len).unwrap_or(0)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col).map(String::as_str)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.cells
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.cells
    }
}

fn default_min_rows() -> usize {
    3
}

fn default_min_cols() -> usize {
    2
}

/// Minimum expected grid size. Only used to size the frame-filter thresholds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    #[serde(default = "default_min_rows")]
    pub min_rows: usize,
    #[serde(default = "default_min_cols")]
    pub min_cols: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            min_rows: default_min_rows(),
            min_cols: default_min_cols(),
        }
    }
}

impl TableConfig {
    pub fn new(min_rows: usize, min_cols: usize) -> Self {
        Self { min_rows, min_cols }
    }

    pub fn with_min_rows(mut self, min_rows: usize) -> Self {
        self.min_rows = min_rows;
        self
    }

    pub fn with_min_cols(mut self, min_cols: usize) -> Self {
        self.min_cols = min_cols;
        self
    }

    pub fn validate(&self) -> Result<(), TableError> {
        if self.min_rows == 0 {
            return Err(TableError::InvalidConfig {
                message: "min_rows must be at least 1".to_string(),
            });
        }
        if self.min_cols == 0 {
            return Err(TableError::InvalidConfig {
                message: "min_cols must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
