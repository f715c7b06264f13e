//! Typed failures of table structure inference.

use thiserror::Error;

use crate::core::geometry::BBox;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// No boxes were supplied.
    #[error("no text boxes supplied")]
    EmptyInput,

    /// Every box was removed by frame filtering or containment reduction.
    #[error("no table rows detected")]
    NoRowsDetected,

    /// A zero-width box reached column assignment.
    #[error("box {id} has zero width and cannot be assigned to a column: {bbox:?}")]
    DegenerateBox { id: usize, bbox: BBox },

    /// The structure references a detection that is not in the detection list.
    #[error("no recognized text for box {id}")]
    MissingTextForBox { id: usize },

    /// A cell points outside the `num_rows` x `num_cols` grid.
    #[error("cell at row {row}, column {column} lies outside the grid")]
    CellOutOfGrid { row: usize, column: usize },

    /// A detector quadrilateral whose third corner is above or left of its first.
    #[error("quadrilateral corners are inverted: {quad:?}")]
    InvertedQuad { quad: [[f32; 2]; 4] },

    #[error("invalid table configuration: {message}")]
    InvalidConfig { message: String },
}
