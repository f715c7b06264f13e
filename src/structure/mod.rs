//! Geometric inference of rows, columns and cell membership.

pub mod assign;
pub mod columns;
pub mod containment;
pub mod frame;
pub mod rows;

use tracing::{debug, warn};

use crate::core::error::TableError;
use crate::core::geometry::{table_bounds, BBox};
use crate::core::model::{TableConfig, TableStructure, TextBox};

pub use frame::FrameThresholds;

pub fn infer_structure(
    boxes: Vec<TextBox>,
    config: &TableConfig,
) -> Result<TableStructure, TableError> {
    config.validate()?;

    let raw: Vec<BBox> = boxes.iter().map(|text_box| text_box.bbox).collect();
    let bounds = table_bounds(&raw)?;
    let thresholds = FrameThresholds::from_bounds(&bounds, config);
    debug!(?bounds, ?thresholds, "table bounds");

    let total = boxes.len();
    let cells = frame::filter_frames(boxes, &thresholds);
    debug!(total, kept = cells.len(), "frame filter");

    let cells = containment::reduce_contained(cells);
    debug!(kept = cells.len(), "containment reduction");

    let rows = rows::cluster_rows(cells);
    if rows.is_empty() {
        warn!(total, "every box was filtered out");
        return Err(TableError::NoRowsDetected);
    }

    let (reference, num_cols) = columns::reference_row(&rows)?;
    let boundaries = columns::column_boundaries(reference);
    debug!(num_rows = rows.len(), num_cols, "grid shape");

    let assigned = assign::assign_columns(&rows, &boundaries)?;

    Ok(TableStructure {
        num_rows: assigned.len(),
        num_cols,
        boundaries,
        rows: assigned,
    })
}
