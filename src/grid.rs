use crate::core::error::TableError;
use crate::core::model::{Detection, Table, TableStructure};

/// Attaches recognized text to an inferred structure.
///
/// Fragments landing in the same cell are joined with a single space in the
/// order they appear in their row. A cell outside the declared grid fails
/// with `CellOutOfGrid`.
pub fn assemble_grid(
    structure: &TableStructure,
    detections: &[Detection],
) -> Result<Table, TableError> {
    let mut fragments: Vec<Vec<Vec<&str>>> =
        vec![vec![Vec::new(); structure.num_cols]; structure.num_rows];

    for (row_idx, row) in structure.rows.iter().enumerate() {
        for cell in &row.cells {
            let id = cell.text_box.id;
            let detection = detections
                .get(id)
                .ok_or(TableError::MissingTextForBox { id })?;
            fragments
                .get_mut(row_idx)
                .and_then(|columns| columns.get_mut(cell.column))
                .ok_or(TableError::CellOutOfGrid {
                    row: row_idx,
                    column: cell.column,
                })?
                .push(detection.text.as_str());
        }
    }

    let cells = fragments
        .into_iter()
        .map(|row| row.into_iter().map(|texts| texts.join(" ")).collect())
        .collect();
    Ok(Table::from_cells(cells))
}
