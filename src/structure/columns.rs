use crate::core::error::TableError;
use crate::core::model::{ColumnBoundary, TextBox};

/// Inward shrink applied to each reference edge so that neighbouring
/// columns whose boxes touch do not tie.
const EDGE_INSET: f32 = 0.5;

/// Returns the canonical column count (the most common row length, earliest
/// length winning ties) and the first row of that length.
pub fn reference_row(rows: &[Vec<TextBox>]) -> Result<(&[TextBox], usize), TableError> {
    let mut counts: Vec<(usize, usize)> = Vec::new();
    for row in rows {
        match counts.iter_mut().find(|(len, _)| *len == row.len()) {
            Some((_, count)) => *count += 1,
            None => counts.push((row.len(), 1)),
        }
    }

    let mut best: Option<(usize, usize)> = None;
    for &(len, count) in &counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((len, count));
        }
    }
    let (num_cols, _) = best.ok_or(TableError::NoRowsDetected)?;

    let row = rows
        .iter()
        .find(|row| row.len() == num_cols)
        .ok_or(TableError::NoRowsDetected)?;
    Ok((row.as_slice(), num_cols))
}

/// One boundary per reference box, in the reference row's left-to-right order.
pub fn column_boundaries(reference: &[TextBox]) -> Vec<ColumnBoundary> {
    reference
        .iter()
        .map(|text_box| ColumnBoundary {
            low: text_box.bbox.x + EDGE_INSET,
            high: text_box.bbox.right() - EDGE_INSET,
        })
        .collect()
}
