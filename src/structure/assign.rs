use crate::core::error::TableError;
use crate::core::model::{Cell, ColumnBoundary, Row, TextBox};

/// Places every box of every row into a column.
///
/// Boxes starting left of the first boundary go to the first column and boxes
/// starting at or beyond the end of the last boundary go to the last one.
/// Everything else goes to the column covering the largest share of the
/// box's width, the leftmost column winning ties.
pub fn assign_columns(
    rows: &[Vec<TextBox>],
    boundaries: &[ColumnBoundary],
) -> Result<Vec<Row>, TableError> {
    let (Some(first), Some(last)) = (boundaries.first(), boundaries.last()) else {
        return Err(TableError::NoRowsDetected);
    };
    let (min_bound, max_bound) = (first.low, last.high);
    let last_column = boundaries.len() - 1;

    rows.iter()
        .map(|row| {
            let cells = row
                .iter()
                .map(|&text_box| {
                    let x = text_box.bbox.x;
                    let column = if x < min_bound {
                        0
                    } else if x >= max_bound {
                        last_column
                    } else {
                        best_overlap(&text_box, boundaries)?
                    };
                    Ok::<_, TableError>(Cell { column, text_box })
                })
                .collect::<Result<Vec<_>, TableError>>()?;
            Ok::<_, TableError>(Row { cells })
        })
        .collect()
}

/// Share of the box's width inside `boundary`, in percent.
pub fn overlap_percentage(text_box: &TextBox, boundary: &ColumnBoundary) -> Result<f32, TableError> {
    let width = text_box.bbox.w;
    if width <= 0.0 {
        return Err(TableError::DegenerateBox {
            id: text_box.id,
            bbox: text_box.bbox,
        });
    }
    Ok(text_box.bbox.x_overlap(boundary.low, boundary.high) / width * 100.0)
}

fn best_overlap(text_box: &TextBox, boundaries: &[ColumnBoundary]) -> Result<usize, TableError> {
    let mut best_column = 0;
    let mut best_share = f32::NEG_INFINITY;
    for (column, boundary) in boundaries.iter().enumerate() {
        let share = overlap_percentage(text_box, boundary)?;
        if share > best_share {
            best_share = share;
            best_column = column;
        }
    }
    Ok(best_column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::BBox;
    use pretty_assertions::assert_eq;

    fn boundaries() -> Vec<ColumnBoundary> {
        vec![
            ColumnBoundary { low: 0.5, high: 49.5 },
            ColumnBoundary {
                low: 50.5,
                high: 99.5,
            },
            ColumnBoundary {
                low: 100.5,
                high: 149.5,
            },
        ]
    }

    fn columns(rows: &[Row]) -> Vec<Vec<usize>> {
        rows.iter()
            .map(|row| row.cells.iter().map(|cell| cell.column).collect())
            .collect()
    }

    #[test]
    fn straddling_box_goes_to_majority_column() {
        // About 40% of the box lies in the first column and 60% in the second.
        let straddler = TextBox::new(0, BBox::new(30.0, 0.0, 50.0, 10.0));
        let rows = assign_columns(&[vec![straddler]], &boundaries()).unwrap();
        assert_eq!(columns(&rows), vec![vec![1]]);
        assert_eq!(rows[0].cells.len(), 1);
    }

    #[test]
    fn boxes_outside_the_grid_clamp_to_edge_columns() {
        let row = vec![
            TextBox::new(0, BBox::new(0.0, 0.0, 10.0, 10.0)),
            TextBox::new(1, BBox::new(149.5, 0.0, 10.0, 10.0)),
            TextBox::new(2, BBox::new(300.0, 0.0, 10.0, 10.0)),
        ];
        let rows = assign_columns(&[row], &boundaries()).unwrap();
        assert_eq!(columns(&rows), vec![vec![0, 2, 2]]);
    }

    #[test]
    fn equal_overlap_prefers_leftmost_column() {
        let gap_box = TextBox::new(0, BBox::new(49.0, 0.0, 2.0, 10.0));
        let rows = assign_columns(&[vec![gap_box]], &boundaries()).unwrap();
        assert_eq!(columns(&rows), vec![vec![0]]);
    }

    #[test]
    fn zero_width_box_is_reported() {
        let sliver = TextBox::new(7, BBox::new(60.0, 0.0, 0.0, 10.0));
        let err = assign_columns(&[vec![sliver]], &boundaries()).unwrap_err();
        assert_eq!(
            err,
            TableError::DegenerateBox {
                id: 7,
                bbox: sliver.bbox
            }
        );
    }

    #[test]
    fn zero_width_box_outside_the_grid_is_clamped() {
        let sliver = TextBox::new(0, BBox::new(0.0, 0.0, 0.0, 10.0));
        let rows = assign_columns(&[vec![sliver]], &boundaries()).unwrap();
        assert_eq!(columns(&rows), vec![vec![0]]);
    }
}
