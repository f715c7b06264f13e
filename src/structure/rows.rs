use std::collections::HashSet;

use crate::core::model::TextBox;

/// Groups boxes into text lines, top to bottom, each sorted left to right.
///
/// The topmost remaining box anchors a line; every other remaining box whose
/// top edge lies within the upper half of the anchor joins it.
pub fn cluster_rows(boxes: Vec<TextBox>) -> Vec<Vec<TextBox>> {
    let mut pool = boxes;
    pool.sort_by(|a, b| {
        a.bbox
            .y
            .total_cmp(&b.bbox.y)
            .then(a.bbox.x.total_cmp(&b.bbox.x))
    });

    let mut rows = Vec::new();
    while let Some((&anchor, rest)) = pool.split_first() {
        let top = anchor.bbox.y;
        let limit = top + anchor.bbox.h / 2.0;

        let mut row = vec![anchor];
        row.extend(
            rest.iter()
                .filter(|text_box| (top..=limit).contains(&text_box.bbox.y))
                .copied(),
        );

        let taken: HashSet<usize> = row.iter().map(|text_box| text_box.id).collect();
        pool.retain(|text_box| !taken.contains(&text_box.id));

        row.sort_by(|a, b| a.bbox.x.total_cmp(&b.bbox.x));
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::BBox;
    use pretty_assertions::assert_eq;

    fn text_box(id: usize, x: f32, y: f32, w: f32, h: f32) -> TextBox {
        TextBox::new(id, BBox::new(x, y, w, h))
    }

    fn row_ids(rows: &[Vec<TextBox>]) -> Vec<Vec<usize>> {
        rows.iter()
            .map(|row| row.iter().map(|b| b.id).collect())
            .collect()
    }

    #[test]
    fn groups_jittered_lines() {
        let rows = cluster_rows(vec![
            text_box(0, 50.0, 21.0, 30.0, 10.0),
            text_box(1, 0.0, 0.0, 30.0, 10.0),
            text_box(2, 0.0, 20.0, 30.0, 10.0),
            text_box(3, 50.0, 2.0, 30.0, 10.0),
        ]);
        assert_eq!(row_ids(&rows), vec![vec![1, 3], vec![2, 0]]);
    }

    #[test]
    fn window_is_half_the_anchor_height() {
        let rows = cluster_rows(vec![
            text_box(0, 0.0, 0.0, 10.0, 10.0),
            text_box(1, 20.0, 5.0, 10.0, 10.0),
            text_box(2, 40.0, 5.5, 10.0, 10.0),
        ]);
        assert_eq!(row_ids(&rows), vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn rows_are_ordered_top_to_bottom_and_left_to_right() {
        let rows = cluster_rows(vec![
            text_box(0, 40.0, 60.0, 10.0, 10.0),
            text_box(1, 10.0, 30.0, 10.0, 10.0),
            text_box(2, 5.0, 60.0, 10.0, 10.0),
            text_box(3, 70.0, 0.0, 10.0, 10.0),
            text_box(4, 30.0, 31.0, 10.0, 10.0),
        ]);
        for pair in rows.windows(2) {
            assert!(pair[0][0].bbox.y <= pair[1][0].bbox.y);
        }
        for row in &rows {
            assert!(row.windows(2).all(|w| w[0].bbox.x <= w[1].bbox.x));
        }
        assert_eq!(row_ids(&rows), vec![vec![3], vec![1, 4], vec![2, 0]]);
    }

    #[test]
    fn empty_input_has_no_rows() {
        assert!(cluster_rows(Vec::new()).is_empty());
    }
}
