use crate::core::geometry::BBox;
use crate::core::model::{TableConfig, TextBox};

/// Upper bounds on the size of a single data cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameThresholds {
    pub max_cell_width: f32,
    pub max_cell_height: f32,
    pub max_cell_area: f32,
}

impl FrameThresholds {
    pub fn from_bounds(bounds: &BBox, config: &TableConfig) -> Self {
        let rows = config.min_rows as f32;
        let cols = config.min_cols as f32;
        Self {
            max_cell_width: bounds.w / cols,
            max_cell_height: bounds.h / rows,
            max_cell_area: bounds.area() / (rows * cols),
        }
    }

    pub fn admits(&self, bbox: &BBox) -> bool {
        bbox.w < self.max_cell_width
            && bbox.h < self.max_cell_height
            && bbox.area() < self.max_cell_area
    }
}

/// Drops borders, separators and the table outline itself.
pub fn filter_frames(boxes: Vec<TextBox>, thresholds: &FrameThresholds) -> Vec<TextBox> {
    boxes
        .into_iter()
        .filter(|text_box| thresholds.admits(&text_box.bbox))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::table_bounds;
    use pretty_assertions::assert_eq;

    fn boxes(raw: &[(f32, f32, f32, f32)]) -> Vec<TextBox> {
        raw.iter()
            .enumerate()
            .map(|(id, &(x, y, w, h))| TextBox::new(id, BBox::new(x, y, w, h)))
            .collect()
    }

    #[test]
    fn removes_outline_and_full_width_rules() {
        let input = boxes(&[
            (0.0, 0.0, 100.0, 90.0),
            (0.0, 30.0, 100.0, 2.0),
            (5.0, 5.0, 20.0, 10.0),
            (55.0, 5.0, 20.0, 10.0),
        ]);
        let raw: Vec<BBox> = input.iter().map(|b| b.bbox).collect();
        let thresholds =
            FrameThresholds::from_bounds(&table_bounds(&raw).unwrap(), &TableConfig::default());

        let kept: Vec<usize> = filter_frames(input, &thresholds)
            .iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(kept, vec![2, 3]);
    }

    #[test]
    fn thresholds_are_strict() {
        let thresholds = FrameThresholds {
            max_cell_width: 10.0,
            max_cell_height: 10.0,
            max_cell_area: 100.0,
        };
        assert!(thresholds.admits(&BBox::new(0.0, 0.0, 9.9, 9.9)));
        assert!(!thresholds.admits(&BBox::new(0.0, 0.0, 10.0, 1.0)));
        assert!(!thresholds.admits(&BBox::new(0.0, 0.0, 1.0, 10.0)));
    }

    #[test]
    fn filtering_is_idempotent() {
        let input = boxes(&[
            (-5.0, -5.0, 40.0, 35.0),
            (0.0, 0.0, 10.0, 10.0),
            (20.0, 0.0, 10.0, 10.0),
            (0.0, 15.0, 10.0, 10.0),
            (20.0, 15.0, 25.0, 10.0),
        ]);
        let raw: Vec<BBox> = input.iter().map(|b| b.bbox).collect();
        let thresholds =
            FrameThresholds::from_bounds(&table_bounds(&raw).unwrap(), &TableConfig::new(2, 2));

        let once = filter_frames(input, &thresholds);
        let twice = filter_frames(once.clone(), &thresholds);
        assert_eq!(once, twice);
    }
}
