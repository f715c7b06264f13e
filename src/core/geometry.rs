use geo::{coord, Contains, Rect};
use serde::{Deserialize, Serialize};

use crate::core::error::TableError;

/// Axis-aligned box in image coordinates: top-left corner plus size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BBox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl BBox {
    /// Negative sizes are clamped to zero. Callers converting corner pairs
    /// should reject inverted input first, see `Detection::from_quad`.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            x,
            y,
            w: w.max(0.0),
            h: h.max(0.0),
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn area(&self) -> f32 {
        self.w * self.h
    }

    pub fn to_rect(&self) -> Rect<f32> {
        Rect::new(
            coord! { x: self.x, y: self.y },
            coord! { x: self.right(), y: self.bottom() },
        )
    }

    /// Boundary-inclusive: a box contains itself.
    pub fn contains(&self, other: &Self) -> bool {
        self.to_rect().contains(&other.to_rect())
    }

    /// Length of the intersection of this box's x-span with `[low, high]`.
    pub fn x_overlap(&self, low: f32, high: f32) -> f32 {
        (self.right().min(high) - self.x.max(low)).max(0.0)
    }
}

/// Smallest box enclosing every input box.
pub fn table_bounds(boxes: &[BBox]) -> Result<BBox, TableError> {
    let first = boxes.first().ok_or(TableError::EmptyInput)?;

    let (mut min_x, mut min_y) = (first.x, first.y);
    let (mut max_x, mut max_y) = (first.right(), first.bottom());
    for bbox in &boxes[1..] {
        min_x = min_x.min(bbox.x);
        min_y = min_y.min(bbox.y);
        max_x = max_x.max(bbox.right());
        max_y = max_y.max(bbox.bottom());
    }

    Ok(BBox::new(min_x, min_y, max_x - min_x, max_y - min_y))
}
