use std::collections::VecDeque;

use crate::core::model::TextBox;

/// Collapses nested and duplicate detections so that no surviving box is
/// contained in another.
///
/// Candidates are visited smallest first: by area, then by `w + h`, then by
/// ascending id. A candidate is dropped when any box still waiting in the
/// queue contains it. A container is never smaller than the box it holds in
/// either dimension, so it sorts strictly later unless the two rectangles are
/// identical, even for zero-area slivers. The largest box of each nested group
/// survives, and among identical boxes the one with the highest id survives.
pub fn reduce_contained(boxes: Vec<TextBox>) -> Vec<TextBox> {
    let mut queue: Vec<TextBox> = boxes;
    queue.sort_by(|a, b| {
        a.bbox
            .area()
            .total_cmp(&b.bbox.area())
            .then((a.bbox.w + a.bbox.h).total_cmp(&(b.bbox.w + b.bbox.h)))
            .then(a.id.cmp(&b.id))
    });
    let mut queue = VecDeque::from(queue);

    let mut survivors = Vec::with_capacity(queue.len());
    while let Some(candidate) = queue.pop_front() {
        let enclosed = queue
            .iter()
            .any(|other| other.bbox.contains(&candidate.bbox));
        if !enclosed {
            survivors.push(candidate);
        }
    }

    survivors
}
