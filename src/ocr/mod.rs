pub mod bridge;

use anyhow::Result;
use std::path::Path;

use crate::core::model::Detection;

pub use bridge::{load_detections, OcrBridge};

/// Anything that turns an image into positioned text fragments.
pub trait TextDetector {
    fn detect(&self, image: &Path) -> Result<Vec<Detection>>;
}
