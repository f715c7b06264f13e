use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

use crate::core::error::TableError;
use crate::core::geometry::BBox;
use crate::core::model::Detection;
use crate::ocr::TextDetector;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TokenGeometry {
    /// `[x, y, w, h]`
    Bbox([f32; 4]),
    /// Four corners, clockwise from top-left.
    Quad([[f32; 2]; 4]),
}

/// One region as printed by the OCR script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrToken {
    pub text: String,
    #[serde(flatten)]
    pub geometry: TokenGeometry,
}

impl TryFrom<OcrToken> for Detection {
    type Error = TableError;

    fn try_from(token: OcrToken) -> Result<Self, Self::Error> {
        match token.geometry {
            TokenGeometry::Bbox([x, y, w, h]) => {
                Ok(Detection::new(BBox::new(x, y, w, h), token.text))
            }
            TokenGeometry::Quad(quad) => Detection::from_quad(quad, token.text),
        }
    }
}

pub fn parse_tokens(json: &str) -> Result<Vec<Detection>> {
    let tokens: Vec<OcrToken> =
        serde_json::from_str(json).with_context(|| "failed to parse OCR JSON response")?;
    tokens
        .into_iter()
        .enumerate()
        .map(|(idx, token)| {
            Detection::try_from(token).with_context(|| format!("invalid geometry for token {idx}"))
        })
        .collect()
}

pub fn load_detections(path: &Path) -> Result<Vec<Detection>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read detections from {}", path.display()))?;
    parse_tokens(&data).with_context(|| format!("invalid detections file {}", path.display()))
}

/// Runs an external OCR script that prints `OcrToken` JSON on stdout.
#[derive(Debug, Clone)]
pub struct OcrBridge {
    program: String,
    script_path: PathBuf,
}

impl OcrBridge {
    pub fn new(script_path: PathBuf) -> Self {
        Self {
            program: "python3".to_string(),
            script_path,
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl TextDetector for OcrBridge {
    fn detect(&self, image: &Path) -> Result<Vec<Detection>> {
        debug!(script = %self.script_path.display(), image = %image.display(), "running OCR bridge");
        let output = Command::new(&self.program)
            .arg(&self.script_path)
            .arg("--image")
            .arg(image)
            .output()
            .with_context(|| format!("failed to invoke OCR bridge via {}", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("OCR bridge failed: {stderr}");
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_tokens(&stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_both_geometry_shapes() {
        let json = r#"[
            {"text": "Name", "bbox": [10, 5, 40, 12], "confidence": 0.98},
            {"text": "Qty", "quad": [[60, 5], [90, 5], [90, 17], [60, 17]]}
        ]"#;
        let detections = parse_tokens(json).unwrap();
        assert_eq!(
            detections,
            vec![
                Detection::new(BBox::new(10.0, 5.0, 40.0, 12.0), "Name"),
                Detection::new(BBox::new(60.0, 5.0, 30.0, 12.0), "Qty"),
            ]
        );
    }

    #[test]
    fn rejects_tokens_without_geometry() {
        assert!(parse_tokens(r#"[{"text": "orphan"}]"#).is_err());
    }

    #[test]
    fn inverted_quad_token_is_rejected() {
        let json = r#"[
            {"text": "ok", "bbox": [0, 0, 10, 10]},
            {"text": "flipped", "quad": [[90, 17], [60, 17], [60, 5], [90, 5]]}
        ]"#;
        let err = parse_tokens(json).unwrap_err();
        assert!(format!("{err:#}").contains("token 1"));
        assert!(matches!(
            err.downcast_ref::<TableError>(),
            Some(TableError::InvertedQuad { .. })
        ));
    }
}
