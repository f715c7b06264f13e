pub mod core;
pub mod export;
pub mod grid;
pub mod ocr;
pub mod pipeline;
pub mod structure;

pub use crate::core::error::TableError;
pub use crate::core::geometry::BBox;
pub use crate::core::model::{Detection, Table, TableConfig, TableStructure};
pub use pipeline::{detect_structure, extract_table, scan_table};
