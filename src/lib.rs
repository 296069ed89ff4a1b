pub mod annotate;
pub mod config;
pub mod detection;
pub mod distance;
pub mod export;
pub mod models;
pub mod source;

pub use annotate::Annotator;
pub use config::{AnnotationStyle, PipelineConfig};
pub use detection::DetectionPipeline;
pub use export::{CsvExporter, ResultRow, ResultTable, TabularExporter, export_all};
#[cfg(feature = "xlsx")]
pub use export::XlsxExporter;
pub use models::{ColorRange, Detection, DetectionTarget, DistanceRecord};
pub use source::{ImageSource, SourceError};
