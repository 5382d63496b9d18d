pub mod config;
pub mod mask;
pub mod report;
pub mod synthesizer;

pub use config::{GenerationConfig, OutOfPolygonPolicy};
pub use mask::CellMask;
pub use report::{CoverageReport, FieldCoverage};
pub use synthesizer::{synthesize, GridSynthesizer};
