pub mod field_analyzer;

pub use field_analyzer::{FieldAnalyzer, FieldStatistics};
