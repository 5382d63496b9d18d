pub mod analyzers;
pub mod cli;
pub mod error;
pub mod models;
pub mod readers;
pub mod synth;
pub mod utils;
pub mod writers;

pub use error::{Result, SynthesisError};
pub use models::{BoundingBox, FieldHeader, GribElement, GridGeometry, Polygon, Record};
pub use synth::{synthesize, GenerationConfig, GridSynthesizer, OutOfPolygonPolicy};
