pub mod bbox;
pub mod geometry;
pub mod polygon;
pub mod record;

pub use bbox::BoundingBox;
pub use geometry::{CellIndex, GridGeometry};
pub use polygon::Polygon;
pub use record::{FieldHeader, GribElement, Record};
