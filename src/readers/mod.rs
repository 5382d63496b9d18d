pub mod polygon_reader;

pub use polygon_reader::PolygonReader;
