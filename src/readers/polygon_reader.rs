use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, SynthesisError};
use crate::models::Polygon;
use crate::utils::coordinates::validate_coordinate;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VertexEntry {
    Pair(f64, f64),
    Named { lat: f64, lon: f64 },
}

impl VertexEntry {
    fn into_pair(self) -> (f64, f64) {
        match self {
            VertexEntry::Pair(lat, lon) => (lat, lon),
            VertexEntry::Named { lat, lon } => (lat, lon),
        }
    }
}

/// Loads polygon vertex lists from `.json` or `.csv` files.
///
/// JSON files hold an array of `[lat, lon]` pairs or `{"lat": .., "lon": ..}`
/// objects. CSV files hold `lat,lon` rows; a non-numeric first row is taken
/// as a header and skipped.
pub struct PolygonReader;

impl PolygonReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_polygon(&self, path: &Path) -> Result<Polygon> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        let vertices = match extension.as_deref() {
            Some("json") => self.read_json(path)?,
            Some("csv") => self.read_csv(path)?,
            _ => {
                return Err(SynthesisError::InvalidFormat(format!(
                    "Unsupported polygon file: {} (expected .json or .csv)",
                    path.display()
                )))
            }
        };

        debug!(path = %path.display(), vertices = vertices.len(), "read polygon");
        self.build(vertices)
    }

    pub fn parse_json(&self, content: &str) -> Result<Polygon> {
        let entries: Vec<VertexEntry> = serde_json::from_str(content)?;
        self.build(entries.into_iter().map(VertexEntry::into_pair).collect())
    }

    fn read_json(&self, path: &Path) -> Result<Vec<(f64, f64)>> {
        let reader = BufReader::new(File::open(path)?);
        let entries: Vec<VertexEntry> = serde_json::from_reader(reader)?;
        Ok(entries.into_iter().map(VertexEntry::into_pair).collect())
    }

    fn read_csv(&self, path: &Path) -> Result<Vec<(f64, f64)>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_path(path)?;

        let mut vertices = Vec::new();
        for (line, result) in reader.records().enumerate() {
            let record = result?;
            if record.len() < 2 {
                return Err(SynthesisError::InvalidFormat(format!(
                    "Row {} has {} columns, expected lat,lon",
                    line + 1,
                    record.len()
                )));
            }

            match (record[0].parse::<f64>(), record[1].parse::<f64>()) {
                (Ok(lat), Ok(lon)) => vertices.push((lat, lon)),
                // a header names both columns
                (Err(_), Err(_)) if line == 0 => continue,
                _ => {
                    return Err(SynthesisError::InvalidFormat(format!(
                        "Row {}: invalid coordinate '{},{}'",
                        line + 1,
                        &record[0],
                        &record[1]
                    )))
                }
            }
        }

        Ok(vertices)
    }

    fn build(&self, vertices: Vec<(f64, f64)>) -> Result<Polygon> {
        for &(lat, lon) in &vertices {
            validate_coordinate(lat, lon)
                .map_err(|e| SynthesisError::InvalidPolygon(e.to_string()))?;
        }
        Polygon::new(vertices)
    }
}

impl Default for PolygonReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_parse_pairs_and_objects() {
        let reader = PolygonReader::new();

        let pairs = reader
            .parse_json("[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.0, 0.0]]")
            .unwrap();
        assert_eq!(pairs.vertices().len(), 4);

        let objects = reader
            .parse_json(r#"[{"lat": 0.0, "lon": 0.0}, {"lat": 0.0, "lon": 1.0}, {"lat": 1.0, "lon": 1.0}]"#)
            .unwrap();
        assert_eq!(objects.vertices()[1], (0.0, 1.0));
    }

    #[test]
    fn test_rejects_out_of_range_vertex() {
        let result = PolygonReader::new().parse_json("[[0.0, 0.0], [95.0, 1.0], [1.0, 1.0]]");
        assert!(matches!(result, Err(SynthesisError::InvalidPolygon(_))));
    }

    #[test]
    fn test_read_csv_with_header() -> Result<()> {
        let mut file = Builder::new().suffix(".csv").tempfile()?;
        writeln!(file, "lat,lon")?;
        writeln!(file, "# southern edge")?;
        writeln!(file, "15.40, 108.77")?;
        writeln!(file, "15.34, 108.82")?;
        writeln!(file, "15.35, 108.85")?;
        writeln!(file, "15.40, 108.77")?;

        let polygon = PolygonReader::new().read_polygon(file.path())?;
        assert_eq!(polygon.vertices().len(), 4);
        assert!(polygon.is_closed());
        Ok(())
    }

    #[test]
    fn test_read_csv_bad_row() -> Result<()> {
        let mut file = Builder::new().suffix(".csv").tempfile()?;
        writeln!(file, "0.0,0.0")?;
        writeln!(file, "north,east")?;

        let result = PolygonReader::new().read_polygon(file.path());
        assert!(matches!(result, Err(SynthesisError::InvalidFormat(_))));
        Ok(())
    }

    #[test]
    fn test_read_csv_typo_in_first_row() -> Result<()> {
        let mut file = Builder::new().suffix(".csv").tempfile()?;
        writeln!(file, "15.4x,108.77")?;
        writeln!(file, "15.34,108.82")?;
        writeln!(file, "15.35,108.85")?;
        writeln!(file, "15.30,108.80")?;

        match PolygonReader::new().read_polygon(file.path()) {
            Err(SynthesisError::InvalidFormat(msg)) => assert!(msg.contains("Row 1")),
            other => panic!("expected InvalidFormat, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_unsupported_extension() {
        let result = PolygonReader::new().read_polygon(Path::new("boundary.shp"));
        assert!(matches!(result, Err(SynthesisError::InvalidFormat(_))));
    }
}
