use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Result, SynthesisError};
use crate::models::Polygon;
use crate::utils::constants::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Axis-aligned latitude/longitude rectangle bounding the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct BoundingBox {
    #[validate(range(min = MIN_LAT, max = MAX_LAT))]
    pub max_lat: f64,

    #[validate(range(min = MIN_LAT, max = MAX_LAT))]
    pub min_lat: f64,

    #[validate(range(min = MIN_LON, max = MAX_LON))]
    pub max_lon: f64,

    #[validate(range(min = MIN_LON, max = MAX_LON))]
    pub min_lon: f64,
}

impl BoundingBox {
    pub fn new(max_lat: f64, min_lat: f64, max_lon: f64, min_lon: f64) -> Self {
        Self {
            max_lat,
            min_lat,
            max_lon,
            min_lon,
        }
    }

    /// Smallest box containing every vertex of `polygon`.
    pub fn enclosing(polygon: &Polygon) -> Result<Self> {
        let mut vertices = polygon.vertices().iter();
        let &(lat0, lon0) = vertices.next().ok_or_else(|| {
            SynthesisError::InvalidPolygon("cannot derive a bounding box from an empty polygon".into())
        })?;

        let bbox = vertices.fold(
            Self::new(lat0, lat0, lon0, lon0),
            |acc, &(lat, lon)| Self {
                max_lat: acc.max_lat.max(lat),
                min_lat: acc.min_lat.min(lat),
                max_lon: acc.max_lon.max(lon),
                min_lon: acc.min_lon.min(lon),
            },
        );

        Ok(bbox)
    }

    pub fn lat_range(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_range(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Range checks plus the strict ordering `max > min` on both axes.
    pub fn check(&self) -> Result<()> {
        let coords = [self.max_lat, self.min_lat, self.max_lon, self.min_lon];
        if coords.iter().any(|c| !c.is_finite()) {
            return Err(SynthesisError::InvalidGridParameters(format!(
                "bounding box has non-finite coordinates: {:?}",
                self
            )));
        }

        self.validate().map_err(|e| {
            SynthesisError::InvalidGridParameters(format!("bounding box out of range: {}", e))
        })?;

        if self.max_lat <= self.min_lat {
            return Err(SynthesisError::InvalidGridParameters(format!(
                "max_lat {} must be greater than min_lat {}",
                self.max_lat, self.min_lat
            )));
        }

        if self.max_lon <= self.min_lon {
            return Err(SynthesisError::InvalidGridParameters(format!(
                "max_lon {} must be greater than min_lon {}",
                self.max_lon, self.min_lon
            )));
        }

        Ok(())
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lon..=self.max_lon).contains(&lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bbox() {
        let bbox = BoundingBox::new(1.0, 0.0, 1.0, 0.0);
        assert!(bbox.check().is_ok());
        assert_eq!(bbox.lat_range(), 1.0);
        assert!(bbox.contains(0.5, 0.5));
        assert!(!bbox.contains(1.5, 0.5));
    }

    #[test]
    fn test_degenerate_bbox() {
        let flat = BoundingBox::new(1.0, 1.0, 2.0, 0.0);
        assert!(matches!(
            flat.check(),
            Err(SynthesisError::InvalidGridParameters(_))
        ));

        let inverted = BoundingBox::new(1.0, 0.0, 0.0, 1.0);
        assert!(matches!(
            inverted.check(),
            Err(SynthesisError::InvalidGridParameters(_))
        ));
    }

    #[test]
    fn test_out_of_range_bbox() {
        let bbox = BoundingBox::new(95.0, 0.0, 1.0, 0.0);
        assert!(matches!(
            bbox.check(),
            Err(SynthesisError::InvalidGridParameters(_))
        ));

        let nan = BoundingBox::new(f64::NAN, 0.0, 1.0, 0.0);
        assert!(nan.check().is_err());
    }

    #[test]
    fn test_range_limits_are_inclusive() {
        assert!(BoundingBox::new(90.0, -90.0, 360.0, -180.0).check().is_ok());
        assert!(BoundingBox::new(90.5, -90.0, 10.0, 0.0).check().is_err());
        assert!(BoundingBox::new(10.0, 0.0, 360.5, 0.0).check().is_err());
        assert!(BoundingBox::new(10.0, 0.0, 10.0, -180.5).check().is_err());
    }

    #[test]
    fn test_enclosing_polygon() {
        let polygon = Polygon::new(vec![
            (15.42, 108.79),
            (15.34, 108.82),
            (15.35, 108.85),
            (15.42, 108.79),
        ])
        .unwrap();

        let bbox = BoundingBox::enclosing(&polygon).unwrap();
        assert_eq!(bbox, BoundingBox::new(15.42, 15.34, 108.85, 108.79));
    }
}
