use tracing::warn;

use crate::error::{Result, SynthesisError};
use crate::utils::constants::{BOUNDARY_EPSILON, MIN_POLYGON_VERTICES};
use crate::utils::coordinates::on_segment;

/// Simple closed boundary given as `(lat, lon)` vertices.
///
/// Rings may be passed closed (first vertex repeated at the end) or open; an
/// open ring is closed implicitly by the containment test.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<(f64, f64)>,
}

impl Polygon {
    pub fn new(vertices: Vec<(f64, f64)>) -> Result<Self> {
        if let Some(&(lat, lon)) = vertices
            .iter()
            .find(|(lat, lon)| !lat.is_finite() || !lon.is_finite())
        {
            return Err(SynthesisError::InvalidPolygon(format!(
                "vertex ({}, {}) is not finite",
                lat, lon
            )));
        }

        let distinct = count_distinct(&vertices);
        if distinct < MIN_POLYGON_VERTICES {
            return Err(SynthesisError::InvalidPolygon(format!(
                "need at least {} distinct vertices, got {}",
                MIN_POLYGON_VERTICES, distinct
            )));
        }

        let polygon = Self { vertices };
        if !polygon.is_closed() {
            warn!(
                vertices = polygon.vertices.len(),
                "polygon ring is open, closing it implicitly"
            );
        }

        Ok(polygon)
    }

    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.vertices
    }

    pub fn is_closed(&self) -> bool {
        self.vertices.first() == self.vertices.last()
    }

    /// True if `(lat, lon)` is inside the polygon or on its boundary.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        contains((lat, lon), &self.vertices)
    }
}

/// Distinct vertices, counting no further than `MIN_POLYGON_VERTICES`.
fn count_distinct(vertices: &[(f64, f64)]) -> usize {
    let mut seen: Vec<(f64, f64)> = Vec::with_capacity(MIN_POLYGON_VERTICES);
    for v in vertices {
        if !seen.contains(v) {
            seen.push(*v);
            if seen.len() == MIN_POLYGON_VERTICES {
                break;
            }
        }
    }
    seen.len()
}

/// Point-in-polygon test over a `(lat, lon)` ring.
///
/// Points within `BOUNDARY_EPSILON` of any edge count as inside. Everything
/// else is decided by even-odd ray casting along the longitude axis. Rings
/// with fewer than three vertices contain nothing.
pub fn contains(point: (f64, f64), ring: &[(f64, f64)]) -> bool {
    let n = ring.len();
    if n < MIN_POLYGON_VERTICES {
        return false;
    }

    let (lat, lon) = point;

    let mut j = n - 1;
    for i in 0..n {
        if on_segment(ring[j], ring[i], point, BOUNDARY_EPSILON) {
            return true;
        }
        j = i;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (lat_i, lon_i) = ring[i];
        let (lat_j, lon_j) = ring[j];

        if ((lat_i > lat) != (lat_j > lat))
            && (lon < (lon_j - lon_i) * (lat - lat_i) / (lat_j - lat_i) + lon_i)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon {
        Polygon::new(vec![
            (0.0, 0.0),
            (0.0, 1.0),
            (1.0, 1.0),
            (1.0, 0.0),
            (0.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_interior_and_exterior() {
        let square = unit_square();
        assert!(square.contains(0.25, 0.25));
        assert!(square.contains(0.75, 0.5));
        assert!(!square.contains(1.5, 0.5));
        assert!(!square.contains(0.5, -0.01));
    }

    #[test]
    fn test_boundary_counts_as_inside() {
        let square = unit_square();
        // every edge, including the ones a bare crossing count would drop
        assert!(square.contains(0.0, 0.5));
        assert!(square.contains(1.0, 0.5));
        assert!(square.contains(0.5, 0.0));
        assert!(square.contains(0.5, 1.0));
        assert!(square.contains(1.0, 1.0));
        assert!(square.contains(0.0, 0.0));
    }

    #[test]
    fn test_concave_notch() {
        // L-shape: the upper right quadrant is cut away
        let l_shape = Polygon::new(vec![
            (0.0, 0.0),
            (0.0, 2.0),
            (1.0, 2.0),
            (1.0, 1.0),
            (2.0, 1.0),
            (2.0, 0.0),
        ])
        .unwrap();

        assert!(l_shape.contains(0.5, 1.5));
        assert!(l_shape.contains(1.5, 0.5));
        assert!(!l_shape.contains(1.5, 1.5));
        assert!(!l_shape.is_closed());
    }

    #[test]
    fn test_open_and_closed_rings_agree() {
        let closed = unit_square();
        let open = Polygon::new(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();

        for &(lat, lon) in &[(0.5, 0.5), (1.2, 0.3), (0.999, 0.001), (-0.1, -0.1)] {
            assert_eq!(closed.contains(lat, lon), open.contains(lat, lon));
        }
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        let square = unit_square();
        let first = square.contains(0.3, 0.7);
        for _ in 0..100 {
            assert_eq!(square.contains(0.3, 0.7), first);
        }
    }

    #[test]
    fn test_invalid_polygons() {
        assert!(matches!(
            Polygon::new(vec![(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)]),
            Err(SynthesisError::InvalidPolygon(_))
        ));
        assert!(matches!(
            Polygon::new(vec![]),
            Err(SynthesisError::InvalidPolygon(_))
        ));
        assert!(matches!(
            Polygon::new(vec![(0.0, 0.0), (1.0, f64::NAN), (1.0, 0.0)]),
            Err(SynthesisError::InvalidPolygon(_))
        ));
    }

    #[test]
    fn test_large_ring_validates() {
        let n = 50_000;
        let mut ring: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let t = i as f64 / n as f64 * std::f64::consts::TAU;
                (t.sin(), t.cos())
            })
            .collect();
        ring.push(ring[0]);

        let polygon = Polygon::new(ring).unwrap();
        assert!(polygon.is_closed());
        assert!(polygon.contains(0.0, 0.0));
        assert!(!polygon.contains(2.0, 0.0));
    }

    #[test]
    fn test_many_repeats_of_two_vertices_rejected() {
        let ring: Vec<(f64, f64)> = (0..1_000)
            .map(|i| if i % 2 == 0 { (0.0, 0.0) } else { (1.0, 1.0) })
            .collect();
        assert!(matches!(
            Polygon::new(ring),
            Err(SynthesisError::InvalidPolygon(_))
        ));
    }

    #[test]
    fn test_free_function_on_short_ring() {
        assert!(!contains((0.0, 0.0), &[(0.0, 0.0), (1.0, 1.0)]));
    }
}
