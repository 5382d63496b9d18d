use crate::error::{Result, SynthesisError};
use crate::utils::constants::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Check that a latitude/longitude pair is finite and inside the accepted ranges
///
/// # Examples
/// ```
/// use windgrid::utils::coordinates::validate_coordinate;
///
/// assert!(validate_coordinate(15.4, 108.8).is_ok());
/// assert!(validate_coordinate(91.0, 0.0).is_err());
/// ```
pub fn validate_coordinate(lat: f64, lon: f64) -> Result<()> {
    if !lat.is_finite() || !lon.is_finite() {
        return Err(SynthesisError::InvalidFormat(format!(
            "Coordinate ({}, {}) is not finite",
            lat, lon
        )));
    }

    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(SynthesisError::InvalidFormat(format!(
            "Latitude {} is outside [{}, {}]",
            lat, MIN_LAT, MAX_LAT
        )));
    }

    if !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(SynthesisError::InvalidFormat(format!(
            "Longitude {} is outside [{}, {}]",
            lon, MIN_LON, MAX_LON
        )));
    }

    Ok(())
}

/// Signed area of the parallelogram spanned by (b - a) and (p - a)
pub fn cross(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> f64 {
    (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
}

/// True if `p` lies on the closed segment `a`-`b` within `epsilon`
pub fn on_segment(a: (f64, f64), b: (f64, f64), p: (f64, f64), epsilon: f64) -> bool {
    if cross(a, b, p).abs() > epsilon {
        return false;
    }

    p.0 >= a.0.min(b.0) - epsilon
        && p.0 <= a.0.max(b.0) + epsilon
        && p.1 >= a.1.min(b.1) - epsilon
        && p.1 <= a.1.max(b.1) + epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_coordinate() {
        assert!(validate_coordinate(0.0, 0.0).is_ok());
        assert!(validate_coordinate(-90.0, 359.5).is_ok());
        assert!(validate_coordinate(-90.5, 0.0).is_err());
        assert!(validate_coordinate(0.0, -181.0).is_err());
        assert!(validate_coordinate(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_cross_orientation() {
        assert!(cross((0.0, 0.0), (1.0, 0.0), (0.0, 1.0)) > 0.0);
        assert!(cross((0.0, 0.0), (1.0, 0.0), (0.0, -1.0)) < 0.0);
        assert_eq!(cross((0.0, 0.0), (1.0, 1.0), (2.0, 2.0)), 0.0);
    }

    #[test]
    fn test_on_segment() {
        let eps = 1e-12;
        assert!(on_segment((0.0, 0.0), (0.0, 1.0), (0.0, 0.5), eps));
        assert!(on_segment((0.0, 0.0), (0.0, 1.0), (0.0, 1.0), eps));
        assert!(!on_segment((0.0, 0.0), (0.0, 1.0), (0.0, 1.5), eps));
        assert!(!on_segment((0.0, 0.0), (0.0, 1.0), (0.1, 0.5), eps));
    }
}
