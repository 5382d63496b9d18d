/// GRIB element identifiers
pub const GRIB_ELEMENT_U: &str = "UGRD";
pub const GRIB_ELEMENT_V: &str = "VGRD";

/// Policy names accepted on the command line and in config files
pub const POLICY_CONST: &str = "const";
pub const POLICY_VALUE: &str = "value";
pub const POLICY_NONE: &str = "none";

/// Generation defaults
pub const DEFAULT_NX: usize = 4;
pub const DEFAULT_NY: usize = 4;
pub const DEFAULT_VALUE: f64 = 0.0;
pub const DEFAULT_RANDOM_MIN: f64 = 2.0;
pub const DEFAULT_RANDOM_MAX: f64 = 3.0;

/// Geographic limits accepted for bounding boxes (longitudes may use 0..360)
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 360.0;

/// Collinearity tolerance (degrees) for points on a polygon edge
pub const BOUNDARY_EPSILON: f64 = 1e-12;

/// Minimum distinct vertices for a usable polygon
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "WINDGRID";
