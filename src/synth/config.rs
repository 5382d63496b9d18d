use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use validator::Validate;

use crate::error::{Result, SynthesisError};
use crate::models::{BoundingBox, GridGeometry, Polygon};
use crate::utils::constants::{
    DEFAULT_NX, DEFAULT_NY, DEFAULT_RANDOM_MAX, DEFAULT_RANDOM_MIN, DEFAULT_VALUE, ENV_PREFIX,
    POLICY_CONST, POLICY_NONE, POLICY_VALUE,
};

/// What a cell whose center falls outside the polygon receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutOfPolygonPolicy {
    /// Keep the sampled value
    #[default]
    #[serde(rename = "const")]
    Const,
    /// Overwrite with the configured default value
    #[serde(rename = "value")]
    Value,
    /// Overwrite with the missing marker (JSON `null`)
    #[serde(rename = "none", alias = "None")]
    None,
}

impl OutOfPolygonPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutOfPolygonPolicy::Const => POLICY_CONST,
            OutOfPolygonPolicy::Value => POLICY_VALUE,
            OutOfPolygonPolicy::None => POLICY_NONE,
        }
    }

    /// Value written to an outside cell, or `None` when the sample is kept.
    pub fn replacement(&self, default_value: f64) -> Option<Option<f64>> {
        match self {
            OutOfPolygonPolicy::Const => None,
            OutOfPolygonPolicy::Value => Some(Some(default_value)),
            OutOfPolygonPolicy::None => Some(None),
        }
    }
}

impl fmt::Display for OutOfPolygonPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutOfPolygonPolicy {
    type Err = SynthesisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            POLICY_CONST => Ok(OutOfPolygonPolicy::Const),
            POLICY_VALUE => Ok(OutOfPolygonPolicy::Value),
            POLICY_NONE => Ok(OutOfPolygonPolicy::None),
            other => Err(SynthesisError::Config(format!(
                "Unsupported out-of-polygon policy: {} (expected const, value or none)",
                other
            ))),
        }
    }
}

/// Parameters of one generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GenerationConfig {
    /// Grid extent; the polygon's enclosing box when absent
    pub bbox: Option<BoundingBox>,

    #[validate(range(min = 1))]
    pub nx: usize,

    #[validate(range(min = 1))]
    pub ny: usize,

    pub out_of_polygon: OutOfPolygonPolicy,

    pub default_value: f64,

    pub random_min: f64,

    pub random_max: f64,

    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            bbox: None,
            nx: DEFAULT_NX,
            ny: DEFAULT_NY,
            out_of_polygon: OutOfPolygonPolicy::default(),
            default_value: DEFAULT_VALUE,
            random_min: DEFAULT_RANDOM_MIN,
            random_max: DEFAULT_RANDOM_MAX,
            seed: None,
        }
    }
}

impl GenerationConfig {
    pub fn new(bbox: BoundingBox, nx: usize, ny: usize) -> Self {
        Self {
            bbox: Some(bbox),
            nx,
            ny,
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, policy: OutOfPolygonPolicy) -> Self {
        self.out_of_polygon = policy;
        self
    }

    pub fn with_default_value(mut self, default_value: f64) -> Self {
        self.default_value = default_value;
        self
    }

    pub fn with_random_range(mut self, random_min: f64, random_max: f64) -> Self {
        self.random_min = random_min;
        self.random_max = random_max;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Load from a TOML/JSON/YAML file, with `WINDGRID_*` environment overrides.
    /// A zero resolution in the file fails here with `Validation`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(environment())
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with `WINDGRID_*` environment overrides only.
    pub fn from_env() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(environment())
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every parameter and derive the grid geometry for `polygon`.
    pub fn resolve(&self, polygon: &Polygon) -> Result<GridGeometry> {
        self.validate().map_err(|e| {
            SynthesisError::InvalidGridParameters(format!("nx={} ny={}: {}", self.nx, self.ny, e))
        })?;

        // rand's Uniform also needs a finite width
        if !self.random_min.is_finite()
            || !self.random_max.is_finite()
            || self.random_min >= self.random_max
            || !(self.random_max - self.random_min).is_finite()
        {
            return Err(SynthesisError::InvalidSampleRange {
                min: self.random_min,
                max: self.random_max,
            });
        }

        let bbox = match self.bbox {
            Some(bbox) => bbox,
            None => BoundingBox::enclosing(polygon)?,
        };

        GridGeometry::new(bbox, self.nx, self.ny)
    }
}

// WINDGRID_NX=8, WINDGRID_BBOX__MAX_LAT=15.5, ...
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
