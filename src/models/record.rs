use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SynthesisError;
use crate::models::GridGeometry;
use crate::utils::constants::{GRIB_ELEMENT_U, GRIB_ELEMENT_V};

/// Physical quantity carried by a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GribElement {
    /// Eastward wind component
    #[serde(rename = "UGRD")]
    Ugrd,
    /// Northward wind component
    #[serde(rename = "VGRD")]
    Vgrd,
}

impl GribElement {
    /// Emission order of the records.
    pub const ALL: [GribElement; 2] = [GribElement::Ugrd, GribElement::Vgrd];

    pub fn as_str(&self) -> &'static str {
        match self {
            GribElement::Ugrd => GRIB_ELEMENT_U,
            GribElement::Vgrd => GRIB_ELEMENT_V,
        }
    }
}

impl fmt::Display for GribElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GribElement {
    type Err = SynthesisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            GRIB_ELEMENT_U => Ok(GribElement::Ugrd),
            GRIB_ELEMENT_V => Ok(GribElement::Vgrd),
            other => Err(SynthesisError::InvalidFormat(format!(
                "Unknown GRIB element: {}",
                other
            ))),
        }
    }
}

/// GRIB-style grid description attached to each field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldHeader {
    pub la1: f64,
    pub la2: f64,
    pub lo1: f64,
    pub lo2: f64,
    pub nx: usize,
    pub ny: usize,
    pub dx: f64,
    pub dy: f64,
    #[serde(rename = "GRIB_ELEMENT")]
    pub element: GribElement,
}

impl FieldHeader {
    pub fn new(geometry: &GridGeometry, element: GribElement) -> Self {
        let bbox = geometry.bbox();
        Self {
            la1: bbox.min_lat,
            la2: bbox.max_lat,
            lo1: bbox.min_lon,
            lo2: bbox.max_lon,
            nx: geometry.nx(),
            ny: geometry.ny(),
            dx: geometry.dx(),
            dy: geometry.dy(),
            element,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.nx * self.ny
    }

    /// Headers of the same request differ only in their element.
    pub fn same_grid(&self, other: &FieldHeader) -> bool {
        self.la1 == other.la1
            && self.la2 == other.la2
            && self.lo1 == other.lo1
            && self.lo2 == other.lo2
            && self.nx == other.nx
            && self.ny == other.ny
            && self.dx == other.dx
            && self.dy == other.dy
    }
}

/// One emitted field: header plus row-major data, `None` marking missing cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub header: FieldHeader,
    pub data: Vec<Option<f64>>,
}

impl Record {
    pub fn new(header: FieldHeader, data: Vec<Option<f64>>) -> Self {
        Self { header, data }
    }

    pub fn element(&self) -> GribElement {
        self.header.element
    }

    pub fn missing_count(&self) -> usize {
        self.data.iter().filter(|v| v.is_none()).count()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().filter_map(|v| *v)
    }

    pub fn is_consistent(&self) -> bool {
        self.data.len() == self.header.cell_count()
    }
}
