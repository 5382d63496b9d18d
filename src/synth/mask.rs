use rayon::prelude::*;

use crate::models::{GridGeometry, Polygon};

/// Per-cell polygon membership in data-array order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellMask {
    inside: Vec<bool>,
}

impl CellMask {
    /// Test every cell center against `polygon`. Cells are independent, so the
    /// work is spread over the current rayon pool.
    pub fn compute(geometry: &GridGeometry, polygon: &Polygon) -> Self {
        let inside = (0..geometry.cell_count())
            .into_par_iter()
            .map(|offset| {
                let (lat, lon) = geometry.center_at(offset);
                polygon.contains(lat, lon)
            })
            .collect();

        Self { inside }
    }

    pub fn len(&self) -> usize {
        self.inside.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inside.is_empty()
    }

    pub fn is_inside(&self, offset: usize) -> bool {
        self.inside[offset]
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.inside
    }

    pub fn inside_count(&self) -> usize {
        self.inside.iter().filter(|&&inside| inside).count()
    }

    pub fn outside_count(&self) -> usize {
        self.len() - self.inside_count()
    }
}
