use tracing::debug;

use crate::error::{Result, SynthesisError};
use crate::models::BoundingBox;

/// Position of a cell in the grid. `row` walks latitude south to north,
/// `col` walks longitude west to east.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex {
    pub row: usize,
    pub col: usize,
}

/// Regular lat/lon grid derived from a bounding box and a resolution.
///
/// The data layout is row-major: `offset = row * nx + col`. [`offset`] and
/// [`cell`] are inverses of each other and are the only mapping between a
/// cell and its slot in a flattened data array.
///
/// [`offset`]: GridGeometry::offset
/// [`cell`]: GridGeometry::cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    bbox: BoundingBox,
    nx: usize,
    ny: usize,
    dx: f64,
    dy: f64,
}

impl GridGeometry {
    pub fn new(bbox: BoundingBox, nx: usize, ny: usize) -> Result<Self> {
        if nx == 0 || ny == 0 {
            return Err(SynthesisError::InvalidGridParameters(format!(
                "resolution must be at least 1x1, got nx={} ny={}",
                nx, ny
            )));
        }
        bbox.check()?;

        let dy = bbox.lat_range() / ny as f64;
        let dx = bbox.lon_range() / nx as f64;

        debug!(nx, ny, dx, dy, "computed grid geometry");

        Ok(Self {
            bbox,
            nx,
            ny,
            dx,
            dy,
        })
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn dy(&self) -> f64 {
        self.dy
    }

    pub fn cell_count(&self) -> usize {
        self.nx * self.ny
    }

    pub fn offset(&self, cell: CellIndex) -> usize {
        debug_assert!(cell.row < self.ny && cell.col < self.nx);
        cell.row * self.nx + cell.col
    }

    pub fn cell(&self, offset: usize) -> CellIndex {
        debug_assert!(offset < self.cell_count());
        CellIndex {
            row: offset / self.nx,
            col: offset % self.nx,
        }
    }

    /// `(lat, lon)` of the cell center.
    pub fn center(&self, cell: CellIndex) -> (f64, f64) {
        let lat = self.bbox.min_lat + (0.5 + cell.row as f64) * self.dy;
        let lon = self.bbox.min_lon + (0.5 + cell.col as f64) * self.dx;
        (lat, lon)
    }

    pub fn center_at(&self, offset: usize) -> (f64, f64) {
        self.center(self.cell(offset))
    }

    /// All cells in data-array order.
    pub fn cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        (0..self.cell_count()).map(move |offset| self.cell(offset))
    }
}
