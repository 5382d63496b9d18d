use crate::models::{GribElement, GridGeometry, Record};
use crate::synth::config::OutOfPolygonPolicy;
use crate::synth::mask::CellMask;

#[derive(Debug, Clone)]
pub struct CoverageReport {
    pub nx: usize,
    pub ny: usize,
    pub total_cells: usize,
    pub inside_cells: usize,
    pub outside_cells: usize,
    pub policy: OutOfPolygonPolicy,
    pub fields: Vec<FieldCoverage>,
}

#[derive(Debug, Clone)]
pub struct FieldCoverage {
    pub element: GribElement,
    pub masked_cells: usize,
    pub missing_cells: usize,
}

impl CoverageReport {
    pub fn new(
        geometry: &GridGeometry,
        mask: &CellMask,
        records: &[Record],
        policy: OutOfPolygonPolicy,
    ) -> Self {
        let outside_cells = mask.outside_count();
        let masked_cells = match policy {
            OutOfPolygonPolicy::Const => 0,
            OutOfPolygonPolicy::Value | OutOfPolygonPolicy::None => outside_cells,
        };

        let fields = records
            .iter()
            .map(|record| FieldCoverage {
                element: record.element(),
                masked_cells,
                missing_cells: record.missing_count(),
            })
            .collect();

        Self {
            nx: geometry.nx(),
            ny: geometry.ny(),
            total_cells: geometry.cell_count(),
            inside_cells: mask.inside_count(),
            outside_cells,
            policy,
            fields,
        }
    }

    pub fn inside_percentage(&self) -> f64 {
        100.0 * self.inside_cells as f64 / self.total_cells as f64
    }

    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Coverage Report ===\n");
        summary.push_str(&format!("Grid: {} x {} ({} cells)\n", self.nx, self.ny, self.total_cells));
        summary.push_str(&format!(
            "Inside polygon: {} ({:.1}%)\n",
            self.inside_cells,
            self.inside_percentage()
        ));
        summary.push_str(&format!("Outside polygon: {}\n", self.outside_cells));
        summary.push_str(&format!("Out-of-polygon policy: {}\n", self.policy));

        for field in &self.fields {
            summary.push_str(&format!(
                "  {}: {} masked, {} missing\n",
                field.element, field.masked_cells, field.missing_cells
            ));
        }

        summary
    }
}
