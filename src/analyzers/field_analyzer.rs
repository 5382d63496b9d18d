use std::path::Path;

use crate::error::Result;
use crate::models::{GribElement, Record};
use crate::writers::JsonWriter;

#[derive(Debug, Clone, PartialEq)]
pub struct FieldStatistics {
    pub element: GribElement,
    pub nx: usize,
    pub ny: usize,
    pub total_cells: usize,
    pub numeric_cells: usize,
    pub missing_cells: usize,
    /// Cells equal to the most frequent repeated value, typically the
    /// out-of-polygon default
    pub sentinel: Option<(f64, usize)>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

impl FieldStatistics {
    pub fn missing_percentage(&self) -> f64 {
        if self.total_cells == 0 {
            return 0.0;
        }
        100.0 * self.missing_cells as f64 / self.total_cells as f64
    }

    pub fn summary(&self) -> String {
        let fmt_opt = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| format!("{:.4}", v));

        let mut summary = format!(
            "{} ({} x {}): {} numeric, {} missing ({:.1}%), min={}, max={}, mean={}",
            self.element,
            self.nx,
            self.ny,
            self.numeric_cells,
            self.missing_cells,
            self.missing_percentage(),
            fmt_opt(self.min),
            fmt_opt(self.max),
            fmt_opt(self.mean),
        );

        if let Some((value, count)) = self.sentinel {
            summary.push_str(&format!(", repeated value {} in {} cells", value, count));
        }

        summary
    }
}

pub struct FieldAnalyzer;

impl FieldAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze_file(&self, path: &Path) -> Result<Vec<FieldStatistics>> {
        let records = JsonWriter::new().read_records(path)?;
        Ok(self.analyze(&records))
    }

    pub fn analyze(&self, records: &[Record]) -> Vec<FieldStatistics> {
        records.iter().map(|r| self.analyze_record(r)).collect()
    }

    pub fn analyze_record(&self, record: &Record) -> FieldStatistics {
        let values: Vec<f64> = record.values().collect();

        let (min, max, mean) = if values.is_empty() {
            (None, None, None)
        } else {
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            (Some(min), Some(max), Some(mean))
        };

        FieldStatistics {
            element: record.element(),
            nx: record.header.nx,
            ny: record.header.ny,
            total_cells: record.data.len(),
            numeric_cells: values.len(),
            missing_cells: record.missing_count(),
            sentinel: most_repeated(&values),
            min,
            max,
            mean,
        }
    }
}

impl Default for FieldAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

// Uniform samples practically never repeat, so any value seen more than once
// is a written sentinel.
fn most_repeated(values: &[f64]) -> Option<(f64, usize)> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut best: Option<(f64, usize)> = None;
    let mut start = 0;
    while start < sorted.len() {
        let value = sorted[start];
        let run = sorted[start..].iter().take_while(|&&v| v == value).count().max(1);
        if run > 1 && best.map_or(true, |(_, count)| run > count) {
            best = Some((value, run));
        }
        start += run;
    }
    best
}
