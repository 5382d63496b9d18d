use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{Result, SynthesisError};
use crate::models::{BoundingBox, FieldHeader, GribElement, GridGeometry, Polygon, Record};
use crate::synth::config::{GenerationConfig, OutOfPolygonPolicy};
use crate::synth::mask::CellMask;
use crate::synth::report::CoverageReport;
use crate::utils::progress::ProgressReporter;

pub struct GridSynthesizer {
    config: GenerationConfig,
    max_workers: usize,
}

impl GridSynthesizer {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            max_workers: num_cpus::get(),
        }
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers.max(1);
        self
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate the UGRD and VGRD records, in that order.
    pub fn synthesize(&self, polygon: &Polygon) -> Result<Vec<Record>> {
        let (records, _) = self.synthesize_with_report(polygon, None)?;
        Ok(records)
    }

    /// Generate both records and a summary of polygon coverage.
    ///
    /// All parameters are validated before any sampling happens, so a failed
    /// call never produces partial output.
    pub fn synthesize_with_report(
        &self,
        polygon: &Polygon,
        progress: Option<&ProgressReporter>,
    ) -> Result<(Vec<Record>, CoverageReport)> {
        let geometry = self.config.resolve(polygon)?;

        info!(
            nx = geometry.nx(),
            ny = geometry.ny(),
            policy = %self.config.out_of_polygon,
            seeded = self.config.seed.is_some(),
            "synthesizing wind grid"
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()
            .map_err(|e| SynthesisError::Config(e.to_string()))?;

        // Sub-seeds are drawn up front so the output does not depend on
        // scheduling or on the worker count.
        let mut master = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let field_seeds: Vec<(GribElement, u64)> = GribElement::ALL
            .iter()
            .map(|&element| (element, master.gen()))
            .collect();

        if let Some(p) = progress {
            p.set_message("Testing cell containment...");
        }

        let mask = pool.install(|| CellMask::compute(&geometry, polygon));
        debug!(
            inside = mask.inside_count(),
            outside = mask.outside_count(),
            "computed polygon mask"
        );

        if let Some(p) = progress {
            p.set_message("Sampling fields...");
        }

        let records: Vec<Record> = pool.install(|| {
            field_seeds
                .par_iter()
                .map(|&(element, seed)| self.generate_field(&geometry, &mask, element, seed))
                .collect()
        });

        let report = CoverageReport::new(&geometry, &mask, &records, self.config.out_of_polygon);

        if let Some(p) = progress {
            p.finish_with_message(&format!("Generated {} records", records.len()));
        }

        Ok((records, report))
    }

    fn generate_field(
        &self,
        geometry: &GridGeometry,
        mask: &CellMask,
        element: GribElement,
        seed: u64,
    ) -> Record {
        let mut rng = StdRng::seed_from_u64(seed);
        let samples = Uniform::new(self.config.random_min, self.config.random_max);

        let mut data: Vec<Option<f64>> = (0..geometry.cell_count())
            .map(|_| Some(samples.sample(&mut rng)))
            .collect();

        if let Some(replacement) = self.config.out_of_polygon.replacement(self.config.default_value) {
            data.par_iter_mut()
                .zip(mask.as_slice().par_iter())
                .filter(|(_, inside)| !**inside)
                .for_each(|(slot, _)| *slot = replacement);
        }

        Record::new(FieldHeader::new(geometry, element), data)
    }
}

/// One-shot generation with an unseeded random source.
#[allow(clippy::too_many_arguments)]
pub fn synthesize(
    bbox: &BoundingBox,
    polygon: &Polygon,
    nx: usize,
    ny: usize,
    out_of_polygon: OutOfPolygonPolicy,
    default_value: f64,
    random_min: f64,
    random_max: f64,
) -> Result<Vec<Record>> {
    let config = GenerationConfig::new(*bbox, nx, ny)
        .with_policy(out_of_polygon)
        .with_default_value(default_value)
        .with_random_range(random_min, random_max);

    GridSynthesizer::new(config).synthesize(polygon)
}
