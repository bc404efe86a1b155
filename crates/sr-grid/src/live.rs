//! Directory-backed facility counts with cross-sample deduplication.

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use sr_core::{Coordinate, FacilityCounts, FacilityKind};

use crate::{FacilityDirectory, FacilityRecord, FacilityResult, FacilityService};

/// Result of surveying a set of sample points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Survey {
    /// Per-kind counts, each distinct facility counted once.
    pub counts:  FacilityCounts,
    /// Number of directory queries issued.
    pub queries: usize,
    /// Number of queries that failed and contributed nothing.
    pub failed:  usize,
}

/// Wraps a [`FacilityDirectory`] and turns record lists into counts.
///
/// Queries for different sample points run on a dedicated rayon pool of at
/// most `max_workers` threads; results are merged in sample order so the
/// survey is deterministic for a deterministic directory.
pub struct LiveFacilities<D> {
    directory:   D,
    kinds:       Vec<FacilityKind>,
    max_workers: usize,
}

impl<D: FacilityDirectory> LiveFacilities<D> {
    /// Survey all points-of-interest kinds with up to 4 concurrent queries.
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            kinds:       FacilityKind::points_of_interest().collect(),
            max_workers: 4,
        }
    }

    pub fn with_kinds(mut self, kinds: Vec<FacilityKind>) -> Self {
        self.kinds = kinds;
        self
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers.max(1);
        self
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn kinds(&self) -> &[FacilityKind] {
        &self.kinds
    }

    /// Query the directory around every sample and count distinct
    /// facilities.  A failed sample contributes nothing and is logged.
    pub fn survey(&self, samples: &[Coordinate], radius_m: f64) -> Survey {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(self.max_workers).build();
        let results: Vec<FacilityResult<Vec<FacilityRecord>>> = match pool {
            Ok(pool) => pool.install(|| {
                samples
                    .par_iter()
                    .map(|&p| self.directory.nearby(p, radius_m, &self.kinds))
                    .collect()
            }),
            Err(e) => {
                tracing::warn!("worker pool unavailable ({e}); surveying sequentially");
                samples
                    .iter()
                    .map(|&p| self.directory.nearby(p, radius_m, &self.kinds))
                    .collect()
            }
        };

        let mut survey = Survey { queries: results.len(), ..Survey::default() };
        let mut seen: FxHashSet<String> = FxHashSet::default();

        for (sample, result) in samples.iter().zip(results) {
            match result {
                Ok(records) => {
                    for record in records {
                        if self.kinds.contains(&record.kind) && seen.insert(record.id) {
                            survey.counts.add(record.kind, 1);
                        }
                    }
                }
                Err(e) => {
                    survey.failed += 1;
                    tracing::warn!("facility query at {sample} failed: {e}");
                }
            }
        }

        tracing::debug!(
            queries = survey.queries,
            failed = survey.failed,
            facilities = survey.counts.total(),
            "live facility survey complete"
        );
        survey
    }
}

impl<D: FacilityDirectory> FacilityService for LiveFacilities<D> {
    fn query_facilities(
        &self,
        center:   Coordinate,
        radius_m: f64,
    ) -> FacilityResult<FacilityCounts> {
        let records = self.directory.nearby(center, radius_m, &self.kinds)?;
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut counts = FacilityCounts::new();
        for record in &records {
            if self.kinds.contains(&record.kind) && seen.insert(record.id.as_str()) {
                counts.add(record.kind, 1);
            }
        }
        Ok(counts)
    }
}

