use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;

use cnvcheck_core::models::{BandTable, GenomicPoint};

use crate::bins::ChromBins;

/// Non-fatal conditions met while assigning bands.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BandAssignmentWarning {
    #[error("{chr} has no bands in the reference table; {n_points} points left without a band")]
    UnmappedBandChromosome { chr: String, n_points: usize },

    #[error("{n_points} points on {chr} lie before the first band start ({first_start})")]
    BeforeFirstBand {
        chr: String,
        n_points: usize,
        first_start: u64,
    },
}

///
/// Outcome of one band assignment pass.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BandAssignmentReport {
    /// points that received a band
    pub assigned: usize,
    /// points left without a band, for any reason
    pub unassigned: usize,
    pub warnings: Vec<BandAssignmentWarning>,
}

impl BandAssignmentReport {
    ///
    /// Chromosomes of the point data missing from the band table.
    ///
    pub fn unmapped_chromosomes(&self) -> Vec<&str> {
        self.warnings
            .iter()
            .filter_map(|w| match w {
                BandAssignmentWarning::UnmappedBandChromosome { chr, .. } => Some(chr.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.unassigned == 0
    }
}

///
/// Label every point with the band whose half-open interval holds its position.
///
/// Points are handled one chromosome run at a time; for normalizer output each
/// chromosome is a single contiguous run. A chromosome absent from the table
/// leaves its points without a band, as do positions before the chromosome's
/// first band start. Neither is an error: both are logged and reported.
///
/// # Arguments
/// - points: normalized points, bands are overwritten
/// - table: reference bands, assumed sorted and non-overlapping per chromosome
///
pub fn assign_bands_in_place(points: &mut [GenomicPoint], table: &BandTable) -> BandAssignmentReport {
    let mut report = BandAssignmentReport::default();

    for run in points.chunk_by_mut(|a, b| a.ordinal == b.ordinal) {
        let chr = run[0].chr.clone();

        let bins = match table.get(run[0].ordinal) {
            Some(bands) => ChromBins::from_bands(bands),
            None => {
                for point in run.iter_mut() {
                    point.band = None;
                }
                let warning = BandAssignmentWarning::UnmappedBandChromosome {
                    chr,
                    n_points: run.len(),
                };
                warn!("{}", warning);
                report.unassigned += run.len();
                report.warnings.push(warning);
                continue;
            }
        };

        let mut before_first = 0;
        for point in run.iter_mut() {
            point.band = bins.bin_label(point.position).map(|label| label.to_string());
            match point.band {
                Some(_) => report.assigned += 1,
                None => before_first += 1,
            }
        }

        if before_first > 0 {
            let warning = BandAssignmentWarning::BeforeFirstBand {
                chr,
                n_points: before_first,
                first_start: bins.first_start().unwrap_or(0),
            };
            warn!("{}", warning);
            report.unassigned += before_first;
            report.warnings.push(warning);
        }
    }

    debug!(
        "band assignment: {} assigned, {} unassigned",
        report.assigned, report.unassigned
    );

    report
}

///
/// Owned form of [assign_bands_in_place], discarding the report.
///
pub fn assign_bands(mut points: Vec<GenomicPoint>, table: &BandTable) -> Vec<GenomicPoint> {
    assign_bands_in_place(&mut points, table);
    points
}
