//! Selection statistics shared by interactive sessions and batch reports.
//!
//! Both functions are pure: they read an immutable point sequence and an
//! explicit selection, and return a fresh result. Nothing is cached between calls.

use fxhash::{FxHashMap, FxHashSet};
use log::debug;

use cnvcheck_core::models::{ChromosomeOrdinal, GenomicPoint};

use crate::errors::{Result, SelectionError};
use crate::models::{ChromosomeMean, ChromosomeSelectionResult, SelectionResult, round2};

const BASES_PER_MEGABASE: f64 = 1e6;

fn point_at(points: &[GenomicPoint], index: usize) -> Result<&GenomicPoint> {
    points
        .get(index)
        .filter(|p| p.index == index)
        .or_else(|| points.iter().find(|p| p.index == index))
        .ok_or(SelectionError::UnknownPointIndex(index))
}

///
/// Summarize points picked within one chromosome series.
///
/// `indices` are global indices in the order they were selected. Span and
/// band range are taken between the first and the last selected point in that
/// order, so an out-of-order selection yields a negative span and a reversed
/// band range.
///
/// Returns `Ok(None)` for an empty selection.
///
/// # Arguments
/// - points: the sample's point sequence
/// - indices: selected global indices, in selection order
///
pub fn aggregate_selection(
    points: &[GenomicPoint],
    indices: &[usize],
) -> Result<Option<SelectionResult>> {
    if indices.is_empty() {
        return Ok(None);
    }

    let selected = indices
        .iter()
        .map(|&i| point_at(points, i))
        .collect::<Result<Vec<&GenomicPoint>>>()?;

    let first = selected[0];
    let last = selected[selected.len() - 1];

    let count = selected.len();
    let sum: f64 = selected.iter().map(|p| p.copy_number).sum();
    let mean_copy_number = round2(sum / count as f64);

    let single_chromosome = selected.iter().all(|p| p.ordinal == first.ordinal);

    let (chr_label, span_megabases, band_range_label) = if single_chromosome {
        let span = (last.position as f64 - first.position as f64) / BASES_PER_MEGABASE;
        let bands = match (first.band_label(), last.band_label()) {
            (Some(a), Some(b)) => Some(format!("{}-{}", a, b)),
            _ => None,
        };
        (first.short_chr().to_string(), Some(round2(span)), bands)
    } else {
        (
            format!("{}-{}", first.short_chr(), last.short_chr()),
            None,
            None,
        )
    };

    Ok(Some(SelectionResult {
        chr_label,
        count,
        mean_copy_number,
        span_megabases,
        band_range_label,
    }))
}

struct ChromAccumulator<'a> {
    chr: &'a str,
    ordinal: ChromosomeOrdinal,
    n_points: usize,
    sum: f64,
    min_index: usize,
    max_index: usize,
}

///
/// Summarize a set of whole chromosomes.
///
/// Every point of a selected chromosome counts toward its mean, regardless of
/// any point-level selection. Chromosomes are grouped by ordinal, so `chr1`
/// and `1` rows of one sample form a single chromosome reported under the
/// first label seen. They are reported in the order they appear in `points`
/// (ordinal order for normalized points), not in the order of `chromosomes`.
/// Identifiers may be full labels (`chr1`) or short ones (`1`); unknown or
/// malformed identifiers are ignored.
///
/// # Arguments
/// - points: the sample's point sequence
/// - chromosomes: selected chromosome identifiers
///
pub fn aggregate_chromosome_selection<S: AsRef<str>>(
    points: &[GenomicPoint],
    chromosomes: &[S],
) -> ChromosomeSelectionResult {
    let mut order: Vec<ChromAccumulator> = Vec::new();
    let mut lookup: FxHashMap<ChromosomeOrdinal, usize> = FxHashMap::default();

    for point in points {
        let slot = *lookup.entry(point.ordinal).or_insert_with(|| {
            order.push(ChromAccumulator {
                chr: point.chr.as_str(),
                ordinal: point.ordinal,
                n_points: 0,
                sum: 0.0,
                min_index: point.index,
                max_index: point.index,
            });
            order.len() - 1
        });

        let acc = &mut order[slot];
        acc.n_points += 1;
        acc.sum += point.copy_number;
        acc.min_index = acc.min_index.min(point.index);
        acc.max_index = acc.max_index.max(point.index);
    }

    let mut selected: FxHashSet<ChromosomeOrdinal> = FxHashSet::default();
    for identifier in chromosomes {
        let identifier = identifier.as_ref();
        match ChromosomeOrdinal::from_label(identifier) {
            Ok(ordinal) if lookup.contains_key(&ordinal) => {
                selected.insert(ordinal);
            }
            _ => debug!("ignoring unknown chromosome in selection: {}", identifier),
        }
    }

    let mut result = ChromosomeSelectionResult::default();

    for acc in order {
        if !selected.contains(&acc.ordinal) {
            result.hidden.push(acc.chr.to_string());
            continue;
        }

        result.visible_range = Some(match result.visible_range {
            Some((min, max)) => (min.min(acc.min_index), max.max(acc.max_index)),
            None => (acc.min_index, acc.max_index),
        });

        result.chromosomes.push(ChromosomeMean {
            chr: acc.chr.to_string(),
            ordinal: acc.ordinal,
            n_points: acc.n_points,
            mean_copy_number: round2(acc.sum / acc.n_points as f64),
            min_index: acc.min_index,
            max_index: acc.max_index,
        });
    }

    result
}
