//! Ordering of raw sample rows into the global point sequence.
//!
//! Rows are keyed by `(chromosome ordinal, position)` and stable-sorted, so rows
//! sharing a key keep their input order. The rank in that order becomes the
//! point's global index, and the ordinal's parity picks its color.

use crate::errors::Result;
use crate::models::{ChromosomeOrdinal, GenomicPoint, RawRecord};

///
/// Normalize raw records into the globally ordered point sequence.
///
/// Fails on the first record whose chromosome label has no ordinal; no
/// partial output is produced in that case. Bands are left unassigned.
///
/// # Arguments
/// - records: rows of one sample, in input order
///
pub fn normalize(records: Vec<RawRecord>) -> Result<Vec<GenomicPoint>> {
    let mut keyed: Vec<(ChromosomeOrdinal, RawRecord)> = records
        .into_iter()
        .map(|record| Ok((ChromosomeOrdinal::from_label(&record.chr)?, record)))
        .collect::<Result<Vec<_>>>()?;

    // sort_by is stable
    keyed.sort_by(|(a_ord, a), (b_ord, b)| {
        a_ord.cmp(b_ord).then_with(|| a.position.cmp(&b.position))
    });

    let points = keyed
        .into_iter()
        .enumerate()
        .map(|(index, (ordinal, record))| GenomicPoint {
            index,
            chr: record.chr,
            ordinal,
            position: record.position,
            copy_number: record.copy_number,
            color: ordinal.color(),
            band: None,
        })
        .collect();

    Ok(points)
}
