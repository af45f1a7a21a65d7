use serde::{Deserialize, Serialize};

use crate::models::chromosome::{ChromColor, ChromosomeOrdinal};

///
/// One row of a sample table, before normalization.
///
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    pub chr: String,
    #[serde(rename = "Position")]
    pub position: u64,
    #[serde(rename = "copyNum")]
    pub copy_number: f64,
}

impl RawRecord {
    pub fn new(chr: &str, position: u64, copy_number: f64) -> Self {
        RawRecord {
            chr: chr.to_string(),
            position,
            copy_number,
        }
    }
}

///
/// A copy-number measurement placed in the global, chromosome-ordered sequence.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenomicPoint {
    /// rank in the (ordinal, position) order
    pub index: usize,
    pub chr: String,
    #[serde(skip)]
    pub ordinal: ChromosomeOrdinal,
    pub position: u64,
    pub copy_number: f64,
    pub color: ChromColor,
    pub band: Option<String>,
}

impl GenomicPoint {
    pub fn short_chr(&self) -> &str {
        ChromosomeOrdinal::short_label(&self.chr)
    }

    pub fn band_label(&self) -> Option<&str> {
        self.band.as_deref()
    }
}
