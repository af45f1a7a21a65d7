use std::fmt::{self, Display};

use serde::Serialize;

use cnvcheck_core::models::{ChromColor, ChromosomeOrdinal};

/// Placeholder for a statistic that has no value.
pub const NOT_AVAILABLE: &str = "NA";

///
/// Two-decimal text of `value`, rounding its exact binary value once.
///
/// Exact ties at the third decimal only exist for multiples of 1/8; those
/// round half away from zero. Everything else is left to the formatter,
/// which rounds the exact value correctly.
///
pub fn format_fixed2(value: f64) -> String {
    let eighths = value * 8.0;
    let is_tie = value.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0;

    if is_tie {
        format!("{:.2}", (value * 100.0).round() / 100.0)
    } else {
        format!("{:.2}", value)
    }
}

///
/// Round to two decimal places, agreeing digit for digit with [format_fixed2].
///
pub fn round2(value: f64) -> f64 {
    format_fixed2(value).parse::<f64>().unwrap_or(value)
}

/// Statistics over a set of points picked within one chromosome series.
///
/// First and last refer to selection order, not genomic order, so the span
/// is negative when the last selected point lies left of the first one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionResult {
    /// Chromosome label without prefix; `first-last` if the selection crosses chromosomes
    pub chr_label: String,
    /// Number of selected points
    pub count: usize,
    /// Mean copy number, rounded to 2 decimals
    pub mean_copy_number: f64,
    /// (last position - first position) / 1e6, rounded to 2 decimals; None across chromosomes
    pub span_megabases: Option<f64>,
    /// `<first band>-<last band>`; None when either end has no band or across chromosomes
    pub band_range_label: Option<String>,
}

impl SelectionResult {
    ///
    /// Text shown for the selection: `(<chr>)(<bands>,<span>Mb)(<mean>)`.
    ///
    pub fn display(&self) -> String {
        let span = match self.span_megabases {
            Some(span) => format_fixed2(span),
            None => NOT_AVAILABLE.to_string(),
        };
        format!(
            "({})({},{}Mb)({})",
            self.chr_label,
            self.band_range_label.as_deref().unwrap_or(NOT_AVAILABLE),
            span,
            format_fixed2(self.mean_copy_number)
        )
    }
}

impl Display for SelectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Whole-chromosome statistics for the multi-chromosome summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChromosomeMean {
    /// Chromosome label as found in the sample
    pub chr: String,
    pub ordinal: ChromosomeOrdinal,
    /// Number of points on this chromosome
    pub n_points: usize,
    /// Mean copy number over every point of the chromosome, rounded to 2 decimals
    pub mean_copy_number: f64,
    /// Smallest global index on this chromosome
    pub min_index: usize,
    /// Largest global index on this chromosome
    pub max_index: usize,
}

impl ChromosomeMean {
    pub fn display(&self) -> String {
        format!(
            "({})({})",
            ChromosomeOrdinal::short_label(&self.chr),
            format_fixed2(self.mean_copy_number)
        )
    }
}

/// Outcome of selecting a set of whole chromosomes.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChromosomeSelectionResult {
    /// Selected chromosomes, in sample (ordinal) order
    pub chromosomes: Vec<ChromosomeMean>,
    /// Chromosomes of the sample that were not selected
    pub hidden: Vec<String>,
    /// (min index, max index) over the selected chromosomes; None if nothing is selected
    pub visible_range: Option<(usize, usize)>,
}

impl ChromosomeSelectionResult {
    ///
    /// `(<chr>)(<mean>)` per selected chromosome, joined by `"; "`.
    ///
    pub fn display(&self) -> String {
        self.chromosomes
            .iter()
            .map(|c| c.display())
            .collect::<Vec<String>>()
            .join("; ")
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }
}

impl Display for ChromosomeSelectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Contiguous run of one chromosome's points (one ordinal, any label spelling) in the global sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChromosomeTrack {
    pub chr: String,
    pub ordinal: ChromosomeOrdinal,
    pub color: ChromColor,
    pub first_index: usize,
    pub last_index: usize,
}

impl ChromosomeTrack {
    pub fn len(&self) -> usize {
        self.last_index - self.first_index + 1
    }

    /// Global index at which the chromosome's name is drawn.
    pub fn label_anchor(&self) -> usize {
        self.first_index
    }

    ///
    /// Global index of the `local`-th point of this chromosome.
    ///
    pub fn global_index(&self, local: usize) -> Option<usize> {
        (local < self.len()).then(|| self.first_index + local)
    }
}

/// Position of a chromosome name along the index axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelAnchor {
    pub chr: String,
    pub index: usize,
}

/// Batch report of one sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleSummary {
    pub sample: String,
    pub n_points: usize,
    /// (0, max index) of the whole sample
    pub x_range: Option<(usize, usize)>,
    /// Every chromosome selected
    pub chromosomes: ChromosomeSelectionResult,
    pub label_anchors: Vec<LabelAnchor>,
    /// Points without a band
    pub unbanded_points: usize,
    /// Chromosomes missing from the band table
    pub unmapped_chromosomes: Vec<String>,
    /// Same text as the interactive summary of all chromosomes
    pub display: String,
}
