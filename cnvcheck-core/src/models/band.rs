use std::io::Read;
use std::path::{Path, PathBuf};

use fxhash::FxHashMap;
use log::debug;
use serde::Serialize;

use crate::errors::{CnvCheckError, Result};
use crate::models::chromosome::ChromosomeOrdinal;
use crate::utils::{get_dynamic_reader, sample_name_from_path};

///
/// A named cytogenetic band. The band covers `[start, next band's start)`;
/// `end` is kept as read but plays no part in assignment.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Band {
    pub ordinal: ChromosomeOrdinal,
    pub start: u64,
    pub end: u64,
    pub label: String,
}

///
/// Reference band table, one start-ordered band list per chromosome.
///
/// Rows are expected to be sorted by `start` within each chromosome and
/// non-overlapping; nothing here checks that.
///
#[derive(Debug, Clone, Default)]
pub struct BandTable {
    bands: FxHashMap<ChromosomeOrdinal, Vec<Band>>,
    /// rows whose chromosome has no ordinal (chrM, alt contigs, ...)
    pub skipped_rows: usize,
    pub path: Option<PathBuf>,
}

impl BandTable {
    pub fn new() -> Self {
        BandTable::default()
    }

    ///
    /// Append a band to its chromosome's list. Callers push in ascending `start` order.
    ///
    pub fn push(&mut self, band: Band) {
        self.bands.entry(band.ordinal).or_default().push(band);
    }

    ///
    /// Read a tab-separated, headerless `chr start end band` table. Extra
    /// trailing columns (e.g. the stain column of UCSC cytoBand files) are ignored.
    ///
    /// # Arguments
    /// - name: table name used in errors
    /// - reader: source of tab-separated text
    ///
    pub fn from_reader<R: Read>(name: &str, reader: R) -> Result<Self> {
        let mut tsv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut table = BandTable::new();

        for result in tsv_reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            if record.len() < 4 {
                return Err(CnvCheckError::RecordParse {
                    source_name: name.to_string(),
                    line,
                    message: format!("expected 4 columns, found {}", record.len()),
                });
            }

            let chr = &record[0];
            let ordinal = match ChromosomeOrdinal::from_label(chr) {
                Ok(ordinal) => ordinal,
                Err(_) => {
                    debug!("{}: skipping band row for unplaced chromosome {}", name, chr);
                    table.skipped_rows += 1;
                    continue;
                }
            };

            let parse_coordinate = |field: &str| -> Result<u64> {
                field.trim().parse::<u64>().map_err(|e| CnvCheckError::RecordParse {
                    source_name: name.to_string(),
                    line,
                    message: format!("invalid coordinate `{}`: {}", field, e),
                })
            };

            table.push(Band {
                ordinal,
                start: parse_coordinate(&record[1])?,
                end: parse_coordinate(&record[2])?,
                label: record[3].trim().to_string(),
            });
        }

        Ok(table)
    }

    ///
    /// Bands of one chromosome, in table order.
    ///
    pub fn get(&self, ordinal: ChromosomeOrdinal) -> Option<&[Band]> {
        self.bands.get(&ordinal).map(|bands| bands.as_slice())
    }

    pub fn contains(&self, ordinal: ChromosomeOrdinal) -> bool {
        self.bands.contains_key(&ordinal)
    }

    /// Number of chromosomes with at least one band.
    pub fn n_chromosomes(&self) -> usize {
        self.bands.len()
    }

    pub fn n_bands(&self) -> usize {
        self.bands.values().map(|bands| bands.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

impl TryFrom<&Path> for BandTable {
    type Error = CnvCheckError;

    ///
    /// Create a new [BandTable] from a (optionally gzipped) band file.
    ///
    fn try_from(value: &Path) -> Result<Self> {
        let reader = get_dynamic_reader(value)?;
        let mut table = BandTable::from_reader(&sample_name_from_path(value), reader)?;
        table.path = Some(value.to_owned());

        Ok(table)
    }
}

impl TryFrom<&str> for BandTable {
    type Error = CnvCheckError;

    fn try_from(value: &str) -> Result<Self> {
        BandTable::try_from(Path::new(value))
    }
}

impl FromIterator<Band> for BandTable {
    fn from_iter<T: IntoIterator<Item = Band>>(iter: T) -> Self {
        let mut table = BandTable::new();
        for band in iter {
            table.push(band);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/cnv")
            .join(file_name)
    }

    #[rstest]
    fn test_read_band_file() {
        let table = BandTable::try_from(get_test_path("bands.txt").as_path()).unwrap();

        assert_eq!(table.n_chromosomes(), 5);
        assert_eq!(table.n_bands(), 9);
        assert_eq!(table.skipped_rows, 2);

        let chr1 = table.get(ChromosomeOrdinal(1)).unwrap();
        let labels: Vec<&str> = chr1.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["p36.33", "p36.32", "p36.31"]);
        assert_eq!(chr1[1].start, 1_500_000);
        assert_eq!(chr1[1].end, 2_500_000);

        assert!(table.contains(ChromosomeOrdinal(23)));
        assert!(!table.contains(ChromosomeOrdinal(4)));
    }

    #[rstest]
    fn test_stain_column_ignored() {
        let text = "chr1\t0\t2300000\tp36.33\tgneg\nchr1\t2300000\t5400000\tp36.32\tgpos25\n";
        let table = BandTable::from_reader("cytoBand", text.as_bytes()).unwrap();
        let chr1 = table.get(ChromosomeOrdinal(1)).unwrap();
        assert_eq!(chr1.len(), 2);
        assert_eq!(chr1[1].label, "p36.32");
    }

    #[rstest]
    fn test_short_row_is_an_error() {
        let text = "chr1\t0\t2300000\n";
        let err = BandTable::from_reader("short", text.as_bytes()).unwrap_err();
        assert!(matches!(err, CnvCheckError::RecordParse { .. }));
    }

    #[rstest]
    fn test_bad_coordinate_is_an_error() {
        let text = "chr1\tzero\t2300000\tp36.33\n";
        let err = BandTable::from_reader("bad", text.as_bytes()).unwrap_err();
        assert!(matches!(err, CnvCheckError::RecordParse { .. }));
    }

    #[rstest]
    fn test_coordinates_past_u32() {
        let text = "chr1\t0\t4294967296\tp1\nchr1\t4294967296\t6000000000\tp2\n";
        let table = BandTable::from_reader("large", text.as_bytes()).unwrap();
        let chr1 = table.get(ChromosomeOrdinal(1)).unwrap();
        assert_eq!(chr1[1].start, 4_294_967_296);
        assert_eq!(chr1[1].end, 6_000_000_000);
    }
}
