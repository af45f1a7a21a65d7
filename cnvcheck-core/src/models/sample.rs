use std::io::Read;
use std::path::{Path, PathBuf};

use crate::errors::{CnvCheckError, Result};
use crate::models::point::RawRecord;
use crate::utils::{get_dynamic_reader, sample_name_from_path};

/// Columns every sample table has to carry.
pub const REQUIRED_COLUMNS: [&str; 3] = ["chr", "Position", "copyNum"];

///
/// A validated sample table: comma-separated, with a header naming at least
/// `chr`, `Position` and `copyNum`.
///
#[derive(Debug, Clone)]
pub struct SampleTable {
    pub name: String,
    pub records: Vec<RawRecord>,
    pub path: Option<PathBuf>,
}

impl SampleTable {
    ///
    /// Read and validate a sample table from any reader.
    ///
    /// # Arguments
    /// - name: sample name used in errors and output
    /// - reader: source of comma-separated text
    ///
    pub fn from_reader<R: Read>(name: &str, reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(CnvCheckError::MissingRequiredColumn {
                    source_name: name.to_string(),
                    column: column.to_string(),
                });
            }
        }

        let mut records: Vec<RawRecord> = Vec::new();
        for result in csv_reader.deserialize::<RawRecord>() {
            let record = result.map_err(|e| CnvCheckError::RecordParse {
                source_name: name.to_string(),
                line: e.position().map(|p| p.line()).unwrap_or(0),
                message: e.to_string(),
            })?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(CnvCheckError::EmptySample(name.to_string()));
        }

        Ok(SampleTable {
            name: name.to_string(),
            records,
            path: None,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TryFrom<&Path> for SampleTable {
    type Error = CnvCheckError;

    ///
    /// Create a new [SampleTable] from a `.csv` or `.csv.gz` file.
    ///
    fn try_from(value: &Path) -> Result<Self> {
        let reader = get_dynamic_reader(value)?;
        let mut table = SampleTable::from_reader(&sample_name_from_path(value), reader)?;
        table.path = Some(value.to_owned());

        Ok(table)
    }
}

impl TryFrom<&str> for SampleTable {
    type Error = CnvCheckError;

    fn try_from(value: &str) -> Result<Self> {
        SampleTable::try_from(Path::new(value))
    }
}

impl TryFrom<PathBuf> for SampleTable {
    type Error = CnvCheckError;

    fn try_from(value: PathBuf) -> Result<Self> {
        SampleTable::try_from(value.as_path())
    }
}
