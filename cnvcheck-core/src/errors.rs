use thiserror::Error;

#[derive(Error, Debug)]
pub enum CnvCheckError {
    #[error("Malformed chromosome label: {0}")]
    MalformedChromosomeLabel(String),

    #[error("{source_name} has no `{column}` column")]
    MissingRequiredColumn { source_name: String, column: String },

    #[error("Error parsing record at line {line} of {source_name}: {message}")]
    RecordParse {
        source_name: String,
        line: u64,
        message: String,
    },

    #[error("0 records found in the file: {0}")]
    EmptySample(String),

    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CnvCheckError {
    /// Whether the error only prevents this sample from being rendered,
    /// as opposed to breaking the data model of the file.
    pub fn is_skippable(&self) -> bool {
        matches!(self, CnvCheckError::MissingRequiredColumn { .. })
    }
}

pub type Result<T> = std::result::Result<T, CnvCheckError>;
