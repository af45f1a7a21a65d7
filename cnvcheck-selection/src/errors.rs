use thiserror::Error;

use cnvcheck_core::CnvCheckError;

#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("No point with index {0} in this sample")]
    UnknownPointIndex(usize),

    #[error("Chromosome not found in this sample: {0}")]
    UnknownChromosome(String),

    #[error("Index {index} is out of range for {chr}, which has {len} points")]
    LocalIndexOutOfRange { chr: String, index: usize, len: usize },

    #[error(transparent)]
    Core(#[from] CnvCheckError),
}

pub type Result<T> = std::result::Result<T, SelectionError>;
