//! Core data model for cnvcheck.
//!
//! Holds the copy-number point model, the reference band table, ingestion of
//! the two input tables (comma-separated samples, tab-separated bands, either
//! optionally gzipped) and the normalizer that turns raw sample rows into the
//! globally ordered point sequence.
//!
//! # Example
//!
//! ```no_run
//! use cnvcheck_core::models::SampleTable;
//! use cnvcheck_core::normalize::normalize;
//!
//! let table = SampleTable::try_from("sample.csv").unwrap();
//! let points = normalize(table.records).unwrap();
//! ```

pub mod errors;
pub mod models;
pub mod normalize;
pub mod utils;

// re-exports
pub use errors::{CnvCheckError, Result};
pub use normalize::normalize;
