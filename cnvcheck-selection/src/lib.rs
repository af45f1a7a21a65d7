//! Selection statistics for copy-number points.
//!
//! This crate turns a selection into the numbers shown next to a copy-number
//! plot:
//!
//! - mean copy number, span in megabases and band range of a set of points
//!   picked within one chromosome
//! - per-chromosome means and the visible index range for a set of whole
//!   chromosomes
//! - a batch summary of a sample, computed with the same code path
//!
//! # Example
//!
//! ```no_run
//! use cnvcheck_core::models::{BandTable, SampleTable};
//! use cnvcheck_selection::CnvSession;
//!
//! let bands = BandTable::try_from("hg19_band.txt").unwrap();
//! let table = SampleTable::try_from("sample.csv").unwrap();
//! let session = CnvSession::from_table(table, &bands).unwrap();
//!
//! if let Some(result) = session.select_points(&[3, 4, 5]).unwrap() {
//!     println!("{}", result);
//! }
//! println!("{}", session.select_chromosomes(&["chr1", "chr3"]));
//! ```

pub mod aggregate;
pub mod errors;
pub mod models;
pub mod session;

// re-exports
pub use aggregate::{aggregate_chromosome_selection, aggregate_selection};
pub use errors::SelectionError;
pub use models::{ChromosomeSelectionResult, SampleSummary, SelectionResult};
pub use session::CnvSession;
