//! Band assignment for normalized copy-number points.
//!
//! Each chromosome's band table is treated as a set of bin edges: the band
//! starts in ascending order, closed by an implicit `+inf` edge. A point gets
//! the label of the bin holding its position, which makes this a partition of
//! the chromosome rather than a nearest-band lookup.
//!
//! ```rust
//! use cnvcheck_bands::assign_bands;
//! use cnvcheck_core::models::{Band, BandTable, ChromosomeOrdinal, RawRecord};
//! use cnvcheck_core::normalize;
//!
//! let table: BandTable = vec![
//!     Band { ordinal: ChromosomeOrdinal(1), start: 0, end: 1500, label: "p1".to_string() },
//!     Band { ordinal: ChromosomeOrdinal(1), start: 1500, end: 4000, label: "p2".to_string() },
//! ]
//! .into_iter()
//! .collect();
//!
//! let points = normalize(vec![RawRecord::new("chr1", 2000, 2.0)]).unwrap();
//! let points = assign_bands(points, &table);
//! assert_eq!(points[0].band.as_deref(), Some("p2"));
//! ```

pub mod assign;
pub mod bins;

// re-exports
pub use assign::{BandAssignmentReport, BandAssignmentWarning, assign_bands, assign_bands_in_place};
pub use bins::ChromBins;
