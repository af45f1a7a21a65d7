pub mod band;
pub mod chromosome;
pub mod point;
pub mod sample;

// re-export for cleaner imports
pub use self::band::{Band, BandTable};
pub use self::chromosome::{ChromColor, ChromosomeOrdinal};
pub use self::point::{GenomicPoint, RawRecord};
pub use self::sample::SampleTable;
