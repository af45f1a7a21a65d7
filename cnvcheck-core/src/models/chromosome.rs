use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::errors::{CnvCheckError, Result};

/// Characters stripped from the front of a chromosome label (`chr`, `Chr`, `CHR`-ish prefixes).
const LABEL_PREFIX_CHARS: [char; 4] = ['C', 'c', 'h', 'r'];

pub const ORDINAL_X: u32 = 23;
pub const ORDINAL_Y: u32 = 24;

///
/// Numeric sort key of a chromosome: autosomes keep their number, X is 23 and Y is 24.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChromosomeOrdinal(pub u32);

impl ChromosomeOrdinal {
    ///
    /// Derive the ordinal from a chromosome label such as `chr1`, `chrX` or `7`.
    ///
    /// # Arguments
    /// - label: chromosome label as found in the input table
    ///
    pub fn from_label(label: &str) -> Result<Self> {
        match Self::short_label(label) {
            "X" | "x" => Ok(ChromosomeOrdinal(ORDINAL_X)),
            "Y" | "y" => Ok(ChromosomeOrdinal(ORDINAL_Y)),
            token => token
                .parse::<u32>()
                .map(ChromosomeOrdinal)
                .map_err(|_| CnvCheckError::MalformedChromosomeLabel(label.to_string())),
        }
    }

    ///
    /// Label with its `chr` prefix removed: `chr1` -> `1`, `chrX` -> `X`.
    ///
    pub fn short_label(label: &str) -> &str {
        label.trim_start_matches(&LABEL_PREFIX_CHARS[..])
    }

    pub fn is_odd(&self) -> bool {
        self.0 % 2 == 1
    }

    pub fn color(&self) -> ChromColor {
        ChromColor::from(*self)
    }
}

impl Display for ChromosomeOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

///
/// Two-tone color alternating between neighbouring chromosomes.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChromColor {
    /// odd ordinals
    Red,
    /// even ordinals
    Blue,
}

impl ChromColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChromColor::Red => "red",
            ChromColor::Blue => "blue",
        }
    }
}

impl From<ChromosomeOrdinal> for ChromColor {
    fn from(ordinal: ChromosomeOrdinal) -> Self {
        if ordinal.is_odd() {
            ChromColor::Red
        } else {
            ChromColor::Blue
        }
    }
}

impl Display for ChromColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("chrX", 23)]
    #[case("chrY", 24)]
    #[case("chr7", 7)]
    #[case("chrx", 23)]
    #[case("Chr12", 12)]
    #[case("22", 22)]
    fn test_ordinal_from_label(#[case] label: &str, #[case] expected: u32) {
        let ordinal = ChromosomeOrdinal::from_label(label).unwrap();
        assert_eq!(ordinal, ChromosomeOrdinal(expected));
    }

    #[rstest]
    #[case("scaffold1")]
    #[case("chrM")]
    #[case("chr6_ssto_hap7")]
    #[case("chr")]
    #[case("")]
    fn test_malformed_labels(#[case] label: &str) {
        let err = ChromosomeOrdinal::from_label(label).unwrap_err();
        assert!(matches!(err, CnvCheckError::MalformedChromosomeLabel(l) if l == label));
    }

    #[rstest]
    fn test_short_label() {
        assert_eq!(ChromosomeOrdinal::short_label("chr1"), "1");
        assert_eq!(ChromosomeOrdinal::short_label("chrX"), "X");
        assert_eq!(ChromosomeOrdinal::short_label("3"), "3");
    }

    #[rstest]
    fn test_color_parity() {
        assert_eq!(ChromosomeOrdinal(1).color(), ChromColor::Red);
        assert_eq!(ChromosomeOrdinal(2).color(), ChromColor::Blue);
        assert_eq!(ChromosomeOrdinal(ORDINAL_X).color(), ChromColor::Red);
        assert_eq!(ChromosomeOrdinal(ORDINAL_Y).color(), ChromColor::Blue);
        assert_eq!(ChromColor::Red.to_string(), "red");
    }
}
