use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use cnvcheck_core::models::{BandTable, SampleTable};
use cnvcheck_selection::CnvSession;

use crate::consts::DEFAULT_REFBAND;

///
/// Band table shipped next to the executable, used when `--refband` is not given.
///
pub fn default_refband() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_REFBAND)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REFBAND))
}

///
/// Resolve `--refband` from the matches, falling back to [default_refband].
///
pub fn refband_from_matches(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<String>("refband")
        .map(PathBuf::from)
        .unwrap_or_else(default_refband)
}

pub fn load_bands(path: &Path) -> Result<BandTable> {
    let bands = BandTable::try_from(path)
        .with_context(|| format!("Failed to load band table {}", path.display()))?;
    info!(
        "Loaded {} bands on {} chromosomes from {}",
        bands.n_bands(),
        bands.n_chromosomes(),
        path.display()
    );
    Ok(bands)
}

///
/// Read, normalize and band one sample.
///
pub fn load_session(input: &Path, bands: &BandTable) -> Result<CnvSession> {
    let table = SampleTable::try_from(input)
        .with_context(|| format!("Failed to read sample {}", input.display()))?;
    let session = CnvSession::from_table(table, bands)
        .with_context(|| format!("Failed to build session for {}", input.display()))?;
    Ok(session)
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
    fn test_default_refband_file_name() {
        assert_eq!(
            default_refband().file_name().unwrap().to_str(),
            Some(DEFAULT_REFBAND)
        );
    }

    #[rstest]
    fn test_load_session() {
        let bands = load_bands(&get_test_path("bands.txt")).unwrap();
        let session = load_session(&get_test_path("sample_a.csv"), &bands).unwrap();
        assert_eq!(session.len(), 12);
    }

    #[rstest]
    fn test_load_session_missing_file() {
        let bands = BandTable::new();
        assert!(load_session(&get_test_path("nope.csv"), &bands).is_err());
    }
}
