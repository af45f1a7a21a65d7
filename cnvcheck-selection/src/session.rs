use fxhash::FxHashMap;
use log::info;

use cnvcheck_bands::{BandAssignmentReport, assign_bands_in_place};
use cnvcheck_core::models::{BandTable, ChromosomeOrdinal, GenomicPoint, RawRecord, SampleTable};
use cnvcheck_core::normalize;

use crate::aggregate::{aggregate_chromosome_selection, aggregate_selection};
use crate::errors::{Result, SelectionError};
use crate::models::{
    ChromosomeSelectionResult, ChromosomeTrack, LabelAnchor, SampleSummary, SelectionResult,
};

///
/// Everything needed to answer selection events for one sample.
///
/// Built once from a sample's records and the band table, then read-only:
/// every selection method takes `&self` and returns a fresh result.
///
#[derive(Debug, Clone)]
pub struct CnvSession {
    pub sample: String,
    points: Vec<GenomicPoint>,
    tracks: Vec<ChromosomeTrack>,
    track_lookup: FxHashMap<ChromosomeOrdinal, usize>,
    band_report: BandAssignmentReport,
}

impl CnvSession {
    ///
    /// Normalize and band a sample's records.
    ///
    /// # Arguments
    /// - sample: sample name
    /// - records: raw rows in input order
    /// - bands: reference band table
    ///
    pub fn build(sample: &str, records: Vec<RawRecord>, bands: &BandTable) -> Result<Self> {
        let mut points = normalize(records)?;
        let band_report = assign_bands_in_place(&mut points, bands);

        let session = CnvSession::from_points(sample, points, band_report);
        info!(
            "{}: {} points on {} chromosomes",
            session.sample,
            session.points.len(),
            session.tracks.len()
        );

        Ok(session)
    }

    pub fn from_table(table: SampleTable, bands: &BandTable) -> Result<Self> {
        CnvSession::build(&table.name, table.records, bands)
    }

    ///
    /// Wrap points that are already normalized and banded.
    ///
    /// One track per chromosome ordinal; rows labelled `chr1` and `1` share a
    /// track named after the first label seen.
    ///
    pub fn from_points(
        sample: &str,
        points: Vec<GenomicPoint>,
        band_report: BandAssignmentReport,
    ) -> Self {
        let tracks: Vec<ChromosomeTrack> = points
            .chunk_by(|a, b| a.ordinal == b.ordinal)
            .map(|run| ChromosomeTrack {
                chr: run[0].chr.clone(),
                ordinal: run[0].ordinal,
                color: run[0].color,
                first_index: run[0].index,
                last_index: run[run.len() - 1].index,
            })
            .collect();

        let track_lookup = tracks
            .iter()
            .enumerate()
            .map(|(i, track)| (track.ordinal, i))
            .collect();

        CnvSession {
            sample: sample.to_string(),
            points,
            tracks,
            track_lookup,
            band_report,
        }
    }

    pub fn points(&self) -> &[GenomicPoint] {
        &self.points
    }

    pub fn tracks(&self) -> &[ChromosomeTrack] {
        &self.tracks
    }

    ///
    /// Track of a chromosome, given as a full (`chr3`) or short (`3`) label.
    ///
    pub fn track(&self, chr: &str) -> Option<&ChromosomeTrack> {
        let ordinal = ChromosomeOrdinal::from_label(chr).ok()?;
        self.track_lookup.get(&ordinal).map(|&i| &self.tracks[i])
    }

    pub fn band_report(&self) -> &BandAssignmentReport {
        &self.band_report
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    ///
    /// `(0, max index)`: the index axis covering the whole sample.
    ///
    pub fn full_range(&self) -> Option<(usize, usize)> {
        self.points
            .iter()
            .map(|p| p.index)
            .max()
            .map(|max| (0, max))
    }

    ///
    /// Summarize points selected by global index, in selection order.
    ///
    pub fn select_points(&self, indices: &[usize]) -> Result<Option<SelectionResult>> {
        aggregate_selection(&self.points, indices)
    }

    ///
    /// Summarize points selected within one chromosome's series, by their
    /// position in that series.
    ///
    /// # Arguments
    /// - chr: chromosome label, full or short
    /// - local_indices: 0-based offsets into the chromosome's points, in selection order
    ///
    pub fn select_local(&self, chr: &str, local_indices: &[usize]) -> Result<Option<SelectionResult>> {
        let track = self
            .track(chr)
            .ok_or_else(|| SelectionError::UnknownChromosome(chr.to_string()))?;

        let indices = local_indices
            .iter()
            .map(|&local| {
                track
                    .global_index(local)
                    .ok_or_else(|| SelectionError::LocalIndexOutOfRange {
                        chr: chr.to_string(),
                        index: local,
                        len: track.len(),
                    })
            })
            .collect::<Result<Vec<usize>>>()?;

        aggregate_selection(&self.points, &indices)
    }

    ///
    /// Show only the given chromosomes and summarize each one.
    ///
    pub fn select_chromosomes<S: AsRef<str>>(&self, chromosomes: &[S]) -> ChromosomeSelectionResult {
        aggregate_chromosome_selection(&self.points, chromosomes)
    }

    /// Every chromosome selected.
    pub fn select_all(&self) -> ChromosomeSelectionResult {
        let all: Vec<&str> = self.tracks.iter().map(|t| t.chr.as_str()).collect();
        self.select_chromosomes(&all)
    }

    /// Nothing selected: no chromosome visible.
    pub fn clear(&self) -> ChromosomeSelectionResult {
        let none: [&str; 0] = [];
        self.select_chromosomes(&none)
    }

    ///
    /// Batch report of the sample, computed with the same aggregation as [Self::select_all].
    ///
    pub fn summary(&self) -> SampleSummary {
        let chromosomes = self.select_all();
        let display = chromosomes.display();

        SampleSummary {
            sample: self.sample.clone(),
            n_points: self.points.len(),
            x_range: self.full_range(),
            chromosomes,
            label_anchors: self
                .tracks
                .iter()
                .map(|t| LabelAnchor {
                    chr: t.chr.clone(),
                    index: t.label_anchor(),
                })
                .collect(),
            unbanded_points: self.points.iter().filter(|p| p.band.is_none()).count(),
            unmapped_chromosomes: self
                .band_report
                .unmapped_chromosomes()
                .into_iter()
                .map(|c| c.to_string())
                .collect(),
            display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use cnvcheck_core::CnvCheckError;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::path::PathBuf;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/cnv")
            .join(file_name)
    }

    #[fixture]
    fn bands() -> BandTable {
        BandTable::try_from(get_test_path("bands.txt").as_path()).unwrap()
    }

    #[fixture]
    fn session(bands: BandTable) -> CnvSession {
        let table = SampleTable::try_from(get_test_path("sample_a.csv")).unwrap();
        CnvSession::from_table(table, &bands).unwrap()
    }

    #[rstest]
    fn test_tracks(session: CnvSession) {
        let tracks: Vec<(&str, usize, usize)> = session
            .tracks()
            .iter()
            .map(|t| (t.chr.as_str(), t.first_index, t.last_index))
            .collect();
        assert_eq!(
            tracks,
            vec![("chr1", 0, 3), ("chr2", 4, 6), ("chr3", 7, 9), ("chrX", 10, 11)]
        );
        assert_eq!(session.full_range(), Some((0, 11)));
        assert_eq!(session.track("chr3").unwrap().len(), 3);
        assert_eq!(session.track("chr4"), None);
    }

    #[rstest]
    fn test_select_local(session: CnvSession) {
        let local = session.select_local("chr3", &[0, 2]).unwrap().unwrap();
        let global = session.select_points(&[7, 9]).unwrap().unwrap();

        assert_eq!(local, global);
        assert_eq!(local.display(), "(3)(p26.3-p26.3,2.00Mb)(1.95)");
    }

    #[rstest]
    fn test_select_local_errors(session: CnvSession) {
        let err = session.select_local("chr9", &[0]).unwrap_err();
        assert!(matches!(err, SelectionError::UnknownChromosome(c) if c == "chr9"));

        let err = session.select_local("chrX", &[0, 2]).unwrap_err();
        assert!(matches!(
            err,
            SelectionError::LocalIndexOutOfRange { index: 2, len: 2, .. }
        ));
    }

    #[rstest]
    fn test_select_all_and_clear(session: CnvSession) {
        let all = session.select_all();
        assert_eq!(all.display(), "(1)(2.10); (2)(3.33); (3)(1.90); (X)(1.00)");
        assert_eq!(all.visible_range, Some((0, 11)));
        assert!(all.hidden.is_empty());

        let none = session.clear();
        assert!(none.is_empty());
        assert_eq!(none.visible_range, None);
        assert_eq!(none.hidden.len(), 4);
    }

    #[rstest]
    fn test_summary_matches_interactive_text(session: CnvSession) {
        let summary = session.summary();

        assert_eq!(summary.sample, "sample_a.csv");
        assert_eq!(summary.n_points, 12);
        assert_eq!(summary.x_range, Some((0, 11)));
        assert_eq!(summary.display, session.select_all().display());
        assert_eq!(summary.unbanded_points, 1);
        assert!(summary.unmapped_chromosomes.is_empty());

        let anchors: Vec<usize> = summary.label_anchors.iter().map(|a| a.index).collect();
        assert_eq!(anchors, vec![0, 4, 7, 10]);
    }

    #[rstest]
    fn test_summary_reports_unmapped(bands: BandTable) {
        let table = SampleTable::try_from(get_test_path("sample_b.csv")).unwrap();
        let session = CnvSession::from_table(table, &bands).unwrap();
        let summary = session.summary();

        assert_eq!(summary.unmapped_chromosomes, vec!["chr4".to_string()]);
        assert_eq!(summary.unbanded_points, 2);
        assert_eq!(summary.display, "(1)(2.50); (4)(2.50)");
    }

    #[rstest]
    fn test_bad_label_aborts_session(bands: BandTable) {
        let table = SampleTable::try_from(get_test_path("bad_label.csv")).unwrap();
        let err = CnvSession::from_table(table, &bands).unwrap_err();
        assert!(matches!(
            err,
            SelectionError::Core(CnvCheckError::MalformedChromosomeLabel(_))
        ));
    }

    #[rstest]
    fn test_summary_serializes(session: CnvSession) {
        let json = serde_json::to_value(session.summary()).unwrap();
        assert_eq!(json["n_points"], 12);
        assert_eq!(json["x_range"], serde_json::json!([0, 11]));
        assert_eq!(json["chromosomes"]["chromosomes"][0]["chr"], "chr1");
    }

    #[rstest]
    fn test_track_by_short_label(session: CnvSession) {
        assert_eq!(session.track("3"), session.track("chr3"));
        assert_eq!(session.track("x").map(|t| t.first_index), Some(10));
        assert_eq!(session.track("chrM"), None);

        let short = session.select_local("3", &[0, 2]).unwrap();
        let full = session.select_local("chr3", &[0, 2]).unwrap();
        assert_eq!(short, full);
    }

    #[rstest]
    fn test_interleaved_label_spellings_share_a_track() {
        let records = vec![
            RawRecord::new("chr1", 10, 2.0),
            RawRecord::new("1", 20, 3.0),
            RawRecord::new("chr1", 30, 4.0),
            RawRecord::new("chr2", 5, 1.0),
        ];
        let session = CnvSession::build("mixed", records, &BandTable::new()).unwrap();

        let tracks: Vec<(&str, usize, usize)> = session
            .tracks()
            .iter()
            .map(|t| (t.chr.as_str(), t.first_index, t.last_index))
            .collect();
        assert_eq!(tracks, vec![("chr1", 0, 2), ("chr2", 3, 3)]);

        let result = session.select_local("chr1", &[0, 1]).unwrap().unwrap();
        assert_eq!(result.count, 2);
        assert_eq!(result.display(), "(1)(NA,0.00Mb)(2.50)");

        let anchors: Vec<usize> = session.summary().label_anchors.iter().map(|a| a.index).collect();
        assert_eq!(anchors, vec![0, 3]);
    }
}
