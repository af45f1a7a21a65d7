use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use rayon::prelude::*;
use serde::Serialize;

use cnvcheck_core::models::{BandTable, GenomicPoint, SampleTable};
use cnvcheck_core::utils::{list_sample_files, sample_name_from_path};
use cnvcheck_selection::CnvSession;
use cnvcheck_selection::models::{ChromosomeTrack, SampleSummary};

use super::cli::{DEFAULT_OUTPUT, OUTPUT_SUFFIX};
use crate::common::{load_bands, refband_from_matches};

/// Where the JSON documents go.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputTarget {
    /// One file holding a JSON array with every sample, in input order
    File(PathBuf),
    /// One `<sample>_cnv_check.json` per sample
    Directory(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckConfig {
    pub inputs: Vec<PathBuf>,
    pub refband: PathBuf,
    pub output: OutputTarget,
}

impl CheckConfig {
    ///
    /// Collect and validate the `check` arguments before any sample is read.
    ///
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let mut inputs: Vec<PathBuf> = matches
            .get_many::<String>("input")
            .map(|values| values.map(PathBuf::from).collect())
            .unwrap_or_default();

        if let Some(dir) = matches.get_one::<String>("inputdir") {
            let found = list_sample_files(dir)
                .with_context(|| format!("Failed to list sample tables in {}", dir))?;
            info!("Found {} sample tables in {}", found.len(), dir);
            inputs.extend(found);
        }

        if inputs.is_empty() {
            bail!("No sample tables to check: give --input or a non-empty --inputdir");
        }

        let refband = refband_from_matches(matches);
        if !refband.is_file() {
            bail!("Band table not found: {}", refband.display());
        }

        let output = match (
            matches.get_one::<String>("output"),
            matches.get_one::<String>("outputdir"),
        ) {
            (_, Some(dir)) => OutputTarget::Directory(PathBuf::from(dir)),
            (Some(file), None) => OutputTarget::File(PathBuf::from(file)),
            (None, None) => OutputTarget::File(PathBuf::from(DEFAULT_OUTPUT)),
        };

        Ok(CheckConfig {
            inputs,
            refband,
            output,
        })
    }
}

/// Everything written for one sample.
#[derive(Debug, Serialize)]
pub struct SampleDocument<'a> {
    pub sample: &'a str,
    pub summary: SampleSummary,
    pub tracks: &'a [ChromosomeTrack],
    pub points: &'a [GenomicPoint],
}

impl<'a> From<&'a CnvSession> for SampleDocument<'a> {
    fn from(session: &'a CnvSession) -> Self {
        SampleDocument {
            sample: &session.sample,
            summary: session.summary(),
            tracks: session.tracks(),
            points: session.points(),
        }
    }
}

/// What happened to one input file.
enum SampleOutcome {
    Done(Box<CnvSession>),
    Skipped,
    Failed,
}

///
/// Output path of one sample inside `--outputdir`.
///
pub fn sample_output_path(dir: &Path, input: &Path) -> PathBuf {
    let name = sample_name_from_path(input);
    let stem = name.strip_suffix(".csv").unwrap_or(&name);
    dir.join(format!("{}{}", stem, OUTPUT_SUFFIX))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(serde_json::to_string_pretty(value)?.as_bytes())?;
    writer.flush()?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn check_sample(input: &Path, bands: &BandTable) -> SampleOutcome {
    let table = match SampleTable::try_from(input) {
        Ok(table) => table,
        Err(e) if e.is_skippable() => {
            warn!("Skipping {}: {}", input.display(), e);
            return SampleOutcome::Skipped;
        }
        Err(e) => {
            error!("{}: {}", input.display(), e);
            return SampleOutcome::Failed;
        }
    };

    match CnvSession::from_table(table, bands) {
        Ok(session) => SampleOutcome::Done(Box::new(session)),
        Err(e) => {
            error!("{}: {}", input.display(), e);
            SampleOutcome::Failed
        }
    }
}

///
/// Band every sample of the config in parallel and write the results.
///
/// Returns the number of samples written. A sample missing a required column
/// is skipped; any other sample error is logged and counted, and the run
/// fails at the end if there was at least one.
///
pub fn check(config: &CheckConfig) -> Result<usize> {
    let bands = load_bands(&config.refband)?;

    if let OutputTarget::Directory(dir) = &config.output {
        create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let pb = ProgressBar::new(config.inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")?
            .progress_chars("##-"),
    );

    let outcomes: Vec<SampleOutcome> = config
        .inputs
        .par_iter()
        .map(|input| {
            let outcome = check_sample(input, &bands);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("done");

    let mut sessions: Vec<(&PathBuf, CnvSession)> = Vec::with_capacity(outcomes.len());
    let mut n_failed = 0;
    for (input, outcome) in config.inputs.iter().zip(outcomes) {
        match outcome {
            SampleOutcome::Done(session) => sessions.push((input, *session)),
            SampleOutcome::Skipped => {}
            SampleOutcome::Failed => n_failed += 1,
        }
    }

    match &config.output {
        OutputTarget::File(path) => {
            let documents: Vec<SampleDocument> =
                sessions.iter().map(|(_, s)| SampleDocument::from(s)).collect();
            write_json(path, &documents)?;
        }
        OutputTarget::Directory(dir) => {
            sessions
                .par_iter()
                .try_for_each(|(input, session)| {
                    write_json(&sample_output_path(dir, input), &SampleDocument::from(session))
                })?;
        }
    }

    if n_failed > 0 {
        bail!("{} of {} samples failed", n_failed, config.inputs.len());
    }

    Ok(sessions.len())
}

pub fn run_check(matches: &ArgMatches) -> Result<()> {
    let config = CheckConfig::from_matches(matches)?;
    info!("Checking {} samples", config.inputs.len());

    let n_written = check(&config)?;
    info!("Checked {} samples", n_written);

    Ok(())
}
