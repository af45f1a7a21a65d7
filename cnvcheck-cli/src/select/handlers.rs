use std::path::PathBuf;

use anyhow::Result;
use clap::ArgMatches;

use cnvcheck_selection::{CnvSession, SelectionResult};

use crate::common::{load_bands, load_session, refband_from_matches};

/// Text printed when the selection holds no point.
pub const NO_SELECTION: &str = "no selection";

///
/// Run the selection described by the matches against a built session.
///
pub fn select(session: &CnvSession, matches: &ArgMatches) -> Result<Option<SelectionResult>> {
    let result = match matches.get_one::<String>("chr") {
        Some(chr) => {
            let local: Vec<usize> = matches
                .get_many::<usize>("local")
                .map(|values| values.copied().collect())
                .unwrap_or_default();
            session.select_local(chr, &local)?
        }
        None => {
            let indices: Vec<usize> = matches
                .get_many::<usize>("indices")
                .map(|values| values.copied().collect())
                .unwrap_or_default();
            session.select_points(&indices)?
        }
    };

    Ok(result)
}

pub fn render(result: Option<&SelectionResult>, json: bool) -> Result<String> {
    let text = match (result, json) {
        (result, true) => serde_json::to_string_pretty(&result)?,
        (Some(result), false) => result.display(),
        (None, false) => NO_SELECTION.to_string(),
    };
    Ok(text)
}

pub fn run_select(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .map(PathBuf::from)
        .expect("A path to a sample table is required.");

    let bands = load_bands(&refband_from_matches(matches))?;
    let session = load_session(&input, &bands)?;

    let result = select(&session, matches)?;
    println!("{}", render(result.as_ref(), matches.get_flag("json"))?);

    Ok(())
}
