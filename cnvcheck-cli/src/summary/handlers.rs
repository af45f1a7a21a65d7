use std::path::PathBuf;

use anyhow::Result;
use clap::ArgMatches;

use cnvcheck_selection::{ChromosomeSelectionResult, CnvSession};

use crate::common::{load_bands, load_session, refband_from_matches};

///
/// Selection requested by `--chroms`, or every chromosome when it is absent.
///
pub fn summarize(session: &CnvSession, matches: &ArgMatches) -> ChromosomeSelectionResult {
    match matches.get_many::<String>("chroms") {
        Some(chroms) => {
            let chroms: Vec<&String> = chroms.collect();
            session.select_chromosomes(&chroms)
        }
        None => session.select_all(),
    }
}

pub fn render(result: &ChromosomeSelectionResult, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(result)?);
    }

    let range = match result.visible_range {
        Some((start, end)) => format!("[{}, {}]", start, end),
        None => "none".to_string(),
    };
    Ok(format!("{}\nvisible range: {}", result.display(), range))
}

pub fn run_summary(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .map(PathBuf::from)
        .expect("A path to a sample table is required.");

    let bands = load_bands(&refband_from_matches(matches))?;
    let session = load_session(&input, &bands)?;

    let result = summarize(&session, matches);
    println!("{}", render(&result, matches.get_flag("json"))?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::build_parser;
    use crate::summary::cli::SUMMARY_CMD;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/cnv")
            .join(file_name)
    }

    #[fixture]
    fn session() -> CnvSession {
        let bands = load_bands(&get_test_path("bands.txt")).unwrap();
        load_session(&get_test_path("sample_a.csv"), &bands).unwrap()
    }

    fn run(session: &CnvSession, selection: &[&str]) -> ChromosomeSelectionResult {
        let mut args = vec!["cnvcheck", SUMMARY_CMD, "-i", "sample_a.csv"];
        args.extend_from_slice(selection);
        let matches = build_parser().try_get_matches_from(args).unwrap();
        let (_, matches) = matches.subcommand().unwrap();
        summarize(session, matches)
    }

    #[rstest]
    #[case(&[], "(1)(2.10); (2)(3.33); (3)(1.90); (X)(1.00)")]
    #[case(&["--all"], "(1)(2.10); (2)(3.33); (3)(1.90); (X)(1.00)")]
    #[case(&["--chroms", "chr3,chr1"], "(1)(2.10); (3)(1.90)")]
    #[case(&["--chroms", "X,2"], "(2)(3.33); (X)(1.00)")]
    fn test_summarize(session: CnvSession, #[case] selection: &[&str], #[case] expected: &str) {
        assert_eq!(run(&session, selection).display(), expected);
    }

    #[rstest]
    fn test_render_text(session: CnvSession) {
        let result = run(&session, &["--chroms", "chr1,chr3"]);
        assert_eq!(
            render(&result, false).unwrap(),
            "(1)(2.10); (3)(1.90)\nvisible range: [0, 9]"
        );
    }

    #[rstest]
    fn test_render_empty(session: CnvSession) {
        let result = run(&session, &["--chroms", "chr9"]);
        assert_eq!(render(&result, false).unwrap(), "\nvisible range: none");
    }

    #[rstest]
    fn test_all_conflicts_with_chroms() {
        let args = ["cnvcheck", SUMMARY_CMD, "-i", "a.csv", "--all", "--chroms", "chr1"];
        assert!(build_parser().try_get_matches_from(args).is_err());
    }
}
