use clap::{Arg, ArgAction, Command, arg};

pub const SUMMARY_CMD: &str = "summary";

pub fn create_summary_cli() -> Command {
    Command::new(SUMMARY_CMD)
        .about("Show per-chromosome mean copy numbers for a set of chromosomes.")
        .arg(arg!(-i --input <input> "Sample table (csv, optionally gzipped)").required(true))
        .arg(arg!(-r --refband <refband> "Band table (tsv: chr, start, end, band)"))
        .arg(
            Arg::new("chroms")
                .long("chroms")
                .value_delimiter(',')
                .conflicts_with("all")
                .help("Chromosomes to select, full (chr1) or short (1) labels"),
        )
        .arg(
            Arg::new("all")
                .long("all")
                .action(ArgAction::SetTrue)
                .help("Select every chromosome (the default)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the result as JSON"),
        )
}
