use clap::{Arg, ArgAction, ArgGroup, Command, arg, value_parser};

pub const SELECT_CMD: &str = "select";

pub fn create_select_cli() -> Command {
    Command::new(SELECT_CMD)
        .about("Summarize a set of points picked from one sample.")
        .arg(arg!(-i --input <input> "Sample table (csv, optionally gzipped)").required(true))
        .arg(arg!(-r --refband <refband> "Band table (tsv: chr, start, end, band)"))
        .arg(
            Arg::new("indices")
                .long("indices")
                .value_delimiter(',')
                .value_parser(value_parser!(usize))
                .help("Global point indices, in selection order"),
        )
        .arg(arg!(--chr <chr> "Chromosome the local indices refer to").requires("local"))
        .arg(
            Arg::new("local")
                .long("local")
                .value_delimiter(',')
                .value_parser(value_parser!(usize))
                .requires("chr")
                .help("Indices within the chromosome's points, in selection order"),
        )
        .group(
            ArgGroup::new("selection")
                .args(["indices", "local"])
                .required(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the result as JSON"),
        )
}
