use clap::{Arg, ArgAction, ArgGroup, Command, arg};

pub const CHECK_CMD: &str = "check";
pub const DEFAULT_OUTPUT: &str = "cnv_check.json";
pub const OUTPUT_SUFFIX: &str = "_cnv_check.json";

pub fn create_check_cli() -> Command {
    Command::new(CHECK_CMD)
        .about("Band every sample and write its points, tracks and summary as JSON.")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .num_args(1..)
                .action(ArgAction::Append)
                .help("Sample tables (csv, optionally gzipped)"),
        )
        .arg(arg!(--inputdir <inputdir> "Directory holding sample tables"))
        .group(
            ArgGroup::new("samples")
                .args(["input", "inputdir"])
                .required(true),
        )
        .arg(arg!(-r --refband <refband> "Band table (tsv: chr, start, end, band)"))
        .arg(arg!(-o --output <output> "Output file holding every sample"))
        .arg(arg!(-d --outputdir <outputdir> "Directory for one output file per sample"))
        .group(ArgGroup::new("destination").args(["output", "outputdir"]))
}
