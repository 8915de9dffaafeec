use clap::{Command, arg};

use crate::common::{data_args, sample_args};

pub const MATCH_CMD: &str = "match";

pub fn create_match_cli() -> Command {
    Command::new(MATCH_CMD)
        .about("Match observed BAF/DR records to their closest theoretical genotype.")
        .args(data_args())
        .args(sample_args())
        .arg(
            arg!(--genes <GENES>)
                .required(false)
                .help("Path to a gene table (chromosome, start, end, name) to annotate records with"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output CSV path, .gz to compress (default: stdout)"),
        )
        .arg(arg!(--"no-progress" "Do not show a progress bar"))
}
