use clap::{Command, arg, value_parser};

use crate::common::data_args;

pub const SEGMENT_CMD: &str = "segment";

pub fn create_segment_cli() -> Command {
    Command::new(SEGMENT_CMD)
        .about("Summarize BAF and DR over a run of records (start inclusive, end exclusive).")
        .args(data_args())
        .arg(
            arg!(--start <START>)
                .required(true)
                .value_parser(value_parser!(usize))
                .help("Index of the first record in the segment"),
        )
        .arg(
            arg!(--end <END>)
                .required(true)
                .value_parser(value_parser!(usize))
                .help("Index one past the last record in the segment"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output path (default: stdout)"),
        )
        .arg(arg!(--tsv "Write a single tab separated row instead of JSON"))
}
