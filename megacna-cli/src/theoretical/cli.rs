use clap::{Command, arg};

use crate::common::sample_args;

pub const THEORETICAL_CMD: &str = "theoretical";

pub fn create_theoretical_cli() -> Command {
    Command::new(THEORETICAL_CMD)
        .about("Build the theoretical BAF/DR distribution for a sample model.")
        .args(sample_args())
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output JSON path (default: stdout)"),
        )
}
