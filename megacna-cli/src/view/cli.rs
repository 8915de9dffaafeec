use clap::{Command, arg};

use crate::common::{data_args, sample_args};

pub const VIEW_CMD: &str = "view";

pub fn create_view_cli() -> Command {
    Command::new(VIEW_CMD)
        .about("Export BAF/DR plot series with theoretical reference lines as JSON.")
        .args(data_args())
        .args(sample_args())
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output JSON path (default: stdout)"),
        )
}
