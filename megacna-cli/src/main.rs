mod common;
mod matching;
mod segment;
mod theoretical;
mod view;

use anyhow::Result;
use clap::{Arg, ArgMatches, Command};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "megacna";
    pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("megacna developers")
        .about("Explore copy-number alterations: model theoretical BAF/DR distributions, match observed data to genotypes and summarize segments.")
        .subcommand_required(true)
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .value_parser(consts::LOG_LEVELS)
                .help("Log verbosity level [default: info, or RUST_LOG when set]"),
        )
        .subcommand(theoretical::cli::create_theoretical_cli())
        .subcommand(matching::cli::create_match_cli())
        .subcommand(segment::cli::create_segment_cli())
        .subcommand(view::cli::create_view_cli())
}

// --log-level wins; otherwise RUST_LOG decides, and info when neither is set
fn level_override(matches: &ArgMatches, rust_log_set: bool) -> Option<log::LevelFilter> {
    match matches.get_one::<String>("log-level") {
        Some(level) => level.parse().ok(),
        None if rust_log_set => None,
        None => Some(log::LevelFilter::Info),
    }
}

fn logger_builder(matches: &ArgMatches, rust_log: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    if let Some(filters) = rust_log {
        builder.parse_filters(filters);
    }
    if let Some(level) = level_override(matches, rust_log.is_some()) {
        builder.filter_level(level);
    }
    builder.format_module_path(false);
    builder
}

fn init_logging(matches: &ArgMatches) {
    let rust_log = std::env::var("RUST_LOG").ok();
    logger_builder(matches, rust_log.as_deref()).init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(&matches);

    match matches.subcommand() {
        //
        // THEORETICAL DISTRIBUTION
        //
        Some((theoretical::cli::THEORETICAL_CMD, matches)) => {
            theoretical::handlers::run_theoretical(matches)?;
        }

        //
        // MATCHING
        //
        Some((matching::cli::MATCH_CMD, matches)) => {
            matching::handlers::run_match(matches)?;
        }

        //
        // SEGMENT STATISTICS
        //
        Some((segment::cli::SEGMENT_CMD, matches)) => {
            segment::handlers::run_segment(matches)?;
        }

        //
        // PLOT SERIES
        //
        Some((view::cli::VIEW_CMD, matches)) => {
            view::handlers::run_view(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::*;

    #[rstest]
    fn test_parser_is_consistent() {
        build_parser().debug_assert();
    }

    #[rstest]
    #[case(&["megacna", "theoretical", "--purity", "0.8", "--ploidy", "2", "--copy-numbers", "1,2,3"])]
    #[case(&["megacna", "--log-level", "debug", "match", "--data", "d.csv", "--params", "p.toml"])]
    #[case(&["megacna", "segment", "--data", "d.csv", "--start", "0", "--end", "5", "--tsv"])]
    #[case(&["megacna", "view", "--data", "d.csv", "--params", "p.toml", "--region", "chr1:1:100"])]
    fn test_accepts_subcommands(#[case] args: &[&str]) {
        assert!(build_parser().try_get_matches_from(args).is_ok());
    }

    fn segment_args(log_level: Option<&str>) -> ArgMatches {
        let mut args = vec!["megacna"];
        if let Some(level) = log_level {
            args.extend(["--log-level", level]);
        }
        args.extend(["segment", "--data", "d.csv", "--start", "0", "--end", "1"]);
        build_parser().try_get_matches_from(args).unwrap()
    }

    #[rstest]
    #[case(None, Some("debug"), log::LevelFilter::Debug)]
    #[case(None, Some("warn"), log::LevelFilter::Warn)]
    #[case(None, None, log::LevelFilter::Info)]
    #[case(Some("trace"), None, log::LevelFilter::Trace)]
    #[case(Some("error"), Some("debug"), log::LevelFilter::Error)]
    fn test_log_level_and_rust_log(
        #[case] log_level: Option<&str>,
        #[case] rust_log: Option<&str>,
        #[case] expected: log::LevelFilter,
    ) {
        let matches = segment_args(log_level);
        let logger = logger_builder(&matches, rust_log).build();
        assert_eq!(logger.filter(), expected);
    }

    #[rstest]
    fn test_rejects_unknown_log_level() {
        let result = build_parser().try_get_matches_from(["megacna", "--log-level", "loud", "segment", "--data", "d.csv", "--start", "0", "--end", "1"]);
        assert!(result.is_err());
    }
}
