use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use clap::{Arg, ArgMatches, arg};
use log::info;
use serde::Serialize;

use megacna_core::models::RecordSet;
use megacna_genomicdist::RegionQuery;
use megacna_io::{SampleParameters, parse_copy_numbers, read_observed_records};

/// Arguments describing the sample model, shared by several subcommands.
pub fn sample_args() -> Vec<Arg> {
    vec![
        arg!(--params <PARAMS>)
            .required(false)
            .help("Path to a TOML file with purity, ploidy, copy_numbers and normal_ploidy"),
        arg!(--purity <PURITY>)
            .required(false)
            .help("Fraction of tumor DNA in the sample (overrides --params)"),
        arg!(--ploidy <PLOIDY>)
            .required(false)
            .help("Tumor ploidy (overrides --params)"),
        Arg::new("copy-numbers")
            .long("copy-numbers")
            .required(false)
            .help("Comma separated total copy numbers to model, e.g. 1,2,3,4 (overrides --params)"),
        Arg::new("normal-ploidy")
            .long("normal-ploidy")
            .required(false)
            .help("Ploidy of the matched normal sample (default 2)"),
    ]
}

/// Arguments selecting the input data, shared by several subcommands.
pub fn data_args() -> Vec<Arg> {
    vec![
        arg!(--data <DATA>)
            .required(true)
            .help("Path to a CSV file with chr, pos, BAF and DR columns (.gz accepted)"),
        arg!(--region <REGION>)
            .required(false)
            .help("Restrict to a region, chrN or chrN:start:end"),
    ]
}

///
/// Sample parameters from `--params` and/or the individual flags.
///
pub fn load_sample_parameters(matches: &ArgMatches) -> Result<SampleParameters> {
    let purity = matches.get_one::<String>("purity");
    let ploidy = matches.get_one::<String>("ploidy");
    let copy_numbers = matches.get_one::<String>("copy-numbers");
    let normal_ploidy = matches.get_one::<String>("normal-ploidy");

    let mut params = match matches.get_one::<String>("params") {
        Some(path) => SampleParameters::try_from(Path::new(path))
            .with_context(|| format!("Failed to load sample parameters from {}", path))?,
        None => match (purity, ploidy, copy_numbers) {
            (Some(purity), Some(ploidy), Some(copy_numbers)) => {
                return SampleParameters::parse_form(
                    purity,
                    ploidy,
                    copy_numbers,
                    normal_ploidy.map(String::as_str).unwrap_or("2"),
                )
                .context("Invalid sample parameters");
            }
            _ => {
                return Err(anyhow!(
                    "Either --params or all of --purity, --ploidy and --copy-numbers are required"
                ));
            }
        },
    };

    if let Some(purity) = purity {
        params.purity = purity.trim().parse().context("--purity must be a number")?;
    }
    if let Some(ploidy) = ploidy {
        params.ploidy = ploidy.trim().parse().context("--ploidy must be a number")?;
    }
    if let Some(copy_numbers) = copy_numbers {
        params.copy_numbers = parse_copy_numbers(copy_numbers).context("Invalid --copy-numbers")?;
    }
    if let Some(normal_ploidy) = normal_ploidy {
        params.normal_ploidy = normal_ploidy
            .trim()
            .parse()
            .context("--normal-ploidy must be a whole number")?;
    }

    Ok(params)
}

///
/// Records from `--data`, narrowed to `--region` when given.
///
pub fn load_records(matches: &ArgMatches) -> Result<RecordSet> {
    let data_path = matches
        .get_one::<String>("data")
        .expect("--data is required");

    let mut record_set = read_observed_records(Path::new(data_path))
        .with_context(|| format!("Failed to load data from {}", data_path))?;

    if let Some(region) = matches.get_one::<String>("region") {
        let query: RegionQuery = region
            .parse()
            .with_context(|| format!("Invalid --region {}", region))?;
        record_set.records = query.filter(&record_set.records);
        info!("{} records in region {}", record_set.len(), query);
    }

    Ok(record_set)
}

///
/// Serialize `value` as pretty JSON to `output`, or to stdout.
///
pub fn write_json<T: Serialize>(value: &T, output: Option<&String>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output to JSON")?;

    match output {
        Some(p) => {
            let mut file = File::create(Path::new(p))
                .with_context(|| format!("Failed to create output file: {}", p))?;
            file.write_all(json.as_bytes())?;
            info!("Output written to {}", p);
        }
        None => {
            io::stdout().write_all(json.as_bytes())?;
            println!(); // trailing newline
        }
    }

    Ok(())
}
