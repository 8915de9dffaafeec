use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;
use serde::Serialize;

use megacna_core::models::TheoreticalPoint;
use megacna_io::SampleParameters;
use megacna_model::{ReferenceLine, TheoreticalDistribution, baf_reference_lines, dr_reference_lines};

use crate::common::{load_sample_parameters, write_json};

#[derive(Serialize)]
struct TheoreticalOutput<'a> {
    sample: &'a SampleParameters,
    points: &'a [TheoreticalPoint],
    baf_lines: Vec<ReferenceLine>,
    dr_lines: Vec<ReferenceLine>,
}

pub fn run_theoretical(matches: &ArgMatches) -> Result<()> {
    let sample = load_sample_parameters(matches)?;
    let parameters = sample
        .model_parameters()
        .context("Invalid model parameters")?;

    let distribution = TheoreticalDistribution::from(&parameters);
    info!(
        "{} theoretical points for {} copy number hypotheses",
        distribution.len(),
        parameters.total_copy_numbers().len()
    );

    let output = TheoreticalOutput {
        sample: &sample,
        points: distribution.points(),
        baf_lines: baf_reference_lines(&distribution),
        dr_lines: dr_reference_lines(&distribution),
    };

    write_json(&output, matches.get_one::<String>("output"))
}
