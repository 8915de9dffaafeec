use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;
use serde::Serialize;

use megacna_core::models::RecordSet;
use megacna_model::{
    ReferenceLine, TheoreticalDistribution, axis_length, baf_reference_lines, dr_reference_lines,
};

use crate::common::{load_records, load_sample_parameters, write_json};

#[derive(Debug, Serialize)]
struct Position<'a> {
    chr: &'a str,
    pos: u64,
}

/// Everything a chart needs to draw the BAF and DR panels.
#[derive(Debug, Serialize)]
struct PlotSeries<'a> {
    axis_length: usize,
    positions: Vec<Position<'a>>,
    /// (record index, value); `None` where the value was not measured
    baf: Vec<(usize, Option<f64>)>,
    dr: Vec<(usize, Option<f64>)>,
    baf_lines: Vec<ReferenceLine>,
    dr_lines: Vec<ReferenceLine>,
}

fn measured(value: f64) -> Option<f64> {
    (!value.is_nan()).then_some(value)
}

fn plot_series<'a>(
    record_set: &'a RecordSet,
    distribution: &TheoreticalDistribution,
) -> PlotSeries<'a> {
    PlotSeries {
        axis_length: axis_length(record_set.len()),
        positions: record_set
            .records
            .iter()
            .map(|r| Position {
                chr: &r.chr,
                pos: r.pos,
            })
            .collect(),
        baf: record_set
            .records
            .iter()
            .enumerate()
            .map(|(i, r)| (i, measured(r.baf)))
            .collect(),
        dr: record_set
            .records
            .iter()
            .enumerate()
            .map(|(i, r)| (i, measured(r.dr)))
            .collect(),
        baf_lines: baf_reference_lines(distribution),
        dr_lines: dr_reference_lines(distribution),
    }
}

pub fn run_view(matches: &ArgMatches) -> Result<()> {
    let sample = load_sample_parameters(matches)?;
    let parameters = sample
        .model_parameters()
        .context("Invalid model parameters")?;
    let distribution = TheoreticalDistribution::from(&parameters);

    let record_set = load_records(matches)?;
    let series = plot_series(&record_set, &distribution);
    info!(
        "{} points, {} BAF lines, {} DR lines",
        series.positions.len(),
        series.baf_lines.len(),
        series.dr_lines.len()
    );

    write_json(&series, matches.get_one::<String>("output"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use megacna_core::models::ObservedRecord;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_plot_series_marks_missing_values() {
        let record_set = RecordSet::from(vec![
            ObservedRecord::new("chr1", 10, 0.5, f64::NAN),
            ObservedRecord::new("chr1", 20, f64::NAN, 1.0),
        ]);
        let distribution = TheoreticalDistribution::build(1.0, 2.0, &[2]).unwrap();

        let series = plot_series(&record_set, &distribution);

        assert_eq!(series.axis_length, 10);
        assert_eq!(series.baf, vec![(0, Some(0.5)), (1, None)]);
        assert_eq!(series.dr, vec![(0, None), (1, Some(1.0))]);
        assert_eq!(series.positions[1].pos, 20);
        assert_eq!(series.baf_lines.len(), 2);
        assert_eq!(series.dr_lines.len(), 1);
    }
}
