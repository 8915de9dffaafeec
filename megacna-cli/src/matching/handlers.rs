use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use fxhash::FxHashMap;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use megacna_core::models::MatchedRecord;
use megacna_core::utils::chrom_karyotype_key;
use megacna_genomicdist::GeneIndex;
use megacna_io::{read_gene_intervals, write_matched_records, write_matched_records_to};
use megacna_model::{Matcher, NearestMatcher, TheoreticalDistribution};

use crate::common::{load_records, load_sample_parameters};

const CHUNK_SIZE: usize = 10_000;

pub fn run_match(matches: &ArgMatches) -> Result<()> {
    let sample = load_sample_parameters(matches)?;
    let parameters = sample
        .model_parameters()
        .context("Invalid model parameters")?;
    let distribution = TheoreticalDistribution::from(&parameters);

    let record_set = load_records(matches)?;
    info!("{}", record_set);

    let matcher = NearestMatcher::new(&distribution);
    let show_progress = !matches.get_flag("no-progress");

    let bar = if show_progress {
        let bar = ProgressBar::new(record_set.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")?
                .progress_chars("##-"),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut matched: Vec<MatchedRecord> = Vec::with_capacity(record_set.len());
    for chunk in record_set.records.chunks(CHUNK_SIZE) {
        matched.extend(matcher.classify_all(chunk));
        bar.inc(chunk.len() as u64);
    }
    bar.finish_with_message("Done.");

    let unmatched = matched.iter().filter(|r| !r.is_matched()).count();
    info!(
        "{} records matched, {} without measurements",
        matched.len() - unmatched,
        unmatched
    );
    log_chromosome_counts(&matched);

    let genes = match matches.get_one::<String>("genes") {
        Some(path) => {
            let intervals = read_gene_intervals(Path::new(path))
                .with_context(|| format!("Failed to load gene table from {}", path))?;
            let index = GeneIndex::from(intervals);
            info!("Loaded {} gene intervals", index.len());
            let names = index.annotate(&record_set.records);
            let annotated = names.iter().filter(|n| n.is_some()).count();
            if annotated == 0 {
                warn!("No record fell inside a gene interval");
            }
            Some(names)
        }
        None => None,
    };

    match matches.get_one::<String>("output") {
        Some(output) => {
            write_matched_records(output, &matched, genes.as_deref())
                .with_context(|| format!("Failed to write {}", output))?;
            info!("Matched records written to {}", output);
        }
        None => {
            write_matched_records_to(io::stdout().lock(), &matched, genes.as_deref())?;
        }
    }

    Ok(())
}

fn log_chromosome_counts(records: &[MatchedRecord]) {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for record in records.iter().filter(|r| r.is_matched()) {
        *counts.entry(record.chr.as_str()).or_insert(0) += 1;
    }

    let mut chroms: Vec<(&str, usize)> = counts.into_iter().collect();
    chroms.sort_by_key(|(chr, _)| chrom_karyotype_key(chr));

    for (chr, count) in chroms {
        info!("  {}: {} matched", chr, count);
    }
}
