use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{info, warn};

use megacna_genomicdist::SegmentStatistics;

use crate::common::{load_records, write_json};

pub fn run_segment(matches: &ArgMatches) -> Result<()> {
    let start = *matches
        .get_one::<usize>("start")
        .expect("--start is required");
    let end = *matches.get_one::<usize>("end").expect("--end is required");
    let output = matches.get_one::<String>("output");

    let record_set = load_records(matches)?;

    let Some(summary) = record_set.summarize(start, end) else {
        warn!(
            "Empty selection [{}, {}) over {} records, nothing to summarize",
            start,
            end,
            record_set.len()
        );
        return Ok(());
    };

    info!(
        "Segment {}:{}-{} spans {} records",
        summary.chr,
        summary.pos_start,
        summary.pos_end,
        end.min(record_set.len()) - start
    );

    if matches.get_flag("tsv") {
        let row = format!("{}\n", summary.as_string());
        match output {
            Some(p) => {
                fs::write(p, row).with_context(|| format!("Failed to write {}", p))?;
                info!("Output written to {}", p);
            }
            None => io::stdout().write_all(row.as_bytes())?,
        }
        return Ok(());
    }

    write_json(&summary, output)
}
