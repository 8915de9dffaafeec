//! End-to-end: sample parameters + BAF/DR table + gene table → matched CSV

use std::path::PathBuf;

use megacna_genomicdist::{GeneIndex, SegmentStatistics};
use megacna_io::{
    SampleParameters, read_gene_intervals, read_observed_records, write_matched_records,
};
use megacna_model::{Matcher, NearestMatcher, TheoreticalDistribution};
use pretty_assertions::assert_eq;
use rstest::*;
use tempfile::tempdir;

#[fixture]
fn path_to_data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../tests/data")
}

#[fixture]
fn distribution(path_to_data: PathBuf) -> TheoreticalDistribution {
    let sample = SampleParameters::try_from(path_to_data.join("sample.toml").as_path()).unwrap();
    TheoreticalDistribution::from(&sample.model_parameters().unwrap())
}

#[rstest]
fn test_distribution_from_sample_file(distribution: TheoreticalDistribution) {
    // totals 1..=4 give 1 + 2 + 2 + 3 points
    assert_eq!(distribution.len(), 8);
    assert_eq!(distribution.parameters().total_copy_numbers(), &[1u32, 2, 3, 4]);
}

#[rstest]
fn test_match_sample_records(path_to_data: PathBuf, distribution: TheoreticalDistribution) {
    let record_set = read_observed_records(&path_to_data.join("sample.csv")).unwrap();
    let matched = NearestMatcher::new(&distribution).classify_all(&record_set.records);

    assert_eq!(matched.len(), 12);

    // balanced diploid
    assert_eq!((matched[0].total, matched[0].minor), (Some(2), Some(1)));
    // BAF missing: total from DR only
    assert_eq!((matched[5].total, matched[5].minor), (Some(3), None));
    // DR missing: minor from BAF only
    assert_eq!((matched[6].total, matched[6].minor), (None, Some(1)));
    // nothing measured
    assert!(!matched[7].is_matched());
    // single copy loss on chr17
    assert_eq!((matched[9].total, matched[9].minor), (Some(1), Some(0)));
}

#[rstest]
fn test_annotate_and_write(path_to_data: PathBuf, distribution: TheoreticalDistribution) {
    let record_set = read_observed_records(&path_to_data.join("sample.csv")).unwrap();
    let genes = read_gene_intervals(&path_to_data.join("genes.tsv")).unwrap();
    let index = GeneIndex::from(genes);

    let names = index.annotate(&record_set.records);
    assert_eq!(names[0].as_deref(), Some("GENEA"));
    assert_eq!(names[2], None);
    assert_eq!(names[3].as_deref(), Some("GENEB"));
    assert_eq!(names[8].as_deref(), Some("TP53"));
    assert_eq!(names[10], None);

    let matched = NearestMatcher::new(&distribution).classify_all(&record_set.records);

    let dir = tempdir().unwrap();
    let out = dir.path().join("out/matched.csv.gz");
    write_matched_records(&out, &matched, Some(&names)).unwrap();

    let written = read_observed_records(&out).unwrap();
    assert_eq!(written.len(), 12);
    assert_eq!(written.records[0].chr, "chr1");
    assert!(written.records[7].baf.is_nan());
}

#[rstest]
fn test_segment_over_sample(path_to_data: PathBuf) {
    let record_set = read_observed_records(&path_to_data.join("sample.csv")).unwrap();

    let summary = record_set.summarize(0, 3).unwrap();
    assert_eq!(summary.chr, "chr1");
    assert_eq!((summary.pos_start, summary.pos_end), (1000, 3000));
    assert!((summary.baf_mean - 0.5).abs() < 1e-9);
    assert!((summary.baf_median - 0.5).abs() < 1e-9);

    // a gap in the measurements poisons the median
    let gapped = record_set.summarize(4, 7).unwrap();
    assert!(gapped.baf_median.is_nan());

    assert!(record_set.summarize(12, 20).is_none());
}
