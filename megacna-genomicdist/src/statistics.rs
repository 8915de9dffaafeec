//! Descriptive statistics over a selected segment of records.
//!
//! Missing measurements (`NaN`) are not filtered out: a single missing value
//! makes every aggregate of that axis `NaN`.

use log::debug;

use megacna_core::models::{MatchedRecord, ObservedRecord, RecordSet, SegmentSummary};

/// Arithmetic mean. `NaN` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of the values; the mean of the two middle values for even lengths.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() || values.iter().any(|v| v.is_nan()) {
        return f64::NAN;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Population standard deviation (divisor `n`).
pub fn population_std(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

fn summarize_slice<'a, I>(mut records: I) -> Option<SegmentSummary>
where
    I: ExactSizeIterator<Item = (&'a str, u64, f64, f64)>,
{
    let (chr, pos_start, first_baf, first_dr) = records.next()?;

    let mut pos_end = pos_start;
    let mut bafs = Vec::with_capacity(records.len() + 1);
    let mut drs = Vec::with_capacity(records.len() + 1);
    bafs.push(first_baf);
    drs.push(first_dr);

    for (_, pos, baf, dr) in records {
        pos_end = pos;
        bafs.push(baf);
        drs.push(dr);
    }

    Some(SegmentSummary {
        chr: chr.to_string(),
        pos_start,
        pos_end,
        baf_mean: mean(&bafs),
        baf_median: median(&bafs),
        baf_std: population_std(&bafs),
        dr_mean: mean(&drs),
        dr_median: median(&drs),
        dr_std: population_std(&drs),
    })
}

// empty or reversed selections are discarded
fn selection(len: usize, start: usize, end: usize) -> Option<std::ops::Range<usize>> {
    let end = end.min(len);
    if start >= end {
        debug!("Discarding empty segment selection [{}, {})", start, end);
        return None;
    }
    Some(start..end)
}

/// Trait for summarizing a contiguous run of records.
pub trait SegmentStatistics {
    /// Summarize the records in `[start, end)`.
    ///
    /// The run is expected to lie on one chromosome in ascending position
    /// order. `end` is clamped to the number of records. Returns `None` when
    /// the selection is empty (`start >= end`).
    fn summarize(&self, start: usize, end: usize) -> Option<SegmentSummary>;
}

impl SegmentStatistics for [ObservedRecord] {
    fn summarize(&self, start: usize, end: usize) -> Option<SegmentSummary> {
        let range = selection(self.len(), start, end)?;
        summarize_slice(
            self[range]
                .iter()
                .map(|r| (r.chr.as_str(), r.pos, r.baf, r.dr)),
        )
    }
}

impl SegmentStatistics for [MatchedRecord] {
    fn summarize(&self, start: usize, end: usize) -> Option<SegmentSummary> {
        let range = selection(self.len(), start, end)?;
        summarize_slice(
            self[range]
                .iter()
                .map(|r| (r.chr.as_str(), r.pos, r.baf, r.dr)),
        )
    }
}

impl SegmentStatistics for RecordSet {
    fn summarize(&self, start: usize, end: usize) -> Option<SegmentSummary> {
        self.records.as_slice().summarize(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    const EPS: f64 = 1e-9;

    #[fixture]
    fn records() -> Vec<ObservedRecord> {
        vec![
            ObservedRecord::new("chr5", 1_000, 0.1, 1.1),
            ObservedRecord::new("chr5", 2_000, 0.2, 0.9),
            ObservedRecord::new("chr5", 3_000, 0.3, 1.0),
            ObservedRecord::new("chr5", 4_000, 0.7, 1.4),
        ]
    }

    #[rstest]
    fn test_three_values() {
        let values = [0.1, 0.2, 0.3];
        let expected_std = ((0.01 + 0.0 + 0.01) / 3.0_f64).sqrt();

        assert!((mean(&values) - 0.2).abs() < EPS);
        assert!((median(&values) - 0.2).abs() < EPS);
        assert!((population_std(&values) - expected_std).abs() < EPS);
        assert!((population_std(&values) - 0.0816).abs() < 1e-4);
    }

    #[rstest]
    fn test_even_median_is_mean_of_middle_values() {
        assert!((median(&[4.0, 1.0, 3.0, 2.0]) - 2.5).abs() < EPS);
    }

    #[rstest]
    fn test_nan_propagates() {
        let values = [0.1, f64::NAN, 0.3];
        assert!(mean(&values).is_nan());
        assert!(median(&values).is_nan());
        assert!(population_std(&values).is_nan());
    }

    #[rstest]
    fn test_summarize_segment(records: Vec<ObservedRecord>) {
        let summary = records.summarize(0, 3).unwrap();

        assert_eq!(summary.chr, "chr5");
        assert_eq!(summary.pos_start, 1_000);
        assert_eq!(summary.pos_end, 3_000);
        assert!((summary.baf_mean - 0.2).abs() < EPS);
        assert!((summary.baf_median - 0.2).abs() < EPS);
        assert!((summary.dr_mean - 1.0).abs() < EPS);
        assert!((summary.dr_median - 1.0).abs() < EPS);
    }

    #[rstest]
    fn test_summarize_single_record(records: Vec<ObservedRecord>) {
        let summary = records.summarize(3, 4).unwrap();

        assert_eq!(summary.pos_start, 4_000);
        assert_eq!(summary.pos_end, 4_000);
        assert_eq!(summary.baf_std, 0.0);
    }

    #[rstest]
    #[case(2, 2)]
    #[case(3, 1)]
    #[case(4, 10)]
    fn test_empty_selection_is_discarded(records: Vec<ObservedRecord>, #[case] start: usize, #[case] end: usize) {
        assert_eq!(records.summarize(start, end), None);
    }

    #[rstest]
    fn test_end_is_clamped(records: Vec<ObservedRecord>) {
        let summary = records.summarize(2, 100).unwrap();
        assert_eq!(summary.pos_start, 3_000);
        assert_eq!(summary.pos_end, 4_000);
    }

    #[rstest]
    fn test_missing_values_poison_one_axis() {
        let records = vec![
            ObservedRecord::new("chr1", 1, f64::NAN, 1.0),
            ObservedRecord::new("chr1", 2, 0.5, 1.0),
        ];
        let summary = records.summarize(0, 2).unwrap();

        assert!(summary.baf_mean.is_nan());
        assert!(summary.baf_median.is_nan());
        assert!(summary.baf_std.is_nan());
        assert_eq!(summary.dr_mean, 1.0);
    }

    #[rstest]
    fn test_matched_records_and_record_set(records: Vec<ObservedRecord>) {
        let matched: Vec<MatchedRecord> = records.iter().map(MatchedRecord::unmatched).collect();
        let record_set = RecordSet::from(records.clone());

        let expected = records.summarize(1, 4);
        assert_eq!(matched.summarize(1, 4), expected);
        assert_eq!(record_set.summarize(1, 4), expected);
    }
}
