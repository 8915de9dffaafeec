use serde::Serialize;

/// Descriptive statistics over a selected run of records.
///
/// Contains the bounds of the selection and mean, median and population
/// standard deviation for both measurement axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentSummary {
    /// Chromosome of the first record in the selection
    pub chr: String,
    /// Position of the first record
    pub pos_start: u64,
    /// Position of the last record
    pub pos_end: u64,
    pub baf_mean: f64,
    pub baf_median: f64,
    pub baf_std: f64,
    pub dr_mean: f64,
    pub dr_median: f64,
    pub dr_std: f64,
}

impl SegmentSummary {
    ///
    /// Get the summary as one tab separated row, in column order
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.chr,
            self.pos_start,
            self.pos_end,
            self.baf_mean,
            self.baf_median,
            self.baf_std,
            self.dr_mean,
            self.dr_median,
            self.dr_std,
        )
    }
}
