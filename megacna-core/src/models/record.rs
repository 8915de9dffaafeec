use std::fmt::{self, Display};

use serde::Serialize;

///
/// One measured locus. `baf` and `dr` are `NaN` when the locus was not measured.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservedRecord {
    pub chr: String,
    pub pos: u64,
    #[serde(rename = "BAF")]
    pub baf: f64,
    #[serde(rename = "DR")]
    pub dr: f64,
}

impl ObservedRecord {
    pub fn new(chr: impl Into<String>, pos: u64, baf: f64, dr: f64) -> Self {
        ObservedRecord {
            chr: chr.into(),
            pos,
            baf,
            dr,
        }
    }

    pub fn has_baf(&self) -> bool {
        !self.baf.is_nan()
    }

    pub fn has_dr(&self) -> bool {
        !self.dr.is_nan()
    }
}

impl Display for ObservedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}\t{}\t{}", self.chr, self.pos, self.baf, self.dr)
    }
}

///
/// An observed record together with the genotype inferred for it.
///
/// `total` and `minor` are `None` when the axis they depend on was missing.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedRecord {
    pub chr: String,
    pub pos: u64,
    #[serde(rename = "BAF")]
    pub baf: f64,
    #[serde(rename = "DR")]
    pub dr: f64,
    pub total: Option<u32>,
    pub minor: Option<u32>,
}

impl MatchedRecord {
    pub fn new(record: &ObservedRecord, total: Option<u32>, minor: Option<u32>) -> Self {
        MatchedRecord {
            chr: record.chr.clone(),
            pos: record.pos,
            baf: record.baf,
            dr: record.dr,
            total,
            minor,
        }
    }

    /// A record for which no genotype could be inferred.
    pub fn unmatched(record: &ObservedRecord) -> Self {
        MatchedRecord::new(record, None, None)
    }

    pub fn is_matched(&self) -> bool {
        self.total.is_some() || self.minor.is_some()
    }

    /// The measurement part of this record.
    pub fn observed(&self) -> ObservedRecord {
        ObservedRecord::new(self.chr.clone(), self.pos, self.baf, self.dr)
    }
}

impl From<&MatchedRecord> for ObservedRecord {
    fn from(value: &MatchedRecord) -> Self {
        value.observed()
    }
}
