use std::fmt::{self, Display};
use std::path::PathBuf;

use fxhash::FxHashSet;

use crate::models::ObservedRecord;

///
/// RecordSet struct, the in-memory representation of one BAF/DR table.
///
/// Records are kept in file order; within a chromosome they are expected to be
/// ascending by position.
///
#[derive(Clone, Debug, Default)]
pub struct RecordSet {
    pub records: Vec<ObservedRecord>,
    pub path: Option<PathBuf>,
}

impl From<Vec<ObservedRecord>> for RecordSet {
    fn from(records: Vec<ObservedRecord>) -> Self {
        RecordSet {
            records,
            path: None,
        }
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a ObservedRecord;
    type IntoIter = std::slice::Iter<'a, ObservedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl RecordSet {
    ///
    /// Iterate unique chromosomes in the order they first appear
    ///
    pub fn iter_chroms(&self) -> impl Iterator<Item = &String> {
        let mut seen: FxHashSet<&String> = FxHashSet::default();
        self.records
            .iter()
            .map(|r| &r.chr)
            .filter(move |chr| seen.insert(*chr))
    }

    ///
    /// Iterate through records located on a specific chromosome
    ///
    /// # Arguments
    /// - chr: chromosome name
    ///
    pub fn iter_chr_records<'a>(
        &'a self,
        chr: &'a str,
    ) -> impl Iterator<Item = &'a ObservedRecord> {
        self.records.iter().filter(move |r| r.chr == chr)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records with neither BAF nor DR measured.
    pub fn count_unmeasured(&self) -> usize {
        self.records
            .iter()
            .filter(|r| !r.has_baf() && !r.has_dr())
            .count()
    }
}

impl Display for RecordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordSet with {} records.", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn record_set() -> RecordSet {
        RecordSet::from(vec![
            ObservedRecord::new("chr2", 10, 0.5, 1.0),
            ObservedRecord::new("chr2", 20, 0.4, f64::NAN),
            ObservedRecord::new("chr1", 5, f64::NAN, f64::NAN),
            ObservedRecord::new("chr2", 30, 0.3, 0.9),
        ])
    }

    #[rstest]
    fn test_iter_chroms_keeps_first_appearance_order(record_set: RecordSet) {
        let chroms: Vec<&String> = record_set.iter_chroms().collect();
        assert_eq!(chroms, vec!["chr2", "chr1"]);
    }

    #[rstest]
    fn test_iter_chr_records(record_set: RecordSet) {
        let positions: Vec<u64> = record_set.iter_chr_records("chr2").map(|r| r.pos).collect();
        assert_eq!(positions, vec![10, 20, 30]);
        assert_eq!(record_set.iter_chr_records("chrY").count(), 0);
    }

    #[rstest]
    fn test_len_and_unmeasured(record_set: RecordSet) {
        assert_eq!(record_set.len(), 4);
        assert!(!record_set.is_empty());
        assert_eq!(record_set.count_unmeasured(), 1);
        assert_eq!(format!("{}", record_set), "RecordSet with 4 records.");
    }
}
