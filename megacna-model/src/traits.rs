use rayon::prelude::*;

use megacna_core::models::{MatchedRecord, ObservedRecord};

pub trait Matcher: Send + Sync {
    /// Infer the genotype of one record. Never fails; axes that cannot be
    /// matched leave their fields as `None`.
    fn classify(&self, record: &ObservedRecord) -> MatchedRecord;

    /// Classify every record, in parallel. Output order equals input order.
    fn classify_all(&self, records: &[ObservedRecord]) -> Vec<MatchedRecord> {
        records.par_iter().map(|r| self.classify(r)).collect()
    }
}
