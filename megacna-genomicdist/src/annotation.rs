//! Gene annotation of BAF/DR records.
//!
//! Gene intervals are grouped by chromosome and kept in input order, which
//! must be ascending by start within each chromosome. A record is assigned the
//! gene of the last interval starting at or before its position, provided the
//! position is still within that interval's (inclusive) end.
//!
//! The first interval of every chromosome never produces a hit.

use fxhash::{FxHashMap, FxHashSet};
use log::debug;

use megacna_core::models::{GeneInterval, ObservedRecord};

/// Per-chromosome lookup table over gene intervals.
#[derive(Debug, Clone, Default)]
pub struct GeneIndex {
    by_chr: FxHashMap<String, Vec<GeneInterval>>,
}

impl From<&[GeneInterval]> for GeneIndex {
    fn from(genes: &[GeneInterval]) -> Self {
        let mut by_chr: FxHashMap<String, Vec<GeneInterval>> = FxHashMap::default();
        for gene in genes {
            by_chr.entry(gene.chr.clone()).or_default().push(gene.clone());
        }
        GeneIndex { by_chr }
    }
}

impl From<Vec<GeneInterval>> for GeneIndex {
    fn from(genes: Vec<GeneInterval>) -> Self {
        let mut by_chr: FxHashMap<String, Vec<GeneInterval>> = FxHashMap::default();
        for gene in genes {
            by_chr.entry(gene.chr.clone()).or_default().push(gene);
        }
        GeneIndex { by_chr }
    }
}

impl GeneIndex {
    ///
    /// Name of the gene covering `pos` on `chr`, if any.
    ///
    /// # Arguments
    /// - chr: chromosome name
    /// - pos: genomic position
    ///
    pub fn gene_name(&self, chr: &str, pos: u64) -> Option<&str> {
        let genes = self.by_chr.get(chr)?;

        // number of intervals with start <= pos; starts are sorted
        let n_started = genes.partition_point(|g| g.start <= pos);
        let index = n_started.checked_sub(1)?;

        if index > 0 && genes[index].contains(pos) {
            Some(genes[index].name.as_str())
        } else {
            None
        }
    }

    ///
    /// Gene name for each record, in record order.
    ///
    pub fn annotate(&self, records: &[ObservedRecord]) -> Vec<Option<String>> {
        let mut unknown_chroms: FxHashSet<&str> = FxHashSet::default();

        let names = records
            .iter()
            .map(|record| {
                if !self.by_chr.contains_key(&record.chr) {
                    unknown_chroms.insert(record.chr.as_str());
                }
                self.gene_name(&record.chr, record.pos).map(str::to_string)
            })
            .collect();

        for chr in unknown_chroms {
            debug!("No gene intervals for {}, records left unannotated", chr);
        }

        names
    }

    pub fn contains_chr(&self, chr: &str) -> bool {
        self.by_chr.contains_key(chr)
    }

    /// Total number of indexed intervals.
    pub fn len(&self) -> usize {
        self.by_chr.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_chr.values().all(Vec::is_empty)
    }
}

///
/// Gene name for each record, in record order.
///
/// # Arguments
/// - records: records to annotate
/// - genes: gene intervals, grouped by chromosome and sorted by start
///
pub fn annotate(records: &[ObservedRecord], genes: &[GeneInterval]) -> Vec<Option<String>> {
    GeneIndex::from(genes).annotate(records)
}
