use megacna_core::models::{MatchedRecord, ObservedRecord, TheoreticalPoint};

use crate::distribution::TheoreticalDistribution;
use crate::traits::Matcher;

/// Which measurement axes a record can be matched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAxes {
    Both,
    BafOnly,
    DrOnly,
    Neither,
}

impl From<&ObservedRecord> for MatchAxes {
    fn from(record: &ObservedRecord) -> Self {
        match (record.has_baf(), record.has_dr()) {
            (true, true) => MatchAxes::Both,
            (true, false) => MatchAxes::BafOnly,
            (false, true) => MatchAxes::DrOnly,
            (false, false) => MatchAxes::Neither,
        }
    }
}

/// Nearest-neighbour matcher in (BAF, DR) space.
///
/// With both axes measured the Euclidean distance is used. With one axis
/// missing the absolute difference on the other axis is used, and the field
/// tied to the missing axis is left empty: a missing BAF leaves `minor` empty,
/// a missing DR leaves `total` empty. With both missing no search is done.
///
/// Ties go to the point that comes first in the distribution.
///
/// # Examples
///
/// ```
/// use megacna_core::models::ObservedRecord;
/// use megacna_model::{Matcher, NearestMatcher, TheoreticalDistribution};
///
/// let distribution = TheoreticalDistribution::build(0.9, 2.0, &[1, 2, 3]).unwrap();
/// let matcher = NearestMatcher::new(&distribution);
///
/// // depth ratio only: the total copy number is still recovered
/// let dr_only = ObservedRecord::new("chr3", 1_000, f64::NAN, 1.0);
/// let matched = matcher.classify(&dr_only);
/// assert_eq!(matched.total, Some(2));
/// assert_eq!(matched.minor, None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NearestMatcher<'a> {
    distribution: &'a TheoreticalDistribution,
}

impl<'a> NearestMatcher<'a> {
    pub fn new(distribution: &'a TheoreticalDistribution) -> Self {
        NearestMatcher { distribution }
    }

    ///
    /// Find the closest theoretical point and its distance.
    ///
    /// Returns `None` when neither axis is measured, or when no point is at a
    /// comparable (non-NaN) distance.
    ///
    pub fn find_nearest(&self, record: &ObservedRecord) -> Option<(&'a TheoreticalPoint, f64)> {
        let (baf, dr) = (record.baf, record.dr);
        match MatchAxes::from(record) {
            MatchAxes::Both => self.scan(|p| ((baf - p.baf).powi(2) + (dr - p.dr).powi(2)).sqrt()),
            MatchAxes::BafOnly => self.scan(|p| (baf - p.baf).abs()),
            MatchAxes::DrOnly => self.scan(|p| (dr - p.dr).abs()),
            MatchAxes::Neither => None,
        }
    }

    // strict less-than keeps the earliest point on ties
    fn scan<F>(&self, distance: F) -> Option<(&'a TheoreticalPoint, f64)>
    where
        F: Fn(&TheoreticalPoint) -> f64,
    {
        let mut best: Option<(&'a TheoreticalPoint, f64)> = None;

        for point in self.distribution.points() {
            let d = distance(point);
            if d.is_nan() {
                continue;
            }
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((point, d)),
            }
        }

        best
    }
}

impl Matcher for NearestMatcher<'_> {
    fn classify(&self, record: &ObservedRecord) -> MatchedRecord {
        let axes = MatchAxes::from(record);
        match self.find_nearest(record) {
            Some((point, _)) => {
                let total = (axes != MatchAxes::BafOnly).then_some(point.total);
                let minor = (axes != MatchAxes::DrOnly).then_some(point.minor);
                MatchedRecord::new(record, total, minor)
            }
            None => MatchedRecord::unmatched(record),
        }
    }
}
