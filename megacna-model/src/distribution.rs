use log::debug;
use serde::Serialize;

use megacna_core::Result;
use megacna_core::models::{ModelParameters, TheoreticalPoint};

///
/// Number of minor allele hypotheses modeled for a total copy number.
///
/// `ceil(total / 2)` for odd totals, `total / 2 + 1` for even ones. Minor copy
/// numbers `0..max_minor(total)` are materialized.
///
pub fn max_minor(total: u32) -> u32 {
    if total % 2 == 1 {
        total.div_ceil(2)
    } else {
        total / 2 + 1
    }
}

/// Expected B allele frequency for `minor` B alleles out of `total` copies.
pub fn b_allele_frequency(minor: u32, total: u32, purity: f64) -> f64 {
    (minor as f64 * purity + (1.0 - purity)) / (total as f64 * purity + 2.0 * (1.0 - purity))
}

/// Expected ratio of tumor to normal coverage for `total` copies.
pub fn depth_ratio(total: u32, ploidy: f64, purity: f64) -> f64 {
    ((1.0 - purity) + (total as f64 / 2.0) * purity) / ((ploidy / 2.0) * purity + (1.0 - purity))
}

///
/// The closed set of (BAF, DR) points predicted for one sample model.
///
/// Points are grouped by total copy number in the order the totals were given,
/// with ascending minor copy number inside each group. The points cannot be
/// modified once built.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TheoreticalDistribution {
    parameters: ModelParameters,
    points: Vec<TheoreticalPoint>,
}

impl From<&ModelParameters> for TheoreticalDistribution {
    fn from(parameters: &ModelParameters) -> Self {
        let purity = parameters.purity();
        let ploidy = parameters.ploidy();

        let points: Vec<TheoreticalPoint> = parameters
            .total_copy_numbers()
            .iter()
            .flat_map(|&total| {
                let dr = depth_ratio(total, ploidy, purity);
                (0..max_minor(total)).map(move |minor| TheoreticalPoint {
                    total,
                    minor,
                    baf: b_allele_frequency(minor, total, purity),
                    dr,
                })
            })
            .collect();

        debug!(
            "Built {} theoretical points for purity={} ploidy={}",
            points.len(),
            purity,
            ploidy
        );

        TheoreticalDistribution {
            parameters: parameters.clone(),
            points,
        }
    }
}

impl TheoreticalDistribution {
    ///
    /// Validate the parameters and build the distribution.
    ///
    /// # Arguments
    /// - purity: fraction of tumor DNA in the sample
    /// - ploidy: average number of chromosome sets
    /// - total_copy_numbers: copy number hypotheses to model
    ///
    pub fn build(purity: f64, ploidy: f64, total_copy_numbers: &[i64]) -> Result<Self> {
        let parameters = ModelParameters::new(purity, ploidy, total_copy_numbers)?;
        Ok(TheoreticalDistribution::from(&parameters))
    }

    pub fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }

    pub fn points(&self) -> &[TheoreticalPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TheoreticalPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<'a> IntoIterator for &'a TheoreticalDistribution {
    type Item = &'a TheoreticalPoint;
    type IntoIter = std::slice::Iter<'a, TheoreticalPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
