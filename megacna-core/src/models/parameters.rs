use serde::Serialize;

use crate::errors::{CnaError, Result};

///
/// Tumor sample model: purity, ploidy and the total copy numbers to model.
///
/// Fields are private so that a value can only exist in its validated form.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelParameters {
    purity: f64,
    ploidy: f64,
    total_copy_numbers: Vec<u32>,
}

impl ModelParameters {
    ///
    /// Validate and build model parameters.
    ///
    /// # Arguments
    /// - purity: fraction of tumor DNA in the sample, in (0, 1]
    /// - ploidy: average number of chromosome sets, > 0
    /// - total_copy_numbers: copy number hypotheses, non-empty and non-negative
    ///
    pub fn new(purity: f64, ploidy: f64, total_copy_numbers: &[i64]) -> Result<Self> {
        if !purity.is_finite() || purity <= 0.0 || purity > 1.0 {
            return Err(CnaError::InvalidParameter(format!(
                "purity must be in (0, 1], got {}",
                purity
            )));
        }

        if !ploidy.is_finite() || ploidy <= 0.0 {
            return Err(CnaError::InvalidParameter(format!(
                "ploidy must be a positive number, got {}",
                ploidy
            )));
        }

        if total_copy_numbers.is_empty() {
            return Err(CnaError::InvalidParameter(
                "at least one total copy number is required".to_string(),
            ));
        }

        let total_copy_numbers = total_copy_numbers
            .iter()
            .map(|&total| {
                u32::try_from(total).map_err(|_| {
                    CnaError::InvalidParameter(format!(
                        "total copy number must be a non-negative integer, got {}",
                        total
                    ))
                })
            })
            .collect::<Result<Vec<u32>>>()?;

        Ok(ModelParameters {
            purity,
            ploidy,
            total_copy_numbers,
        })
    }

    pub fn purity(&self) -> f64 {
        self.purity
    }

    pub fn ploidy(&self) -> f64 {
        self.ploidy
    }

    pub fn total_copy_numbers(&self) -> &[u32] {
        &self.total_copy_numbers
    }
}
