use std::fs::read_to_string;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use megacna_core::models::ModelParameters;

use crate::error::{ParseError, Result};

const DEFAULT_NORMAL_PLOIDY: u32 = 2;

///
/// Sample description as entered by a user: model parameters plus the ploidy
/// of the matched normal.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleParameters {
    pub purity: f64,
    pub ploidy: f64,
    pub copy_numbers: Vec<i64>,
    pub normal_ploidy: u32,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum CopyNumbersField {
    List(Vec<f64>),
    Text(String),
}

#[derive(Deserialize, Debug)]
struct SampleParametersFile {
    purity: f64,
    ploidy: f64,
    copy_numbers: CopyNumbersField,
    normal_ploidy: Option<u32>,
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ParseError::InvalidNumeric {
            field: field.to_string(),
            value: value.to_string(),
        })
}

// keeps finite values; the count of dropped entries is logged and returned
fn finite_values(values: impl IntoIterator<Item = Option<f64>>) -> (Vec<f64>, usize) {
    let mut skipped = 0;
    let finite: Vec<f64> = values
        .into_iter()
        .filter_map(|v| match v {
            Some(v) if v.is_finite() => Some(v),
            _ => {
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        warn!("Skipped {} non-numeric or non-finite copy number entries", skipped);
    }

    (finite, skipped)
}

fn whole_copy_numbers(values: Vec<f64>) -> Result<Vec<i64>> {
    let copy_numbers = values
        .into_iter()
        .map(|v| {
            if v.fract() == 0.0 {
                Ok(v as i64)
            } else {
                Err(ParseError::InvalidCopyNumber(v))
            }
        })
        .collect::<Result<Vec<i64>>>()?;

    if copy_numbers.is_empty() {
        return Err(ParseError::NoCopyNumbers);
    }

    Ok(copy_numbers)
}

///
/// Parse a comma separated copy number list such as `"1, 2,3"`.
///
/// Entries that are not finite numbers are skipped. Fails when nothing numeric is
/// left or when an entry is fractional. Negative values are passed through and
/// rejected later by [`ModelParameters`].
///
pub fn parse_copy_numbers(copy_numbers: &str) -> Result<Vec<i64>> {
    let (values, _) = finite_values(
        copy_numbers
            .split(',')
            .map(|entry| entry.trim().parse::<f64>().ok()),
    );

    whole_copy_numbers(values)
}

impl SampleParameters {
    ///
    /// Parse raw form values.
    ///
    /// # Arguments
    /// - purity: fraction of tumor DNA, e.g. `"0.8"`
    /// - ploidy: tumor ploidy, e.g. `"2.1"`
    /// - copy_numbers: comma separated totals, e.g. `"1,2,3,4"`
    /// - normal_ploidy: ploidy of the normal sample, e.g. `"2"`
    ///
    pub fn parse_form(
        purity: &str,
        ploidy: &str,
        copy_numbers: &str,
        normal_ploidy: &str,
    ) -> Result<Self> {
        let purity: f64 = parse_number("purity", purity)?;
        let ploidy: f64 = parse_number("ploidy", ploidy)?;
        let normal_ploidy: u32 = parse_number("normal_ploidy", normal_ploidy)?;

        if purity.is_nan() || ploidy.is_nan() {
            return Err(ParseError::InvalidNumeric {
                field: "purity/ploidy".to_string(),
                value: "NaN".to_string(),
            });
        }

        Ok(SampleParameters {
            purity,
            ploidy,
            copy_numbers: parse_copy_numbers(copy_numbers)?,
            normal_ploidy,
        })
    }

    ///
    /// Validated model parameters for the theoretical distribution.
    ///
    pub fn model_parameters(&self) -> megacna_core::Result<ModelParameters> {
        ModelParameters::new(self.purity, self.ploidy, &self.copy_numbers)
    }
}

impl TryFrom<&Path> for SampleParameters {
    type Error = ParseError;

    ///
    /// Read sample parameters from a TOML file.
    ///
    /// `copy_numbers` may be given as a string (`"1,2,3"`) or as an array.
    ///
    fn try_from(path: &Path) -> Result<Self> {
        let toml_str = read_to_string(path)?;
        let file: SampleParametersFile = toml::from_str(&toml_str)?;

        let copy_numbers = match file.copy_numbers {
            CopyNumbersField::List(values) => {
                let (values, _) = finite_values(values.into_iter().map(Some));
                whole_copy_numbers(values)?
            }
            CopyNumbersField::Text(text) => parse_copy_numbers(&text)?,
        };

        Ok(SampleParameters {
            purity: file.purity,
            ploidy: file.ploidy,
            copy_numbers,
            normal_ploidy: file.normal_ploidy.unwrap_or(DEFAULT_NORMAL_PLOIDY),
        })
    }
}
