use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use megacna_core::models::ObservedRecord;

use crate::errors::RegionQueryError;

static REGION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(chr(?:[1-9XY]|1[0-9]|2[0-2]))(?::(\d+):(\d+))?$")
        .expect("region pattern is a valid regex")
});

///
/// A chromosome, optionally narrowed to an inclusive position range.
///
/// Parsed from `chrN` or `chrN:start:end`, with N in 1-22, X or Y.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionQuery {
    pub chr: String,
    pub range: Option<(u64, u64)>,
}

impl FromStr for RegionQuery {
    type Err = RegionQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = REGION_PATTERN
            .captures(s.trim())
            .ok_or_else(|| RegionQueryError::InvalidPattern(s.to_string()))?;

        let chr = captures[1].to_string();

        let range = match (captures.get(2), captures.get(3)) {
            (Some(start), Some(end)) => {
                let start: u64 = start
                    .as_str()
                    .parse()
                    .map_err(|_| RegionQueryError::InvalidPattern(s.to_string()))?;
                let end: u64 = end
                    .as_str()
                    .parse()
                    .map_err(|_| RegionQueryError::InvalidPattern(s.to_string()))?;
                if end < start {
                    return Err(RegionQueryError::ReversedRange { start, end });
                }
                Some((start, end))
            }
            _ => None,
        };

        Ok(RegionQuery { chr, range })
    }
}

impl RegionQuery {
    pub fn contains(&self, record: &ObservedRecord) -> bool {
        record.chr == self.chr
            && self
                .range
                .is_none_or(|(start, end)| start <= record.pos && record.pos <= end)
    }

    ///
    /// Records falling inside this region, in input order.
    ///
    pub fn filter(&self, records: &[ObservedRecord]) -> Vec<ObservedRecord> {
        records
            .iter()
            .filter(|r| self.contains(r))
            .cloned()
            .collect()
    }
}

impl Display for RegionQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.range {
            Some((start, end)) => write!(f, "{}:{}:{}", self.chr, start, end),
            None => write!(f, "{}", self.chr),
        }
    }
}
