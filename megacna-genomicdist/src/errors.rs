use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RegionQueryError {
    #[error("Invalid region `{0}`, expected chrN or chrN:start:end")]
    InvalidPattern(String),
    #[error("Region end {end} is before start {start}")]
    ReversedRange { start: u64, end: u64 },
}
