use thiserror::Error;

#[derive(Error, Debug)]
pub enum CnaError {
    #[error("Invalid model parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid record at row {row}: {reason}")]
    InvalidRecord { row: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, CnaError>;
