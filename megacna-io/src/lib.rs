//! # Input/Output utilities for megacna.
//!
//! This small crate is the boundary between raw files and the typed models in
//! `megacna-core`. It reads sample parameters (TOML or form-style strings),
//! BAF/DR tables (CSV), gene interval tables (TSV), and writes matched
//! records back out as CSV. Everything is validated here, so the engine
//! crates can assume well-formed input.
//!
pub mod error;
pub mod genes;
pub mod params;
pub mod records;
pub mod writer;

// re-expose core functions
pub use error::*;
pub use genes::read_gene_intervals;
pub use params::{SampleParameters, parse_copy_numbers};
pub use records::read_observed_records;
pub use writer::{write_matched_records, write_matched_records_to};
