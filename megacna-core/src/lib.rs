//! Core data models for megacna.
//!
//! This crate holds the value types shared by every other megacna crate:
//! model parameters, theoretical genotype points, observed and matched
//! BAF/DR records, gene intervals and segment summaries. It also carries the
//! error taxonomy and a few small file helpers.
//!
//! No computation lives here beyond parameter validation. The theoretical
//! distribution and the matcher live in `megacna-model`, gene annotation and
//! segment statistics in `megacna-genomicdist`.
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::{CnaError, Result};
