//! Positional annotation and statistics for BAF/DR records.
//!
//! This crate provides the position-aware parts of megacna:
//!
//! - Attaching gene names to records from a per-chromosome gene table
//! - Summary statistics (mean, median, population std) over a selected segment
//! - Region queries of the form `chrN` or `chrN:start:end`
//!
//! # Example
//!
//! ```
//! use megacna_core::models::ObservedRecord;
//! use megacna_genomicdist::SegmentStatistics;
//!
//! let records = vec![
//!     ObservedRecord::new("chr1", 100, 0.1, 1.0),
//!     ObservedRecord::new("chr1", 200, 0.2, 1.0),
//!     ObservedRecord::new("chr1", 300, 0.3, 1.0),
//! ];
//!
//! let summary = records.summarize(0, 3).unwrap();
//! assert_eq!(summary.pos_start, 100);
//! assert_eq!(summary.pos_end, 300);
//! ```

pub mod annotation;
pub mod errors;
pub mod region;
pub mod statistics;

// re-exports
pub use annotation::GeneIndex;
pub use errors::RegionQueryError;
pub use region::RegionQuery;
pub use statistics::SegmentStatistics;
