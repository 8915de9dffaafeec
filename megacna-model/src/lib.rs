//! Theoretical distributions and genotype matching for copy-number data.
//!
//! Given a tumor sample's purity and ploidy and a set of total copy number
//! hypotheses, this crate builds the closed set of (BAF, DR) points the model
//! predicts, and classifies observed measurements against it.
//!
//! ## Quick Start
//!
//! ```rust
//! use megacna_core::models::ObservedRecord;
//! use megacna_model::{Matcher, NearestMatcher, TheoreticalDistribution};
//!
//! let distribution = TheoreticalDistribution::build(1.0, 2.0, &[2]).unwrap();
//! assert_eq!(distribution.len(), 2);
//!
//! let matcher = NearestMatcher::new(&distribution);
//! let matched = matcher.classify(&ObservedRecord::new("chr1", 100, 0.52, 0.97));
//! assert_eq!(matched.total, Some(2));
//! assert_eq!(matched.minor, Some(1));
//! ```
//!
//! The distribution is built once and is read-only afterwards, so one matcher
//! can be shared across threads; [`Matcher::classify_all`] does exactly that.

/// Theoretical distribution construction.
///
/// See [`TheoreticalDistribution`] for details.
pub mod distribution;

/// Nearest-neighbour genotype matching.
///
/// See [`NearestMatcher`] for details.
pub mod matcher;

/// Reference lines for plotting the theoretical distribution.
pub mod reference_lines;

/// Core traits for matching.
pub mod traits;

// re-exports
pub use self::distribution::{TheoreticalDistribution, max_minor};
pub use self::matcher::NearestMatcher;
pub use self::reference_lines::{ReferenceLine, axis_length, baf_reference_lines, dr_reference_lines};
pub use self::traits::Matcher;
