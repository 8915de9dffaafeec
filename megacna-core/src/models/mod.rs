pub mod gene;
pub mod parameters;
pub mod record;
pub mod record_set;
pub mod segment;
pub mod theoretical;

// re-export for cleaner imports
pub use self::gene::GeneInterval;
pub use self::parameters::ModelParameters;
pub use self::record::{MatchedRecord, ObservedRecord};
pub use self::record_set::RecordSet;
pub use self::segment::SegmentSummary;
pub use self::theoretical::TheoreticalPoint;
