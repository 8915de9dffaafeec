use serde::Serialize;

///
/// A named gene span on a chromosome. Both `start` and `end` are inclusive.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GeneInterval {
    pub chr: String,
    pub start: u64,
    pub end: u64,
    pub name: String,
}

impl GeneInterval {
    pub fn new(chr: impl Into<String>, start: u64, end: u64, name: impl Into<String>) -> Self {
        GeneInterval {
            chr: chr.into(),
            start,
            end,
            name: name.into(),
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, pos: u64) -> bool {
        self.start <= pos && pos <= self.end
    }
}
