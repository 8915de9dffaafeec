use serde::Serialize;

///
/// One (total, minor) genotype hypothesis with its expected BAF and depth ratio.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TheoreticalPoint {
    pub total: u32,
    pub minor: u32,
    pub baf: f64,
    pub dr: f64,
}

impl TheoreticalPoint {
    /// Label used for reference lines, `minor/total`.
    pub fn label(&self) -> String {
        format!("{}/{}", self.minor, self.total)
    }
}
