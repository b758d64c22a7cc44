use serde::{Deserialize, Serialize};

pub use crate::error::ApertureError;

/// One pairing of two pupil indices.
///
/// Indices are 1-based; a full configuration for `m` baselines uses every
/// index in `1..=2m` exactly once. The pair is ordered as produced by its
/// generator, but only the absolute difference carries meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LensletPair {
    /// First pupil index.
    pub a: i64,
    /// Second pupil index.
    pub b: i64,
}

impl LensletPair {
    pub fn new(a: i64, b: i64) -> Self {
        Self { a, b }
    }

    /// Baseline realised by this pair: the absolute difference of the two
    /// pupil indices.
    pub fn baseline(&self) -> i64 {
        (self.b - self.a).abs()
    }
}

/// Full ordered pair sequence produced for one `(d, m)` request.
pub type Configuration = Vec<LensletPair>;

/// Sorted list of baselines realised by `pairs`.
pub fn baselines(pairs: &[LensletPair]) -> Vec<i64> {
    let mut out: Vec<i64> = pairs.iter().map(LensletPair::baseline).collect();
    out.sort_unstable();
    out
}
