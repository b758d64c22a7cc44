use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApertureError {
    /// Request is structurally impossible: `m` baselines starting at `d`
    /// need at least `2d - 1` of them, and both inputs must be positive.
    #[error("infeasible request: d = {d}, m = {m} (need d >= 1, m >= 1 and m >= 2d - 1)")]
    InfeasibleRequest { d: i64, m: i64 },

    /// The feasibility bound holds but `(d, m)` falls in a residue class
    /// for which the literature provides no closed-form construction.
    #[error("no known construction for first baseline d = {d} with m = {m} baselines")]
    UnsupportedResidueClass { d: i64, m: i64 },
}
