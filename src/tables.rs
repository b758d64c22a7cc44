//! Closed-form construction tables.
//!
//! Eight tables transcribed from Skolem (1958), Simpson (1983) and Bermond
//! (1976). Each row encodes two affine forms in the dispatch parameters
//! `(t, s)` plus a repeat bound:
//!
//! ```text
//! row = (a, b, c, d, e, f, g, h, i, k, l)
//! A(j)  = a*t + b*s + c + d*j
//! B(j)  = e*t + f*s + g + h*j
//! j_max = i*t + k*s + l
//! ```
//!
//! A row with `j_max < 0` contributes no pairs; otherwise it contributes one
//! pair per `j` in `0..=j_max`. The coefficients must match the published
//! tables exactly: a wrong integer still yields a same-length configuration
//! and only the verifier catches it.

/// One affine row in the layout shown in the module docs.
pub type Row = [i64; 11];

/// First table in Skolem 1958, for `d = 1`, `m = 4t`.
pub const TABLE_SKOLEM_1: [Row; 6] = [
    [4, 0, 0, 1, 8, 0, 0, -1, 2, 0, -1],
    [2, 0, 1, 0, 6, 0, 0, 0, 0, 0, 0],
    [2, 0, 0, 0, 4, 0, -1, 0, 0, 0, 0],
    [0, 0, 1, 1, 4, 0, -2, -1, 1, 0, -2],
    [1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0],
    [1, 0, 2, 1, 3, 0, -1, -1, 1, 0, -3],
];

/// Second table in Skolem 1958, for `d = 1`, `m = 4t + 1`.
pub const TABLE_SKOLEM_2: [Row; 6] = [
    [4, 0, 2, 1, 8, 0, 2, -1, 2, 0, -1],
    [2, 0, 1, 0, 6, 0, 2, 0, 0, 0, 0],
    [2, 0, 2, 0, 4, 0, 1, 0, 0, 0, 0],
    [0, 0, 1, 1, 4, 0, 0, -1, 1, 0, -1],
    [1, 0, 1, 0, 1, 0, 2, 0, 0, 0, 0],
    [1, 0, 3, 1, 3, 0, 0, -1, 1, 0, -3],
];

/// First table in Simpson 1983, for even `d = 4s`, `m = 4t`.
pub const TABLE_1: [Row; 13] = [
    [2, -3, 1, -1, 2, 1, 2, 1, 1, -2, -1],
    [1, -2, 1, -1, 3, 1, 1, 1, 1, -2, 0],
    [6, -1, 1, -1, 6, 3, 1, 1, 1, -2, -1],
    [5, -1, 1, -1, 7, 2, 0, 1, 1, -2, 0],
    [3, -1, 2, 0, 5, -1, 2, 0, 0, 0, 0],
    [2, 0, 0, -1, 4, 0, 1, 1, 0, 1, -1],
    [4, -1, 2, 1, 6, 1, 2, 2, 0, 1, -2],
    [3, 0, 1, -1, 5, 0, 3, 1, 0, 1, -2],
    [3, 1, 0, -1, 7, 1, 1, 1, 0, 1, -2],
    [1, -1, 1, -1, 5, -1, 3, 1, 0, 1, -1],
    [2, -3, 2, 1, 6, -1, 3, 2, 0, 2, -2],
    [2, 0, 1, 1, 6, -1, 2, 2, 0, 1, -1],
    [2, 1, 1, 0, 6, 3, 0, 0, 0, 0, 0],
];

/// Second table in Simpson 1983, for even `d = 4s + 2`, `m = 4t`.
pub const TABLE_2: [Row; 15] = [
    [2, -3, -1, -1, 2, 1, 2, 1, 1, -2, -2],
    [1, -2, 0, -1, 3, 1, 1, 1, 1, -2, -1],
    [6, -1, 0, -1, 6, 3, 2, 1, 1, -2, -2],
    [5, -1, -1, -1, 7, 2, 1, 1, 1, -2, -2],
    [5, -1, 0, 0, 7, 1, 1, 0, 0, 0, 0],
    [2, 0, 0, -1, 4, 0, 1, 1, 0, 1, -1],
    [4, -1, 1, 1, 6, 1, 3, 2, 0, 1, -2],
    [3, 0, 1, -1, 5, 0, 1, 1, 0, 1, 0],
    [3, 1, 0, -1, 7, 1, 2, 1, 0, 1, -2],
    [1, -1, 0, -1, 5, -1, 1, 1, 0, 1, -1],
    [2, -3, 0, 1, 6, -1, 2, 2, 0, 2, -1],
    [2, 0, 1, 1, 6, -1, 1, 2, 0, 1, -1],
    [2, 1, 1, 0, 6, 3, 1, 0, 0, 0, 0],
    [2, -1, 0, 0, 6, 1, 1, 0, 0, 0, 0],
    [4, 0, 0, 0, 8, 0, 0, 0, 0, 0, 0],
];

/// Third table in Simpson 1983, for odd `d = 4s - 1`, `m = 4t`.
pub const TABLE_3: [Row; 13] = [
    [2, -3, 1, -1, 2, 1, 1, 1, 1, -2, -1],
    [1, -2, 2, -1, 3, 1, 0, 1, 1, -2, 1],
    [6, -1, 0, -1, 6, 3, -1, 1, 1, -2, 0],
    [5, -1, 1, -1, 7, 2, 0, 1, 1, -2, 0],
    [3, -1, 1, 0, 5, -1, 2, 0, 0, 0, 0],
    [2, 0, 1, -1, 4, 0, 1, 1, 0, 1, -1],
    [4, -1, 2, 1, 6, 1, 1, 2, 0, 1, -2],
    [3, 0, -1, -1, 5, 0, 2, 1, 0, 1, -3],
    [3, 1, -1, -1, 7, 1, 0, 1, 0, 1, -1],
    [1, -1, 1, -1, 5, -1, 3, 1, 0, 1, -2],
    [2, -3, 2, 1, 6, -1, 2, 2, 0, 2, -2],
    [2, 0, 2, 1, 6, -1, 3, 2, 0, 1, -2],
    [2, -1, 1, 0, 6, -1, 1, 0, 0, 0, 0],
];

/// Fourth table in Simpson 1983, for odd `d = 4s + 1`, `m = 4t`.
pub const TABLE_4: [Row; 15] = [
    [2, -3, -1, -1, 2, 1, 1, 1, 1, -2, -2],
    [1, -2, 0, -1, 3, 1, 1, 1, 1, -2, -1],
    [6, -1, -1, -1, 6, 3, 0, 1, 1, -2, -1],
    [5, -1, 0, -1, 7, 2, 0, 1, 1, -2, -1],
    [1, -1, 0, 0, 3, 1, 0, 0, 0, 0, 0],
    [2, 0, 1, -1, 4, 0, 1, 1, 0, 1, -1],
    [4, -1, 1, 1, 6, 1, 2, 2, 0, 1, -2],
    [3, 0, -1, -1, 5, 0, 0, 1, 0, 1, -1],
    [3, 1, -1, -1, 7, 1, 0, 1, 0, 1, -1],
    [1, -1, -1, -1, 5, -1, 1, 1, 0, 1, -2],
    [2, -3, 0, 1, 6, -1, 1, 2, 0, 2, -1],
    [2, 0, 2, 1, 6, -1, 2, 2, 0, 1, -2],
    [2, -1, 1, 0, 6, -1, 0, 0, 0, 0, 0],
    [2, -1, 0, 0, 6, 1, 0, 0, 0, 0, 0],
    [4, 0, 0, 0, 8, 0, 0, 0, 0, 0, 0],
];

/// First table under Theorem 2 in Bermond 1976, for even `d = 2s`,
/// `m = 4t + 3`.
pub const TABLE_5: [Row; 10] = [
    [2, 0, 1, -1, 2, 2, 2, 1, 1, -1, 0],
    [1, 1, -1, -1, 3, 1, 3, 1, 1, -1, 0],
    [0, 2, -2, -1, 4, 0, 4, 1, 0, 1, -2],
    [2, 1, 1, 0, 4, 1, 3, 0, 0, 0, 0],
    [0, 1, -1, -1, 4, 1, 4, 1, 0, 1, -2],
    [1, 1, 0, 0, 5, 1, 4, 0, 0, 0, 0],
    [2, 2, 1, -1, 6, 0, 6, 1, 0, 1, -1],
    [2, 1, 0, -1, 6, 1, 6, 1, 0, 1, -2],
    [6, 0, 5, -1, 6, 2, 5, 1, 1, -1, 0],
    [5, 1, 3, -1, 7, 1, 6, 1, 1, -1, 0],
];

/// Second table under Theorem 2 in Bermond 1976, for odd `d = 2s - 1`,
/// `m = 4t + 1`.
pub const TABLE_6: [Row; 10] = [
    [2, 0, 0, -1, 2, 2, 0, 1, 1, -1, 0],
    [1, 1, -2, -1, 3, 1, 1, 1, 1, -1, 0],
    [0, 2, -3, -1, 4, 0, 2, 1, 0, 1, -2],
    [2, 1, 0, 0, 4, 1, 1, 0, 0, 0, 0],
    [0, 1, -2, -1, 4, 1, 2, 1, 0, 1, -3],
    [1, 1, -1, 0, 5, 1, 1, 0, 0, 0, 0],
    [2, 2, -1, -1, 6, 0, 3, 1, 0, 1, -2],
    [2, 1, -1, -1, 6, 1, 2, 1, 0, 1, -2],
    [6, 0, 2, -1, 6, 2, 1, 1, 1, -1, 0],
    [5, 1, 0, -1, 7, 1, 2, 1, 1, -1, 0],
];

/// Identifies one of the eight construction tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableId {
    Skolem1,
    Skolem2,
    Table1,
    Table2,
    Table3,
    Table4,
    Table5,
    Table6,
}

impl TableId {
    /// Rows of the identified table.
    pub fn rows(self) -> &'static [Row] {
        match self {
            TableId::Skolem1 => &TABLE_SKOLEM_1,
            TableId::Skolem2 => &TABLE_SKOLEM_2,
            TableId::Table1 => &TABLE_1,
            TableId::Table2 => &TABLE_2,
            TableId::Table3 => &TABLE_3,
            TableId::Table4 => &TABLE_4,
            TableId::Table5 => &TABLE_5,
            TableId::Table6 => &TABLE_6,
        }
    }
}
