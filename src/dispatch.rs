//! Feasibility checking and residue-class routing.

use crate::davies::{davies_1, davies_2};
use crate::error::ApertureError;
use crate::expand::expand;
use crate::tables::TableId;
use crate::types::Configuration;

/// The construction selected for a `(d, m)` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Affine expansion of a registry table at parameters `(t, s)`.
    Table { id: TableId, t: i64, s: i64 },
    /// First Davies generator at parameter `t` (`d = 2`, `m = 4t`).
    Davies1 { t: i64 },
    /// Second Davies generator at parameter `t` (`d = 2`, `m = 4t - 1`).
    Davies2 { t: i64 },
}

/// Select the construction for `(d, m)` without generating anything.
///
/// Fails with [`ApertureError::InfeasibleRequest`] when `m < 2d - 1` (or a
/// precondition `d >= 1`, `m >= 1` is violated), and with
/// [`ApertureError::UnsupportedResidueClass`] when the request is feasible
/// but its `(m mod 4, d mod 4)` cell has no published construction.
/// Largest accepted baseline count. Every affine term and pupil index the
/// generators compute stays within `i64` for `m` up to this bound.
const MAX_BASELINES: i64 = i64::MAX / 4;

pub fn route(d: i64, m: i64) -> Result<Route, ApertureError> {
    // `(m - 1) / 2 >= d - 1` is the bound `m >= 2d - 1` rewritten so the
    // comparison cannot overflow for extreme `d`.
    if d < 1 || m < 1 || (m - 1) / 2 < d - 1 || m > MAX_BASELINES {
        return Err(ApertureError::InfeasibleRequest { d, m });
    }
    let mod_m = m % 4;
    let mod_d = d % 4;
    let selected = match d {
        1 => match mod_m {
            0 => Route::Table { id: TableId::Skolem1, t: m / 4, s: 0 },
            1 => Route::Table { id: TableId::Skolem2, t: m / 4, s: 0 },
            _ => return Err(ApertureError::UnsupportedResidueClass { d, m }),
        },
        2 => match mod_m {
            0 => Route::Davies1 { t: m / 4 },
            3 => Route::Davies2 { t: (m + 1) / 4 },
            _ => return Err(ApertureError::UnsupportedResidueClass { d, m }),
        },
        _ if d % 2 == 0 => match (mod_m, mod_d) {
            (0, 0) => Route::Table { id: TableId::Table1, t: m / 4, s: d / 4 },
            (0, 2) => Route::Table { id: TableId::Table2, t: m / 4, s: (d - 2) / 4 },
            (3, _) => Route::Table { id: TableId::Table5, t: (m - 3) / 4, s: d / 2 },
            _ => return Err(ApertureError::UnsupportedResidueClass { d, m }),
        },
        _ => match (mod_m, mod_d) {
            (0, 1) => Route::Table { id: TableId::Table4, t: m / 4, s: (d - 1) / 4 },
            (0, 3) => Route::Table { id: TableId::Table3, t: m / 4, s: (d + 1) / 4 },
            (1, _) => Route::Table { id: TableId::Table6, t: (m - 1) / 4, s: (d + 1) / 2 },
            _ => return Err(ApertureError::UnsupportedResidueClass { d, m }),
        },
    };
    Ok(selected)
}

/// Generate the pupil pairing for `m` baselines starting at `d`.
///
/// The sole generating entry point: validates the request, routes it to a
/// construction table or a Davies generator and returns that generator's
/// pair sequence verbatim, with no reordering or post-processing.
pub fn generate(d: i64, m: i64) -> Result<Configuration, ApertureError> {
    let pairs = match route(d, m)? {
        Route::Table { id, t, s } => expand(id.rows(), t, s),
        Route::Davies1 { t } => davies_1(t),
        Route::Davies2 { t } => davies_2(t),
    };
    Ok(pairs)
}
