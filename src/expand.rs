//! Affine expansion of a construction table at fixed parameters.

use crate::tables::Row;
use crate::types::LensletPair;

/// Expand every row of `table` at parameters `(t, s)`.
///
/// Each row `(a, b, c, d, e, f, g, h, i, k, l)` contributes the pairs
/// `(a*t + b*s + c + d*j, e*t + f*s + g + h*j)` for `j` in
/// `0..=(i*t + k*s + l)`; rows whose bound is negative contribute nothing.
/// Output order is table-row-major, then increasing `j` within a row.
///
/// Pure function of its inputs. Out-of-domain `(t, s)` never fault here:
/// they produce an under- or over-length pair list that [`crate::verify`]
/// rejects.
pub fn expand(table: &[Row], t: i64, s: i64) -> Vec<LensletPair> {
    let mut pairs = Vec::new();
    for &[a, b, c, d, e, f, g, h, i, k, l] in table {
        let j_max = i * t + k * s + l;
        if j_max < 0 {
            continue;
        }
        for j in 0..=j_max {
            pairs.push(LensletPair::new(
                a * t + b * s + c + d * j,
                e * t + f * s + g + h * j,
            ));
        }
    }
    pairs
}
