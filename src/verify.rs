//! Black-box acceptance check for a candidate configuration.

use crate::types::{baselines, LensletPair};

/// Check that `pairs` is a correct configuration for `(d, m)`.
///
/// Accepts iff the sorted baselines equal `d..=d+m-1` and the sorted
/// flattened pupil indices equal `1..=2m`, each exactly once. Order of the
/// supplied pairs (and the orientation within each pair) is irrelevant. The
/// check is independent of how `pairs` was produced, so externally supplied
/// candidates can be validated as well. Never fails; a malformed candidate
/// simply returns `false`, including extreme `d`/`m` or pupil indices for
/// which the expected ranges cannot be formed.
pub fn verify(d: i64, m: i64, pairs: &[LensletPair]) -> bool {
    if pairs.len() as i64 != m {
        return false;
    }
    let Some(end) = d.checked_add(m) else {
        return false;
    };
    // Pupils outside 1..=2m can never match; rejecting them first also
    // keeps the baseline differences within i64.
    if pairs
        .iter()
        .any(|p| p.a < 1 || p.a > 2 * m || p.b < 1 || p.b > 2 * m)
    {
        return false;
    }

    let expected_baselines: Vec<i64> = (d..end).collect();
    let expected_pupils: Vec<i64> = (1..=2 * m).collect();

    let actual_baselines = baselines(pairs);

    let mut actual_pupils = Vec::with_capacity(pairs.len() * 2);
    for pair in pairs {
        actual_pupils.push(pair.a);
        actual_pupils.push(pair.b);
    }
    actual_pupils.sort_unstable();

    actual_baselines == expected_baselines && actual_pupils == expected_pupils
}
