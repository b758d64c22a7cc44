//! Davies (1959) iterative constructions for baselines starting at 2.
//!
//! Both variants walk a single pupil cursor through `1..`. Emitting a
//! baseline `L` records the pair `(cursor, cursor + L + 1)` and advances the
//! cursor by one; skip steps advance the cursor without emitting, leaving
//! pupil slots for pairs placed elsewhere in the block structure. The two
//! variants share the executor and differ only in their instruction lists.

use crate::types::{Configuration, LensletPair};

/// Second pupil of an emitted pair sits one slot past the baseline.
const OFFSET_CONVENTION: i64 = 1;

/// One instruction for the block executor.
#[derive(Debug, Clone, Copy)]
enum Step {
    /// Emit a pair realising this baseline, then advance the cursor.
    Emit(i64),
    /// Advance the cursor without emitting.
    Skip(i64),
}

fn run(steps: &[Step]) -> Configuration {
    let mut pairs = Vec::new();
    let mut cursor = 1i64;
    for step in steps {
        match *step {
            Step::Emit(baseline) => {
                pairs.push(LensletPair::new(
                    cursor,
                    cursor + baseline + OFFSET_CONVENTION,
                ));
                cursor += 1;
            }
            Step::Skip(n) => cursor += n,
        }
    }
    pairs
}

/// `count` baselines starting at `first`, descending by 2.
fn descending(steps: &mut Vec<Step>, first: i64, count: i64) {
    for j in 0..count {
        steps.push(Step::Emit(first - 2 * j));
    }
}

/// Davies construction for `d = 2`, `m = 4t`. Emits exactly `4t` pairs.
pub fn davies_1(t: i64) -> Configuration {
    let mut steps = Vec::new();
    descending(&mut steps, 4 * t - 4, t - 1);
    steps.push(Step::Emit(4 * t - 2));
    descending(&mut steps, 2 * t - 3, t - 1);
    steps.push(Step::Emit(4 * t - 1));
    steps.push(Step::Skip(2 * (t - 1)));
    steps.push(Step::Emit(4 * t));
    descending(&mut steps, 4 * t - 3, t - 1);
    steps.push(Step::Skip(1));
    descending(&mut steps, 2 * t - 2, t - 1);
    steps.push(Step::Emit(2 * t - 1));
    steps.push(Step::Skip(2 * (t - 1) + 2));
    run(&steps)
}

/// Davies construction for `d = 2`, `m = 4t - 1`. Emits exactly `4t - 1`
/// pairs; the block after the long skip emits `2t - 1` where variant 1
/// emits `4t`, and the trailing emission of `2t - 1` is absent.
pub fn davies_2(t: i64) -> Configuration {
    let mut steps = Vec::new();
    descending(&mut steps, 4 * t - 4, t - 1);
    steps.push(Step::Emit(4 * t - 2));
    descending(&mut steps, 2 * t - 3, t - 1);
    steps.push(Step::Emit(4 * t - 1));
    steps.push(Step::Skip(2 * (t - 1)));
    steps.push(Step::Emit(2 * t - 1));
    descending(&mut steps, 4 * t - 3, t - 1);
    steps.push(Step::Skip(1));
    descending(&mut steps, 2 * t - 2, t - 1);
    steps.push(Step::Skip(2 * (t - 1) + 2));
    run(&steps)
}
