//! Non-redundant pupil configurations for sparse-aperture masking.
//!
//! Given a number of baselines `m` and a first baseline `d`, [`generate`]
//! pairs up `2m` numbered lenslets so that the absolute pair differences
//! cover exactly the contiguous range `d..=d+m-1`, each baseline once, with
//! every pupil index in `1..=2m` used exactly once. The constructions are
//! the perfect/near-perfect difference sets of Skolem (1958, `d = 1`),
//! Davies (1959, `d = 2`), Simpson (1983) and Bermond (1976, `d >= 3`),
//! selected by the residue class of `(d, m)` modulo 4.
//!
//! [`verify`] is the matching acceptance check: it validates any candidate
//! pair list against `(d, m)`, whether produced here or supplied externally.

pub mod davies;
pub mod dispatch;
pub mod error;
pub mod expand;
pub mod tables;
pub mod types;
pub mod verify;

pub use dispatch::{generate, route, Route};
pub use error::ApertureError;
pub use tables::TableId;
pub use types::{baselines, Configuration, LensletPair};
pub use verify::verify;
