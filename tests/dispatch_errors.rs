use aperture_config::{generate, route, ApertureError};

#[test]
fn rejects_structurally_impossible_requests() {
    // m < 2d - 1: too few baselines for the first one requested.
    assert_eq!(
        generate(5, 2),
        Err(ApertureError::InfeasibleRequest { d: 5, m: 2 })
    );
    assert_eq!(
        generate(10, 16),
        Err(ApertureError::InfeasibleRequest { d: 10, m: 16 })
    );
}

#[test]
fn rejects_nonpositive_inputs() {
    assert_eq!(
        generate(0, 4),
        Err(ApertureError::InfeasibleRequest { d: 0, m: 4 })
    );
    assert_eq!(
        generate(3, 0),
        Err(ApertureError::InfeasibleRequest { d: 3, m: 0 })
    );
    assert_eq!(
        generate(-1, 8),
        Err(ApertureError::InfeasibleRequest { d: -1, m: 8 })
    );
}

#[test]
fn rejects_uncovered_residue_classes() {
    // d = 1 has Skolem solutions only for m mod 4 in {0, 1}.
    assert_eq!(
        generate(1, 10),
        Err(ApertureError::UnsupportedResidueClass { d: 1, m: 10 })
    );
    assert_eq!(
        generate(1, 7),
        Err(ApertureError::UnsupportedResidueClass { d: 1, m: 7 })
    );

    // d = 2 has Davies solutions only for m mod 4 in {0, 3}.
    assert_eq!(
        generate(2, 5),
        Err(ApertureError::UnsupportedResidueClass { d: 2, m: 5 })
    );
    assert_eq!(
        generate(2, 6),
        Err(ApertureError::UnsupportedResidueClass { d: 2, m: 6 })
    );

    // Even d > 2: m mod 4 in {1, 2} has no table.
    assert_eq!(
        generate(4, 9),
        Err(ApertureError::UnsupportedResidueClass { d: 4, m: 9 })
    );
    assert_eq!(
        generate(6, 14),
        Err(ApertureError::UnsupportedResidueClass { d: 6, m: 14 })
    );

    // Odd d > 2: m mod 4 in {2, 3} has no table.
    assert_eq!(
        generate(5, 10),
        Err(ApertureError::UnsupportedResidueClass { d: 5, m: 10 })
    );
    assert_eq!(
        generate(5, 11),
        Err(ApertureError::UnsupportedResidueClass { d: 5, m: 11 })
    );
}

#[test]
fn extreme_requests_fail_cleanly() {
    // Feasibility on extreme d must report the error, not overflow.
    assert_eq!(
        generate(i64::MAX, 3),
        Err(ApertureError::InfeasibleRequest { d: i64::MAX, m: 3 })
    );
    assert_eq!(
        generate(i64::MAX / 2 + 1, 8),
        Err(ApertureError::InfeasibleRequest {
            d: i64::MAX / 2 + 1,
            m: 8
        })
    );
    // Baseline counts beyond the representable range are rejected before
    // any generator arithmetic runs.
    assert_eq!(
        generate(1, i64::MAX - 7),
        Err(ApertureError::InfeasibleRequest {
            d: 1,
            m: i64::MAX - 7
        })
    );
    assert_eq!(
        generate(2, i64::MAX),
        Err(ApertureError::InfeasibleRequest { d: 2, m: i64::MAX })
    );
}

#[test]
fn feasibility_is_checked_before_residue_class() {
    // m mod 4 = 2 would be unsupported for d = 1, but m < 2d - 1 wins.
    assert_eq!(
        route(7, 10),
        Err(ApertureError::InfeasibleRequest { d: 7, m: 10 })
    );
}

#[test]
fn route_and_generate_agree_on_errors() {
    for (d, m) in [(5, 2), (1, 10), (2, 6), (0, 1), (6, 14)] {
        assert_eq!(route(d, m).unwrap_err(), generate(d, m).unwrap_err());
    }
}

#[test]
fn error_messages_name_the_request() {
    let err = generate(5, 2).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("d = 5"));
    assert!(msg.contains("m = 2"));
}
