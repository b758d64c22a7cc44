use aperture_config::{baselines, generate, verify, LensletPair};

fn pairs(raw: &[(i64, i64)]) -> Vec<LensletPair> {
    raw.iter().map(|&(a, b)| LensletPair::new(a, b)).collect()
}

#[test]
fn skolem_d1_m8() {
    let config = generate(1, 8).unwrap();
    assert_eq!(config.len(), 8);
    assert_eq!(baselines(&config), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert!(verify(1, 8, &config));
    // Exact output of the first Skolem table at t = 2, row-major order.
    assert_eq!(
        config,
        pairs(&[
            (8, 16),
            (9, 15),
            (10, 14),
            (11, 13),
            (5, 12),
            (4, 7),
            (1, 6),
            (2, 3),
        ])
    );
}

#[test]
fn skolem_d1_m9() {
    let config = generate(1, 9).unwrap();
    assert_eq!(config.len(), 9);
    assert_eq!(baselines(&config), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert!(verify(1, 9, &config));
}

#[test]
fn davies_d2_m8() {
    let config = generate(2, 8).unwrap();
    assert_eq!(config.len(), 8);
    assert_eq!(baselines(&config), vec![2, 3, 4, 5, 6, 7, 8, 9]);
    assert!(verify(2, 8, &config));
    // Exact output of the first Davies generator at t = 2.
    assert_eq!(
        config,
        pairs(&[
            (1, 6),
            (2, 9),
            (3, 5),
            (4, 12),
            (7, 16),
            (8, 14),
            (10, 13),
            (11, 15),
        ])
    );
}

#[test]
fn davies_d2_m7() {
    let config = generate(2, 7).unwrap();
    assert_eq!(config.len(), 7);
    assert_eq!(baselines(&config), vec![2, 3, 4, 5, 6, 7, 8]);
    assert!(verify(2, 7, &config));
}

#[test]
fn every_construction_route_produces_a_verified_configuration() {
    // One known-good (d, m) per table and per Davies variant.
    let cases = [
        (1, 8),   // Skolem table 1
        (1, 9),   // Skolem table 2
        (2, 8),   // Davies variant 1
        (2, 7),   // Davies variant 2
        (4, 8),   // Simpson table 1
        (6, 12),  // Simpson table 2
        (7, 16),  // Simpson table 3
        (5, 12),  // Simpson table 4
        (4, 7),   // Bermond table 5
        (3, 5),   // Bermond table 6
    ];
    for (d, m) in cases {
        let config = generate(d, m).unwrap();
        assert_eq!(config.len() as i64, m, "length for d = {d}, m = {m}");
        assert!(verify(d, m, &config), "verify for d = {d}, m = {m}");
    }
}

#[test]
fn pupil_indices_cover_the_full_range_once() {
    let config = generate(5, 12).unwrap();
    let mut pupils: Vec<i64> = config.iter().flat_map(|p| [p.a, p.b]).collect();
    pupils.sort_unstable();
    assert_eq!(pupils, (1..=24).collect::<Vec<i64>>());
}

#[test]
fn generation_is_deterministic() {
    assert_eq!(generate(6, 12).unwrap(), generate(6, 12).unwrap());
    assert_eq!(generate(2, 11).unwrap(), generate(2, 11).unwrap());
}
