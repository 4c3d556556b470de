use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vouch_core::{ExpectStrategy, VouchError};
use vouch_float::FloatSubject;

fn bit_pattern_pairs(seed: u64, count: usize) -> Vec<(f32, f32)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (f32::from_bits(rng.gen::<u32>()), f32::from_bits(rng.gen::<u32>())))
        .collect()
}

#[test]
fn seeded_pairs_are_reproducible() {
    let first: Vec<(u32, u32)> = bit_pattern_pairs(1234, 64)
        .into_iter()
        .map(|(a, e)| (a.to_bits(), e.to_bits()))
        .collect();
    let second: Vec<(u32, u32)> = bit_pattern_pairs(1234, 64)
        .into_iter()
        .map(|(a, e)| (a.to_bits(), e.to_bits()))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn exactly_one_of_within_and_not_within_holds_for_finite_pairs() -> Result<(), VouchError> {
    let mut rng = StdRng::seed_from_u64(7);
    for (actual, expected) in bit_pattern_pairs(42, 4096) {
        let tolerance = f32::from_bits(rng.gen::<u32>()).abs();
        if !tolerance.is_finite() {
            continue;
        }
        let expect = ExpectStrategy::new();
        let subject = FloatSubject::of(&expect, actual);
        subject.is_within(tolerance)?.of(expected);
        subject.is_not_within(tolerance)?.of(expected);
        let failures = expect.failure_count();
        if actual.is_finite() && expected.is_finite() {
            assert_eq!(failures, 1, "{actual:?} vs {expected:?} at {tolerance:?}");
        } else {
            assert_eq!(failures, 2, "{actual:?} vs {expected:?} at {tolerance:?}");
        }
    }
    Ok(())
}
