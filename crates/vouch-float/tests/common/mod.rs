#![allow(dead_code)]

use vouch_core::{AssertStrategy, ExpectStrategy};
use vouch_float::{FloatKind, FloatSubject};

/// Subject that panics on failure, for propositions expected to pass.
pub fn assert_that<F: FloatKind>(actual: F) -> FloatSubject<'static, F> {
    FloatSubject::of(&AssertStrategy, actual)
}

fn single_failure(expect: &ExpectStrategy) -> String {
    let messages = expect.messages();
    assert_eq!(messages.len(), 1, "expected exactly one failure, got {messages:?}");
    messages[0].clone()
}

pub fn assert_is_within_fails<F: FloatKind>(actual: F, tolerance: F, expected: F) {
    let expect = ExpectStrategy::new();
    FloatSubject::of(&expect, actual)
        .named("testValue")
        .is_within(tolerance)
        .unwrap()
        .of(expected);
    assert_eq!(
        single_failure(&expect),
        format!(
            "testValue (<{}>) and <{}> should have been finite values within <{}> of each other",
            actual.render(),
            expected.render(),
            tolerance.render()
        )
    );
}

pub fn assert_is_not_within_fails<F: FloatKind>(actual: F, tolerance: F, expected: F) {
    let expect = ExpectStrategy::new();
    FloatSubject::of(&expect, actual)
        .named("testValue")
        .is_not_within(tolerance)
        .unwrap()
        .of(expected);
    assert_eq!(
        single_failure(&expect),
        format!(
            "testValue (<{}>) and <{}> should have been finite values not within <{}> of each other",
            actual.render(),
            expected.render(),
            tolerance.render()
        )
    );
}

pub fn assert_negative_tolerance_rejected<F: FloatKind>(actual: F, tolerance: F, expected: F) {
    let expect = ExpectStrategy::new();
    let subject = FloatSubject::of(&expect, actual);
    for err in [
        subject.is_within(tolerance).map(|c| c.of(expected)).unwrap_err(),
        subject.is_not_within(tolerance).map(|c| c.of(expected)).unwrap_err(),
    ] {
        assert!(err.is_usage());
        assert_eq!(
            err.info().message,
            format!("tolerance ({}) cannot be negative", tolerance.render())
        );
    }
    assert!(expect.is_clean(), "usage errors must not reach the strategy");
}

/// Runs `check` on a named subject over `value` and returns the single failure.
pub fn failure_of<F: FloatKind>(value: Option<F>, check: impl Fn(&FloatSubject<'_, F>)) -> String {
    let expect = ExpectStrategy::new();
    let subject = FloatSubject::new(&expect, value).named("testValue");
    check(&subject);
    single_failure(&expect)
}
