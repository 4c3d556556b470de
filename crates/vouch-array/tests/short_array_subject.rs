use vouch_array::ShortArraySubject;
use vouch_core::ExpectStrategy;

const SAMPLE: [i16; 3] = [1, 2, 3];

#[test]
fn is_equal_to_same_elements() {
    let expect = ExpectStrategy::new();
    ShortArraySubject::of(&expect, &SAMPLE).is_equal_to(&vec![1i16, 2, 3]);
    ShortArraySubject::of(&expect, &SAMPLE).is_equal_to(&[1i16, 2, 3]);
    ShortArraySubject::of(&expect, &SAMPLE).is_equal_to(&vec![1i16, 2, 3].into_boxed_slice());
    assert!(expect.is_clean());
}

#[test]
fn is_equal_to_same_array() {
    static SHARED: [i16; 3] = [1, 2, 3];
    let expect = ExpectStrategy::new();
    let shared: &'static [i16] = &SHARED;
    ShortArraySubject::of(&expect, shared).is_equal_to(&shared);
    assert!(expect.is_clean());
}

#[test]
fn is_equal_to_fails_listing_expected() {
    let expect = ExpectStrategy::new();
    ShortArraySubject::of(&expect, &SAMPLE).is_equal_to(&vec![1i16, 2, 4]);
    ShortArraySubject::of(&expect, &SAMPLE).is_equal_to(&vec![1i16, 2]);
    ShortArraySubject::of(&expect, &SAMPLE)
        .named("shorts")
        .is_equal_to(&vec![3i16, 2, 1]);
    assert_eq!(
        expect.messages(),
        vec![
            "Not true that (short[]) [1, 2, 3] is equal to <[1, 2, 4]>".to_string(),
            "Not true that (short[]) [1, 2, 3] is equal to <[1, 2]>".to_string(),
            "Not true that shorts (<[1, 2, 3]>) is equal to <[3, 2, 1]>".to_string(),
        ]
    );
}

#[test]
fn is_equal_to_bad_type() {
    let expect = ExpectStrategy::new();
    ShortArraySubject::of(&expect, &SAMPLE).is_equal_to(&vec![1i32, 2, 3]);
    ShortArraySubject::of(&expect, &SAMPLE).is_equal_to(&"[1, 2, 3]");
    assert_eq!(
        expect.messages(),
        vec![
            "Incompatible types compared. expected: Vec<i32>, actual: short[]".to_string(),
            "Incompatible types compared. expected: &str, actual: short[]".to_string(),
        ]
    );
}

#[test]
fn is_not_equal_to_different_elements() {
    let expect = ExpectStrategy::new();
    ShortArraySubject::of(&expect, &SAMPLE).is_not_equal_to(&vec![1i16, 2]);
    ShortArraySubject::of(&expect, &SAMPLE).is_not_equal_to(&vec![1i16, 2, 4]);
    assert!(expect.is_clean());
}

#[test]
fn is_not_equal_to_fails_when_equal() {
    let expect = ExpectStrategy::new();
    ShortArraySubject::of(&expect, &SAMPLE).is_not_equal_to(&vec![1i16, 2, 3]);
    assert_eq!(
        expect.messages(),
        vec!["(short[]) [1, 2, 3] unexpectedly equal to [1, 2, 3].".to_string()]
    );
}

#[test]
fn is_not_equal_to_incompatible_type_never_fails() {
    let expect = ExpectStrategy::new();
    ShortArraySubject::of(&expect, &SAMPLE).is_not_equal_to(&"foo");
    ShortArraySubject::of(&expect, &SAMPLE).is_not_equal_to(&vec![1i64, 2, 3]);
    ShortArraySubject::of(&expect, &SAMPLE).is_not_equal_to(&42u8);
    assert!(expect.is_clean());
}

#[test]
fn absent_array_is_never_equal() {
    let expect = ExpectStrategy::new();
    let absent = ShortArraySubject::new(&expect, None);
    absent.is_equal_to(&vec![1i16]);
    absent.is_not_equal_to(&vec![1i16]);
    assert_eq!(
        expect.messages(),
        vec!["Not true that (short[]) null is equal to <[1]>".to_string()]
    );
}

#[test]
fn length_propositions() {
    let expect = ExpectStrategy::new();
    let empty: [i16; 0] = [];
    ShortArraySubject::of(&expect, &empty).is_empty();
    ShortArraySubject::of(&expect, &SAMPLE).is_not_empty();
    ShortArraySubject::of(&expect, &SAMPLE).has_length(3);
    assert!(expect.is_clean());

    ShortArraySubject::of(&expect, &SAMPLE).is_empty();
    ShortArraySubject::of(&expect, &empty).is_not_empty();
    ShortArraySubject::of(&expect, &SAMPLE).has_length(4);
    ShortArraySubject::new(&expect, None).has_length(0);
    assert_eq!(
        expect.messages(),
        vec![
            "Not true that (short[]) [1, 2, 3] is empty".to_string(),
            "Not true that (short[]) [] is not empty".to_string(),
            "Not true that (short[]) [1, 2, 3] has length <4>".to_string(),
            "Not true that (short[]) null has length <0>".to_string(),
        ]
    );
}

#[test]
fn list_view_preserves_order_and_strategy() {
    let expect = ExpectStrategy::new();
    let subject = ShortArraySubject::of(&expect, &SAMPLE).named("shorts");
    assert_eq!(subject.underlying_type(), "short");
    assert_eq!(subject.list_representation(), Some(vec![1, 2, 3]));

    let list = subject.as_list();
    list.has_size(3);
    list.contains(&2);
    list.is_ordered();
    assert!(expect.is_clean());

    list.contains(&5);
    assert_eq!(
        expect.messages(),
        vec!["shorts (<[1, 2, 3]>) should have contained <5>".to_string()]
    );
}
