//! Algebraic properties of the summation routine

use arraysum::{format_report, sum_array, SAMPLE};
use proptest::prelude::*;

// Element bound keeps every generated sum, plus one appended element, inside i32
const ELEMENT_BOUND: i32 = 1 << 20;

fn element() -> impl Strategy<Value = i32> {
    -ELEMENT_BOUND..=ELEMENT_BOUND
}

fn sequence() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(element(), 0..64)
}

#[test]
fn test_concrete_cases() {
    assert_eq!(sum_array::<i32, _>(&[] as &[i32]), 0);
    assert_eq!(sum_array::<i32, _>(&[5i32]), 5);
    assert_eq!(sum_array::<i32, _>(&[-3i32, 3]), 0);
    assert_eq!(sum_array::<i32, _>(&SAMPLE), 15);
}

#[test]
fn test_sample_report() {
    let total: i32 = sum_array(&SAMPLE);
    assert_eq!(format_report(total), "The sum of the array is: 15");
}

proptest! {
    #[test]
    fn prop_order_does_not_change_total(seq in sequence()) {
        let forward: i32 = sum_array(&seq);
        let backward: i32 = sum_array(seq.iter().rev());
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_appending_adds_element(seq in sequence(), x in element()) {
        let before: i32 = sum_array(&seq);
        let mut extended = seq.clone();
        extended.push(x);
        let after: i32 = sum_array(&extended);
        prop_assert_eq!(after, before + x);
    }

    #[test]
    fn prop_matches_wide_reference(seq in sequence()) {
        let narrow: i32 = sum_array(&seq);
        let wide: i64 = sum_array(seq.iter().map(|&v| i64::from(v)));
        prop_assert_eq!(i64::from(narrow), wide);
    }
}
