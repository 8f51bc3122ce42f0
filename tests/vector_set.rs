//! Tests for collection summation and ordering through the public API.
//!
//! These cover the zero-padding convention of `VectorSet::sum`, the in-place
//! reordering it leaves behind, and the known-value cases for magnitude,
//! normalization and the cross product's dimension check.

use approx::assert_relative_eq;
use nvec::{DimensionOrder, ToleranceOptions, VecError, Vector, VectorSet, add, cross, deeply_equal};

fn mixed_set() -> VectorSet {
    vec![
        Vector::from([]),
        Vector::from([1.0]),
        Vector::from([2.0, 3.0]),
        Vector::from([4.0, 5.0, 6.0]),
        Vector::from([7.0, 8.0]),
        Vector::from([9.0]),
    ]
    .into()
}

/// Padded sum of a 6-, 3- and 1-dimensional vector.
#[test]
fn padded_sum_known_value() {
    let mut set: VectorSet = [
        Vector::from([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
        Vector::from([7.0, 8.0, 9.0]),
        Vector::from([10.0]),
    ]
    .into_iter()
    .collect();
    let sum = set.sum().unwrap();
    assert!(deeply_equal(&sum, &Vector::from([18.0, 10.0, 12.0, 4.0, 5.0, 6.0])));
}

/// After `sum`, the set is ordered longest first.
#[test]
fn sum_leaves_set_sorted_descending() {
    let mut set = mixed_set();
    let sum = set.sum().unwrap();
    assert_eq!(sum, Vector::from([23.0, 16.0, 6.0]));
    let lens: Vec<usize> = set.iter().map(Vector::len).collect();
    assert!(lens.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(lens, vec![3, 2, 2, 1, 1, 0]);
}

/// `add` works on copies, so the caller's ordering survives.
#[test]
fn add_keeps_caller_order() {
    let set = mixed_set();
    let sum = add(&set);
    assert_eq!(sum, Vector::from([23.0, 16.0, 6.0]));
    assert_eq!(set, mixed_set());
}

#[test]
fn explicit_sort_and_swap() {
    let mut set = mixed_set();
    set.sort(DimensionOrder::Ascending);
    assert!(set.iter().zip(set.iter().skip(1)).all(|(a, b)| a.len() <= b.len()));
    set.swap(0, set.len() - 1);
    assert_eq!(set[0].len(), 3);
    assert!(set.less(set.len() - 1, 0));
}

#[test]
fn empty_set_sum() {
    let mut set = VectorSet::<f64>::new();
    assert!(set.sum().unwrap().is_empty());
    assert!(add(&set).is_empty());
}

#[test]
fn magnitude_and_unit_known_values() {
    assert_relative_eq!(Vector::from([2.0, 3.0]).mag(), 13f64.sqrt());
    assert_relative_eq!(Vector::from([4.0, 5.0, 6.0]).mag(), 77f64.sqrt());

    let unit = Vector::from([2.0, 3.0]).unit().unwrap();
    let s = 13f64.sqrt();
    assert_relative_eq!(unit.as_slice(), [2.0 / s, 3.0 / s].as_slice(), epsilon = 1e-15);
    assert!(Vector::from([0.0, 0.0]).unit().is_none());
}

#[test]
fn cross_dimension_error() {
    let i = Vector::from([1.0, 0.0, 0.0]);
    let j = Vector::from([0.0, 1.0, 0.0]);
    assert_eq!(cross(&i, &j), Ok(Vector::from([0.0, 0.0, 1.0])));

    match cross(&Vector::from([1.0, 2.0, 3.0, 4.0]), &j) {
        Err(VecError::Dimension { left, right, .. }) => {
            assert_eq!((left, right), (4, 3));
        }
        other => panic!("expected dimension error, got {other:?}"),
    }
}

#[test]
fn tolerance_options_drive_comparison() {
    let u = Vector::from([100.0, 200.0]);
    let v = Vector::from([101.0, 199.0]);
    assert!(ToleranceOptions::relative(0.01).vectors_match(&u, &v));
    assert!(!ToleranceOptions::default().vectors_match(&u, &v));
    assert!(ToleranceOptions::exact().vectors_match(&u, &u));
}
