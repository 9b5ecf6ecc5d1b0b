//! Standard algorithms run against the columnar vector and an equivalent
//! `Vec` of records must agree.

use std::cmp::Ordering;

use ntest::timeout;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use scattered::Vector;

use crate::helpers::{k, numbered_vector, TestType};

fn random_records(count: usize, seed: u64) -> Vec<TestType> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| TestType {
            x: rng.gen_range(-100.0..100.0),
            y: rng.gen_range(-1.0..1.0),
            i: rng.gen_range(0..8),
            b: rng.gen(),
        })
        .collect()
}

#[timeout(1000)]
#[test]
fn test_stable_sort_matches_array_of_records() {
    let records = random_records(200, 7);
    let mut vector = Vector::from(records.clone());
    let mut expected = records;

    expected.sort_by(|a, b| a.i.cmp(&b.i));
    vector.sort_by(|a, b| a.get::<k::I>().cmp(b.get::<k::I>()));

    assert_eq!(vector.into_records(), expected);
}

#[timeout(1000)]
#[test]
fn test_float_key_sort_matches_array_of_records() {
    let records = random_records(100, 11);
    let mut vector = Vector::from(records.clone());
    let mut expected = records;

    let by_x = |a: &f32, b: &f32| a.partial_cmp(b).unwrap_or(Ordering::Equal);
    expected.sort_by(|a, b| by_x(&a.x, &b.x));
    vector.sort_by(|a, b| by_x(a.get::<k::X>(), b.get::<k::X>()));

    let expected_x: Vec<f32> = expected.iter().map(|r| r.x).collect();
    assert_eq!(vector.column::<k::X>(), expected_x.as_slice());
    assert_eq!(vector.into_records(), expected);
}

#[timeout(1000)]
#[test]
fn test_iterator_adapters_agree() {
    let records = random_records(64, 3);
    let vector = Vector::from(records.clone());

    let evens = vector.iter().filter(|r| *r.get::<k::B>()).count();
    assert_eq!(evens, records.iter().filter(|r| r.b).count());

    let total: i64 = vector.iter().map(|r| i64::from(*r.get::<k::I>())).sum();
    assert_eq!(total, records.iter().map(|r| i64::from(r.i)).sum::<i64>());

    let last_odd = vector.iter().rev().find(|r| !*r.get::<k::B>()).map(|r| r.to_record());
    assert_eq!(last_odd, records.iter().rev().find(|r| !r.b).copied());
}

#[timeout(1000)]
#[test]
fn test_copy_through_iterators() {
    let source = numbered_vector(5);
    let copy: Vector<TestType> = source.iter().map(|r| r.to_record()).collect();
    assert_eq!(copy, source);

    let mut target = Vector::<TestType>::with_len(5);
    for (mut dst, src) in target.iter_mut().zip(source.iter()) {
        dst.assign(src);
    }
    assert_eq!(target, source);
}

#[timeout(1000)]
#[test]
fn test_binary_search_on_one_column() {
    let vector = numbered_vector(50);
    let ids = vector.column::<k::I>();
    assert_eq!(ids.binary_search(&37), Ok(37));
    assert_eq!(vector.row(37).to_record(), TestType::numbered(37));
}

#[timeout(1000)]
#[test]
fn test_swap_based_reverse() {
    let mut vector = numbered_vector(7);
    let len = vector.len();
    for index in 0..len / 2 {
        vector.swap(index, len - 1 - index);
    }
    let reversed: Vec<_> = (0..7).rev().map(TestType::numbered).collect();
    assert_eq!(vector.into_records(), reversed);
}
