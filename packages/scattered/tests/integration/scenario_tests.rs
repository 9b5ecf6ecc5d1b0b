//! Fill, append and transform a vector the way a simulation pass would.

use anyhow::Result;
use ntest::timeout;

use scattered::{get, ScatteredError, Vector};

use crate::helpers::{k, numbered_vector, TestType};

fn square(record: &mut scattered::RecordMut<'_, TestType>) {
    let current = record.to_record();
    record.set(TestType {
        x: current.x * current.x,
        y: current.y * current.y,
        i: current.i * current.i,
        b: current.b && current.b,
    });
}

#[timeout(1000)]
#[test]
fn test_fill_push_and_square() -> Result<()> {
    let mut vector = Vector::<TestType>::with_len(10);
    for i in 0..10 {
        vector.at_mut(i)?.set(TestType::numbered(i as i32));
    }
    assert_eq!(vector.len(), 10);

    vector.push(TestType {
        x: 4.0,
        y: 3.0,
        i: 2,
        b: false,
    });
    assert_eq!(vector.len(), 11);
    let pushed = vector.at(10)?;
    assert_eq!(*get::<k::X, _>(pushed), 4.0);
    assert_eq!(*get::<k::Y, _>(pushed), 3.0);
    assert_eq!(*get::<k::I, _>(pushed), 2);
    assert!(!*get::<k::B, _>(pushed));

    for mut record in vector.iter_mut() {
        square(&mut record);
    }

    assert_eq!(vector.at(0)?.to_record(), TestType::numbered(0));
    assert_eq!(*get::<k::I, _>(vector.at(3)?), 9);
    assert_eq!(*get::<k::Y, _>(vector.at(3)?), 9.0);
    assert_eq!(vector.at(10)?.to_record().i, 4);
    Ok(())
}

#[timeout(1000)]
#[test]
fn test_cursor_walk_matches_indexing() {
    let vector = numbered_vector(10);
    let mut it = vector.begin();
    let end = vector.end();
    let mut index = 0;
    while it != end {
        assert_eq!(it.get(), vector.row(index));
        assert_eq!(it - vector.begin(), index as isize);
        it.inc();
        index += 1;
    }
    assert_eq!(index, vector.len());
}

#[timeout(1000)]
#[test]
fn test_single_field_pass_leaves_other_columns() {
    let mut vector = numbered_vector(6);
    let untouched = vector.column::<k::Y>().to_vec();

    for x in vector.column_mut::<k::X>() {
        *x *= *x;
    }

    assert_eq!(vector.column::<k::X>(), &[0.0, 1.0, 4.0, 9.0, 16.0, 25.0]);
    assert_eq!(vector.column::<k::Y>(), untouched.as_slice());
    vector.columns().check_synchronized();
}

#[timeout(1000)]
#[test]
fn test_out_of_range_reports_index_and_len() {
    let vector = numbered_vector(3);
    let err = vector.at(5).unwrap_err();
    assert_eq!(err, ScatteredError::OutOfRange { index: 5, len: 3 });

    let wrapped: anyhow::Error = err.into();
    assert!(wrapped.to_string().contains("Index 5"));
}

#[timeout(1000)]
#[test]
fn test_record_round_trip() {
    let record = TestType {
        x: 1.5,
        y: -2.25,
        i: 17,
        b: true,
    };
    let fields = Vector::<TestType>::from_type(record);
    let view = scattered::RecordRef::<TestType>::of(&fields);
    assert_eq!(Vector::to_type(view), record);
}

#[timeout(1000)]
#[test]
fn test_proxy_copies_between_positions() {
    let mut vector = numbered_vector(4);
    let first = vector.row(0).to_record();
    vector.row_mut(3).set(first);
    assert_eq!(vector.row(3), vector.row(0));

    let mut copy = Vector::<TestType>::new();
    copy.push_ref(vector.row(2));
    assert_eq!(copy.row(0).to_record(), TestType::numbered(2));
}
