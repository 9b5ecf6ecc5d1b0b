//! Properties that must hold for any records and positions.

use proptest::prelude::*;

use scattered::{RecordRef, Vector};

use crate::helpers::{k, TestType};

fn test_type() -> impl Strategy<Value = TestType> {
    (-1.0e6f32..1.0e6, -1.0e9f64..1.0e9, any::<i32>(), any::<bool>())
        .prop_map(|(x, y, i, b)| TestType { x, y, i, b })
}

fn records(max: usize) -> impl Strategy<Value = Vec<TestType>> {
    prop::collection::vec(test_type(), 0..max)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_record_round_trip(record in test_type()) {
        let fields = Vector::<TestType>::from_type(record);
        prop_assert_eq!(Vector::to_type(RecordRef::<TestType>::of(&fields)), record);
    }

    #[test]
    fn prop_len_matches_cursor_distance(len in 0usize..200) {
        let vector = Vector::<TestType>::with_len(len);
        prop_assert_eq!(vector.len(), len);
        prop_assert_eq!(vector.end() - vector.begin(), len as isize);
        vector.columns().check_synchronized();
    }

    #[test]
    fn prop_push_appends_one(existing in records(32), record in test_type()) {
        let mut vector = Vector::from(existing.clone());
        vector.push(record);

        prop_assert_eq!(vector.len(), existing.len() + 1);
        prop_assert_eq!(vector.back().map(|r| r.to_record()), Some(record));
        for (index, expected) in existing.iter().enumerate() {
            prop_assert_eq!(vector.row(index).to_record(), *expected);
        }
    }

    #[test]
    fn prop_insert_range_splices(
        existing in records(32),
        incoming in records(32),
        position in any::<prop::sample::Index>(),
        span in any::<(prop::sample::Index, prop::sample::Index)>(),
    ) {
        let mut vector = Vector::from(existing.clone());
        let source = Vector::from(incoming.clone());
        let at = position.index(existing.len() + 1);
        let (a, b) = (span.0.index(incoming.len() + 1), span.1.index(incoming.len() + 1));
        let (lo, hi) = (a.min(b), a.max(b));

        vector.insert_range(at, source.begin() + lo as isize, source.begin() + hi as isize);

        prop_assert_eq!(vector.len(), existing.len() + (hi - lo));
        let mut expected = existing.clone();
        expected.splice(at..at, incoming[lo..hi].iter().copied());
        prop_assert_eq!(vector.into_records(), expected);
    }

    #[test]
    fn prop_equality_is_fieldwise(existing in records(32), pick in any::<prop::sample::Index>()) {
        let vector = Vector::from(existing.clone());
        prop_assert!(vector == vector.clone());

        if !existing.is_empty() {
            let index = pick.index(existing.len());
            let mut changed = vector.clone();
            let slot = &mut changed.column_mut::<k::I>()[index];
            *slot = slot.wrapping_add(1);
            prop_assert!(vector != changed);
        }
    }

    #[test]
    fn prop_stable_sort_agrees_with_vec(existing in records(64)) {
        let mut vector = Vector::from(existing.clone());
        let mut expected = existing;
        vector.sort_by_key(|r| *r.get::<k::B>());
        expected.sort_by_key(|r| r.b);
        prop_assert_eq!(vector.into_records(), expected);
    }
}
