//! Shared record shape and fixtures.

use scattered::{record, Vector};

record! {
    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    pub struct TestType in k {
        pub x: f32 as X,
        pub y: f64 as Y,
        pub i: i32 as I,
        pub b: bool as B,
    }
}

impl TestType {
    pub fn numbered(i: i32) -> Self {
        Self {
            x: i as f32,
            y: i as f64,
            i,
            b: i % 2 == 0,
        }
    }
}

/// Vector of `len` records where record `i` holds `(i, i, i, i is even)`.
pub fn numbered_vector(len: i32) -> Vector<TestType> {
    let mut vector = Vector::<TestType>::with_len(len as usize);
    for (index, mut record) in vector.iter_mut().enumerate() {
        record.set(TestType::numbered(index as i32));
    }
    vector
}
