//! Columnar ("scattered") vector.
//!
//! [`Vector<R>`] stores a sequence of records with each field in its own
//! contiguous `Vec`, while still behaving like one random-access sequence:
//! indexed access, synchronized cursors, insertion and removal, sorting and
//! field-wise comparison. Passes that touch a single field walk a single
//! column, which keeps the other fields out of the cache.
//!
//! Record shapes are described with the [`record!`] macro:
//!
//! ```
//! use scattered::{get, record, Vector};
//!
//! record! {
//!     #[derive(Debug, Clone, Default, PartialEq)]
//!     pub struct Body in body {
//!         pub mass: f64 as Mass,
//!         pub id: u32 as Id,
//!     }
//! }
//!
//! let mut bodies = Vector::<Body>::with_len(3);
//! bodies.push(Body { mass: 2.5, id: 7 });
//!
//! for mass in bodies.column_mut::<body::Mass>() {
//!     *mass *= 2.0;
//! }
//!
//! let last = bodies.back().unwrap();
//! assert_eq!(*get::<body::Mass, _>(last), 5.0);
//! assert_eq!(last.to_record(), Body { mass: 5.0, id: 7 });
//! ```

pub mod column_set;
pub mod config;
pub mod cursor;
pub mod error;
pub mod field;
pub mod field_list;
mod iter;
mod macros;
pub mod proxy;
pub mod record;
pub mod vector;

pub use column_set::ColumnSet;
pub use config::VectorConfig;
pub use cursor::{ColumnIter, ColumnIterMut, FieldCursor, FieldCursorMut};
pub use error::{Result, ScatteredError};
pub use field::{FieldInfo, FieldValue};
pub use field_list::FieldList;
pub use iter::{IntoIter, Iter, IterMut};
pub use proxy::{RecordMut, RecordRef};
pub use record::{get, Columns, FieldAccess, FieldTag, Fields, Muts, Record, Refs};
pub use vector::Vector;
