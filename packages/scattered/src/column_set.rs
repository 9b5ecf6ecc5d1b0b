//! Column storage.

use std::fmt;
use std::ops::Range;

use crate::cursor::Cursors;
use crate::error::{Result, ScatteredError};
use crate::field_list::FieldList;
use crate::macros::invariant;
use crate::record::{Columns, FieldTag, Muts, Record, Refs};

/// One growable array per field of `R`, kept at equal length.
///
/// The shared length is the logical number of records. Capacities are
/// forwarded to every column but may differ between columns;
/// [`capacity`](Self::capacity) reports the first one.
pub struct ColumnSet<R: Record> {
    columns: Columns<R>,
}

impl<R: Record> ColumnSet<R> {
    /// Creates an empty column set.
    pub fn new() -> Self {
        Self {
            columns: Default::default(),
        }
    }

    /// Creates `len` default-valued records in every column.
    pub fn with_len(len: usize) -> Self {
        Self {
            columns: R::Fields::with_len(len),
        }
    }

    /// Creates an empty column set with room for `capacity` records per
    /// column.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: R::Fields::with_capacity(capacity),
        }
    }

    /// Number of records (the first column's length).
    #[inline]
    pub fn len(&self) -> usize {
        R::Fields::len(&self.columns)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Capacity of the first column.
    pub fn capacity(&self) -> usize {
        R::Fields::capacity(&self.columns)
    }

    /// Resizes every column to `len`, keeping the existing prefix and
    /// default-filling new records.
    pub fn resize(&mut self, len: usize) {
        tracing::trace!("Resizing {} columns from {} to {} rows", R::NAME, self.len(), len);
        R::Fields::resize(&mut self.columns, len);
        self.check_synchronized();
    }

    pub fn truncate(&mut self, len: usize) {
        R::Fields::truncate(&mut self.columns, len);
    }

    /// Reserves room for at least `additional` more records in every column.
    pub fn reserve(&mut self, additional: usize) {
        tracing::trace!("Reserving {} more rows in {} columns", additional, R::NAME);
        R::Fields::reserve(&mut self.columns, additional);
    }

    /// Fallible [`reserve`](Self::reserve).
    ///
    /// # Errors
    /// Returns [`ScatteredError::CapacityOverflow`] if any column cannot
    /// grow. Columns reserved before the failing one keep their new
    /// capacity; lengths are unchanged.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        R::Fields::try_reserve(&mut self.columns, additional).map_err(|_| {
            ScatteredError::CapacityOverflow {
                operation: "reserve",
                requested: additional,
            }
        })
    }

    pub fn shrink_to_fit(&mut self) {
        tracing::trace!("Shrinking {} columns to {} rows", R::NAME, self.len());
        R::Fields::shrink_to_fit(&mut self.columns);
    }

    pub fn clear(&mut self) {
        R::Fields::clear(&mut self.columns);
    }

    /// The whole column of field `T`.
    pub fn column<T: FieldTag<Record = R>>(&self) -> &Vec<T::Value> {
        T::column(&self.columns)
    }

    /// The whole column of field `T`, writable in place.
    ///
    /// Only element access is handed out so the column length cannot drift
    /// from the others.
    pub fn column_mut<T: FieldTag<Record = R>>(&mut self) -> &mut [T::Value] {
        T::column_mut(&mut self.columns).as_mut_slice()
    }

    pub(crate) fn raw(&self) -> &Columns<R> {
        &self.columns
    }

    pub(crate) fn raw_mut(&mut self) -> &mut Columns<R> {
        &mut self.columns
    }

    pub(crate) fn refs(&self, index: usize) -> Refs<'_, R> {
        R::Fields::refs(&self.columns, index)
    }

    pub(crate) fn muts(&mut self, index: usize) -> Muts<'_, R> {
        R::Fields::muts(&mut self.columns, index)
    }

    pub(crate) fn into_raw(self) -> Columns<R> {
        self.columns
    }

    /// Moves every record of `incoming` in at `index`.
    pub(crate) fn splice(&mut self, index: usize, incoming: Self) {
        tracing::trace!("Splicing {} rows into {} at {}", incoming.len(), R::NAME, index);
        R::Fields::splice(&mut self.columns, index, incoming.columns);
        self.check_synchronized();
    }

    /// Clones the records in `[first, last)` in at `index`.
    pub(crate) fn splice_range(
        &mut self,
        index: usize,
        first: &Cursors<'_, R>,
        last: &Cursors<'_, R>,
    ) {
        tracing::trace!("Splicing cursor range into {} at {}", R::NAME, index);
        R::Fields::splice_cursors(&mut self.columns, index, first, last);
        self.check_synchronized();
    }

    pub(crate) fn erase(&mut self, range: Range<usize>) {
        tracing::trace!("Erasing rows {:?} from {}", range, R::NAME);
        R::Fields::erase(&mut self.columns, range);
        self.check_synchronized();
    }

    /// Checks that every column has the first column's length.
    ///
    /// Active in debug builds and with the `instrumented` feature; a no-op
    /// otherwise.
    ///
    /// # Panics
    /// Panics if the column lengths disagree.
    pub fn check_synchronized(&self) {
        invariant!(
            R::Fields::lengths_agree(&self.columns),
            "columns of {} are desynchronized (first column holds {} rows)",
            R::NAME,
            self.len()
        );
    }

    /// Reorders every column so that row `i` becomes the former row
    /// `order[i]`.
    ///
    /// `order` must be a permutation of `0..len`. It is applied in place by
    /// following cycles, one swap per misplaced row in every column.
    pub(crate) fn permute(&mut self, order: &[usize]) {
        invariant!(
            order.len() == self.len(),
            "permutation of {} rows applied to {} rows",
            order.len(),
            self.len()
        );
        tracing::trace!("Permuting {} rows of {}", order.len(), R::NAME);

        let mut placed = vec![false; order.len()];
        for start in 0..order.len() {
            if placed[start] {
                continue;
            }
            let mut current = start;
            placed[current] = true;
            while order[current] != start {
                let next = order[current];
                R::Fields::swap(&mut self.columns, current, next);
                placed[next] = true;
                current = next;
            }
        }
    }
}

impl<R: Record> Default for ColumnSet<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Clone for ColumnSet<R> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.columns.clone_from(&source.columns);
    }
}

impl<R: Record> fmt::Debug for ColumnSet<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct(R::NAME);
        R::Fields::fmt_columns(&self.columns, R::FIELDS, &mut out);
        out.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Fields;
    use ntest::timeout;

    crate::record! {
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct Cell in cell {
            row: u32 as Row,
            value: f32 as Value,
            tag: char as Tag,
        }
    }

    fn filled(len: u32) -> ColumnSet<Cell> {
        let mut set = ColumnSet::<Cell>::with_capacity(len as usize);
        for row in 0..len {
            <Fields<Cell> as FieldList>::push(set.raw_mut(), (row, row as f32 * 0.5, 'a'));
        }
        set
    }

    #[timeout(1000)]
    #[test]
    fn test_with_len_default_fills_every_column() {
        let set = ColumnSet::<Cell>::with_len(4);
        assert_eq!(set.len(), 4);
        assert_eq!(set.column::<cell::Row>(), &vec![0; 4]);
        assert_eq!(set.column::<cell::Tag>(), &vec!['\0'; 4]);
        set.check_synchronized();
    }

    #[timeout(1000)]
    #[test]
    fn test_resize_keeps_prefix() {
        let mut set = filled(3);
        set.resize(5);
        assert_eq!(set.column::<cell::Row>(), &vec![0, 1, 2, 0, 0]);
        assert_eq!(set.column::<cell::Value>(), &vec![0.0, 0.5, 1.0, 0.0, 0.0]);
        set.resize(1);
        assert_eq!(set.len(), 1);
        assert_eq!(set.column::<cell::Tag>(), &vec!['a']);
    }

    #[timeout(1000)]
    #[test]
    fn test_capacity_is_forwarded() {
        let mut set = ColumnSet::<Cell>::new();
        assert!(set.is_empty());
        set.reserve(32);
        assert!(set.capacity() >= 32);
        set.shrink_to_fit();
        assert_eq!(set.capacity(), 0);
    }

    #[timeout(1000)]
    #[test]
    fn test_try_reserve_reports_overflow() {
        let mut set = filled(2);
        let err = set.try_reserve(usize::MAX).unwrap_err();
        assert_eq!(
            err,
            ScatteredError::CapacityOverflow {
                operation: "reserve",
                requested: usize::MAX,
            }
        );
        assert_eq!(set.len(), 2);
    }

    #[timeout(1000)]
    #[test]
    fn test_column_mut_writes_one_field() {
        let mut set = filled(3);
        for value in set.column_mut::<cell::Value>() {
            *value *= 2.0;
        }
        assert_eq!(set.column::<cell::Value>(), &vec![0.0, 1.0, 2.0]);
        assert_eq!(set.column::<cell::Row>(), &vec![0, 1, 2]);
    }

    #[timeout(1000)]
    #[test]
    fn test_permute_moves_whole_rows() {
        let mut set = filled(5);
        set.permute(&[3, 0, 4, 1, 2]);
        assert_eq!(set.column::<cell::Row>(), &vec![3, 0, 4, 1, 2]);
        assert_eq!(set.column::<cell::Value>(), &vec![1.5, 0.0, 2.0, 0.5, 1.0]);
    }

    #[timeout(1000)]
    #[test]
    fn test_debug_lists_columns() {
        let set = filled(2);
        assert_eq!(
            format!("{set:?}"),
            "Cell { row: [0, 1], value: [0.0, 0.5], tag: ['a', 'a'] }"
        );
    }

    #[timeout(1000)]
    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "desynchronized")]
    fn test_desynchronized_columns_fail_fast() {
        let mut set = filled(2);
        set.raw_mut().1.push(9.0);
        set.check_synchronized();
    }
}
