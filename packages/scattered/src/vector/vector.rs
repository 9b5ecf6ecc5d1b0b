use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::{Bound, Range, RangeBounds};

use crate::column_set::ColumnSet;
use crate::config::VectorConfig;
use crate::cursor::{ColumnIter, ColumnIterMut};
use crate::error::{Result, ScatteredError};
use crate::field_list::FieldList;
use crate::iter::{IntoIter, Iter, IterMut};
use crate::proxy::{RecordMut, RecordRef};
use crate::record::{FieldAccess, FieldTag, Record};

/// Sequence of `R` records stored column by column.
///
/// Each field of `R` lives in its own `Vec`, all of equal length. Element
/// access hands out [`RecordRef`]/[`RecordMut`] proxies that alias one slot
/// per column, and [`column`](Self::column) exposes a single field as a
/// plain slice for passes that touch one field only.
///
/// Any modifying call invalidates outstanding cursors and proxies, which
/// the borrow checker enforces.
pub struct Vector<R: Record> {
    columns: ColumnSet<R>,
    shrink_on_clear: bool,
}

impl<R: Record> Vector<R> {
    /// Creates an empty vector.
    pub fn new() -> Self {
        Self {
            columns: ColumnSet::new(),
            shrink_on_clear: false,
        }
    }

    /// Creates a vector of `len` default-valued records.
    pub fn with_len(len: usize) -> Self {
        Self {
            columns: ColumnSet::with_len(len),
            shrink_on_clear: false,
        }
    }

    /// Creates a vector of `len` default-valued records with the given
    /// construction options.
    ///
    /// # Arguments
    /// * `len` - Number of default-valued records
    /// * `config` - Capacity and clearing behavior
    pub fn with_config(len: usize, config: &VectorConfig) -> Self {
        tracing::debug!(
            "Creating {} vector: {} rows, capacity {}, shrink_on_clear {}",
            R::NAME,
            len,
            config.initial_capacity,
            config.shrink_on_clear
        );
        let mut columns = ColumnSet::with_capacity(len.max(config.initial_capacity));
        columns.resize(len);
        Self {
            columns,
            shrink_on_clear: config.shrink_on_clear,
        }
    }

    /// Number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Capacity of the first column; other columns may hold more.
    pub fn capacity(&self) -> usize {
        self.columns.capacity()
    }

    /// Conservative upper bound on the number of records.
    ///
    /// Measured against the size of a whole field tuple, padding included,
    /// so every column can hold at least this many elements.
    pub fn max_len(&self) -> usize {
        isize::MAX as usize / mem::size_of::<R::Fields>().max(1)
    }

    pub fn reserve(&mut self, additional: usize) {
        self.columns.reserve(additional);
    }

    /// Fallible [`reserve`](Self::reserve).
    ///
    /// # Errors
    /// Returns [`ScatteredError::CapacityOverflow`] if a column cannot grow.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        self.columns.try_reserve(additional)
    }

    pub fn shrink_to_fit(&mut self) {
        self.columns.shrink_to_fit();
    }

    /// The underlying column set.
    pub fn columns(&self) -> &ColumnSet<R> {
        &self.columns
    }

    /// Every value of field `T`, in record order.
    pub fn column<T: FieldTag<Record = R>>(&self) -> &[T::Value] {
        self.columns.column::<T>()
    }

    /// Every value of field `T`, writable in place.
    pub fn column_mut<T: FieldTag<Record = R>>(&mut self) -> &mut [T::Value] {
        self.columns.column_mut::<T>()
    }

    /// Checked access.
    ///
    /// # Errors
    /// Returns [`ScatteredError::OutOfRange`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<RecordRef<'_, R>> {
        self.get(index).ok_or(ScatteredError::OutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Checked mutable access.
    ///
    /// # Errors
    /// Returns [`ScatteredError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<RecordMut<'_, R>> {
        let len = self.len();
        self.get_mut(index)
            .ok_or(ScatteredError::OutOfRange { index, len })
    }

    pub fn get(&self, index: usize) -> Option<RecordRef<'_, R>> {
        (index < self.len()).then(|| RecordRef::new(self.columns.refs(index)))
    }

    pub fn get_mut(&mut self, index: usize) -> Option<RecordMut<'_, R>> {
        if index < self.len() {
            Some(RecordMut::new(self.columns.muts(index)))
        } else {
            None
        }
    }

    /// The record at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn row(&self, index: usize) -> RecordRef<'_, R> {
        RecordRef::new(self.columns.refs(index))
    }

    /// The record at `index`, writable.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn row_mut(&mut self, index: usize) -> RecordMut<'_, R> {
        RecordMut::new(self.columns.muts(index))
    }

    pub fn front(&self) -> Option<RecordRef<'_, R>> {
        self.get(0)
    }

    pub fn front_mut(&mut self) -> Option<RecordMut<'_, R>> {
        self.get_mut(0)
    }

    pub fn back(&self) -> Option<RecordRef<'_, R>> {
        self.len().checked_sub(1).and_then(|last| self.get(last))
    }

    pub fn back_mut(&mut self) -> Option<RecordMut<'_, R>> {
        match self.len().checked_sub(1) {
            Some(last) => self.get_mut(last),
            None => None,
        }
    }

    /// Cursor on the first record.
    pub fn begin(&self) -> ColumnIter<'_, R> {
        self.cursor(0)
    }

    /// Cursor one past the last record.
    pub fn end(&self) -> ColumnIter<'_, R> {
        self.cursor(self.len())
    }

    /// Mutable cursor on the first record.
    pub fn begin_mut(&mut self) -> ColumnIterMut<'_, R> {
        self.cursor_mut(0)
    }

    /// Mutable cursor one past the last record.
    pub fn end_mut(&mut self) -> ColumnIterMut<'_, R> {
        let len = self.len();
        self.cursor_mut(len)
    }

    fn cursor(&self, index: usize) -> ColumnIter<'_, R> {
        ColumnIter::new(R::Fields::cursors(self.columns.raw(), index as isize))
    }

    fn cursor_mut(&mut self, index: usize) -> ColumnIterMut<'_, R> {
        ColumnIterMut::new(R::Fields::cursors_mut(
            self.columns.raw_mut(),
            index as isize,
        ))
    }

    pub fn iter(&self) -> Iter<'_, R> {
        Iter::new(R::Fields::iters(self.columns.raw()))
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, R> {
        IterMut::new(R::Fields::iters_mut(self.columns.raw_mut()))
    }

    /// Removes every record. Releases the column allocations too if the
    /// vector was built with [`VectorConfig::shrink_on_clear`].
    pub fn clear(&mut self) {
        self.columns.clear();
        if self.shrink_on_clear {
            self.columns.shrink_to_fit();
        }
    }

    fn check_insert_index(&self, index: usize) {
        let len = self.len();
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
    }

    /// Inserts `record` before position `index`.
    ///
    /// # Returns
    /// A cursor on the inserted record.
    ///
    /// # Panics
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, record: R) -> ColumnIterMut<'_, R> {
        self.insert_fields(index, record.into_fields())
    }

    /// Inserts a field tuple before position `index`.
    ///
    /// # Panics
    /// Panics if `index > len()`.
    pub fn insert_fields(&mut self, index: usize, fields: R::Fields) -> ColumnIterMut<'_, R> {
        self.check_insert_index(index);
        R::Fields::insert(self.columns.raw_mut(), index, fields);
        self.cursor_mut(index)
    }

    /// Inserts every record of `records` before position `index`, keeping
    /// their order.
    ///
    /// # Returns
    /// A cursor on the first inserted record (or on `index` if nothing was
    /// inserted).
    ///
    /// # Panics
    /// Panics if `index > len()`.
    pub fn insert_iter<I>(&mut self, index: usize, records: I) -> ColumnIterMut<'_, R>
    where
        I: IntoIterator<Item = R>,
    {
        self.check_insert_index(index);
        let incoming: Vector<R> = records.into_iter().collect();
        self.columns.splice(index, incoming.columns);
        self.cursor_mut(index)
    }

    /// Inserts clones of the records in `[first, last)` before position
    /// `index`.
    ///
    /// # Arguments
    /// * `index` - Insertion point in this vector
    /// * `first`, `last` - Cursors into another vector, `first <= last`
    ///
    /// # Panics
    /// Panics if `index > len()` or the cursors do not delimit a range of
    /// their vector.
    pub fn insert_range(
        &mut self,
        index: usize,
        first: ColumnIter<'_, R>,
        last: ColumnIter<'_, R>,
    ) -> ColumnIterMut<'_, R> {
        self.check_insert_index(index);
        self.columns.splice_range(index, first.cursors(), last.cursors());
        self.cursor_mut(index)
    }

    /// Removes and returns the record at `index`, shifting later records
    /// down.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> R {
        R::from_fields(R::Fields::remove(self.columns.raw_mut(), index))
    }

    /// Removes the records in `range`.
    ///
    /// # Returns
    /// A cursor on the record that followed the removed range.
    ///
    /// # Panics
    /// Panics if the range is decreasing or ends past `len()`.
    pub fn erase<B: RangeBounds<usize>>(&mut self, range: B) -> ColumnIterMut<'_, R> {
        let range = bounded(range, self.len());
        let start = range.start;
        self.columns.erase(range);
        self.cursor_mut(start)
    }

    pub fn push(&mut self, record: R) {
        self.push_fields(record.into_fields());
    }

    pub fn push_fields(&mut self, fields: R::Fields) {
        R::Fields::push(self.columns.raw_mut(), fields);
    }

    /// Appends a copy of a record viewed in another vector.
    pub fn push_ref(&mut self, record: RecordRef<'_, R>) {
        self.push_fields(record.to_fields());
    }

    pub fn pop(&mut self) -> Option<R> {
        R::Fields::pop(self.columns.raw_mut()).map(R::from_fields)
    }

    /// Resizes to `len` records, default-filling new ones.
    pub fn resize(&mut self, len: usize) {
        self.columns.resize(len);
    }

    pub fn truncate(&mut self, len: usize) {
        self.columns.truncate(len);
    }

    /// Exchanges the records at `a` and `b`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        R::Fields::swap(self.columns.raw_mut(), a, b);
    }

    /// Stable sort by a comparator over record views.
    ///
    /// The order is computed once on row indices and then applied to every
    /// column, so each column is rearranged exactly once.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(RecordRef<'_, R>, RecordRef<'_, R>) -> Ordering,
    {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&a, &b| compare(self.row(a), self.row(b)));
        self.columns.permute(&order);
    }

    /// Stable sort by a key extracted from each record view.
    pub fn sort_by_key<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(RecordRef<'_, R>) -> K,
    {
        self.sort_by(|a, b| key(a).cmp(&key(b)));
    }

    /// Rebuilds every record, consuming the vector.
    pub fn into_records(self) -> Vec<R> {
        self.into_iter().collect()
    }

    /// Copies a record view out into a record value.
    pub fn to_type(record: RecordRef<'_, R>) -> R {
        record.to_record()
    }

    /// Splits a record into the field tuple the columns store.
    pub fn from_type(record: R) -> R::Fields {
        record.into_fields()
    }
}

fn bounded<B: RangeBounds<usize>>(range: B, len: usize) -> Range<usize> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };
    assert!(
        start <= end && end <= len,
        "range {start}..{end} is outside the vector of length {len}"
    );
    start..end
}

impl<R: Record> Default for Vector<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Clone for Vector<R> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            shrink_on_clear: self.shrink_on_clear,
        }
    }
}

impl<R: Record> fmt::Debug for Vector<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<R: Record> PartialEq for Vector<R> {
    /// Equal lengths and field-wise equal records, floats within epsilon.
    fn eq(&self, other: &Self) -> bool {
        R::Fields::columns_eq(self.columns.raw(), other.columns.raw())
    }
}

impl<R: Record> PartialOrd for Vector<R> {
    /// `Less`/`Greater` when every column compares lexicographically
    /// `<=`/`>=`; `None` when the columns disagree.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let (a, b) = (self.columns.raw(), other.columns.raw());
        if R::Fields::columns_eq(a, b) {
            Some(Ordering::Equal)
        } else if R::Fields::columns_le(a, b) {
            Some(Ordering::Less)
        } else if R::Fields::columns_ge(a, b) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl<R: Record> FromIterator<R> for Vector<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut vector = Self::new();
        vector.extend(iter);
        vector
    }
}

impl<R: Record> Extend<R> for Vector<R> {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for record in iter {
            self.push(record);
        }
    }
}

impl<R: Record> From<Vec<R>> for Vector<R> {
    fn from(records: Vec<R>) -> Self {
        records.into_iter().collect()
    }
}

impl<R: Record> IntoIterator for Vector<R> {
    type Item = R;
    type IntoIter = IntoIter<R>;

    fn into_iter(self) -> IntoIter<R> {
        IntoIter::new(R::Fields::into_iters(self.columns.into_raw()))
    }
}

impl<'a, R: Record> IntoIterator for &'a Vector<R> {
    type Item = RecordRef<'a, R>;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Iter<'a, R> {
        self.iter()
    }
}

impl<'a, R: Record> IntoIterator for &'a mut Vector<R> {
    type Item = RecordMut<'a, R>;
    type IntoIter = IterMut<'a, R>;

    fn into_iter(self) -> IterMut<'a, R> {
        self.iter_mut()
    }
}

impl<'b, R: Record, T: FieldTag<Record = R>> FieldAccess<T> for &'b Vector<R> {
    type Output = &'b [T::Value];

    fn field(self) -> Self::Output {
        self.column::<T>()
    }
}

impl<'b, R: Record, T: FieldTag<Record = R>> FieldAccess<T> for &'b mut Vector<R> {
    type Output = &'b mut [T::Value];

    fn field(self) -> Self::Output {
        self.column_mut::<T>()
    }
}
