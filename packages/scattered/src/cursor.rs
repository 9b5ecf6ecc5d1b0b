//! Random-access cursors over a column set.
//!
//! A [`ColumnIter`] is a tuple of [`FieldCursor`]s, one per column, that all
//! sit at the same offset. Every movement is applied to each component
//! cursor, so the offsets stay in step; distances are read from the first
//! column and cross-checked against the others in debug and instrumented
//! builds.
//!
//! Positions may move outside `0..=len` while doing arithmetic. Reading
//! through a cursor that is not on an element panics.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::ptr;

use crate::field_list::FieldList;
use crate::proxy::{RecordMut, RecordRef};
use crate::record::{FieldAccess, FieldTag, Record};

/// Cursors of every column of `R`.
pub type Cursors<'a, R> = <<R as Record>::Fields as FieldList>::Cursors<'a>;
/// Mutable cursors of every column of `R`.
pub type CursorsMut<'a, R> = <<R as Record>::Fields as FieldList>::CursorsMut<'a>;

fn slot(position: isize, len: usize) -> usize {
    match usize::try_from(position) {
        Ok(index) if index < len => index,
        _ => panic!("cursor position {position} is outside column of length {len}"),
    }
}

/// Read-only cursor into one column.
pub struct FieldCursor<'a, T> {
    column: &'a [T],
    position: isize,
}

impl<T> Clone for FieldCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldCursor<'_, T> {}

impl<'a, T> FieldCursor<'a, T> {
    pub(crate) fn new(column: &'a [T], position: isize) -> Self {
        Self { column, position }
    }

    /// Offset from the start of the column.
    #[inline]
    pub fn position(&self) -> isize {
        self.position
    }

    /// The column this cursor walks.
    pub fn column(&self) -> &'a [T] {
        self.column
    }

    #[inline]
    pub(crate) fn advance(&mut self, n: isize) {
        self.position += n;
    }

    /// The element under the cursor.
    ///
    /// # Panics
    /// Panics if the cursor is not on an element.
    #[inline]
    pub fn get(&self) -> &'a T {
        &self.column[slot(self.position, self.column.len())]
    }

    /// Elements from this cursor up to (excluding) `last`.
    pub(crate) fn range_to(&self, last: &FieldCursor<'_, T>) -> &'a [T] {
        let start = slot(self.position, self.column.len() + 1);
        let end = slot(last.position, self.column.len() + 1);
        &self.column[start..end]
    }

    /// Returns `true` if both cursors walk the same column.
    #[inline]
    pub(crate) fn same_column(&self, other: &FieldCursor<'_, T>) -> bool {
        ptr::eq(self.column.as_ptr(), other.column.as_ptr())
    }
}

impl<T> PartialEq for FieldCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_column(other) && self.position == other.position
    }
}

/// Mutable cursor into one column.
pub struct FieldCursorMut<'a, T> {
    column: &'a mut [T],
    position: isize,
}

impl<'a, T> FieldCursorMut<'a, T> {
    pub(crate) fn new(column: &'a mut [T], position: isize) -> Self {
        Self { column, position }
    }

    /// Offset from the start of the column.
    #[inline]
    pub fn position(&self) -> isize {
        self.position
    }

    #[inline]
    pub(crate) fn advance(&mut self, n: isize) {
        self.position += n;
    }

    /// The element under the cursor.
    ///
    /// # Panics
    /// Panics if the cursor is not on an element.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        let index = slot(self.position, self.column.len());
        &mut self.column[index]
    }

    /// Read-only cursor at the same position, borrowing this one.
    pub fn view(&self) -> FieldCursor<'_, T> {
        FieldCursor::new(&*self.column, self.position)
    }

    /// Gives up write access.
    pub fn freeze(self) -> FieldCursor<'a, T> {
        FieldCursor::new(self.column, self.position)
    }
}

/// Read-only random-access iterator over a [`Vector`](crate::Vector).
///
/// Copyable, like a C++ `const_iterator`. Obtained from
/// [`Vector::begin`](crate::Vector::begin) and
/// [`Vector::end`](crate::Vector::end).
pub struct ColumnIter<'a, R: Record> {
    cursors: Cursors<'a, R>,
}

impl<R: Record> Clone for ColumnIter<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Record> Copy for ColumnIter<'_, R> {}

impl<'a, R: Record> ColumnIter<'a, R> {
    pub(crate) fn new(cursors: Cursors<'a, R>) -> Self {
        Self { cursors }
    }

    pub(crate) fn cursors(&self) -> &Cursors<'a, R> {
        &self.cursors
    }

    /// Offset from the first element.
    pub fn offset(&self) -> isize {
        R::Fields::position(&self.cursors)
    }

    /// Moves one element forward (`++it`).
    pub fn inc(&mut self) -> &mut Self {
        R::Fields::advance(&mut self.cursors, 1);
        self
    }

    /// Moves one element back (`--it`).
    pub fn dec(&mut self) -> &mut Self {
        R::Fields::advance(&mut self.cursors, -1);
        self
    }

    /// The element under the cursor (`*it`).
    ///
    /// # Panics
    /// Panics if the cursor is not on an element.
    pub fn get(&self) -> RecordRef<'a, R> {
        RecordRef::new(R::Fields::deref(&self.cursors))
    }

    /// The element `n` positions away (`it[n]`).
    ///
    /// # Panics
    /// Panics if that position holds no element.
    pub fn at(&self, n: isize) -> RecordRef<'a, R> {
        (*self + n).get()
    }

    /// One field of the element under the cursor.
    pub fn field<T: FieldTag<Record = R>>(&self) -> &'a T::Value {
        T::slot(R::Fields::deref(&self.cursors))
    }
}

impl<R: Record> fmt::Debug for ColumnIter<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnIter")
            .field("record", &R::NAME)
            .field("offset", &self.offset())
            .finish()
    }
}

impl<R: Record> AddAssign<isize> for ColumnIter<'_, R> {
    fn add_assign(&mut self, n: isize) {
        R::Fields::advance(&mut self.cursors, n);
    }
}

impl<R: Record> SubAssign<isize> for ColumnIter<'_, R> {
    fn sub_assign(&mut self, n: isize) {
        R::Fields::advance(&mut self.cursors, -n);
    }
}

impl<R: Record> Add<isize> for ColumnIter<'_, R> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<R: Record> Sub<isize> for ColumnIter<'_, R> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

impl<'b, R: Record> Sub<ColumnIter<'b, R>> for ColumnIter<'_, R> {
    type Output = isize;

    /// Number of elements between the two cursors.
    fn sub(self, other: ColumnIter<'b, R>) -> isize {
        R::Fields::distance(&self.cursors, &other.cursors)
    }
}

impl<'b, R: Record> PartialEq<ColumnIter<'b, R>> for ColumnIter<'_, R> {
    fn eq(&self, other: &ColumnIter<'b, R>) -> bool {
        R::Fields::cursors_eq(&self.cursors, &other.cursors)
    }
}

impl<'b, R: Record> PartialOrd<ColumnIter<'b, R>> for ColumnIter<'_, R> {
    /// Orders by position; cursors into different vectors are unordered.
    fn partial_cmp(&self, other: &ColumnIter<'b, R>) -> Option<Ordering> {
        if R::Fields::cursors_eq(&self.cursors, &other.cursors) {
            Some(Ordering::Equal)
        } else if R::Fields::cursors_le(&self.cursors, &other.cursors) {
            Some(Ordering::Less)
        } else if R::Fields::cursors_ge(&self.cursors, &other.cursors) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl<'b, R: Record, T: FieldTag<Record = R>> FieldAccess<T> for &'b ColumnIter<'_, R> {
    type Output = &'b T::Value;

    fn field(self) -> Self::Output {
        T::slot(R::Fields::deref(&self.cursors))
    }
}

/// Mutable random-access iterator over a [`Vector`](crate::Vector).
///
/// Holds the vector exclusively, so it cannot be copied; use
/// [`as_const`](Self::as_const) or `ColumnIter::from` for a read-only
/// cursor at the same position.
pub struct ColumnIterMut<'a, R: Record> {
    cursors: CursorsMut<'a, R>,
}

impl<'a, R: Record> ColumnIterMut<'a, R> {
    pub(crate) fn new(cursors: CursorsMut<'a, R>) -> Self {
        Self { cursors }
    }

    /// Offset from the first element.
    pub fn offset(&self) -> isize {
        R::Fields::position_mut(&self.cursors)
    }

    /// Moves one element forward (`++it`).
    pub fn inc(&mut self) -> &mut Self {
        R::Fields::advance_mut(&mut self.cursors, 1);
        self
    }

    /// Moves one element back (`--it`).
    pub fn dec(&mut self) -> &mut Self {
        R::Fields::advance_mut(&mut self.cursors, -1);
        self
    }

    /// The element under the cursor, read-only.
    ///
    /// # Panics
    /// Panics if the cursor is not on an element.
    pub fn get(&self) -> RecordRef<'_, R> {
        self.as_const().get()
    }

    /// The element under the cursor (`*it`).
    ///
    /// # Panics
    /// Panics if the cursor is not on an element.
    pub fn get_mut(&mut self) -> RecordMut<'_, R> {
        RecordMut::new(R::Fields::deref_mut(&mut self.cursors))
    }

    /// One field of the element under the cursor.
    pub fn field<T: FieldTag<Record = R>>(&self) -> &T::Value {
        T::slot(R::Fields::deref(&R::Fields::view(&self.cursors)))
    }

    /// One field of the element under the cursor, writable.
    pub fn field_mut<T: FieldTag<Record = R>>(&mut self) -> &mut T::Value {
        T::slot_mut(R::Fields::deref_mut(&mut self.cursors))
    }

    /// Read-only cursor at the same position, borrowing this one.
    pub fn as_const(&self) -> ColumnIter<'_, R> {
        ColumnIter::new(R::Fields::view(&self.cursors))
    }
}

impl<R: Record> fmt::Debug for ColumnIterMut<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnIterMut")
            .field("record", &R::NAME)
            .field("offset", &self.offset())
            .finish()
    }
}

impl<R: Record> AddAssign<isize> for ColumnIterMut<'_, R> {
    fn add_assign(&mut self, n: isize) {
        R::Fields::advance_mut(&mut self.cursors, n);
    }
}

impl<R: Record> SubAssign<isize> for ColumnIterMut<'_, R> {
    fn sub_assign(&mut self, n: isize) {
        R::Fields::advance_mut(&mut self.cursors, -n);
    }
}

impl<R: Record> Add<isize> for ColumnIterMut<'_, R> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<R: Record> Sub<isize> for ColumnIterMut<'_, R> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

impl<'a, R: Record> From<ColumnIterMut<'a, R>> for ColumnIter<'a, R> {
    fn from(iter: ColumnIterMut<'a, R>) -> Self {
        ColumnIter::new(R::Fields::freeze(iter.cursors))
    }
}

impl<'b, R: Record, T: FieldTag<Record = R>> FieldAccess<T> for &'b mut ColumnIterMut<'_, R> {
    type Output = &'b mut T::Value;

    fn field(self) -> Self::Output {
        T::slot_mut(R::Fields::deref_mut(&mut self.cursors))
    }
}
