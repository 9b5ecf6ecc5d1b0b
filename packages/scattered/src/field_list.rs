//! Column fan-out for tuples of field types.
//!
//! A record's field list is the ordered tuple of its field types, e.g.
//! `(f32, f64, i32, bool)`. [`FieldList`] is implemented for tuples of 1 to
//! 12 [`FieldValue`]s and maps every container operation onto each column
//! in declaration order. Everything the container knows about the shape of
//! a record flows through this trait; nothing here inspects the record type
//! itself.

use std::collections::TryReserveError;
use std::fmt;
use std::ops::Range;
use std::{slice, vec};

use crate::cursor::{FieldCursor, FieldCursorMut};
use crate::field::{FieldInfo, FieldValue};
use crate::macros::invariant;

/// Per-column operations over an ordered tuple of field types.
///
/// All functions operating on `Columns` assume the columns have equal
/// length on entry and leave them with equal length on return. Operations
/// that can panic (out-of-range index, bad range) do so on the first column
/// before any column is modified.
pub trait FieldList: Sized + 'static {
    /// One `Vec` per field.
    type Columns: Default + Clone + 'static;
    /// One shared reference per field.
    type Refs<'a>: Copy
    where
        Self: 'a;
    /// One exclusive reference per field.
    type Muts<'a>
    where
        Self: 'a;
    /// One read-only column cursor per field.
    type Cursors<'a>: Copy
    where
        Self: 'a;
    /// One mutable column cursor per field.
    type CursorsMut<'a>
    where
        Self: 'a;
    /// One slice iterator per field.
    type Iters<'a>: Clone
    where
        Self: 'a;
    /// One mutable slice iterator per field.
    type ItersMut<'a>
    where
        Self: 'a;
    /// One owning iterator per field.
    type IntoIters;

    /// Number of fields.
    const ARITY: usize;

    fn with_len(len: usize) -> Self::Columns;
    fn with_capacity(capacity: usize) -> Self::Columns;

    /// Length of the first column.
    fn len(columns: &Self::Columns) -> usize;
    /// Returns `true` if every column has the first column's length.
    fn lengths_agree(columns: &Self::Columns) -> bool;
    /// Capacity of the first column.
    fn capacity(columns: &Self::Columns) -> usize;

    fn reserve(columns: &mut Self::Columns, additional: usize);
    fn try_reserve(columns: &mut Self::Columns, additional: usize) -> Result<(), TryReserveError>;
    fn shrink_to_fit(columns: &mut Self::Columns);
    fn resize(columns: &mut Self::Columns, len: usize);
    fn truncate(columns: &mut Self::Columns, len: usize);
    fn clear(columns: &mut Self::Columns);

    fn push(columns: &mut Self::Columns, value: Self);
    fn pop(columns: &mut Self::Columns) -> Option<Self>;
    fn insert(columns: &mut Self::Columns, index: usize, value: Self);
    fn remove(columns: &mut Self::Columns, index: usize) -> Self;
    /// Inserts every element of `incoming` at `index`, column by column.
    fn splice(columns: &mut Self::Columns, index: usize, incoming: Self::Columns);
    /// Inserts clones of the elements in `[first, last)` at `index`.
    fn splice_cursors(
        columns: &mut Self::Columns,
        index: usize,
        first: &Self::Cursors<'_>,
        last: &Self::Cursors<'_>,
    );
    fn erase(columns: &mut Self::Columns, range: Range<usize>);
    fn swap(columns: &mut Self::Columns, a: usize, b: usize);

    fn refs(columns: &Self::Columns, index: usize) -> Self::Refs<'_>;
    fn muts(columns: &mut Self::Columns, index: usize) -> Self::Muts<'_>;
    fn field_refs(&self) -> Self::Refs<'_>;
    fn field_muts(&mut self) -> Self::Muts<'_>;
    fn reborrow<'b>(muts: &'b Self::Muts<'_>) -> Self::Refs<'b>;
    fn reborrow_mut<'b>(muts: &'b mut Self::Muts<'_>) -> Self::Muts<'b>;
    fn downgrade<'a>(muts: Self::Muts<'a>) -> Self::Refs<'a>;

    /// Copies every referenced field out into a standalone value.
    fn cloned(refs: Self::Refs<'_>) -> Self;
    /// Copies `src` into the slots `dst` points at, field by field.
    fn assign(dst: &mut Self::Muts<'_>, src: Self::Refs<'_>);
    /// Moves `value` into the slots `dst` points at, field by field.
    fn set(dst: &mut Self::Muts<'_>, value: Self);
    fn swap_slots(a: &mut Self::Muts<'_>, b: &mut Self::Muts<'_>);

    /// Field-wise [`FieldValue::field_eq`].
    fn eq(a: Self::Refs<'_>, b: Self::Refs<'_>) -> bool;
    /// Every field of `a` is `<=` the same field of `b`.
    fn le(a: Self::Refs<'_>, b: Self::Refs<'_>) -> bool;
    /// Every field of `a` is `>=` the same field of `b`.
    fn ge(a: Self::Refs<'_>, b: Self::Refs<'_>) -> bool;

    /// Equal lengths and field-wise equal at every position.
    fn columns_eq(a: &Self::Columns, b: &Self::Columns) -> bool;
    /// Every column of `a` is lexicographically `<=` the same column of `b`.
    fn columns_le(a: &Self::Columns, b: &Self::Columns) -> bool;
    /// Every column of `a` is lexicographically `>=` the same column of `b`.
    fn columns_ge(a: &Self::Columns, b: &Self::Columns) -> bool;

    fn cursors(columns: &Self::Columns, position: isize) -> Self::Cursors<'_>;
    fn cursors_mut(columns: &mut Self::Columns, position: isize) -> Self::CursorsMut<'_>;
    fn view<'b>(cursors: &'b Self::CursorsMut<'_>) -> Self::Cursors<'b>;
    fn freeze<'a>(cursors: Self::CursorsMut<'a>) -> Self::Cursors<'a>;
    fn advance(cursors: &mut Self::Cursors<'_>, n: isize);
    fn advance_mut(cursors: &mut Self::CursorsMut<'_>, n: isize);
    /// Position of the first column cursor.
    fn position(cursors: &Self::Cursors<'_>) -> isize;
    /// Position of the first column cursor.
    fn position_mut(cursors: &Self::CursorsMut<'_>) -> isize;
    /// `a - b`, measured on the first column.
    ///
    /// Debug and instrumented builds check every other column reports the
    /// same distance.
    fn distance(a: &Self::Cursors<'_>, b: &Self::Cursors<'_>) -> isize;
    /// Same columns and same positions.
    fn cursors_eq(a: &Self::Cursors<'_>, b: &Self::Cursors<'_>) -> bool;
    /// Same columns, and `a` is at or before `b`.
    fn cursors_le(a: &Self::Cursors<'_>, b: &Self::Cursors<'_>) -> bool;
    fn cursors_ge(a: &Self::Cursors<'_>, b: &Self::Cursors<'_>) -> bool;
    fn deref<'a>(cursors: &Self::Cursors<'a>) -> Self::Refs<'a>;
    fn deref_mut<'b>(cursors: &'b mut Self::CursorsMut<'_>) -> Self::Muts<'b>;

    fn iters(columns: &Self::Columns) -> Self::Iters<'_>;
    fn iters_mut(columns: &mut Self::Columns) -> Self::ItersMut<'_>;
    fn into_iters(columns: Self::Columns) -> Self::IntoIters;
    fn next<'a>(iters: &mut Self::Iters<'a>) -> Option<Self::Refs<'a>>;
    fn next_back<'a>(iters: &mut Self::Iters<'a>) -> Option<Self::Refs<'a>>;
    fn next_mut<'a>(iters: &mut Self::ItersMut<'a>) -> Option<Self::Muts<'a>>;
    fn next_back_mut<'a>(iters: &mut Self::ItersMut<'a>) -> Option<Self::Muts<'a>>;
    fn next_owned(iters: &mut Self::IntoIters) -> Option<Self>;
    fn next_back_owned(iters: &mut Self::IntoIters) -> Option<Self>;
    fn remaining(iters: &Self::Iters<'_>) -> usize;
    fn remaining_mut(iters: &Self::ItersMut<'_>) -> usize;
    fn remaining_owned(iters: &Self::IntoIters) -> usize;

    fn fmt_refs(refs: Self::Refs<'_>, fields: &[FieldInfo], out: &mut fmt::DebugStruct<'_, '_>);
    fn fmt_columns(columns: &Self::Columns, fields: &[FieldInfo], out: &mut fmt::DebugStruct<'_, '_>);
}

fn field_name(fields: &[FieldInfo], index: usize) -> &str {
    fields.get(index).map_or("?", |field| field.name)
}

macro_rules! impl_field_list {
    ($arity:expr; $($name:ident $idx:tt),+) => {
        impl<$($name: FieldValue),+> FieldList for ($($name,)+) {
            type Columns = ($(Vec<$name>,)+);
            type Refs<'a> = ($(&'a $name,)+) where Self: 'a;
            type Muts<'a> = ($(&'a mut $name,)+) where Self: 'a;
            type Cursors<'a> = ($(FieldCursor<'a, $name>,)+) where Self: 'a;
            type CursorsMut<'a> = ($(FieldCursorMut<'a, $name>,)+) where Self: 'a;
            type Iters<'a> = ($(slice::Iter<'a, $name>,)+) where Self: 'a;
            type ItersMut<'a> = ($(slice::IterMut<'a, $name>,)+) where Self: 'a;
            type IntoIters = ($(vec::IntoIter<$name>,)+);

            const ARITY: usize = $arity;

            fn with_len(len: usize) -> Self::Columns {
                ($(vec![$name::default(); len],)+)
            }

            fn with_capacity(capacity: usize) -> Self::Columns {
                ($(Vec::<$name>::with_capacity(capacity),)+)
            }

            #[inline]
            fn len(columns: &Self::Columns) -> usize {
                columns.0.len()
            }

            fn lengths_agree(columns: &Self::Columns) -> bool {
                let len = columns.0.len();
                true $(&& columns.$idx.len() == len)+
            }

            #[inline]
            fn capacity(columns: &Self::Columns) -> usize {
                columns.0.capacity()
            }

            fn reserve(columns: &mut Self::Columns, additional: usize) {
                $(columns.$idx.reserve(additional);)+
            }

            fn try_reserve(
                columns: &mut Self::Columns,
                additional: usize,
            ) -> Result<(), TryReserveError> {
                $(columns.$idx.try_reserve(additional)?;)+
                Ok(())
            }

            fn shrink_to_fit(columns: &mut Self::Columns) {
                $(columns.$idx.shrink_to_fit();)+
            }

            fn resize(columns: &mut Self::Columns, len: usize) {
                $(columns.$idx.resize_with(len, $name::default);)+
            }

            fn truncate(columns: &mut Self::Columns, len: usize) {
                $(columns.$idx.truncate(len);)+
            }

            fn clear(columns: &mut Self::Columns) {
                $(columns.$idx.clear();)+
            }

            fn push(columns: &mut Self::Columns, value: Self) {
                $(columns.$idx.push(value.$idx);)+
            }

            fn pop(columns: &mut Self::Columns) -> Option<Self> {
                if columns.0.is_empty() {
                    return None;
                }
                Some(($(columns.$idx.pop()?,)+))
            }

            fn insert(columns: &mut Self::Columns, index: usize, value: Self) {
                $(columns.$idx.insert(index, value.$idx);)+
            }

            fn remove(columns: &mut Self::Columns, index: usize) -> Self {
                ($(columns.$idx.remove(index),)+)
            }

            fn splice(columns: &mut Self::Columns, index: usize, incoming: Self::Columns) {
                $(drop(columns.$idx.splice(index..index, incoming.$idx));)+
            }

            fn splice_cursors(
                columns: &mut Self::Columns,
                index: usize,
                first: &Self::Cursors<'_>,
                last: &Self::Cursors<'_>,
            ) {
                $(drop(columns.$idx.splice(
                    index..index,
                    first.$idx.range_to(&last.$idx).iter().cloned(),
                ));)+
            }

            fn erase(columns: &mut Self::Columns, range: Range<usize>) {
                $(columns.$idx.drain(range.clone());)+
            }

            fn swap(columns: &mut Self::Columns, a: usize, b: usize) {
                $(columns.$idx.swap(a, b);)+
            }

            #[inline]
            fn refs(columns: &Self::Columns, index: usize) -> Self::Refs<'_> {
                ($(&columns.$idx[index],)+)
            }

            #[inline]
            fn muts(columns: &mut Self::Columns, index: usize) -> Self::Muts<'_> {
                ($(&mut columns.$idx[index],)+)
            }

            fn field_refs(&self) -> Self::Refs<'_> {
                ($(&self.$idx,)+)
            }

            fn field_muts(&mut self) -> Self::Muts<'_> {
                ($(&mut self.$idx,)+)
            }

            fn reborrow<'b>(muts: &'b Self::Muts<'_>) -> Self::Refs<'b> {
                ($(&*muts.$idx,)+)
            }

            fn reborrow_mut<'b>(muts: &'b mut Self::Muts<'_>) -> Self::Muts<'b> {
                ($(&mut *muts.$idx,)+)
            }

            fn downgrade<'a>(muts: Self::Muts<'a>) -> Self::Refs<'a> {
                ($(&*muts.$idx,)+)
            }

            fn cloned(refs: Self::Refs<'_>) -> Self {
                ($(refs.$idx.clone(),)+)
            }

            fn assign(dst: &mut Self::Muts<'_>, src: Self::Refs<'_>) {
                $(dst.$idx.clone_from(src.$idx);)+
            }

            fn set(dst: &mut Self::Muts<'_>, value: Self) {
                $(*dst.$idx = value.$idx;)+
            }

            fn swap_slots(a: &mut Self::Muts<'_>, b: &mut Self::Muts<'_>) {
                $(std::mem::swap(&mut *a.$idx, &mut *b.$idx);)+
            }

            fn eq(a: Self::Refs<'_>, b: Self::Refs<'_>) -> bool {
                true $(&& a.$idx.field_eq(b.$idx))+
            }

            fn le(a: Self::Refs<'_>, b: Self::Refs<'_>) -> bool {
                true $(&& a.$idx <= b.$idx)+
            }

            fn ge(a: Self::Refs<'_>, b: Self::Refs<'_>) -> bool {
                true $(&& a.$idx >= b.$idx)+
            }

            fn columns_eq(a: &Self::Columns, b: &Self::Columns) -> bool {
                a.0.len() == b.0.len()
                    $(&& a.$idx.iter().zip(&b.$idx).all(|(x, y)| x.field_eq(y)))+
            }

            fn columns_le(a: &Self::Columns, b: &Self::Columns) -> bool {
                true $(&& a.$idx.as_slice() <= b.$idx.as_slice())+
            }

            fn columns_ge(a: &Self::Columns, b: &Self::Columns) -> bool {
                true $(&& a.$idx.as_slice() >= b.$idx.as_slice())+
            }

            fn cursors(columns: &Self::Columns, position: isize) -> Self::Cursors<'_> {
                ($(FieldCursor::new(columns.$idx.as_slice(), position),)+)
            }

            fn cursors_mut(columns: &mut Self::Columns, position: isize) -> Self::CursorsMut<'_> {
                ($(FieldCursorMut::new(columns.$idx.as_mut_slice(), position),)+)
            }

            fn view<'b>(cursors: &'b Self::CursorsMut<'_>) -> Self::Cursors<'b> {
                ($(cursors.$idx.view(),)+)
            }

            fn freeze<'a>(cursors: Self::CursorsMut<'a>) -> Self::Cursors<'a> {
                ($(cursors.$idx.freeze(),)+)
            }

            #[inline]
            fn advance(cursors: &mut Self::Cursors<'_>, n: isize) {
                $(cursors.$idx.advance(n);)+
            }

            #[inline]
            fn advance_mut(cursors: &mut Self::CursorsMut<'_>, n: isize) {
                $(cursors.$idx.advance(n);)+
            }

            #[inline]
            fn position(cursors: &Self::Cursors<'_>) -> isize {
                cursors.0.position()
            }

            #[inline]
            fn position_mut(cursors: &Self::CursorsMut<'_>) -> isize {
                cursors.0.position()
            }

            fn distance(a: &Self::Cursors<'_>, b: &Self::Cursors<'_>) -> isize {
                let distance = a.0.position() - b.0.position();
                $(invariant!(
                    a.$idx.position() - b.$idx.position() == distance,
                    "column {} cursor distance {} differs from column 0 distance {}",
                    $idx,
                    a.$idx.position() - b.$idx.position(),
                    distance
                );)+
                distance
            }

            fn cursors_eq(a: &Self::Cursors<'_>, b: &Self::Cursors<'_>) -> bool {
                true $(&& a.$idx == b.$idx)+
            }

            fn cursors_le(a: &Self::Cursors<'_>, b: &Self::Cursors<'_>) -> bool {
                true $(&& a.$idx.same_column(&b.$idx) && a.$idx.position() <= b.$idx.position())+
            }

            fn cursors_ge(a: &Self::Cursors<'_>, b: &Self::Cursors<'_>) -> bool {
                true $(&& a.$idx.same_column(&b.$idx) && a.$idx.position() >= b.$idx.position())+
            }

            #[inline]
            fn deref<'a>(cursors: &Self::Cursors<'a>) -> Self::Refs<'a> {
                ($(cursors.$idx.get(),)+)
            }

            #[inline]
            fn deref_mut<'b>(cursors: &'b mut Self::CursorsMut<'_>) -> Self::Muts<'b> {
                ($(cursors.$idx.get_mut(),)+)
            }

            fn iters(columns: &Self::Columns) -> Self::Iters<'_> {
                ($(columns.$idx.iter(),)+)
            }

            fn iters_mut(columns: &mut Self::Columns) -> Self::ItersMut<'_> {
                ($(columns.$idx.iter_mut(),)+)
            }

            fn into_iters(columns: Self::Columns) -> Self::IntoIters {
                ($(columns.$idx.into_iter(),)+)
            }

            #[inline]
            fn next<'a>(iters: &mut Self::Iters<'a>) -> Option<Self::Refs<'a>> {
                Some(($(iters.$idx.next()?,)+))
            }

            #[inline]
            fn next_back<'a>(iters: &mut Self::Iters<'a>) -> Option<Self::Refs<'a>> {
                Some(($(iters.$idx.next_back()?,)+))
            }

            #[inline]
            fn next_mut<'a>(iters: &mut Self::ItersMut<'a>) -> Option<Self::Muts<'a>> {
                Some(($(iters.$idx.next()?,)+))
            }

            #[inline]
            fn next_back_mut<'a>(iters: &mut Self::ItersMut<'a>) -> Option<Self::Muts<'a>> {
                Some(($(iters.$idx.next_back()?,)+))
            }

            fn next_owned(iters: &mut Self::IntoIters) -> Option<Self> {
                Some(($(iters.$idx.next()?,)+))
            }

            fn next_back_owned(iters: &mut Self::IntoIters) -> Option<Self> {
                Some(($(iters.$idx.next_back()?,)+))
            }

            fn remaining(iters: &Self::Iters<'_>) -> usize {
                iters.0.len()
            }

            fn remaining_mut(iters: &Self::ItersMut<'_>) -> usize {
                iters.0.len()
            }

            fn remaining_owned(iters: &Self::IntoIters) -> usize {
                iters.0.len()
            }

            fn fmt_refs(
                refs: Self::Refs<'_>,
                fields: &[FieldInfo],
                out: &mut fmt::DebugStruct<'_, '_>,
            ) {
                $(out.field(field_name(fields, $idx), refs.$idx);)+
            }

            fn fmt_columns(
                columns: &Self::Columns,
                fields: &[FieldInfo],
                out: &mut fmt::DebugStruct<'_, '_>,
            ) {
                $(out.field(field_name(fields, $idx), &columns.$idx);)+
            }
        }
    };
}

impl_field_list!(1; A 0);
impl_field_list!(2; A 0, B 1);
impl_field_list!(3; A 0, B 1, C 2);
impl_field_list!(4; A 0, B 1, C 2, D 3);
impl_field_list!(5; A 0, B 1, C 2, D 3, E 4);
impl_field_list!(6; A 0, B 1, C 2, D 3, E 4, F 5);
impl_field_list!(7; A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_field_list!(8; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
impl_field_list!(9; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
impl_field_list!(10; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
impl_field_list!(11; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
impl_field_list!(12; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);
