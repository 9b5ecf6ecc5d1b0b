//! Lockstep iterators over every column of a vector.

use std::fmt;
use std::iter::FusedIterator;

use crate::field_list::FieldList;
use crate::proxy::{RecordMut, RecordRef};
use crate::record::Record;

type Iters<'a, R> = <<R as Record>::Fields as FieldList>::Iters<'a>;
type ItersMut<'a, R> = <<R as Record>::Fields as FieldList>::ItersMut<'a>;
type IntoIters<R> = <<R as Record>::Fields as FieldList>::IntoIters;

/// Iterator over [`RecordRef`]s, created by [`Vector::iter`](crate::Vector::iter).
pub struct Iter<'a, R: Record> {
    iters: Iters<'a, R>,
}

impl<'a, R: Record> Iter<'a, R> {
    pub(crate) fn new(iters: Iters<'a, R>) -> Self {
        Self { iters }
    }
}

impl<R: Record> Clone for Iter<'_, R> {
    fn clone(&self) -> Self {
        Self {
            iters: self.iters.clone(),
        }
    }
}

impl<'a, R: Record> Iterator for Iter<'a, R> {
    type Item = RecordRef<'a, R>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        R::Fields::next(&mut self.iters).map(RecordRef::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = R::Fields::remaining(&self.iters);
        (remaining, Some(remaining))
    }
}

impl<R: Record> DoubleEndedIterator for Iter<'_, R> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        R::Fields::next_back(&mut self.iters).map(RecordRef::new)
    }
}

impl<R: Record> ExactSizeIterator for Iter<'_, R> {}

impl<R: Record> FusedIterator for Iter<'_, R> {}

impl<R: Record> fmt::Debug for Iter<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("record", &R::NAME)
            .field("remaining", &R::Fields::remaining(&self.iters))
            .finish()
    }
}

/// Iterator over [`RecordMut`]s, created by
/// [`Vector::iter_mut`](crate::Vector::iter_mut).
pub struct IterMut<'a, R: Record> {
    iters: ItersMut<'a, R>,
}

impl<'a, R: Record> IterMut<'a, R> {
    pub(crate) fn new(iters: ItersMut<'a, R>) -> Self {
        Self { iters }
    }
}

impl<'a, R: Record> Iterator for IterMut<'a, R> {
    type Item = RecordMut<'a, R>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        R::Fields::next_mut(&mut self.iters).map(RecordMut::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = R::Fields::remaining_mut(&self.iters);
        (remaining, Some(remaining))
    }
}

impl<R: Record> DoubleEndedIterator for IterMut<'_, R> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        R::Fields::next_back_mut(&mut self.iters).map(RecordMut::new)
    }
}

impl<R: Record> ExactSizeIterator for IterMut<'_, R> {}

impl<R: Record> FusedIterator for IterMut<'_, R> {}

impl<R: Record> fmt::Debug for IterMut<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("record", &R::NAME)
            .field("remaining", &R::Fields::remaining_mut(&self.iters))
            .finish()
    }
}

/// Owning iterator over records, created by `Vector::into_iter`.
pub struct IntoIter<R: Record> {
    iters: IntoIters<R>,
}

impl<R: Record> IntoIter<R> {
    pub(crate) fn new(iters: IntoIters<R>) -> Self {
        Self { iters }
    }
}

impl<R: Record> Iterator for IntoIter<R> {
    type Item = R;

    fn next(&mut self) -> Option<R> {
        R::Fields::next_owned(&mut self.iters).map(R::from_fields)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = R::Fields::remaining_owned(&self.iters);
        (remaining, Some(remaining))
    }
}

impl<R: Record> DoubleEndedIterator for IntoIter<R> {
    fn next_back(&mut self) -> Option<R> {
        R::Fields::next_back_owned(&mut self.iters).map(R::from_fields)
    }
}

impl<R: Record> ExactSizeIterator for IntoIter<R> {}

impl<R: Record> FusedIterator for IntoIter<R> {}
