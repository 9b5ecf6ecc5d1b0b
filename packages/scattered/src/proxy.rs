//! Record proxies.
//!
//! A proxy stands for "the record at one position" without copying it: it
//! holds one reference per field, each into a different column. Writing
//! through a [`RecordMut`] always copies into the referenced slots field by
//! field; a proxy is never rebound to other storage.

use std::cmp::Ordering;
use std::fmt;

use crate::field_list::FieldList;
use crate::record::{FieldAccess, FieldTag, Muts, Record, Refs};

fn relate<R: Record>(a: Refs<'_, R>, b: Refs<'_, R>) -> Option<Ordering> {
    if R::Fields::eq(a, b) {
        Some(Ordering::Equal)
    } else if R::Fields::le(a, b) {
        Some(Ordering::Less)
    } else if R::Fields::ge(a, b) {
        Some(Ordering::Greater)
    } else {
        None
    }
}

/// Read-only view of one record spread across columns.
pub struct RecordRef<'a, R: Record> {
    refs: Refs<'a, R>,
}

impl<R: Record> Clone for RecordRef<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Record> Copy for RecordRef<'_, R> {}

impl<'a, R: Record> RecordRef<'a, R> {
    /// Wraps one reference per field.
    pub fn new(refs: Refs<'a, R>) -> Self {
        Self { refs }
    }

    /// Views a standalone field tuple as a record.
    pub fn of(fields: &'a R::Fields) -> Self {
        Self::new(fields.field_refs())
    }

    /// The per-field references.
    pub fn raw(&self) -> Refs<'a, R> {
        self.refs
    }

    /// One field of the record.
    pub fn get<T: FieldTag<Record = R>>(&self) -> &'a T::Value {
        T::slot(self.refs)
    }

    /// Copies the fields out.
    pub fn to_fields(&self) -> R::Fields {
        R::Fields::cloned(self.refs)
    }

    /// Copies the fields out and rebuilds the record.
    pub fn to_record(&self) -> R {
        R::from_fields(self.to_fields())
    }
}

impl<R: Record> fmt::Debug for RecordRef<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct(R::NAME);
        R::Fields::fmt_refs(self.refs, R::FIELDS, &mut out);
        out.finish()
    }
}

impl<'b, R: Record> PartialEq<RecordRef<'b, R>> for RecordRef<'_, R> {
    fn eq(&self, other: &RecordRef<'b, R>) -> bool {
        R::Fields::eq(self.refs, other.refs)
    }
}

impl<'b, R: Record> PartialOrd<RecordRef<'b, R>> for RecordRef<'_, R> {
    fn partial_cmp(&self, other: &RecordRef<'b, R>) -> Option<Ordering> {
        relate::<R>(self.refs, other.refs)
    }
}

impl<'b, R: Record> PartialEq<RecordMut<'b, R>> for RecordRef<'_, R> {
    fn eq(&self, other: &RecordMut<'b, R>) -> bool {
        *self == other.view()
    }
}

impl<'b, R: Record> PartialOrd<RecordMut<'b, R>> for RecordRef<'_, R> {
    fn partial_cmp(&self, other: &RecordMut<'b, R>) -> Option<Ordering> {
        self.partial_cmp(&other.view())
    }
}

impl<'a, R: Record, T: FieldTag<Record = R>> FieldAccess<T> for RecordRef<'a, R> {
    type Output = &'a T::Value;

    fn field(self) -> Self::Output {
        T::slot(self.refs)
    }
}

impl<'a, R: Record, T: FieldTag<Record = R>> FieldAccess<T> for &RecordRef<'a, R> {
    type Output = &'a T::Value;

    fn field(self) -> Self::Output {
        T::slot(self.refs)
    }
}

/// Writable proxy for one record spread across columns.
///
/// Assignment ([`set`](Self::set), [`assign`](Self::assign)) copies into the
/// referenced slots. Converting to a record is explicit, through
/// [`to_record`](Self::to_record).
pub struct RecordMut<'a, R: Record> {
    muts: Muts<'a, R>,
}

impl<'a, R: Record> RecordMut<'a, R> {
    /// Wraps one exclusive reference per field.
    pub fn new(muts: Muts<'a, R>) -> Self {
        Self { muts }
    }

    /// Binds to the slots of a standalone field tuple.
    pub fn from_fields(fields: &'a mut R::Fields) -> Self {
        Self::new(fields.field_muts())
    }

    /// The per-field references.
    pub fn into_raw(self) -> Muts<'a, R> {
        self.muts
    }

    /// Read-only view, borrowing this proxy.
    pub fn view(&self) -> RecordRef<'_, R> {
        RecordRef::new(R::Fields::reborrow(&self.muts))
    }

    /// Shorter-lived proxy to the same slots.
    pub fn reborrow(&mut self) -> RecordMut<'_, R> {
        RecordMut::new(R::Fields::reborrow_mut(&mut self.muts))
    }

    pub fn get<T: FieldTag<Record = R>>(&self) -> &T::Value {
        T::slot(R::Fields::reborrow(&self.muts))
    }

    pub fn get_mut<T: FieldTag<Record = R>>(&mut self) -> &mut T::Value {
        T::slot_mut(R::Fields::reborrow_mut(&mut self.muts))
    }

    /// Gives up the other fields and keeps write access to one.
    pub fn into_field<T: FieldTag<Record = R>>(self) -> &'a mut T::Value {
        T::slot_mut(self.muts)
    }

    /// Moves every field of `record` into the referenced slots.
    pub fn set(&mut self, record: R) {
        R::Fields::set(&mut self.muts, record.into_fields());
    }

    /// Moves every field of `fields` into the referenced slots.
    pub fn set_fields(&mut self, fields: R::Fields) {
        R::Fields::set(&mut self.muts, fields);
    }

    /// Copies every field of `source` into the referenced slots.
    pub fn assign(&mut self, source: RecordRef<'_, R>) {
        R::Fields::assign(&mut self.muts, source.refs);
    }

    /// Copies from a bare per-field reference tuple.
    pub fn assign_raw(&mut self, source: Refs<'_, R>) {
        R::Fields::assign(&mut self.muts, source);
    }

    /// Exchanges the contents of two records, field by field.
    pub fn swap(&mut self, other: &mut RecordMut<'_, R>) {
        R::Fields::swap_slots(&mut self.muts, &mut other.muts);
    }

    pub fn to_fields(&self) -> R::Fields {
        self.view().to_fields()
    }

    pub fn to_record(&self) -> R {
        self.view().to_record()
    }
}

impl<'a, R: Record> From<RecordMut<'a, R>> for RecordRef<'a, R> {
    fn from(record: RecordMut<'a, R>) -> Self {
        RecordRef::new(R::Fields::downgrade(record.muts))
    }
}

impl<R: Record> fmt::Debug for RecordMut<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.view(), f)
    }
}

impl<'b, R: Record> PartialEq<RecordMut<'b, R>> for RecordMut<'_, R> {
    fn eq(&self, other: &RecordMut<'b, R>) -> bool {
        self.view() == other.view()
    }
}

impl<'b, R: Record> PartialOrd<RecordMut<'b, R>> for RecordMut<'_, R> {
    fn partial_cmp(&self, other: &RecordMut<'b, R>) -> Option<Ordering> {
        self.view().partial_cmp(&other.view())
    }
}

impl<'b, R: Record> PartialEq<RecordRef<'b, R>> for RecordMut<'_, R> {
    fn eq(&self, other: &RecordRef<'b, R>) -> bool {
        self.view() == *other
    }
}

impl<'b, R: Record> PartialOrd<RecordRef<'b, R>> for RecordMut<'_, R> {
    fn partial_cmp(&self, other: &RecordRef<'b, R>) -> Option<Ordering> {
        self.view().partial_cmp(other)
    }
}

impl<'a, R: Record, T: FieldTag<Record = R>> FieldAccess<T> for RecordMut<'a, R> {
    type Output = &'a mut T::Value;

    fn field(self) -> Self::Output {
        self.into_field::<T>()
    }
}

impl<'b, R: Record, T: FieldTag<Record = R>> FieldAccess<T> for &'b RecordMut<'_, R> {
    type Output = &'b T::Value;

    fn field(self) -> Self::Output {
        self.get::<T>()
    }
}

impl<'b, R: Record, T: FieldTag<Record = R>> FieldAccess<T> for &'b mut RecordMut<'_, R> {
    type Output = &'b mut T::Value;

    fn field(self) -> Self::Output {
        self.get_mut::<T>()
    }
}
