use std::{iter::Enumerate, slice};

use crate::structs::{OtRecord, Slice};

/// Where one slice starts and ends in the referenced audio file, in samples.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct SliceBounds {
    pub index: usize,
    pub start: u32,
    pub end: u32,
}

impl SliceBounds {
    /// index padded to 2 digits, so the chopped files sort in slice order
    pub fn padded_index(&self) -> String {
        format!("{:02}", self.index)
    }

    /// slices ending before they start are passed through as is, their length is 0
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct SliceIter<'a> {
    inner: Enumerate<slice::Iter<'a, Slice>>,
}

impl<'a> Iterator for SliceIter<'a> {
    type Item = SliceBounds;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(index, slice)| SliceBounds {
            index,
            start: slice.start_point,
            end: slice.end_point,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> ExactSizeIterator for SliceIter<'a> {}

impl OtRecord {
    pub fn slice_bounds(&self) -> SliceIter<'_> {
        SliceIter {
            inner: self.slices().iter().enumerate(),
        }
    }
}

pub fn extract_slices(record: &OtRecord) -> SliceIter<'_> {
    record.slice_bounds()
}
