//! Plain top-down merge sort.
//!
//! Splits at the midpoint and recurses without looking at existing order. It serves as the
//! non-adaptive reference the run-aware sorts are compared against.

use crate::core::SortAlgorithm;
use crate::merge::{MergeBuffer, merge_runs_unchecked};
use log::debug;
use std::mem::MaybeUninit;

/// Textbook recursive merge sort with a fixed midpoint split.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeSort;

impl SortAlgorithm for MergeSort {
    fn name(&self) -> &'static str {
        "merge"
    }

    fn sort_slice_by<T, F>(&self, v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if v.len() < 2 {
            return;
        }
        debug!("merge sort of {} elements", v.len());

        let mut buffer = MergeBuffer::with_capacity(v.len());
        merge_sort(v, 0, v.len() - 1, buffer.as_uninit_slice_mut(), is_less);
    }
}

fn merge_sort<T, F>(
    v: &mut [T],
    start: usize,
    end: usize,
    buf: &mut [MaybeUninit<T>],
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    if start >= end {
        return;
    }

    let mid = start + (end - start) / 2;
    merge_sort(v, start, mid, buf, is_less);
    merge_sort(v, mid + 1, end, buf, is_less);
    merge_runs_unchecked(v, start, mid + 1, end, buf, is_less);
}
