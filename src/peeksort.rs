//! PeekSort: adaptive top-down merge sort that splits at natural run boundaries.
//!
//! Instead of always cutting a range in half, PeekSort peeks at the natural run that contains
//! the midpoint and cuts at whichever end of that run is closer to the middle. Existing order is
//! therefore never split apart, and each recursive call already knows a sorted prefix and a
//! sorted suffix of its range.

use crate::core::{Run, SortAlgorithm};
use crate::insertion::binary_insertion_sort_shift_left;
use crate::merge::{MergeBuffer, merge_runs_unchecked};
use crate::runs::{
    extend_strictly_decreasing_run_left, extend_strictly_decreasing_run_right,
    extend_weakly_increasing_run_left, extend_weakly_increasing_run_right, reverse_range,
};
use log::{debug, trace};
use std::mem::MaybeUninit;

/// Ranges shorter than this are finished with binary insertion sort.
pub const DEFAULT_INSERTION_THRESHOLD: usize = 10;

/// Midpoint-peeking adaptive merge sort.
///
/// # Examples
///
/// ```
/// use runsort::{PeekSort, SortAlgorithm};
///
/// let mut data: Vec<u32> = (0..100).rev().chain(100..200).collect();
/// PeekSort::new().sort(&mut data);
/// assert!(data.is_sorted());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeekSort {
    insertion_threshold: usize,
}

impl Default for PeekSort {
    fn default() -> Self {
        Self::new()
    }
}

impl PeekSort {
    pub const fn new() -> Self {
        Self {
            insertion_threshold: DEFAULT_INSERTION_THRESHOLD,
        }
    }

    /// Overrides the insertion sort threshold. Zero is treated as one.
    pub const fn with_insertion_threshold(mut self, threshold: usize) -> Self {
        self.insertion_threshold = if threshold == 0 { 1 } else { threshold };
        self
    }

    pub const fn insertion_threshold(&self) -> usize {
        self.insertion_threshold
    }
}

impl SortAlgorithm for PeekSort {
    fn name(&self) -> &'static str {
        "peeksort"
    }

    fn sort_slice_by<T, F>(&self, v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if v.len() < 2 {
            return;
        }
        debug!(
            "peeksort of {} elements, insertion threshold {}",
            v.len(),
            self.insertion_threshold
        );

        let end = v.len() - 1;
        let mut buffer = MergeBuffer::with_capacity(v.len());
        let mut sorter = Peek {
            threshold: self.insertion_threshold,
            buf: buffer.as_uninit_slice_mut(),
            is_less,
        };
        // A single element is a sorted prefix and a sorted suffix.
        sorter.sort(v, Run::new(0, end), Run::new(0, end));
    }
}

struct Peek<'a, T, F> {
    threshold: usize,
    buf: &'a mut [MaybeUninit<T>],
    is_less: &'a mut F,
}

impl<T, F> Peek<'_, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    /// Sorts `v[current.start..=current.end]`.
    ///
    /// `next` describes what is already known about the range: `v[current.start..=next.start]`
    /// is sorted and so is `v[next.end..=current.end]`.
    fn sort(&mut self, v: &mut [T], current: Run, next: Run) {
        if next.start == current.end || next.end == current.start {
            return;
        }

        if current.len() < self.threshold {
            let prefix_len = next.start - current.start + 1;
            binary_insertion_sort_shift_left(
                &mut v[current.start..=current.end],
                prefix_len,
                self.is_less,
            );
            return;
        }

        let mid = current.start + current.len() / 2;
        if mid <= next.start + 1 {
            // |XXXXXXXX|XX     X|
            self.split_after_prefix(v, current, next);
        } else if mid >= next.end {
            // |XX     X|XXXXXXXX|
            self.split_before_suffix(v, current, next);
        } else {
            // |XX     x|xxxx   X| or |XX   xxx|x      X|
            self.split_at_middle_run(v, current, next, mid);
        }
    }

    /// The sorted prefix already covers the left half: sort the rest and merge it in.
    fn split_after_prefix(&mut self, v: &mut [T], current: Run, next: Run) {
        let rest = next.start + 1;
        trace!("peeksort {current:?}: prefix split at {rest}");

        self.sort(
            v,
            Run::new(rest, current.end),
            Run::new(rest, next.end.max(rest)),
        );
        self.merge(v, current.start, rest, current.end);
    }

    /// The sorted suffix already covers the right half: sort the front and merge.
    fn split_before_suffix(&mut self, v: &mut [T], current: Run, next: Run) {
        let last = next.end - 1;
        trace!("peeksort {current:?}: suffix split at {}", next.end);

        self.sort(
            v,
            Run::new(current.start, last),
            Run::new(next.start.min(last), last),
        );
        self.merge(v, current.start, next.end, current.end);
    }

    /// The midpoint falls between the known runs: find the natural run around it and cut at
    /// the end of that run closest to the midpoint.
    fn split_at_middle_run(&mut self, v: &mut [T], current: Run, next: Run, mid: usize) {
        let lower = next.start + 1;
        let upper = next.end - 1;

        let (run_start, run_end) = if !(self.is_less)(&v[mid], &v[mid - 1]) {
            (
                extend_weakly_increasing_run_left(v, mid - 1, lower, self.is_less),
                extend_weakly_increasing_run_right(v, mid - 1, upper, self.is_less),
            )
        } else {
            let start = extend_strictly_decreasing_run_left(v, mid - 1, lower, self.is_less);
            let end = extend_strictly_decreasing_run_right(v, mid - 1, upper, self.is_less);
            reverse_range(v, start, end);
            (start, end)
        };
        trace!("peeksort {current:?}: middle run {run_start}..={run_end}");

        if mid - run_start < run_end + 1 - mid {
            // Cut before the middle run, which becomes the prefix of the right part.
            self.sort(
                v,
                Run::new(current.start, run_start - 1),
                Run::new(next.start, run_start - 1),
            );
            self.sort(
                v,
                Run::new(run_start, current.end),
                Run::new(run_end, next.end),
            );
            self.merge(v, current.start, run_start, current.end);
        } else {
            // Cut after the middle run, which becomes the suffix of the left part.
            self.sort(
                v,
                Run::new(current.start, run_end),
                Run::new(next.start, run_start),
            );
            self.sort(
                v,
                Run::new(run_end + 1, current.end),
                Run::new(run_end + 1, next.end),
            );
            self.merge(v, current.start, run_end + 1, current.end);
        }
    }

    #[inline]
    fn merge(&mut self, v: &mut [T], start_x: usize, start_y: usize, end_y: usize) {
        merge_runs_unchecked(v, start_x, start_y, end_y, self.buf, self.is_less);
    }
}
