//! Run detection primitives shared by the adaptive merge sorts.
//!
//! All indices are inclusive. The `extend_*` functions walk outward from `i` while the ordering
//! condition holds and return the last index that still belongs to the run; they never step past
//! the given bound.

use crate::core::{Run, SortError, check_range};
use crate::insertion::binary_insertion_sort_shift_left;
use log::trace;

/// Extends a weakly increasing (non-decreasing) run to the right of `i`, up to `right`.
///
/// Returns the end index of the run.
#[inline]
pub fn extend_weakly_increasing_run_right<T, F>(
    v: &[T],
    mut i: usize,
    right: usize,
    is_less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    while i < right && !is_less(&v[i + 1], &v[i]) {
        i += 1;
    }
    i
}

/// Extends a weakly increasing run to the left of `i`, down to `left`.
///
/// Returns the start index of the run.
#[inline]
pub fn extend_weakly_increasing_run_left<T, F>(
    v: &[T],
    mut i: usize,
    left: usize,
    is_less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    while i > left && !is_less(&v[i], &v[i - 1]) {
        i -= 1;
    }
    i
}

/// Extends a strictly decreasing run to the right of `i`, up to `right`.
///
/// Returns the end index of the run.
#[inline]
pub fn extend_strictly_decreasing_run_right<T, F>(
    v: &[T],
    mut i: usize,
    right: usize,
    is_less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    while i < right && is_less(&v[i + 1], &v[i]) {
        i += 1;
    }
    i
}

/// Extends a strictly decreasing run to the left of `i`, down to `left`.
///
/// Returns the start index of the run.
#[inline]
pub fn extend_strictly_decreasing_run_left<T, F>(
    v: &[T],
    mut i: usize,
    left: usize,
    is_less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    while i > left && is_less(&v[i], &v[i - 1]) {
        i -= 1;
    }
    i
}

/// Reverses `v[start..=end]` in place. Empty or single element ranges are left alone.
#[inline]
pub fn reverse_range<T>(v: &mut [T], start: usize, end: usize) {
    if start < end {
        v[start..=end].reverse();
    }
}

/// Finds the natural run starting at `i` and makes it ascending.
///
/// If `v[i + 1] < v[i]` the run is strictly decreasing: it is extended as far as possible and
/// then reversed in place. Strictness keeps the reversal stable, equal elements never end up in
/// a decreasing run. Otherwise the weakly increasing run is extended.
///
/// Returns the end index of the now ascending run, never beyond `right`.
///
/// # Panics
///
/// Panics if `i > right` or `right >= v.len()`.
pub fn extend_and_reverse_run_right<T, F>(
    v: &mut [T],
    i: usize,
    right: usize,
    is_less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    assert!(
        i <= right && right < v.len(),
        "run start {i} outside of {i}..={right} for a slice of length {}",
        v.len()
    );
    if i == right {
        return i;
    }

    if is_less(&v[i + 1], &v[i]) {
        let end = extend_strictly_decreasing_run_right(v, i + 1, right, is_less);
        reverse_range(v, i, end);
        end
    } else {
        extend_weakly_increasing_run_right(v, i + 1, right, is_less)
    }
}

/// Detects the run starting at `start` and pads it to `min_run_len` elements.
///
/// Short natural runs merge inefficiently, so a run shorter than `min_run_len` is extended to
/// `min(end, start + min_run_len - 1)` and sorted with binary insertion sort, skipping the part
/// that is already known to be sorted. The returned run always lies inside `start..=end`.
///
/// Returns [`SortError::InvalidRange`] if `start > end` or `end >= v.len()`; `v` is not touched
/// in that case.
///
/// # Examples
///
/// ```
/// use runsort::Run;
/// use runsort::runs::find_run;
///
/// let mut v = [3, 2, 1, 7, 5];
/// let run = find_run(&mut v, 0, 4, 1, &mut |a: &i32, b: &i32| a < b).unwrap();
/// assert_eq!(run, Run::new(0, 2));
/// assert_eq!(v, [1, 2, 3, 7, 5]);
/// ```
pub fn find_run<T, F>(
    v: &mut [T],
    start: usize,
    end: usize,
    min_run_len: usize,
    is_less: &mut F,
) -> Result<Run, SortError>
where
    F: FnMut(&T, &T) -> bool,
{
    check_range(start, end, v.len())?;
    Ok(find_run_unchecked(v, start, end, min_run_len, is_less))
}

/// [`find_run`] for schedulers that keep `start <= end < v.len()` by construction.
pub(crate) fn find_run_unchecked<T, F>(
    v: &mut [T],
    start: usize,
    end: usize,
    min_run_len: usize,
    is_less: &mut F,
) -> Run
where
    F: FnMut(&T, &T) -> bool,
{
    let natural_end = extend_and_reverse_run_right(v, start, end, is_less);
    let natural_len = natural_end - start + 1;
    if natural_len >= min_run_len {
        return Run::new(start, natural_end);
    }

    let padded_end = end.min(start.saturating_add(min_run_len - 1));
    binary_insertion_sort_shift_left(&mut v[start..=padded_end], natural_len, is_less);
    trace!("padded run {start}..={natural_end} to {start}..={padded_end}");

    Run::new(start, padded_end)
}
