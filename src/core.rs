//! Core traits and types for runsort.
//!
//! This module defines:
//! - [`Run`]: An inclusive index range of a slice that is known to be sorted.
//! - [`SortAlgorithm`]: The contract every sorting strategy implements.
//! - [`SortError`]: Contract violations reported by range based entry points.

use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;

/// An inclusive index range `[start, end]` of a slice that is already sorted.
///
/// Runs own no data, they only describe bounds. They are produced and consumed while a single
/// sort call is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Run {
    pub start: usize,
    pub end: usize,
}

impl Run {
    /// Creates a run spanning `start..=end`.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of elements covered by the run.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`, which no run produced by this crate ever has.
    #[inline]
    pub const fn len(&self) -> usize {
        assert!(self.start <= self.end, "run start lies after its end");
        self.end - self.start + 1
    }

    /// Runs are inclusive, so they always cover at least one element.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Whether `index` lies inside `start..=end`.
    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }
}

impl From<Run> for RangeInclusive<usize> {
    fn from(run: Run) -> Self {
        run.start..=run.end
    }
}

/// Errors reported when a caller violates the contract of a range based operation.
///
/// Sorting is pure in-memory computation, so there is no transient failure category:
/// every variant is a caller bug and is reported at the call that caused it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SortError {
    /// `start > end`, or `end` lies outside the slice.
    InvalidRange { start: usize, end: usize, len: usize },
    /// A merge buffer holds fewer slots than the merged range requires.
    BufferTooSmall { required: usize, capacity: usize },
    /// No algorithm is registered under the given name.
    UnknownAlgorithm(String),
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::InvalidRange { start, end, len } => write!(
                f,
                "invalid range {start}..={end} for a sequence of length {len}"
            ),
            SortError::BufferTooSmall { required, capacity } => write!(
                f,
                "merge buffer too small: {required} slots required, {capacity} available"
            ),
            SortError::UnknownAlgorithm(name) => write!(f, "unknown sort algorithm `{name}`"),
        }
    }
}

impl std::error::Error for SortError {}

/// Checks that `start..=end` addresses existing elements of a slice of length `len`.
pub(crate) fn check_range(start: usize, end: usize, len: usize) -> Result<(), SortError> {
    if start > end || end >= len {
        return Err(SortError::InvalidRange { start, end, len });
    }
    Ok(())
}

/// A stable, in-place sorting strategy.
///
/// Implementors only provide [`SortAlgorithm::sort_slice_by`], which sorts a whole slice with a
/// strict `is_less` predicate. Everything else, including partial range sorting, is derived from
/// it. Ranges are always inclusive (`[start, end]`), for every algorithm.
///
/// # Examples
///
/// Implementing a strategy outside of this crate:
///
/// ```
/// use runsort::core::SortAlgorithm;
///
/// struct StdStable;
///
/// impl SortAlgorithm for StdStable {
///     fn name(&self) -> &'static str {
///         "std-stable"
///     }
///
///     fn sort_slice_by<T, F>(&self, v: &mut [T], is_less: &mut F)
///     where
///         F: FnMut(&T, &T) -> bool,
///     {
///         v.sort_by(|a, b| {
///             if is_less(a, b) {
///                 std::cmp::Ordering::Less
///             } else if is_less(b, a) {
///                 std::cmp::Ordering::Greater
///             } else {
///                 std::cmp::Ordering::Equal
///             }
///         });
///     }
/// }
///
/// let mut data = vec![3, 1, 2];
/// StdStable.sort(&mut data);
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
pub trait SortAlgorithm {
    /// Short, stable identifier of the algorithm.
    fn name(&self) -> &'static str;

    /// Sorts the whole of `v` in ascending order according to `is_less`.
    fn sort_slice_by<T, F>(&self, v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool;

    /// Sorts `v` in ascending order.
    fn sort<T: Ord>(&self, v: &mut [T]) {
        self.sort_slice_by(v, &mut T::lt);
    }

    /// Sorts `v` with a three-way comparator.
    fn sort_by<T, F>(&self, v: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_slice_by(v, &mut |a, b| compare(a, b) == Ordering::Less);
    }

    /// Sorts `v` by the key extracted with `f`.
    fn sort_by_key<T, K, F>(&self, v: &mut [T], mut f: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_slice_by(v, &mut |a, b| f(a).lt(&f(b)));
    }

    /// Sorts the inclusive range `v[start..=end]`, leaving the rest of `v` untouched.
    fn sort_range<T: Ord>(&self, v: &mut [T], start: usize, end: usize) -> Result<(), SortError> {
        self.sort_range_by(v, start, end, T::cmp)
    }

    /// Sorts the inclusive range `v[start..=end]` with a three-way comparator.
    fn sort_range_by<T, F>(
        &self,
        v: &mut [T],
        start: usize,
        end: usize,
        mut compare: F,
    ) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        check_range(start, end, v.len())?;
        self.sort_slice_by(&mut v[start..=end], &mut |a, b| {
            compare(a, b) == Ordering::Less
        });
        Ok(())
    }
}
