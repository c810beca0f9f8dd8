//! Entry points and runtime algorithm selection.
//!
//! This module provides:
//! - [`sort`], [`sort_by`] and [`sort_range`]: Sort a sequence with any [`SortAlgorithm`].
//! - [`Algorithm`]: A closed set of every strategy in this crate, selectable at runtime by name.
//!
//! All ranges are inclusive (`[start, end]`) regardless of the algorithm.

use crate::core::{SortAlgorithm, SortError};
use crate::insertion::{BinaryInsertionSort, InsertionSort};
use crate::merge_sort::MergeSort;
use crate::peeksort::PeekSort;
use crate::powersort::PowerSort;
use crate::timsort::TimSort;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sorts the whole sequence with `algorithm`.
///
/// # Examples
///
/// ```
/// use runsort::{PowerSort, sort};
///
/// let mut data = vec![19, 22, 19, 22, 24, 25, 17, 11];
/// sort(&mut data, &PowerSort::new());
///
/// assert_eq!(data, vec![11, 17, 19, 19, 22, 22, 24, 25]);
/// ```
pub fn sort<T: Ord, A: SortAlgorithm>(v: &mut [T], algorithm: &A) {
    algorithm.sort(v);
}

/// Sorts the whole sequence with `algorithm` and a three-way comparator.
///
/// # Examples
///
/// ```
/// use runsort::{PeekSort, sort_by};
///
/// let mut data = vec!["ccc", "a", "bb"];
/// sort_by(&mut data, &PeekSort::new(), |a, b| b.len().cmp(&a.len()));
///
/// assert_eq!(data, vec!["ccc", "bb", "a"]);
/// ```
pub fn sort_by<T, A, F>(v: &mut [T], algorithm: &A, compare: F)
where
    A: SortAlgorithm,
    F: FnMut(&T, &T) -> Ordering,
{
    algorithm.sort_by(v, compare);
}

/// Sorts the inclusive range `v[start..=end]` with `algorithm`.
///
/// Returns [`SortError::InvalidRange`] if `start > end` or `end` is out of bounds; the sequence is
/// left untouched in that case.
///
/// # Examples
///
/// ```
/// use runsort::{MergeSort, sort_range};
///
/// let mut data = vec![9, 3, 2, 1, 0];
/// sort_range(&mut data, &MergeSort, 1, 3).unwrap();
/// assert_eq!(data, vec![9, 1, 2, 3, 0]);
///
/// assert!(sort_range(&mut data, &MergeSort, 3, 1).is_err());
/// ```
pub fn sort_range<T: Ord, A: SortAlgorithm>(
    v: &mut [T],
    algorithm: &A,
    start: usize,
    end: usize,
) -> Result<(), SortError> {
    algorithm.sort_range(v, start, end)
}

/// Every sorting strategy of this crate, for selecting one at runtime.
///
/// # Examples
///
/// ```
/// use runsort::{Algorithm, SortAlgorithm};
///
/// let algorithm: Algorithm = "peeksort".parse().unwrap();
/// let mut data = vec![3, 1, 2];
/// algorithm.sort(&mut data);
///
/// assert_eq!(data, vec![1, 2, 3]);
/// assert_eq!(algorithm.to_string(), "peeksort");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Insertion(InsertionSort),
    BinaryInsertion(BinaryInsertionSort),
    Merge(MergeSort),
    Tim(TimSort),
    Power(PowerSort),
    Peek(PeekSort),
}

impl Algorithm {
    /// Every algorithm with its default configuration.
    pub fn all() -> [Algorithm; 6] {
        [
            Algorithm::Insertion(InsertionSort),
            Algorithm::BinaryInsertion(BinaryInsertionSort),
            Algorithm::Merge(MergeSort),
            Algorithm::Tim(TimSort),
            Algorithm::Power(PowerSort::new()),
            Algorithm::Peek(PeekSort::new()),
        ]
    }

    /// Whether the algorithm exploits existing runs in its input.
    pub fn is_adaptive(&self) -> bool {
        matches!(self, Algorithm::Power(_) | Algorithm::Peek(_))
    }
}

impl SortAlgorithm for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Algorithm::Insertion(a) => a.name(),
            Algorithm::BinaryInsertion(a) => a.name(),
            Algorithm::Merge(a) => a.name(),
            Algorithm::Tim(a) => a.name(),
            Algorithm::Power(a) => a.name(),
            Algorithm::Peek(a) => a.name(),
        }
    }

    fn sort_slice_by<T, F>(&self, v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        match self {
            Algorithm::Insertion(a) => a.sort_slice_by(v, is_less),
            Algorithm::BinaryInsertion(a) => a.sort_slice_by(v, is_less),
            Algorithm::Merge(a) => a.sort_slice_by(v, is_less),
            Algorithm::Tim(a) => a.sort_slice_by(v, is_less),
            Algorithm::Power(a) => a.sort_slice_by(v, is_less),
            Algorithm::Peek(a) => a.sort_slice_by(v, is_less),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::all()
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_string()))
    }
}

impl From<PowerSort> for Algorithm {
    fn from(sort: PowerSort) -> Self {
        Algorithm::Power(sort)
    }
}

impl From<PeekSort> for Algorithm {
    fn from(sort: PeekSort) -> Self {
        Algorithm::Peek(sort)
    }
}
