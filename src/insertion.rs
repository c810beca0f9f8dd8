//! Insertion sort and binary insertion sort.
//!
//! Both are stable and quadratic in element moves. They are the baseline sorters for tiny inputs
//! and the padding step of the adaptive merge sorts. Elements are moved with `rotate_right`, so a
//! panicking comparator always leaves a permutation of the input behind.

use crate::core::SortAlgorithm;
use log::debug;

/// Classic insertion sort: the insertion point is found by a linear scan from the right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InsertionSort;

/// Insertion sort that locates the insertion point with a binary search.
///
/// This reduces comparisons to `O(n log n)` while keeping `O(n^2)` moves, which makes it the
/// cheaper choice when comparisons dominate, e.g. for nearly sorted short runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BinaryInsertionSort;

impl SortAlgorithm for InsertionSort {
    fn name(&self) -> &'static str {
        "insertion"
    }

    fn sort_slice_by<T, F>(&self, v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        debug!("insertion sort of {} elements", v.len());
        insertion_sort_shift_left(v, 1, is_less);
    }
}

impl SortAlgorithm for BinaryInsertionSort {
    fn name(&self) -> &'static str {
        "binary-insertion"
    }

    fn sort_slice_by<T, F>(&self, v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        debug!("binary insertion sort of {} elements", v.len());
        binary_insertion_sort_shift_left(v, 1, is_less);
    }
}

/// Sorts `v` assuming `v[..offset]` is already sorted.
///
/// Each following element is shifted left past every element strictly greater than it.
pub fn insertion_sort_shift_left<T, F>(v: &mut [T], offset: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in offset.max(1)..v.len() {
        let mut pos = i;
        while pos > 0 && is_less(&v[i], &v[pos - 1]) {
            pos -= 1;
        }
        v[pos..=i].rotate_right(1);
    }
}

/// Sorts `v` assuming `v[..offset]` is already sorted, using binary search for insertion points.
pub fn binary_insertion_sort_shift_left<T, F>(v: &mut [T], offset: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in offset.max(1)..v.len() {
        let pos = upper_bound(v, i, is_less);
        v[pos..=i].rotate_right(1);
    }
}

/// Index in the sorted prefix `v[..i]` after the last element not greater than `v[i]`.
///
/// Inserting there keeps equal elements in their original order.
#[inline]
fn upper_bound<T, F>(v: &[T], i: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let (sorted, rest) = v.split_at(i);
    let key = &rest[0];
    sorted.partition_point(|x| !is_less(key, x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_left_with_sorted_prefix() {
        let mut v = [2, 5, 8, 1, 9, 3];
        insertion_sort_shift_left(&mut v, 3, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(v, [1, 2, 3, 5, 8, 9]);

        let mut v = [2, 5, 8, 1, 9, 3];
        binary_insertion_sort_shift_left(&mut v, 3, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(v, [1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn test_upper_bound_places_after_equals() {
        let v = [1, 3, 3, 3, 7, 3];
        assert_eq!(upper_bound(&v, 5, &mut |a: &i32, b: &i32| a < b), 4);
    }

    #[test]
    fn test_binary_insertion_is_stable() {
        let mut v = [(2, 0), (1, 1), (2, 2), (1, 3), (2, 4)];
        BinaryInsertionSort.sort_by_key(&mut v, |e| e.0);
        assert_eq!(v, [(1, 1), (1, 3), (2, 0), (2, 2), (2, 4)]);
    }

    #[test]
    fn test_offset_beyond_len_is_noop() {
        let mut v = [3, 2, 1];
        insertion_sort_shift_left(&mut v, 10, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(v, [3, 2, 1]);
    }
}
