//! Symmetric merging of adjacent runs through a temporary buffer.
//!
//! The left run is copied into the buffer in order, the right run in reverse order behind it.
//! The merge then consumes the buffer from both ends inward: the front of the left run moves up,
//! the front of the right run moves down, and the smaller of the two fronts is written back into
//! the slice. Ties take the left element, which keeps the merge stable.

use crate::core::{SortError, check_range};
use std::mem::MaybeUninit;
use std::ptr;

/// Uninitialised scratch space for merging.
///
/// The buffer is indexed with the same positions as the slice being merged, so it must hold at
/// least `end_y + 1` slots for a merge ending at `end_y`. Schedulers allocate one buffer per top
/// level sort call, sized to the whole range.
pub struct MergeBuffer<T> {
    buf: Vec<T>,
    len: usize,
}

impl<T> MergeBuffer<T> {
    /// Allocates a buffer with exactly `len` usable slots.
    pub fn with_capacity(len: usize) -> Self {
        Self {
            buf: Vec::with_capacity(len),
            len,
        }
    }

    /// Number of usable slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.len
    }

    /// The usable slots, all logically uninitialised.
    ///
    /// The `Vec` never reports a non-zero length, so nothing left in here is ever dropped.
    #[inline]
    pub(crate) fn as_uninit_slice_mut(&mut self) -> &mut [MaybeUninit<T>] {
        &mut self.buf.spare_capacity_mut()[..self.len]
    }
}

/// Merges the sorted runs `v[start_x..start_y]` and `v[start_y..=end_y]` into `v[start_x..=end_y]`.
///
/// Both runs must already be sorted. `buffer` must provide at least `end_y + 1` slots; a smaller
/// buffer is reported as [`SortError::BufferTooSmall`] before `v` is touched. An empty left or
/// right run is accepted and leaves `v` unchanged.
///
/// # Examples
///
/// ```
/// use runsort::merge::{MergeBuffer, merge_runs};
///
/// let mut v = [1, 4, 7, 2, 3, 9];
/// let mut buffer = MergeBuffer::with_capacity(v.len());
/// merge_runs(&mut v, 0, 3, 5, &mut buffer, &mut |a: &i32, b: &i32| a < b).unwrap();
/// assert_eq!(v, [1, 2, 3, 4, 7, 9]);
/// ```
pub fn merge_runs<T, F>(
    v: &mut [T],
    start_x: usize,
    start_y: usize,
    end_y: usize,
    buffer: &mut MergeBuffer<T>,
    is_less: &mut F,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> bool,
{
    check_range(start_x, end_y, v.len())?;
    if buffer.capacity() < end_y + 1 {
        return Err(SortError::BufferTooSmall {
            required: end_y + 1,
            capacity: buffer.capacity(),
        });
    }
    if start_y <= start_x || start_y > end_y {
        return Ok(());
    }

    merge_runs_unchecked(v, start_x, start_y, end_y, buffer.as_uninit_slice_mut(), is_less);
    Ok(())
}

/// [`merge_runs`] without argument validation, for schedulers that size everything themselves.
///
/// Requires `start_x < start_y <= end_y < v.len()` and `buf.len() > end_y`.
pub(crate) fn merge_runs_unchecked<T, F>(
    v: &mut [T],
    start_x: usize,
    start_y: usize,
    end_y: usize,
    buf: &mut [MaybeUninit<T>],
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(start_x < start_y && start_y <= end_y && end_y < v.len());
    assert!(buf.len() > end_y, "merge buffer too small");

    // Boundary already in order, the concatenation is sorted.
    if !is_less(&v[start_y], &v[start_y - 1]) {
        return;
    }

    let v_ptr = v.as_mut_ptr();
    let buf_ptr = buf.as_mut_ptr() as *mut T;

    // SAFETY: `v[start_x..=end_y]` and `buf[start_x..=end_y]` are in bounds (checked above) and
    // never overlap. Every element of the range is copied into the buffer exactly once, after
    // which the range in `v` is a hole owned by `hole`. The loop moves one element back per
    // iteration and `hole` moves the remainder back when dropped, on the normal path as well as
    // when `is_less` panics, so `v` always ends up holding each element exactly once.
    unsafe {
        ptr::copy_nonoverlapping(
            v_ptr.add(start_x),
            buf_ptr.add(start_x),
            start_y - start_x,
        );
        for (offset, src) in (start_y..=end_y).enumerate() {
            ptr::copy_nonoverlapping(v_ptr.add(src), buf_ptr.add(end_y - offset), 1);
        }

        let mut hole = MergeHole {
            buf: buf_ptr,
            left: start_x,
            mid: start_y,
            right_end: end_y + 1,
            dest: v_ptr.add(start_x),
        };

        while hole.left < hole.mid && hole.right_end > hole.mid {
            let left = &*buf_ptr.add(hole.left);
            let right = &*buf_ptr.add(hole.right_end - 1);
            if is_less(right, left) {
                ptr::copy_nonoverlapping(right, hole.dest, 1);
                hole.right_end -= 1;
            } else {
                ptr::copy_nonoverlapping(left, hole.dest, 1);
                hole.left += 1;
            }
            hole.dest = hole.dest.add(1);
        }
    }
}

/// Elements still sitting in the buffer during a merge.
///
/// The left remainder is `buf[left..mid]` in ascending order, the right remainder is
/// `buf[mid..right_end]` in descending order. Dropping moves both, in ascending order, to `dest`.
struct MergeHole<T> {
    buf: *const T,
    left: usize,
    mid: usize,
    right_end: usize,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: The remainder holds exactly as many elements as the hole starting at `dest`.
        unsafe {
            let left_len = self.mid - self.left;
            ptr::copy_nonoverlapping(self.buf.add(self.left), self.dest, left_len);

            let mut dest = self.dest.add(left_len);
            let mut right = self.right_end;
            while right > self.mid {
                right -= 1;
                ptr::copy_nonoverlapping(self.buf.add(right), dest, 1);
                dest = dest.add(1);
            }
        }
    }
}
