//! Fixed-run bottom-up merge sort in the spirit of a simplified TimSort.
//!
//! The input is cut into chunks of a computed run length, each chunk is binary insertion sorted,
//! and neighbouring chunks are merged bottom-up with doubling width. Unlike [`crate::PowerSort`]
//! the chunk boundaries ignore the natural runs of the input.

use crate::core::SortAlgorithm;
use crate::insertion::binary_insertion_sort_shift_left;
use crate::merge::{MergeBuffer, merge_runs_unchecked};
use log::{debug, trace};

/// Lengths are halved until they are at most this value.
pub const RUN_LENGTH_THRESHOLD: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimSort;

impl SortAlgorithm for TimSort {
    fn name(&self) -> &'static str {
        "timsort"
    }

    fn sort_slice_by<T, F>(&self, v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let len = v.len();
        if len < 2 {
            return;
        }

        let run_len = run_length(len);
        debug!("timsort of {len} elements with run length {run_len}");

        for chunk in v.chunks_mut(run_len) {
            binary_insertion_sort_shift_left(chunk, 1, is_less);
        }

        let mut buffer = MergeBuffer::with_capacity(len);
        let buf = buffer.as_uninit_slice_mut();

        let mut width = run_len;
        while width < len {
            let mut start = 0;
            while start + width < len {
                let end = (start + 2 * width).min(len) - 1;
                merge_runs_unchecked(v, start, start + width, end, buf, is_less);
                start += 2 * width;
            }
            trace!("merged runs of width {width}");
            width *= 2;
        }
    }
}

/// Halves `len` until it is at most [`RUN_LENGTH_THRESHOLD`], adding one if any step saw an odd
/// length. The result lies in `RUN_LENGTH_THRESHOLD / 2 + 1..=RUN_LENGTH_THRESHOLD + 1` for longer
/// inputs.
pub fn run_length(mut len: usize) -> usize {
    let mut remainder = 0;
    while len > RUN_LENGTH_THRESHOLD {
        remainder |= len & 1;
        len /= 2;
    }
    len + remainder
}
