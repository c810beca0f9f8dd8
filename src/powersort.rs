//! PowerSort: adaptive merge sort with a balanced-power merge policy.
//!
//! Runs are detected left to right. Each boundary between two neighbouring runs gets a *node
//! power*: the depth at which that boundary would sit in a perfectly balanced binary merge tree
//! over the whole slice. Runs wait on a stack until a boundary of lower or equal power shows up,
//! which yields a merge tree whose cost is within a small additive term of the optimum for the
//! given run lengths. Sorted input is a single run and costs `n - 1` comparisons.

use crate::core::{Run, SortAlgorithm};
use crate::merge::{MergeBuffer, merge_runs_unchecked};
use crate::runs::find_run_unchecked;
use cuneiform::cuneiform;
use log::{debug, trace};
use std::mem::MaybeUninit;

/// Natural runs shorter than this are padded with binary insertion sort.
pub const DEFAULT_MIN_RUN_LEN: usize = 16;

/// Powers on the stack strictly increase and lie in `1..=usize::BITS`.
const MAX_STACK_HEIGHT: usize = usize::BITS as usize;

/// Balanced-power adaptive merge sort.
///
/// # Examples
///
/// ```
/// use runsort::{PowerSort, SortAlgorithm};
///
/// let mut data = vec![5, 6, 7, 1, 2, 3, 4, 0];
/// PowerSort::new().with_min_run_len(2).sort(&mut data);
/// assert_eq!(data, vec![0, 1, 2, 3, 4, 5, 6, 7]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerSort {
    min_run_len: usize,
}

impl Default for PowerSort {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerSort {
    pub const fn new() -> Self {
        Self {
            min_run_len: DEFAULT_MIN_RUN_LEN,
        }
    }

    /// Overrides the minimum run length. Zero is treated as one, which disables padding.
    pub const fn with_min_run_len(mut self, min_run_len: usize) -> Self {
        self.min_run_len = if min_run_len == 0 { 1 } else { min_run_len };
        self
    }

    pub const fn min_run_len(&self) -> usize {
        self.min_run_len
    }
}

impl SortAlgorithm for PowerSort {
    fn name(&self) -> &'static str {
        "powersort"
    }

    fn sort_slice_by<T, F>(&self, v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if v.len() < 2 {
            return;
        }
        debug!(
            "powersort of {} elements, min run length {}",
            v.len(),
            self.min_run_len
        );

        let mut buffer = MergeBuffer::with_capacity(v.len());
        powersort(v, self.min_run_len, buffer.as_uninit_slice_mut(), is_less);
    }
}

fn powersort<T, F>(v: &mut [T], min_run_len: usize, buf: &mut [MaybeUninit<T>], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let n = v.len();
    let end = n - 1;
    let mut stack = RunStack::new();

    let mut current = find_run_unchecked(v, 0, end, min_run_len, is_less);
    while current.end < end {
        let next = find_run_unchecked(v, current.end + 1, end, min_run_len, is_less);
        let power = node_power(n, current, next);
        trace!("runs {current:?} and {next:?} meet at power {power}");

        while let Some(left) = stack.pop_at_least(power) {
            merge_runs_unchecked(v, left.start, left.end + 1, current.end, buf, is_less);
            current.start = left.start;
            trace!("merged into {current:?}");
        }

        stack.push(current, power);
        current = next;
    }

    while let Some(left) = stack.pop() {
        merge_runs_unchecked(v, left.start, left.end + 1, end, buf, is_less);
        trace!("collapsed {}..={end}", left.start);
    }
}

/// Node power of the boundary between the adjacent runs `first` and `second` in a slice of
/// length `n`.
///
/// The midpoints of both runs are scaled to 64 bit fractions of the slice; the power is one more
/// than the number of leading bits the two fractions share. Boundaries near the middle of the
/// slice get power 1, boundaries deep inside a small subtree get large powers.
pub fn node_power(n: usize, first: Run, second: Run) -> u32 {
    debug_assert!(first.end + 1 == second.start && second.end < n);

    // Twice the midpoints, so the fractions below are exact up to the final division.
    let l = first.start as u128 + second.start as u128;
    let r = second.start as u128 + second.end as u128 + 1;
    let n = n as u128;

    let a = ((l << 63) / n) as u64;
    let b = ((r << 63) / n) as u64;

    (a ^ b).leading_zeros() + 1
}

/// Pending runs, each tagged with the power of the boundary to its right.
#[cuneiform]
struct RunStack {
    runs: [Run; MAX_STACK_HEIGHT],
    powers: [u32; MAX_STACK_HEIGHT],
    len: usize,
}

impl RunStack {
    fn new() -> Self {
        Self {
            runs: [Run::default(); MAX_STACK_HEIGHT],
            powers: [0; MAX_STACK_HEIGHT],
            len: 0,
        }
    }

    fn push(&mut self, run: Run, power: u32) {
        debug_assert!(self.len == 0 || self.powers[self.len - 1] < power);
        self.runs[self.len] = run;
        self.powers[self.len] = power;
        self.len += 1;
    }

    /// Pops the top run if its power is at least `power`.
    fn pop_at_least(&mut self, power: u32) -> Option<Run> {
        if self.len > 0 && self.powers[self.len - 1] >= power {
            self.pop()
        } else {
            None
        }
    }

    fn pop(&mut self) -> Option<Run> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.runs[self.len])
    }
}
