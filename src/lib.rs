//! # Runsort
//!
//! `runsort` is a library of interchangeable, stable, in-place sorting strategies built around
//! **adaptive, run-aware merge sorting**.
//!
//! It implements [**PowerSort**](https://arxiv.org/abs/1805.04154) and **PeekSort**, two merge
//! sorts by Munro and Wild that detect pre-existing sorted runs and schedule merges so that the
//! overall merge tree stays nearly balanced. Inputs made of few long runs sort in close to linear
//! time, while random inputs keep the `O(n log n)` worst case of merge sort.
//!
//! ## Key Features
//!
//! - **Run Detection**: Natural ascending runs are used as they are, strictly descending runs are
//!   reversed in place, and runs shorter than a threshold are padded with binary insertion sort.
//! - **Symmetric Merging**: Two adjacent runs are merged through one temporary buffer holding the
//!   right run in reverse, so neither run needs a sentinel value.
//! - **Two Merge Policies**: [`PowerSort`] merges bottom-up by *node power*, [`PeekSort`] splits
//!   top-down at the natural run boundary closest to the midpoint.
//! - **Baselines**: [`InsertionSort`], [`BinaryInsertionSort`], [`MergeSort`] and a fixed-run
//!   [`TimSort`] share the same [`SortAlgorithm`] contract.
//! - **Stability**: Every algorithm keeps equal elements in their original order.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use runsort::prelude::*;
//!
//! let mut data = vec![19, 22, 19, 22, 24, 25, 17, 11, 22, 23, 28, 23, 0, 1, 12, 9, 13, 27, 15];
//! sort(&mut data, &PowerSort::new());
//!
//! assert_eq!(
//!     data,
//!     vec![0, 1, 9, 11, 12, 13, 15, 17, 19, 19, 22, 22, 22, 23, 23, 24, 25, 27, 28]
//! );
//! ```
//!
//! ### Partial Ranges
//!
//! Ranges are inclusive for every algorithm:
//!
//! ```rust
//! use runsort::prelude::*;
//!
//! let mut data = vec![5, 4, 3, 2, 1];
//! PeekSort::new().sort_range(&mut data, 1, 3).unwrap();
//!
//! assert_eq!(data, vec![5, 2, 3, 4, 1]);
//! ```
//!
//! ### Runtime Selection
//!
//! ```rust
//! use runsort::prelude::*;
//!
//! let algorithm: Algorithm = "powersort".parse().unwrap();
//! let mut words = vec!["pear", "fig", "apple"];
//! algorithm.sort_by_key(&mut words, |w| w.len());
//!
//! assert_eq!(words, vec!["fig", "pear", "apple"]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Best Case**: `O(n)` comparisons for already sorted or reverse sorted input.
//! - **Worst Case**: `O(n log n)` comparisons and moves for the merge based sorts.
//! - **Memory Overhead**: One temporary buffer of the sorted range's length per call.
//!
//! Diagnostic output goes through the [`log`](https://docs.rs/log) facade: one `debug` record per
//! sort call and `trace` records for every scheduling decision.

pub mod algo;
pub mod core;
pub mod insertion;
pub mod merge;
pub mod merge_sort;
pub mod peeksort;
pub mod powersort;
pub mod runs;
pub mod timsort;

pub use crate::algo::{Algorithm, sort, sort_by, sort_range};
pub use crate::core::{Run, SortAlgorithm, SortError};
pub use crate::insertion::{BinaryInsertionSort, InsertionSort};
pub use crate::merge_sort::MergeSort;
pub use crate::peeksort::PeekSort;
pub use crate::powersort::PowerSort;
pub use crate::timsort::TimSort;

pub mod prelude {
    pub use crate::algo::{Algorithm, sort, sort_by, sort_range};
    pub use crate::core::{Run, SortAlgorithm, SortError};
    pub use crate::insertion::{BinaryInsertionSort, InsertionSort};
    pub use crate::merge_sort::MergeSort;
    pub use crate::peeksort::PeekSort;
    pub use crate::powersort::PowerSort;
    pub use crate::timsort::TimSort;
}
