use runsort::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A key with the position it had in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Tagged {
    key: u32,
    index: usize,
}

fn tag(keys: &[u32]) -> Vec<Tagged> {
    keys.iter()
        .enumerate()
        .map(|(index, &key)| Tagged { key, index })
        .collect()
}

fn assert_stable_sorted(data: &[Tagged], name: &str) {
    for pair in data.windows(2) {
        assert!(
            pair[0].key < pair[1].key
                || (pair[0].key == pair[1].key && pair[0].index < pair[1].index),
            "{name}: {:?} before {:?}",
            pair[0],
            pair[1]
        );
    }
}

fn check_all(keys: &[u32]) {
    for algorithm in Algorithm::all() {
        let mut data = tag(keys);
        algorithm.sort_by_key(&mut data, |t| t.key);
        assert_eq!(data.len(), keys.len());
        assert_stable_sorted(&data, algorithm.name());
    }
}

#[test]
fn test_stable_random_duplicates() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let len = rng.random_range(0..1_500);
        let keys: Vec<u32> = (0..len).map(|_| rng.random_range(0..16)).collect();
        check_all(&keys);
    }
}

#[test]
fn test_stable_descending_with_plateaus() {
    // Equal keys inside a descending sequence must not be reversed with it.
    let keys: Vec<u32> = (0..600).rev().map(|k| k / 7).collect();
    check_all(&keys);
}

#[test]
fn test_stable_runs_of_equal_keys() {
    let mut keys = Vec::new();
    for block in 0..40 {
        keys.extend(std::iter::repeat_n(block % 5, 13 + block as usize));
    }
    check_all(&keys);
}

#[test]
fn test_stable_all_equal() {
    check_all(&[3; 777]);
}

#[test]
fn test_stable_partial_range() {
    let mut rng = StdRng::seed_from_u64(11);
    let keys: Vec<u32> = (0..400).map(|_| rng.random_range(0..8)).collect();

    for algorithm in Algorithm::all() {
        let mut data = tag(&keys);
        algorithm
            .sort_range_by(&mut data, 100, 299, |a, b| a.key.cmp(&b.key))
            .unwrap();

        assert_stable_sorted(&data[100..=299], algorithm.name());
        assert_eq!(&data[..100], &tag(&keys)[..100]);
        assert_eq!(&data[300..], &tag(&keys)[300..]);
    }
}
