// src/sampler.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! d100 roll checks and bounded random subset sampling

use std::hash::Hash;

use indexmap::IndexSet;
use rand::Rng;

use crate::constants::ROLL_MAX;
use crate::error::{GenError, Result};

/// Roll a d100 (0..=100) and pass only when the roll exceeds `threshold`
pub fn percent_roll_check<R: Rng + ?Sized>(rng: &mut R, threshold: u32) -> bool {
    let roll = rng.random_range(0..=ROLL_MAX);
    roll > threshold
}

/// Draw up to `max_items` items from `from` as a set
///
/// With `chance_is_empty > 0` the result is empty whenever a roll check at
/// that threshold fails. Otherwise a count in `1..=max_items` is drawn and
/// that many items are picked uniformly with replacement, so duplicates
/// collapse and the set may be smaller than the drawn count. Items keep the
/// order of their first draw.
pub fn get_random_items<T, R>(
    rng: &mut R,
    from: &[T],
    max_items: usize,
    chance_is_empty: u32,
) -> Result<IndexSet<T>>
where
    T: Clone + Eq + Hash,
    R: Rng + ?Sized,
{
    if from.is_empty() {
        return Err(GenError::InvalidSampler(
            "cannot sample from an empty list".to_string(),
        ));
    }
    if max_items == 0 {
        return Err(GenError::InvalidSampler(
            "max_items must be at least 1".to_string(),
        ));
    }
    if chance_is_empty > ROLL_MAX {
        return Err(GenError::InvalidSampler(format!(
            "chance_is_empty must be within 0..={}, got {}",
            ROLL_MAX, chance_is_empty
        )));
    }

    if chance_is_empty > 0 && !percent_roll_check(rng, chance_is_empty) {
        tracing::trace!("Sampler short-circuited to empty set");
        return Ok(IndexSet::new());
    }

    let number_of_items = rng.random_range(1..=max_items);
    let mut result = IndexSet::with_capacity(number_of_items);
    for _ in 0..number_of_items {
        let idx = rng.random_range(0..from.len());
        result.insert(from[idx].clone());
    }

    tracing::trace!(
        "Sampled {} draws, {} distinct items",
        number_of_items,
        result.len()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HASHTAGS;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_sample_size_and_membership() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        for _ in 0..1000 {
            let picked = get_random_items(&mut rng, &HASHTAGS, 8, 0).unwrap();
            assert!((1..=8).contains(&picked.len()), "size {}", picked.len());
            assert!(picked.iter().all(|t| HASHTAGS.contains(t)));
        }
    }

    #[test]
    fn test_single_item_source_dedupes() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        for _ in 0..100 {
            let picked = get_random_items(&mut rng, &["only"], 8, 0).unwrap();
            assert_eq!(picked.len(), 1);
        }
    }

    #[test]
    fn test_always_empty_at_full_chance() {
        // Every roll in 0..=100 fails a threshold of 100
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        for _ in 0..200 {
            let picked = get_random_items(&mut rng, &HASHTAGS, 8, 100).unwrap();
            assert!(picked.is_empty());
        }
    }

    #[test]
    fn test_sometimes_empty_at_partial_chance() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
        let empties = (0..2000)
            .filter(|_| get_random_items(&mut rng, &HASHTAGS, 3, 50).unwrap().is_empty())
            .count();
        assert!(empties > 500 && empties < 1500, "empties = {}", empties);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let mut a = Xoshiro256PlusPlus::seed_from_u64(99);
        let mut b = Xoshiro256PlusPlus::seed_from_u64(99);
        for _ in 0..50 {
            let x = get_random_items(&mut a, &HASHTAGS, 8, 0).unwrap();
            let y = get_random_items(&mut b, &HASHTAGS, 8, 0).unwrap();
            assert!(x.iter().eq(y.iter()));
        }
    }

    #[test]
    fn test_invalid_inputs() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        let empty: [&str; 0] = [];
        assert!(matches!(
            get_random_items(&mut rng, &empty, 8, 0),
            Err(GenError::InvalidSampler(_))
        ));
        assert!(matches!(
            get_random_items(&mut rng, &HASHTAGS, 0, 0),
            Err(GenError::InvalidSampler(_))
        ));
        assert!(matches!(
            get_random_items(&mut rng, &HASHTAGS, 8, 101),
            Err(GenError::InvalidSampler(_))
        ));
    }

    #[test]
    fn test_roll_check_bounds() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        assert!((0..500).all(|_| !percent_roll_check(&mut rng, 100)));
        let passes = (0..5000).filter(|_| percent_roll_check(&mut rng, 50)).count();
        assert!(passes > 2000 && passes < 3000, "passes = {}", passes);
    }
}
