//! The single seeded random source of a game.
//!
//! Deck shuffling, tactic fallbacks and lookahead deals all draw from a
//! `GameRng` owned by the `GameState`, so a seed fully determines a game.
//!
//! ```
//! use startups_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // A fork is an independent stream; the parent is only advanced by the fork counter.
//! let mut lookahead = rng.fork();
//! let a: Vec<_> = (0..8).map(|_| rng.gen_range_usize(0..1000)).collect();
//! let b: Vec<_> = (0..8).map(|_| lookahead.gen_range_usize(0..1000)).collect();
//! assert_ne!(a, b);
//!
//! // Same seed, same forks.
//! let mut again = GameRng::new(42);
//! assert_eq!(again.fork().seed(), GameRng::new(42).fork().seed());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG with forking.
///
/// ChaCha8 keeps streams stable across platforms and rand versions.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG into an independent branch.
    ///
    /// Lookahead simulations run on forks so that estimating a position does
    /// not disturb the sequence the live game will see.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Independent stream for a named purpose ("deal", "bots", ...).
    ///
    /// The same context always yields the same stream for the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a uniformly random element.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Pick `amount` distinct indices below `len`, in random order.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.inner, len, amount.min(len)).into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_fork_is_deterministic_and_distinct() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let f1 = rng1.fork();
        let f2 = rng2.fork();
        assert_eq!(f1.seed(), f2.seed());

        let f3 = rng1.fork();
        assert_ne!(f1.seed(), f3.seed());
    }

    #[test]
    fn test_context_streams_differ() {
        let rng = GameRng::new(7);
        let mut deal = rng.for_context("deal");
        let mut bots = rng.for_context("bots");

        let a: Vec<_> = (0..10).map(|_| deal.gen_range_usize(0..1000)).collect();
        let b: Vec<_> = (0..10).map(|_| bots.gen_range_usize(0..1000)).collect();
        assert_ne!(a, b);

        let mut deal_again = GameRng::new(7).for_context("deal");
        let c: Vec<_> = (0..10).map(|_| deal_again.gen_range_usize(0..1000)).collect();
        assert_eq!(a, c);
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u32> = (1..=20).collect();
        rng.shuffle(&mut data);

        assert_ne!(data, (1..=20).collect::<Vec<_>>());
        data.sort_unstable();
        assert_eq!(data, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_choose_and_sample() {
        let mut rng = GameRng::new(42);
        let items = [1, 2, 3];
        assert!(items.contains(rng.choose(&items).unwrap()));
        assert!(rng.choose::<i32>(&[]).is_none());

        let mut picked = rng.sample_indices(10, 4);
        assert_eq!(picked.len(), 4);
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 4);
        assert_eq!(rng.sample_indices(3, 10).len(), 3);
    }
}
