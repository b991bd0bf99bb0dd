//! Shuffled pool that hands out every item once per pass
//!
//! The pool is reshuffled (Fisher-Yates via `SliceRandom::shuffle`) whenever
//! the cursor runs off the end, so each item is visited exactly once before
//! any item repeats.

use crate::error::{GameError, GameResult};
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct ShuffledCycle<T> {
    items: Vec<T>,
    /// Index of the last item handed out; None until the first `next`
    cursor: Option<usize>,
}

impl<T> Default for ShuffledCycle<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            cursor: None,
        }
    }
}

impl<T: Clone + PartialEq> ShuffledCycle<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pool with `items` in random order
    ///
    /// An empty `items` is rejected and the previous pool is kept.
    pub fn reset<R: Rng + ?Sized>(&mut self, mut items: Vec<T>, rng: &mut R) -> GameResult<()> {
        if items.is_empty() {
            return Err(GameError::EmptyPool);
        }

        items.shuffle(rng);
        self.items = items;
        self.cursor = None;
        Ok(())
    }

    /// Advance to the next item, reshuffling when the pass is exhausted
    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GameResult<&T> {
        let len = self.items.len();
        if len == 0 {
            return Err(GameError::EmptyPool);
        }

        let next = match self.cursor {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => {
                self.reshuffle(rng);
                0
            }
            None => 0,
        };

        self.cursor = Some(next);
        Ok(&self.items[next])
    }

    /// Last item returned by `next`, if any
    pub fn current(&self) -> GameResult<Option<&T>> {
        if self.items.is_empty() {
            return Err(GameError::EmptyPool);
        }
        Ok(self.cursor.map(|i| &self.items[i]))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let len = self.items.len();
        let last = self.items[len - 1].clone();

        self.items.shuffle(rng);

        // The new pass must not open with the item that closed the old one
        if len > 1 && self.items[0] == last {
            let swap_with = rng.random_range(1..len);
            self.items.swap(0, swap_with);
        }

        tracing::debug!("Reshuffled pool of {} items", len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_reset_rejects_empty_pool() {
        let mut rng = rng();
        let mut cycle: ShuffledCycle<u32> = ShuffledCycle::new();

        assert!(matches!(
            cycle.reset(vec![], &mut rng),
            Err(GameError::EmptyPool)
        ));
    }

    #[test]
    fn test_failed_reset_keeps_previous_pool() {
        let mut rng = rng();
        let mut cycle = ShuffledCycle::new();
        cycle.reset(vec![1, 2, 3], &mut rng).unwrap();

        assert!(cycle.reset(vec![], &mut rng).is_err());
        assert_eq!(cycle.len(), 3);
        assert!(!cycle.is_empty());
        assert!(cycle.next(&mut rng).is_ok());
    }

    #[test]
    fn test_next_before_reset_fails() {
        let mut rng = rng();
        let mut cycle: ShuffledCycle<String> = ShuffledCycle::new();
        assert!(cycle.is_empty());

        assert!(matches!(cycle.next(&mut rng), Err(GameError::EmptyPool)));
        assert!(matches!(cycle.current(), Err(GameError::EmptyPool)));
    }

    #[test]
    fn test_current_tracks_last_returned() {
        let mut rng = rng();
        let mut cycle = ShuffledCycle::new();
        cycle.reset(vec!["a", "b", "c"], &mut rng).unwrap();

        assert_eq!(cycle.current().unwrap(), None);

        let first = *cycle.next(&mut rng).unwrap();
        assert_eq!(cycle.current().unwrap(), Some(&first));
        assert_eq!(cycle.current().unwrap(), Some(&first));
    }

    #[test]
    fn test_every_item_once_per_pass() {
        let mut rng = rng();
        let mut cycle = ShuffledCycle::new();
        let items: Vec<u32> = (0..7).collect();
        cycle.reset(items.clone(), &mut rng).unwrap();

        for _ in 0..25 {
            let pass: HashSet<u32> = (0..items.len())
                .map(|_| *cycle.next(&mut rng).unwrap())
                .collect();
            assert_eq!(pass.len(), items.len());
        }
    }

    #[test]
    fn test_no_repeat_across_reshuffle() {
        let mut rng = rng();
        let mut cycle = ShuffledCycle::new();
        cycle.reset(vec![1, 2], &mut rng).unwrap();

        let mut previous = *cycle.next(&mut rng).unwrap();
        for _ in 0..200 {
            let next = *cycle.next(&mut rng).unwrap();
            assert_ne!(previous, next);
            previous = next;
        }
    }

    #[test]
    fn test_single_item_pool_repeats() {
        let mut rng = rng();
        let mut cycle = ShuffledCycle::new();
        cycle.reset(vec!["only"], &mut rng).unwrap();

        for _ in 0..5 {
            assert_eq!(*cycle.next(&mut rng).unwrap(), "only");
        }
    }
}
