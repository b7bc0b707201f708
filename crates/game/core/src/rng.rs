//! Deterministic random number generation.
//!
//! The simulation owns a single [`GameRng`] stream so that identical seeds
//! replay identical sessions. The generator is PCG-XSH-RR: a 64-bit linear
//! congruential state with an output permutation, small and fast with good
//! statistical quality for gameplay purposes.

/// Stateful PCG-XSH-RR generator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameRng {
    state: u64,
}

impl GameRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a seed.
    ///
    /// The seed is folded into the state through two advance steps so that
    /// nearby seeds do not produce correlated opening draws.
    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.advance();
        rng.state = rng.state.wrapping_add(seed);
        rng.advance();
        rng
    }

    #[inline]
    fn advance(&mut self) {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
    }

    /// Next raw draw: XSH-RR output permutation of the pre-advance state.
    pub fn next_u32(&mut self) -> u32 {
        let state = self.state;
        self.advance();
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Uniform roll in `1..=100`.
    pub fn percentage(&mut self) -> i32 {
        (self.next_u32() % 100 + 1) as i32
    }

    /// True with probability `percent` out of 100.
    pub fn chance(&mut self, percent: i32) -> bool {
        self.percentage() <= percent
    }

    /// Uniform value in `min..=max`. Returns `min` when the range is empty.
    pub fn range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (max - min + 1) as u32;
        min + (self.next_u32() % span) as i32
    }

    /// Uniformly chosen element, or `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.next_u32() as usize % items.len();
        Some(&items[index])
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_u32() as usize % (i + 1);
            items.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..64 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = GameRng::new(1);
        let mut b = GameRng::new(2);
        let draws_a: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let draws_b: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn percentage_stays_in_bounds() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let roll = rng.percentage();
            assert!((1..=100).contains(&roll), "roll {roll} out of range");
        }
    }

    #[test]
    fn range_is_inclusive() {
        let mut rng = GameRng::new(9);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..1000 {
            let v = rng.range(-1, 1);
            assert!((-1..=1).contains(&v));
            seen_min |= v == -1;
            seen_max |= v == 1;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn range_with_empty_span_returns_min() {
        let mut rng = GameRng::new(3);
        assert_eq!(rng.range(5, 5), 5);
        assert_eq!(rng.range(5, 2), 5);
    }

    #[test]
    fn pick_covers_all_elements() {
        let mut rng = GameRng::new(11);
        let items = [1, 2, 3, 4];
        let mut seen = [false; 4];
        for _ in 0..200 {
            let v = *rng.pick(&items).unwrap();
            seen[(v - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
        assert!(rng.pick::<i32>(&[]).is_none());
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = GameRng::new(13);
        let mut items = [1, 2, 3, 4, 5, 6, 7, 8];
        rng.shuffle(&mut items);
        let mut sorted = items;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn chance_zero_never_and_hundred_always() {
        let mut rng = GameRng::new(17);
        for _ in 0..100 {
            assert!(!rng.chance(0));
            assert!(rng.chance(100));
        }
    }
}
