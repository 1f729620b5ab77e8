//! RNG module - deterministic randomness for scene layout
//!
//! Star placement, glyph choice and blink offsets all come from a seeded
//! generator so that a given seed always produces the same sky.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max); returns 0 when `max` is 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // The high bits of an LCG are far better distributed than the low ones.
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Generate random value in the inclusive range [lo, hi].
    pub fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi - lo) as u32 + 1;
        lo + self.next_range(span) as i32
    }

    /// Pick one element of a non-empty slice.
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        Some(items[self.next_range(items.len() as u32) as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_range_inclusive_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        let mut seen_lo = false;
        let mut seen_hi = false;
        for _ in 0..1000 {
            let v = rng.range_inclusive(1, 4);
            assert!((1..=4).contains(&v));
            seen_lo |= v == 1;
            seen_hi |= v == 4;
        }
        assert!(seen_lo && seen_hi);
    }

    #[test]
    fn test_degenerate_ranges() {
        let mut rng = SimpleRng::new(7);
        assert_eq!(rng.next_range(0), 0);
        assert_eq!(rng.range_inclusive(5, 5), 5);
        assert_eq!(rng.range_inclusive(5, 2), 5);
        assert_eq!(rng.choose::<char>(&[]), None);
    }

    #[test]
    fn test_choose_picks_from_slice() {
        let mut rng = SimpleRng::new(99);
        let glyphs = ['+', '*', '.', ':'];
        for _ in 0..50 {
            assert!(glyphs.contains(&rng.choose(&glyphs).unwrap()));
        }
    }
}
