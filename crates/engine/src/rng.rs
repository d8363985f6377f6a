//! RNG module - deterministic color dealing
//!
//! Players receive their colors from a shuffled copy of [`Color::ALL`]. The
//! shuffle is driven by a small LCG so a seed always reproduces the same deal.

use crate::types::Color;

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
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Pick distinct colors for `players` players.
///
/// Returns at most `Color::ALL.len()` colors; callers validate the player count.
pub fn deal_colors(rng: &mut SimpleRng, players: usize) -> Vec<Color> {
    let mut colors = Color::ALL;
    rng.shuffle(&mut colors);
    colors.into_iter().take(players).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_deal_colors_distinct() {
        let mut rng = SimpleRng::new(7);
        let colors = deal_colors(&mut rng, 4);
        assert_eq!(colors.len(), 4);
        for color in Color::ALL {
            assert!(colors.contains(&color));
        }
    }

    #[test]
    fn test_deal_colors_same_seed_same_deal() {
        let a = deal_colors(&mut SimpleRng::new(99), 3);
        let b = deal_colors(&mut SimpleRng::new(99), 3);
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
    }
}
