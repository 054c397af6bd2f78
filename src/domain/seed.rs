use rand::Rng;

use super::{Cell, Grid, patterns::presets};
use crate::error::Result;

/// Where the glider gun is stamped by [`SeedMode::GliderGun`]
pub const GLIDER_GUN_OFFSET: (usize, usize) = (10, 10);

/// Source of independent weighted coin flips used for random seeding.
/// Tests can supply a deterministic implementation.
pub trait CoinFlip {
    /// Return `true` with probability `p_alive`
    fn flip(&mut self, p_alive: f64) -> bool;
}

/// Adapter turning any `rand` generator into a [`CoinFlip`]
pub struct RngSource<R>(pub R);

impl<R: Rng> CoinFlip for RngSource<R> {
    fn flip(&mut self, p_alive: f64) -> bool {
        self.0.random_bool(p_alive)
    }
}

/// Initial board layouts selected by integer code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SeedMode {
    /// Code 1: each cell alive with probability 0.5
    #[default]
    HalfAlive,
    /// Code 2: each cell alive with probability 0.8
    Dense,
    /// Code 3: each cell alive with probability 0.2
    Sparse,
    /// Code 4: empty board with a Gosper glider gun at (10, 10)
    GliderGun,
}

impl SeedMode {
    /// Map a seed code to a mode. Codes other than 2, 3 and 4 mean mode 1.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => SeedMode::HalfAlive,
            2 => SeedMode::Dense,
            3 => SeedMode::Sparse,
            4 => SeedMode::GliderGun,
            other => {
                log::warn!("unknown seed mode {other}, falling back to mode 1");
                SeedMode::HalfAlive
            }
        }
    }

    pub const fn code(self) -> i64 {
        match self {
            SeedMode::HalfAlive => 1,
            SeedMode::Dense => 2,
            SeedMode::Sparse => 3,
            SeedMode::GliderGun => 4,
        }
    }

    /// Probability of a cell starting alive, for the random modes
    pub const fn density(self) -> Option<f64> {
        match self {
            SeedMode::HalfAlive => Some(0.5),
            SeedMode::Dense => Some(0.8),
            SeedMode::Sparse => Some(0.2),
            SeedMode::GliderGun => None,
        }
    }

    /// Build the initial board for this mode
    pub fn seed(self, size: usize, coins: &mut impl CoinFlip) -> Result<Grid> {
        match self.density() {
            Some(p) => Ok(Grid::from_fn(size, |_, _| Cell::from_alive(coins.flip(p)))),
            None => {
                let mut grid = Grid::new(size);
                presets::glider_gun().place_on(&mut grid, GLIDER_GUN_OFFSET)?;
                Ok(grid)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;
    use rand::{SeedableRng, rngs::StdRng};

    /// Alive whenever the probability is at least the threshold
    struct Threshold(f64);

    impl CoinFlip for Threshold {
        fn flip(&mut self, p_alive: f64) -> bool {
            p_alive >= self.0
        }
    }

    #[test]
    fn test_codes_and_fallback() {
        assert_eq!(SeedMode::from_code(1), SeedMode::HalfAlive);
        assert_eq!(SeedMode::from_code(2), SeedMode::Dense);
        assert_eq!(SeedMode::from_code(3), SeedMode::Sparse);
        assert_eq!(SeedMode::from_code(4), SeedMode::GliderGun);
        assert_eq!(SeedMode::from_code(0), SeedMode::HalfAlive);
        assert_eq!(SeedMode::from_code(-7), SeedMode::HalfAlive);
        assert_eq!(SeedMode::from_code(99), SeedMode::HalfAlive);
    }

    #[test]
    fn test_densities_reach_the_coin() {
        let mut coins = Threshold(0.5);
        assert_eq!(SeedMode::Dense.seed(10, &mut coins).unwrap().population(), 100);
        assert_eq!(SeedMode::HalfAlive.seed(10, &mut coins).unwrap().population(), 100);
        assert_eq!(SeedMode::Sparse.seed(10, &mut coins).unwrap().population(), 0);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = SeedMode::HalfAlive.seed(50, &mut RngSource(StdRng::seed_from_u64(7))).unwrap();
        let b = SeedMode::HalfAlive.seed(50, &mut RngSource(StdRng::seed_from_u64(7))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_density_is_roughly_honoured() {
        let mut coins = RngSource(StdRng::seed_from_u64(42));
        let grid = SeedMode::Dense.seed(200, &mut coins).unwrap();
        let ratio = grid.population() as f64 / 40_000.0;
        assert!((0.75..0.85).contains(&ratio), "ratio {ratio}");

        let grid = SeedMode::Sparse.seed(200, &mut coins).unwrap();
        let ratio = grid.population() as f64 / 40_000.0;
        assert!((0.15..0.25).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn test_glider_gun_mode() {
        let grid = SeedMode::GliderGun.seed(60, &mut Threshold(0.0)).unwrap();
        assert_eq!(grid.population(), 36);
        // Left block of the gun sits at rows 4-5 of the pattern
        assert_eq!(grid.get(14, 10), Some(Cell::Alive));
        assert_eq!(grid.get(15, 11), Some(Cell::Alive));
        assert_eq!(grid.get(10, 34), Some(Cell::Alive));
    }

    #[test]
    fn test_glider_gun_needs_room() {
        let err = SeedMode::GliderGun.seed(40, &mut Threshold(0.0)).unwrap_err();
        assert!(matches!(err, LifeError::OutOfBounds { row: 10, col: 10, .. }));
    }
}
