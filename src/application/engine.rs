use super::EngineConfig;
use crate::domain::{
    Algorithm, Cell, CoinFlip, Grid, LifeRule, RngSource, SeedMode, decode_and_place,
};
use crate::error::Result;

/// Public contract of a life engine.
/// Front ends (export, viewer, CLI) only talk to this trait.
pub trait LifeEngine {
    /// Advance one generation
    fn step(&mut self);

    /// Current board as `size` rows of `size` values, 0 (dead) or 255 (alive)
    fn snapshot(&self) -> Vec<Vec<u8>>;

    fn size(&self) -> usize;

    /// Number of steps taken since construction
    fn generation(&self) -> u64;

    /// Number of live cells
    fn population(&self) -> usize;

    fn cell(&self, row: usize, col: usize) -> Option<Cell>;

    /// Advance `generations` steps
    fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
        }
    }
}

/// Life-like automaton on a toroidal square board
#[derive(Clone, Debug)]
pub struct GameOfLife {
    grid: Grid,
    rule: LifeRule,
    algorithm: Algorithm,
    generation: u64,
}

impl GameOfLife {
    /// Build an engine, seeding randomly from the thread RNG when needed
    pub fn new(config: &EngineConfig) -> Result<Self> {
        Self::with_source(config, &mut RngSource(rand::rng()))
    }

    /// Build an engine, drawing random seeding from `coins`.
    ///
    /// A non-blank `rle` takes precedence over `seed_mode`.
    pub fn with_source(config: &EngineConfig, coins: &mut impl CoinFlip) -> Result<Self> {
        config.validate()?;
        let rule = LifeRule::parse(&config.rule)?;

        let grid = match config.pattern_rle() {
            Some(rle) => {
                let mut grid = Grid::new(config.size);
                decode_and_place(rle, &mut grid, config.placement)?;
                log::info!(
                    "seeded {0}x{0} board from RLE at {1:?} ({2} live cells)",
                    config.size,
                    config.placement,
                    grid.population()
                );
                grid
            }
            None => {
                let mode = SeedMode::from_code(config.seed_mode);
                let grid = mode.seed(config.size, coins)?;
                log::info!(
                    "seeded {0}x{0} board with mode {1} ({2} live cells)",
                    config.size,
                    mode.code(),
                    grid.population()
                );
                grid
            }
        };

        log::info!("rule {rule}, {} stepping", config.algorithm.name());
        Ok(Self {
            grid,
            rule,
            algorithm: config.algorithm,
            generation: 0,
        })
    }

    /// Wrap an existing board, for callers with their own seeding
    pub fn from_grid(grid: Grid, rule: LifeRule) -> Self {
        Self {
            grid,
            rule,
            algorithm: Algorithm::default(),
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rule(&self) -> &LifeRule {
        &self.rule
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }
}

impl LifeEngine for GameOfLife {
    fn step(&mut self) {
        // Next board is built from a shared borrow, then swapped in whole
        let next = self.algorithm.evolve(&self.grid, &self.rule);
        self.grid = next;
        self.generation += 1;
        log::trace!("generation {} population {}", self.generation, self.grid.population());
    }

    fn snapshot(&self) -> Vec<Vec<u8>> {
        self.grid.to_rows()
    }

    fn size(&self) -> usize {
        self.grid.size()
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn population(&self) -> usize {
        self.grid.population()
    }

    fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row, col)
    }
}
