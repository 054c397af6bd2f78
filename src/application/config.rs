use crate::domain::Algorithm;
use crate::error::{LifeError, Result};

/// Board sizes must lie strictly between these bounds
pub const SIZE_BOUNDS: (usize, usize) = (9, 1000);

/// Everything needed to build an engine
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Side length of the square board
    pub size: usize,
    /// Seeding code, see [`crate::domain::SeedMode::from_code`]
    pub seed_mode: i64,
    /// Rule in `B<digits>/S<digits>` notation
    pub rule: String,
    /// Pattern to stamp instead of seeding; empty means none
    pub rle: Option<String>,
    /// (row, col) of the pattern's top-left cell
    pub placement: (usize, usize),
    pub algorithm: Algorithm,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: 100,
            seed_mode: 1,
            rule: "B3/S23".to_owned(),
            rle: None,
            placement: (0, 0),
            algorithm: Algorithm::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_seed_mode(mut self, seed_mode: i64) -> Self {
        self.seed_mode = seed_mode;
        self
    }

    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = rule.into();
        self
    }

    pub fn with_rle(mut self, rle: impl Into<String>, placement: (usize, usize)) -> Self {
        self.rle = Some(rle.into());
        self.placement = placement;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// The pattern to stamp, if one was given and is not blank
    pub fn pattern_rle(&self) -> Option<&str> {
        self.rle.as_deref().filter(|rle| !rle.trim().is_empty())
    }

    /// Check the parts of the configuration that need no parsing
    pub fn validate(&self) -> Result<()> {
        let (low, high) = SIZE_BOUNDS;
        if self.size <= low || self.size >= high {
            return Err(LifeError::InvalidConfig(format!(
                "board size {} must be greater than {low} and less than {high}",
                self.size
            )));
        }
        Ok(())
    }
}
