//! Command-line arguments shared by the binaries.

use clap::Args;
use rand::{SeedableRng, rngs::StdRng};

use crate::application::{EngineConfig, GameOfLife};
use crate::domain::{Algorithm, RngSource, presets};
use crate::error::{LifeError, Result};

/// Board, rule and seeding options
#[derive(Args, Clone, Debug)]
pub struct EngineArgs {
    /// Board side length (10-999)
    #[arg(short = 'n', long, default_value = "100")]
    pub size: usize,

    /// Seeding mode: 1 = 50% alive, 2 = 80%, 3 = 20%, 4 = glider gun
    #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
    pub mode: i64,

    /// Rule in B<digits>/S<digits> notation
    #[arg(short, long, default_value = "B3/S23")]
    pub rule: String,

    /// RLE pattern to place instead of seeding, e.g. "bob$2bo$3o!"
    #[arg(long, conflicts_with = "pattern")]
    pub rle: Option<String>,

    /// Built-in pattern to place instead of seeding (see `patterns`)
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Row of the pattern's top-left cell
    #[arg(long, default_value = "0")]
    pub row: usize,

    /// Column of the pattern's top-left cell
    #[arg(long, default_value = "0")]
    pub col: usize,

    /// Random seed for reproducible seeding
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Step strategy: serial, or parallel across all cores
    #[arg(short, long, default_value = "serial")]
    pub algorithm: Algorithm,
}

impl EngineArgs {
    pub fn to_config(&self) -> Result<EngineConfig> {
        let rle = match (&self.rle, &self.pattern) {
            (Some(rle), _) => Some(rle.clone()),
            (None, Some(name)) => {
                let pattern = presets::find(name)
                    .ok_or_else(|| LifeError::InvalidConfig(format!("unknown pattern {name:?}")))?;
                Some(pattern.rle.to_owned())
            }
            (None, None) => None,
        };

        let config = EngineConfig::default()
            .with_size(self.size)
            .with_seed_mode(self.mode)
            .with_rule(self.rule.as_str())
            .with_algorithm(self.algorithm);
        Ok(match rle {
            Some(rle) => config.with_rle(rle, (self.row, self.col)),
            None => config,
        })
    }

    pub fn build_engine(&self) -> Result<GameOfLife> {
        let config = self.to_config()?;
        match self.seed {
            Some(seed) => GameOfLife::with_source(&config, &mut RngSource(StdRng::seed_from_u64(seed))),
            None => GameOfLife::new(&config),
        }
    }
}

/// Initialise env_logger, defaulting to `info` when RUST_LOG is unset
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
