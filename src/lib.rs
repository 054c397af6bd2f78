// Domain layer - Core business logic
pub mod domain;

// Application layer - Engine, configuration and viewer session
pub mod application;

// Infrastructure layer - image export, rendering, input
pub mod export;
pub mod input;
pub mod rendering;

pub mod cli;
pub mod error;

// Re-exports for convenience
pub use application::{EngineConfig, GameOfLife, GameState, LifeEngine};
pub use domain::{
    Algorithm, Cell, CoinFlip, Grid, LifeRule, PatternMatrix, SeedMode, decode_and_place,
    decode_to_matrix, presets,
};
pub use error::{LifeError, Result};
pub use export::save_board_to_file;
