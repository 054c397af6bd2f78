mod camera;
mod config;
mod engine;
mod game_state;

pub use camera::{Camera, fit_cell_size};
pub use config::{EngineConfig, SIZE_BOUNDS};
pub use engine::{GameOfLife, LifeEngine};
pub use game_state::GameState;
