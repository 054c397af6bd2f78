mod algorithm;
mod cell;
mod grid;
mod patterns;
pub mod rle;
pub mod rules;
mod seed;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use rle::{PatternMatrix, decode_and_place, decode_to_matrix};
pub use rules::{LifeRule, Rule};
pub use seed::{CoinFlip, GLIDER_GUN_OFFSET, RngSource, SeedMode};
