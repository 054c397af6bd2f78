//! Image export of the board.
//!
//! Cell values map straight to gray levels: dead cells are black (0),
//! live cells white (255).

use std::path::Path;

use image::{GrayImage, Luma};

use crate::application::LifeEngine;
use crate::error::{LifeError, Result};

/// Render the current board, drawing each cell as a `scale`x`scale` block
pub fn board_to_image(engine: &dyn LifeEngine, scale: u32) -> Result<GrayImage> {
    if scale == 0 {
        return Err(LifeError::InvalidConfig("image scale must be at least 1".to_owned()));
    }
    let board = engine.snapshot();
    let side = u32::try_from(board.len())
        .ok()
        .and_then(|n| n.checked_mul(scale))
        .ok_or_else(|| LifeError::InvalidConfig(format!("image scale {scale} is too large")))?;

    Ok(GrayImage::from_fn(side, side, |x, y| {
        Luma([board[(y / scale) as usize][(x / scale) as usize]])
    }))
}

/// Save the current board to `path`; the format follows the file extension
pub fn save_board_to_file(engine: &dyn LifeEngine, path: impl AsRef<Path>, scale: u32) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    board_to_image(engine, scale)?.save(path)?;
    log::debug!(
        "saved generation {} to {}",
        engine.generation(),
        path.display()
    );
    Ok(())
}
